use std::fmt::{self, Display};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use carousel_core::CarouselOptions;
use carousel_core::options::Coercible;
use thiserror::Error;
use tracing::{debug, warn};

use crate::util::{non_empty, parse_bool};

pub const OPTIONS_PATH_VAR: &str = "CAROUSEL_OPTIONS_PATH";
pub const OPTIONS_JSON_VAR: &str = "CAROUSEL_OPTIONS_JSON";
pub const INCREMENT_VAR: &str = "CAROUSEL_INCREMENT";
pub const INCREMENT_MODE_VAR: &str = "CAROUSEL_INCREMENT_MODE";
pub const ACCESSIBLE_VAR: &str = "CAROUSEL_ACCESSIBLE";

const DEFAULT_FILES: &[&str] = &[
    "carousel.toml",
    "carousel.json",
    "config/carousel.toml",
    "config/carousel.json",
];

/// Source that produced the carousel options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CarouselOptionsSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl Display for CarouselOptionsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselOptionsSource::Default => f.write_str("default"),
            CarouselOptionsSource::EnvPath(path) => {
                write!(f, "env:{}", path.display())
            }
            CarouselOptionsSource::EnvInline => f.write_str("env:inline"),
            CarouselOptionsSource::File(path) => {
                write!(f, "file:{}", path.display())
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read carousel options from {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid carousel options {origin}: {reason}")]
    Parse { origin: String, reason: String },
}

/// Load carousel options using the process environment and the current
/// directory.
///
/// Evaluation order:
/// 1) `$CAROUSEL_OPTIONS_PATH` (TOML or JSON file),
/// 2) `$CAROUSEL_OPTIONS_JSON` (inline JSON),
/// 3) the first existing default file,
/// 4) defaults if none of the above applies.
///
/// `$CAROUSEL_INCREMENT`, `$CAROUSEL_INCREMENT_MODE` and
/// `$CAROUSEL_ACCESSIBLE` are then applied on top.
pub fn load_from_env() -> anyhow::Result<(CarouselOptions, CarouselOptionsSource)> {
    load_with(|name| std::env::var(name).ok(), Path::new("."))
}

/// [`load_from_env`] with an explicit variable lookup and base directory for
/// the default files.
pub fn load_with<F>(
    lookup: F,
    base_dir: &Path,
) -> anyhow::Result<(CarouselOptions, CarouselOptionsSource)>
where
    F: Fn(&str) -> Option<String>,
{
    let (options, source) = resolve_base(&lookup, base_dir)?;
    debug!(%source, "carousel options resolved");
    Ok((apply_env_overrides(options, &lookup), source))
}

fn resolve_base<F>(
    lookup: &F,
    base_dir: &Path,
) -> anyhow::Result<(CarouselOptions, CarouselOptionsSource)>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path_str) = non_empty(lookup(OPTIONS_PATH_VAR)) {
        let path = PathBuf::from(path_str);
        let options = load_from_file(&path)
            .with_context(|| format!("failed to load {OPTIONS_PATH_VAR}"))?;
        return Ok((options, CarouselOptionsSource::EnvPath(path)));
    }

    if let Some(raw) = non_empty(lookup(OPTIONS_JSON_VAR)) {
        let options = parse_json(&raw)
            .with_context(|| format!("failed to parse {OPTIONS_JSON_VAR}"))?;
        return Ok((options, CarouselOptionsSource::EnvInline));
    }

    if let Some(path) = find_default_file(base_dir) {
        let options = load_from_file(&path)?;
        return Ok((options, CarouselOptionsSource::File(path)));
    }

    Ok((CarouselOptions::default(), CarouselOptionsSource::Default))
}

pub fn load_from_file(path: &Path) -> Result<CarouselOptions, ConfigLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json_from(&contents, &origin),
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                origin,
                reason: err.to_string(),
            })
        }
        _ => parse_from_str(&contents, &origin),
    }
}

/// Parse options of unknown format. TOML is tried first, then JSON.
pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<CarouselOptions, ConfigLoadError> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| ConfigLoadError::Parse {
            origin: origin.to_string(),
            reason: format!("toml error: {toml_err}; json error: {json_err}"),
        })
    })
}

pub fn parse_json(raw: &str) -> Result<CarouselOptions, ConfigLoadError> {
    parse_json_from(raw, "json")
}

fn parse_json_from(raw: &str, origin: &str) -> Result<CarouselOptions, ConfigLoadError> {
    serde_json::from_str(raw).map_err(|err| ConfigLoadError::Parse {
        origin: origin.to_string(),
        reason: err.to_string(),
    })
}

pub fn find_default_file(base_dir: &Path) -> Option<PathBuf> {
    DEFAULT_FILES
        .iter()
        .map(|candidate| base_dir.join(candidate))
        .find(|path| path.is_file())
}

/// Apply the scalar environment overrides. Values are coerced later by
/// option normalization, so an unparseable increment still falls back to
/// its default there.
pub fn apply_env_overrides<F>(mut options: CarouselOptions, lookup: &F) -> CarouselOptions
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = non_empty(lookup(INCREMENT_VAR)) {
        debug!(value = %raw, "increment overridden from environment");
        options.increment = Some(Coercible::Text(raw));
    }

    if let Some(raw) = non_empty(lookup(INCREMENT_MODE_VAR)) {
        debug!(value = %raw, "increment mode overridden from environment");
        options.increment_mode = Some(raw);
    }

    if let Some(raw) = non_empty(lookup(ACCESSIBLE_VAR)) {
        match parse_bool(raw.trim()) {
            Some(accessible) => options.accessible = accessible,
            None => warn!(value = %raw, var = ACCESSIBLE_VAR, "ignoring non-boolean override"),
        }
    }

    options
}
