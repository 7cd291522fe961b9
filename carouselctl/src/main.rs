use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use carousel_config::{
    CarouselOptionsSource, apply_env_overrides, load_from_env, load_from_file,
};
use carousel_core::CarouselOptions;
use carousel_model::IncrementMode;
use carouselctl::report::options_report;
use carouselctl::simulate::{self, Action, StripSpec};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "carouselctl",
    about = "Drive the carousel engine against a headless document"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run navigation actions and print one JSON snapshot per line
    Simulate {
        /// Number of tiles in the generated strip
        #[arg(long)]
        tiles: usize,
        /// Options file (TOML or JSON); defaults to the usual lookup
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        increment: Option<i64>,
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        /// Wrap the controls and center them beneath the viewport
        #[arg(long)]
        encapsulate: bool,
        #[arg(long, default_value_t = 120.0)]
        tile_width: f32,
        #[arg(long, default_value_t = 80.0)]
        tile_height: f32,
        /// next, prev, reset, goto:<index> or click:<class>
        actions: Vec<Action>,
    },
    /// Print the resolved options and where they came from
    Options {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Frame,
    Tile,
}

impl From<ModeArg> for IncrementMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Frame => IncrementMode::Frame,
            ModeArg::Tile => IncrementMode::Tile,
        }
    }
}

fn load_options(
    config: Option<PathBuf>,
) -> Result<(CarouselOptions, CarouselOptionsSource)> {
    match config {
        Some(path) => {
            let options = load_from_file(&path)?;
            let options = apply_env_overrides(options, &|name: &str| {
                std::env::var(name).ok()
            });
            Ok((options, CarouselOptionsSource::File(path)))
        }
        None => load_from_env(),
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries JSON only.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Simulate {
            tiles,
            config,
            increment,
            mode,
            encapsulate,
            tile_width,
            tile_height,
            actions,
        } => {
            let (mut options, source) = load_options(config)?;
            tracing::debug!(%source, "options loaded");

            if let Some(increment) = increment {
                options = options.with_increment(increment);
            }
            if let Some(mode) = mode {
                options = options.with_increment_mode(mode.into());
            }
            if encapsulate {
                options = options.with_encapsulated_controls(true);
            }

            let strip = StripSpec {
                tiles,
                tile_width,
                tile_height,
            };
            let stdout = io::stdout();
            let mut out = stdout.lock();
            simulate::run(strip, options, &actions, &mut out)?;
            out.flush()?;
        }
        Command::Options { config } => {
            let (options, source) = load_options(config)?;
            let report = options_report(options, &source)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
