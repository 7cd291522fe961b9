//! Recognized carousel options and their normalization.
//!
//! `CarouselOptions` is the loosely typed surface integrators fill in (or
//! deserialize from a file). Numeric fields accept numbers or strings and
//! go through [`parse_int`], which follows `parseInt(value, 10)`: leading
//! whitespace and an optional sign are accepted, then the longest run of
//! decimal digits. Values that yield no digits fall back to the option's
//! default instead of failing initialization.

use std::fmt;

use carousel_model::{ControlsPlacement, IncrementMode, StateSnapshot};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigurationError;

pub const DEFAULT_PREV_TEXT: &str = "Previous";
pub const DEFAULT_NEXT_TEXT: &str = "Next";
pub const DEFAULT_INCREMENT: i64 = 1;
pub const DEFAULT_WRAPPER_DELTA: i64 = 0;
pub const DEFAULT_VIEWPORT_DELTA: i64 = 0;

/// A value destined for an integer option, as supplied by the integrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coercible {
    Integer(i64),
    Float(f64),
    Flag(bool),
    Text(String),
}

impl From<i64> for Coercible {
    fn from(value: i64) -> Self {
        Coercible::Integer(value)
    }
}

impl From<i32> for Coercible {
    fn from(value: i32) -> Self {
        Coercible::Integer(i64::from(value))
    }
}

impl From<f64> for Coercible {
    fn from(value: f64) -> Self {
        Coercible::Float(value)
    }
}

impl From<&str> for Coercible {
    fn from(value: &str) -> Self {
        Coercible::Text(value.to_string())
    }
}

impl From<String> for Coercible {
    fn from(value: String) -> Self {
        Coercible::Text(value)
    }
}

/// Best-effort integer parse. `None` means "no digits", never an error.
pub fn parse_int(value: &Coercible) -> Option<i64> {
    match value {
        Coercible::Integer(n) => Some(*n),
        Coercible::Float(f) if f.is_finite() => Some(f.trunc() as i64),
        Coercible::Float(_) | Coercible::Flag(_) => None,
        Coercible::Text(raw) => parse_int_prefix(raw),
    }
}

/// `parseInt` over a string: `"  42px"` is 42, `"-3.9"` is -3, `"px"` is
/// `None`. Out-of-range digit runs saturate.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let run = digits.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let mut value: i64 = 0;
    for byte in run {
        seen = true;
        let digit = i64::from(byte - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

fn coerce_int(name: &str, value: Option<&Coercible>, default: i64) -> i64 {
    match value {
        None => default,
        Some(raw) => parse_int(raw).unwrap_or_else(|| {
            warn!(option = name, ?raw, default, "option is not an integer, using default");
            default
        }),
    }
}

fn coerce_mode(value: Option<&str>) -> IncrementMode {
    match value {
        None => IncrementMode::default(),
        Some(raw) => raw.parse().unwrap_or_else(|err| {
            warn!(%err, "falling back to frame increment mode");
            IncrementMode::default()
        }),
    }
}

type HookFn = dyn FnMut(&StateSnapshot) -> anyhow::Result<()>;

/// Callback invoked around every animated frame change.
///
/// Hooks see a snapshot, not the engine, so they cannot start another
/// navigation while one is in flight.
pub struct FrameHook(Box<HookFn>);

impl FrameHook {
    pub fn new<F>(hook: F) -> Self
    where
        F: FnMut(&StateSnapshot) -> anyhow::Result<()> + 'static,
    {
        Self(Box::new(hook))
    }

    pub(crate) fn call(&mut self, snapshot: &StateSnapshot) -> anyhow::Result<()> {
        (self.0)(snapshot)
    }
}

impl fmt::Debug for FrameHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FrameHook(..)")
    }
}

/// Options recognized at init. Every field is optional on the wire; missing
/// fields take the documented defaults.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselOptions {
    /// Tiles per frame. Default 1.
    pub increment: Option<Coercible>,
    /// `frame` or `tile`. Default `frame`.
    pub increment_mode: Option<String>,
    /// Wrap the controls and center them beneath the viewport.
    pub encapsulate_controls: bool,
    pub prev_text: String,
    pub next_text: String,
    /// Wrapper margin in pixels. Default 0.
    pub wrapper_delta: Option<Coercible>,
    /// Viewport margin and width adjustment in pixels. Default 0.
    pub viewport_delta: Option<Coercible>,
    /// Maintain hidden/visible and focus state for assistive technology.
    pub accessible: bool,
    #[serde(skip)]
    pub pre_frame_change: Option<FrameHook>,
    #[serde(skip)]
    pub post_frame_change: Option<FrameHook>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            increment: None,
            increment_mode: None,
            encapsulate_controls: false,
            prev_text: DEFAULT_PREV_TEXT.to_string(),
            next_text: DEFAULT_NEXT_TEXT.to_string(),
            wrapper_delta: None,
            viewport_delta: None,
            accessible: true,
            pre_frame_change: None,
            post_frame_change: None,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_increment(mut self, increment: impl Into<Coercible>) -> Self {
        self.increment = Some(increment.into());
        self
    }

    pub fn with_increment_mode(mut self, mode: IncrementMode) -> Self {
        self.increment_mode = Some(mode.as_str().to_string());
        self
    }

    pub fn with_encapsulated_controls(mut self, encapsulate: bool) -> Self {
        self.encapsulate_controls = encapsulate;
        self
    }

    pub fn with_accessible(mut self, accessible: bool) -> Self {
        self.accessible = accessible;
        self
    }

    pub fn with_deltas(
        mut self,
        wrapper_delta: impl Into<Coercible>,
        viewport_delta: impl Into<Coercible>,
    ) -> Self {
        self.wrapper_delta = Some(wrapper_delta.into());
        self.viewport_delta = Some(viewport_delta.into());
        self
    }

    pub fn on_pre_frame_change<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&StateSnapshot) -> anyhow::Result<()> + 'static,
    {
        self.pre_frame_change = Some(FrameHook::new(hook));
        self
    }

    pub fn on_post_frame_change<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&StateSnapshot) -> anyhow::Result<()> + 'static,
    {
        self.post_frame_change = Some(FrameHook::new(hook));
        self
    }

    /// Resolve every option to its typed form. Hooks are split off so the
    /// resulting config stays plain data.
    pub fn normalize(
        self,
    ) -> Result<(CarouselConfig, FrameHooks), ConfigurationError> {
        let increment =
            coerce_int("increment", self.increment.as_ref(), DEFAULT_INCREMENT);
        if increment < 1 {
            return Err(ConfigurationError::NonPositiveIncrement(increment));
        }

        let config = CarouselConfig {
            increment: usize::try_from(increment).unwrap_or(usize::MAX),
            increment_mode: coerce_mode(self.increment_mode.as_deref()),
            encapsulate_controls: self.encapsulate_controls,
            prev_text: self.prev_text,
            next_text: self.next_text,
            wrapper_delta: coerce_int(
                "wrapperDelta",
                self.wrapper_delta.as_ref(),
                DEFAULT_WRAPPER_DELTA,
            ),
            viewport_delta: coerce_int(
                "viewportDelta",
                self.viewport_delta.as_ref(),
                DEFAULT_VIEWPORT_DELTA,
            ),
            accessible: self.accessible,
        };

        let hooks = FrameHooks {
            pre: self.pre_frame_change,
            post: self.post_frame_change,
        };

        Ok((config, hooks))
    }
}

/// Normalized, immutable configuration of an initialized carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselConfig {
    pub increment: usize,
    pub increment_mode: IncrementMode,
    pub encapsulate_controls: bool,
    pub prev_text: String,
    pub next_text: String,
    pub wrapper_delta: i64,
    pub viewport_delta: i64,
    pub accessible: bool,
}

impl CarouselConfig {
    pub fn controls_placement(&self) -> ControlsPlacement {
        if self.encapsulate_controls {
            ControlsPlacement::Encapsulated
        } else {
            ControlsPlacement::BeforeWrapper
        }
    }

    /// Index step of one previous/next action.
    pub fn step(&self) -> usize {
        match self.increment_mode {
            IncrementMode::Frame => self.increment,
            IncrementMode::Tile => 1,
        }
    }
}

/// Optional hooks split off the options at init.
#[derive(Debug, Default)]
pub struct FrameHooks {
    pub pre: Option<FrameHook>,
    pub post: Option<FrameHook>,
}
