use std::fmt::{self, Display};
use std::str::FromStr;

/// How far a single previous/next action moves the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum IncrementMode {
    /// Move by a whole frame (`increment` tiles).
    #[default]
    Frame,
    /// Move by a single tile.
    Tile,
}

impl IncrementMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            IncrementMode::Frame => "frame",
            IncrementMode::Tile => "tile",
        }
    }
}

impl Display for IncrementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a mode or button identity string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError {
    pub kind: &'static str,
    pub value: String,
}

impl Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for IncrementMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "frame" => Ok(IncrementMode::Frame),
            "tile" => Ok(IncrementMode::Tile),
            other => Err(ParseModeError {
                kind: "increment mode",
                value: other.to_string(),
            }),
        }
    }
}

/// Logical identity of a navigation control.
///
/// The string forms double as the class names the presentation layer puts
/// on the rendered buttons, so a delegated click handler can map a clicked
/// element back to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavAction {
    #[cfg_attr(feature = "serde", serde(rename = "prevFrame"))]
    PrevFrame,
    #[cfg_attr(feature = "serde", serde(rename = "nextFrame"))]
    NextFrame,
}

impl NavAction {
    pub const ALL: [NavAction; 2] = [NavAction::PrevFrame, NavAction::NextFrame];

    pub const fn class_name(self) -> &'static str {
        match self {
            NavAction::PrevFrame => "prevFrame",
            NavAction::NextFrame => "nextFrame",
        }
    }
}

impl Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for NavAction {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prevFrame" => Ok(NavAction::PrevFrame),
            "nextFrame" => Ok(NavAction::NextFrame),
            other => Err(ParseModeError {
                kind: "navigation control",
                value: other.to_string(),
            }),
        }
    }
}
