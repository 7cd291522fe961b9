use std::fmt::{self, Display};

use thiserror::Error;

/// Rejections raised while initializing a carousel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("carousel needs at least one tile")]
    EmptyTileSequence,

    #[error("first tile has no measurable width")]
    ZeroTileWidth,

    #[error("increment must be at least 1, got {0}")]
    NonPositiveIncrement(i64),
}

/// Which frame hook failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPhase {
    PreFrameChange,
    PostFrameChange,
}

impl Display for HookPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookPhase::PreFrameChange => f.write_str("preFrameChange"),
            HookPhase::PostFrameChange => f.write_str("postFrameChange"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("carousel has not been initialized")]
    NotInitialized,

    /// A user hook failed. The navigation it belonged to is already
    /// committed; only the rest of the transition sequence was skipped.
    #[error("{phase} hook failed: {source}")]
    Hook {
        phase: HookPhase,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, CarouselError>;
