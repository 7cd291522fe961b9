//! Core data model definitions shared across the carousel crates.
#![allow(missing_docs)]

pub mod events;
pub mod handle;
pub mod layout;
pub mod mode;
pub mod prelude;
pub mod snapshot;
pub mod tile;

// Intentionally curated re-exports for downstream consumers.
pub use events::{FocusChange, LifecycleEvent};
pub use handle::NodeHandle;
pub use layout::{
    ContainerHandles, ContainerLayout, ControlHandles, ControlsPlacement,
    ControlsPosition, ControlsSpec,
};
pub use mode::{IncrementMode, NavAction, ParseModeError};
pub use snapshot::{StateSnapshot, TileView};
pub use tile::{
    DeferredMedia, TileAccessibility, TileMetrics, TileRole, TileSpec,
    Visibility,
};
