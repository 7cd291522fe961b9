//! Presenter focused snapshot of the types surface.
//! Prefer importing from this module when implementing a host.

pub use super::events::{FocusChange, LifecycleEvent};
pub use super::handle::NodeHandle;
pub use super::layout::{
    ContainerHandles, ContainerLayout, ControlHandles, ControlsPlacement,
    ControlsPosition, ControlsSpec,
};
pub use super::mode::{IncrementMode, NavAction};
pub use super::snapshot::{StateSnapshot, TileView};
pub use super::tile::{
    DeferredMedia, TileAccessibility, TileMetrics, TileRole, TileSpec,
    Visibility,
};
