//! Trait surfaces that describe what the carousel engine needs from the
//! presentation layer embedding it.
//!
//! The engine never renders anything itself. It computes state and calls
//! into these collaborators, which own the actual node tree.

pub mod container;
pub mod events;
pub mod host;
pub mod presenter;

/// Frequently used trait combinators for host implementations.
pub mod prelude {
    pub use super::container::{ContainerService, MeasurementService};
    pub use super::events::{EventBinder, Notifier};
    pub use super::host::CarouselHost;
    pub use super::presenter::TilePresenter;
    pub use carousel_model::prelude::*;
}
