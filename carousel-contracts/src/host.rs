use super::container::{ContainerService, MeasurementService};
use super::events::{EventBinder, Notifier};
use super::presenter::TilePresenter;

/// Everything a carousel engine calls into, as one bound.
///
/// Implemented automatically for any type providing all collaborator
/// traits, so a host can be a single struct or a composition.
pub trait CarouselHost:
    ContainerService + MeasurementService + Notifier + EventBinder + TilePresenter
{
}

impl<T> CarouselHost for T where
    T: ContainerService
        + MeasurementService
        + Notifier
        + EventBinder
        + TilePresenter
{
}
