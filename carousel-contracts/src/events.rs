use carousel_model::{LifecycleEvent, NodeHandle};

/// Synchronous publish side of the host's pub/sub utility.
pub trait Notifier {
    fn publish(&mut self, event: LifecycleEvent);
}

/// Attaches input listeners on behalf of the engine.
///
/// Listeners do not hold a reference to the engine. The host routes
/// activations back through `CarouselEngine::dispatch_control` and
/// `CarouselEngine::tile_focus_changed`.
pub trait EventBinder {
    /// Attach one delegated click listener on `region`; clicked controls are
    /// identified by their class name (`prevFrame` / `nextFrame`).
    fn bind_controls(&mut self, region: NodeHandle);

    /// Attach focus and blur listeners on each panel tile.
    fn bind_tile_focus(&mut self, tiles: &[NodeHandle]);
}

impl Notifier for Vec<LifecycleEvent> {
    fn publish(&mut self, event: LifecycleEvent) {
        self.push(event);
    }
}
