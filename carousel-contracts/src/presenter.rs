use carousel_model::{DeferredMedia, NodeHandle, TileAccessibility};

/// Reflects per-tile state changes onto rendered tiles.
pub trait TilePresenter {
    /// Toggle the busy marker on the tile holder.
    fn set_busy(&mut self, holder: NodeHandle, busy: bool);

    /// Write the accessibility flags of one tile (hidden/visible classes,
    /// `tabindex`, focus marker).
    fn apply_accessibility(
        &mut self,
        tile: NodeHandle,
        state: &TileAccessibility,
    );

    /// Move input focus to `tile`.
    fn focus(&mut self, tile: NodeHandle);

    /// Start fetching the resolved media of `tile`.
    fn load_media(&mut self, tile: NodeHandle, media: &[DeferredMedia]);
}
