use carousel_model::{
    ContainerHandles, ContainerLayout, ControlHandles, ControlsPosition,
    ControlsSpec, NavAction, NodeHandle, TileMetrics,
};

/// Builds and rearranges the structure around the tile holder.
pub trait ContainerService {
    /// Detach `holder` from its parent, nest it in a viewport inside a
    /// wrapper, and put the wrapper back where `holder` used to be.
    fn wrap(&mut self, holder: NodeHandle) -> ContainerHandles;

    /// Apply margins, viewport width and per-tile width to the wrapped
    /// structure.
    fn apply_layout(
        &mut self,
        handles: ContainerHandles,
        tiles: &[NodeHandle],
        layout: &ContainerLayout,
    );

    /// Insert the previous/next controls according to `spec.placement`.
    fn insert_controls(
        &mut self,
        handles: ContainerHandles,
        spec: &ControlsSpec,
    ) -> ControlHandles;

    /// Center encapsulated controls beneath the viewport.
    fn position_controls(&mut self, position: ControlsPosition);

    /// Replace a control with its enabled button or disabled placeholder.
    fn swap_control(&mut self, action: NavAction, enabled: bool);
}

/// Reads rendered dimensions.
pub trait MeasurementService {
    fn measure(&self, node: NodeHandle) -> TileMetrics;

    /// Rendered width of a node, used for control centering.
    fn width(&self, node: NodeHandle) -> f32 {
        self.measure(node).width
    }
}
