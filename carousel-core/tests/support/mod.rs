#![allow(dead_code)]

use carousel_contracts::prelude::*;

pub const HOLDER: NodeHandle = NodeHandle(1);
pub const REGION: NodeHandle = NodeHandle(2);
pub const WRAPPER: NodeHandle = NodeHandle(3);
pub const VIEWPORT: NodeHandle = NodeHandle(4);
pub const PREV_CONTROL: NodeHandle = NodeHandle(5);
pub const NEXT_CONTROL: NodeHandle = NodeHandle(6);

/// First tile handle; tile `i` is `NodeHandle(TILE_BASE + i)`.
pub const TILE_BASE: u64 = 100;

/// One host interaction, in the order the engine made it.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Publish(LifecycleEvent),
    Wrap(NodeHandle),
    ApplyLayout(Vec<NodeHandle>, ContainerLayout),
    InsertControls(ControlsSpec),
    PositionControls(ControlsPosition),
    SwapControl(NavAction, bool),
    BindControls(NodeHandle),
    BindTileFocus(Vec<NodeHandle>),
    SetBusy(bool),
    Accessibility(NodeHandle, TileAccessibility),
    Focus(NodeHandle),
    LoadMedia(NodeHandle, Vec<String>),
}

impl Call {
    pub fn is_accessibility(&self) -> bool {
        matches!(self, Call::Accessibility(..))
    }
}

/// In-memory host that records every call.
#[derive(Debug)]
pub struct RecordingHost {
    pub calls: Vec<Call>,
    pub tile_metrics: TileMetrics,
    pub control_width: f32,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            tile_metrics: TileMetrics::new(120.0, 80.0),
            control_width: 30.0,
        }
    }
}

impl RecordingHost {
    pub fn with_tile_metrics(width: f32, height: f32) -> Self {
        Self {
            tile_metrics: TileMetrics::new(width, height),
            ..Self::default()
        }
    }

    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Publish(event) => Some(*event),
                _ => None,
            })
            .collect()
    }

    pub fn loaded(&self) -> Vec<NodeHandle> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::LoadMedia(node, _) => Some(*node),
                _ => None,
            })
            .collect()
    }

    pub fn focused(&self) -> Vec<NodeHandle> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Focus(node) => Some(*node),
                _ => None,
            })
            .collect()
    }
}

impl ContainerService for RecordingHost {
    fn wrap(&mut self, holder: NodeHandle) -> ContainerHandles {
        self.calls.push(Call::Wrap(holder));
        ContainerHandles {
            region: REGION,
            wrapper: WRAPPER,
            viewport: VIEWPORT,
        }
    }

    fn apply_layout(
        &mut self,
        _handles: ContainerHandles,
        tiles: &[NodeHandle],
        layout: &ContainerLayout,
    ) {
        self.calls.push(Call::ApplyLayout(tiles.to_vec(), *layout));
    }

    fn insert_controls(
        &mut self,
        _handles: ContainerHandles,
        spec: &ControlsSpec,
    ) -> ControlHandles {
        self.calls.push(Call::InsertControls(spec.clone()));
        ControlHandles {
            prev: PREV_CONTROL,
            next: NEXT_CONTROL,
        }
    }

    fn position_controls(&mut self, position: ControlsPosition) {
        self.calls.push(Call::PositionControls(position));
    }

    fn swap_control(&mut self, action: NavAction, enabled: bool) {
        self.calls.push(Call::SwapControl(action, enabled));
    }
}

impl MeasurementService for RecordingHost {
    fn measure(&self, node: NodeHandle) -> TileMetrics {
        if node == PREV_CONTROL || node == NEXT_CONTROL {
            TileMetrics::new(self.control_width, 20.0)
        } else {
            self.tile_metrics
        }
    }
}

impl Notifier for RecordingHost {
    fn publish(&mut self, event: LifecycleEvent) {
        self.calls.push(Call::Publish(event));
    }
}

impl EventBinder for RecordingHost {
    fn bind_controls(&mut self, region: NodeHandle) {
        self.calls.push(Call::BindControls(region));
    }

    fn bind_tile_focus(&mut self, tiles: &[NodeHandle]) {
        self.calls.push(Call::BindTileFocus(tiles.to_vec()));
    }
}

impl TilePresenter for RecordingHost {
    fn set_busy(&mut self, _holder: NodeHandle, busy: bool) {
        self.calls.push(Call::SetBusy(busy));
    }

    fn apply_accessibility(&mut self, tile: NodeHandle, state: &TileAccessibility) {
        self.calls.push(Call::Accessibility(tile, *state));
    }

    fn focus(&mut self, tile: NodeHandle) {
        self.calls.push(Call::Focus(tile));
    }

    fn load_media(&mut self, tile: NodeHandle, media: &[DeferredMedia]) {
        let sources = media.iter().filter_map(|m| m.src.clone()).collect();
        self.calls.push(Call::LoadMedia(tile, sources));
    }
}

pub fn tile(index: usize) -> NodeHandle {
    NodeHandle(TILE_BASE + index as u64)
}

pub fn tiles(count: usize) -> Vec<TileSpec> {
    (0..count).map(|i| TileSpec::panel(tile(i))).collect()
}

/// Panel tiles carrying one deferred image each (`img-<i>.jpg`).
pub fn tiles_with_media(count: usize) -> Vec<TileSpec> {
    (0..count)
        .map(|i| TileSpec::panel(tile(i)).with_media(format!("img-{i}.jpg")))
        .collect()
}

pub fn handles(range: std::ops::Range<usize>) -> Vec<NodeHandle> {
    range.map(tile).collect()
}
