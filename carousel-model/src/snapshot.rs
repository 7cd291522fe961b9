use crate::handle::NodeHandle;
use crate::tile::{TileAccessibility, TileRole};

/// Presentation-facing view of one tile.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TileView {
    pub node: NodeHandle,
    pub role: TileRole,
    pub accessibility: TileAccessibility,
    pub media_requested: bool,
}

/// Read-only copy of the carousel state.
///
/// Handed to frame hooks and returned by the engine's snapshot accessor.
/// Presenters can render entirely from this value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StateSnapshot {
    pub index: usize,
    pub frame_index: usize,
    pub prev_index: Option<usize>,
    pub prev_frame_index: usize,
    pub frame_count: usize,
    pub tile_delta: usize,
    pub current_tile: NodeHandle,
    pub current_frame: Vec<NodeHandle>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// Horizontal translation of the tile holder, `tileWidth * index`.
    pub offset: f32,
    pub tiles: Vec<TileView>,
}

impl StateSnapshot {
    pub fn is_first_frame(&self) -> bool {
        self.index == 0
    }

    /// Tiles a screen reader may currently announce.
    pub fn visible_tiles(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        self.tiles
            .iter()
            .filter(|tile| !tile.accessibility.is_hidden())
            .map(|tile| tile.node)
    }
}
