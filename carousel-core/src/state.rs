//! The mutable carousel state and the pure index resolution behind every
//! navigation.

use std::ops::Range;

use carousel_model::{IncrementMode, TileAccessibility, TileSpec, TileView};

use crate::partition::FramePartition;

/// A tile as tracked by the engine: its input description plus the
/// accessibility flags the engine maintains for it.
#[derive(Debug, Clone, PartialEq)]
pub struct TileRecord {
    pub spec: TileSpec,
    pub accessibility: TileAccessibility,
}

impl TileRecord {
    pub fn new(spec: TileSpec) -> Self {
        Self {
            spec,
            accessibility: TileAccessibility::default(),
        }
    }

    pub fn view(&self, media_requested: bool) -> TileView {
        TileView {
            node: self.spec.node,
            role: self.spec.role,
            accessibility: self.accessibility,
            media_requested,
        }
    }
}

/// Where a navigation request lands after clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub index: usize,
    pub current_frame: Range<usize>,
    pub current_tile: usize,
    pub is_last_frame: bool,
}

/// Clamp `requested` into `[0, tile_count - increment]` and work out the
/// active window and focus target.
///
/// The window always spans `increment` tiles when the sequence is long
/// enough, so the last window may reuse tiles of the previous logical frame.
/// In frame mode, when the last logical frame is short, focus moves
/// `tile_delta` tiles past the window start so it lands on a tile the
/// previous frame did not show. The shifted focus is bounded by the last tile
/// for sequences shorter than half an increment.
pub fn resolve_target(
    partition: &FramePartition,
    mode: IncrementMode,
    requested: i64,
) -> Target {
    let max_index = partition.max_index();
    let index = usize::try_from(requested.max(0)).unwrap_or(usize::MAX).min(max_index);
    let is_last_frame = index == max_index;

    let end = (index + partition.increment).min(partition.tile_count);
    let shift = is_last_frame && partition.tile_delta() > 0 && mode == IncrementMode::Frame;
    let current_tile = if shift {
        (index + partition.tile_delta()).min(partition.tile_count.saturating_sub(1))
    } else {
        index
    };

    Target {
        index,
        current_frame: index..end,
        current_tile,
        is_last_frame,
    }
}

/// Core state owned by one engine. `frame_index` and `offset` are derived
/// from `index` on read and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    pub index: usize,
    pub prev_index: Option<usize>,
    pub prev_frame_index: usize,
    pub current_tile: usize,
    pub prev_tile: Option<usize>,
    pub current_frame: Range<usize>,
    pub prev_frame: Range<usize>,
    pub tile_width: f32,
    pub tile_height: f32,
    increment: usize,
}

impl CarouselState {
    pub fn initial(
        partition: &FramePartition,
        tile_width: f32,
        tile_height: f32,
    ) -> Self {
        let first_frame = partition.frame(0).unwrap_or(0..0);
        Self {
            index: 0,
            prev_index: None,
            prev_frame_index: 0,
            current_tile: 0,
            prev_tile: None,
            current_frame: first_frame.clone(),
            prev_frame: first_frame,
            tile_width,
            tile_height,
            increment: partition.increment,
        }
    }

    /// `ceil(index / increment)`.
    pub fn frame_index(&self) -> usize {
        self.index.div_ceil(self.increment)
    }

    /// Horizontal translation of the tile holder in pixels.
    pub fn offset(&self) -> f32 {
        self.tile_width * self.index as f32
    }

    /// Replace the navigation fields in one assignment, recording the
    /// previous values.
    pub fn commit(&mut self, target: Target) {
        let next = Self {
            index: target.index,
            prev_index: Some(self.index),
            prev_frame_index: self.frame_index(),
            current_tile: target.current_tile,
            prev_tile: Some(self.current_tile),
            current_frame: target.current_frame,
            prev_frame: self.current_frame.clone(),
            ..self.clone()
        };
        *self = next;
    }
}
