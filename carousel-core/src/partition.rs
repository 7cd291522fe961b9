//! Splits the tile sequence into fixed-size frames.

use std::ops::Range;

/// Frame structure of a tile sequence. Computed once at init; tile count is
/// fixed afterwards so the partition never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePartition {
    pub frames: Vec<Range<usize>>,
    pub tile_count: usize,
    pub increment: usize,
}

impl FramePartition {
    /// `ceil(tile_count / increment)`.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Padding needed to make the last frame full width,
    /// `increment * frame_count - tile_count`. Always `< increment`.
    pub fn tile_delta(&self) -> usize {
        self.increment * self.frame_count() - self.tile_count
    }

    /// Largest valid first-visible offset, `tile_count - increment` floored
    /// at zero when a single frame holds every tile.
    pub fn max_index(&self) -> usize {
        self.tile_count.saturating_sub(self.increment)
    }

    /// Start of the last logical frame.
    pub fn last_frame_start(&self) -> usize {
        self.frames.last().map(|frame| frame.start).unwrap_or(0)
    }

    pub fn frame(&self, frame_index: usize) -> Option<Range<usize>> {
        self.frames.get(frame_index).cloned()
    }
}

/// Partition `tile_count` tiles into frames of `increment` tiles, preserving
/// order. Every frame but possibly the last holds exactly `increment` tiles.
///
/// `increment` is validated to be non-zero by option normalization.
pub fn partition(tile_count: usize, increment: usize) -> FramePartition {
    debug_assert!(increment > 0, "increment must be validated before partitioning");
    let increment = increment.max(1);

    let frames = (0..tile_count)
        .step_by(increment)
        .map(|start| start..(start + increment).min(tile_count))
        .collect();

    FramePartition {
        frames,
        tile_count,
        increment,
    }
}
