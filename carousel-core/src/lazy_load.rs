//! Deferred media scheduling.
//!
//! Keeps a per-instance record of which tile positions have had their media
//! requested so a tile is never fetched twice.

use std::ops::Range;

use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct LazyLoadScheduler {
    requested: Vec<bool>,
}

impl LazyLoadScheduler {
    pub fn new(tile_count: usize) -> Self {
        Self {
            requested: vec![false; tile_count],
        }
    }

    pub fn is_requested(&self, index: usize) -> bool {
        self.requested.get(index).copied().unwrap_or(false)
    }

    pub fn requested_count(&self) -> usize {
        self.requested.iter().filter(|r| **r).count()
    }

    /// Mark tiles in `[start, stop)` as requested and return the positions
    /// that were not requested before, in order.
    ///
    /// The whole call is skipped when `start` is already requested, so
    /// callers must pass a window that begins at a pending tile (see
    /// [`LazyLoadScheduler::pending_window`]). `stop` is clamped to the
    /// sequence length.
    pub fn request_load(&mut self, start: usize, stop: usize) -> Vec<usize> {
        if self.is_requested(start) {
            trace!(start, stop, "lazy-load window already requested");
            return Vec::new();
        }

        let stop = stop.min(self.requested.len());
        let mut fresh = Vec::new();
        for index in start..stop {
            if self.requested[index] {
                continue;
            }
            self.requested[index] = true;
            fresh.push(index);
        }

        trace!(start, stop, loaded = fresh.len(), "lazy-load window requested");
        fresh
    }

    /// Narrow `window` so it begins at its first pending tile. Returns
    /// `None` when everything in the window has already been requested.
    pub fn pending_window(&self, window: Range<usize>) -> Option<Range<usize>> {
        let stop = window.end.min(self.requested.len());
        (window.start..stop)
            .find(|index| !self.requested[*index])
            .map(|start| start..stop)
    }
}
