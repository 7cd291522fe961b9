//! Screen-reader visibility and focusability of tiles.

use carousel_model::{FocusChange, Visibility};
use tracing::trace;

use crate::state::TileRecord;

/// Direction of a toggle pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaOp {
    Hide,
    Show,
}

/// Marks tiles hidden or visible, skipping spacer tiles.
///
/// The very first pass over an instance's tiles also hides every panel tile
/// and removes it from the tab order (`tabindex = -1`). The latch lives on
/// the toggler, so each carousel instance initializes independently.
#[derive(Debug, Clone, Default)]
pub struct AccessibilityStateToggler {
    initialized: bool,
}

impl AccessibilityStateToggler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Apply `op` to every panel tile in `tiles` and return the positions of
    /// the tiles whose flags actually changed, in ascending order.
    ///
    /// Only the opposite state is flipped: hiding a visible tile or showing a
    /// hidden one. Re-applying the current state changes nothing.
    pub fn apply(&mut self, tiles: &mut [TileRecord], op: AriaOp) -> Vec<usize> {
        let first_pass = !self.initialized;
        let mut changed = Vec::new();

        for (position, tile) in tiles
            .iter_mut()
            .enumerate()
            .filter(|(_, tile)| !tile.spec.is_spacer())
        {
            let before = tile.accessibility;
            let flags = &mut tile.accessibility;

            flags.visibility = match (flags.visibility, op) {
                (Some(Visibility::Visible), AriaOp::Hide) => Some(Visibility::Hidden),
                (Some(Visibility::Hidden), AriaOp::Show) => Some(Visibility::Visible),
                (current, _) => current,
            };

            if first_pass {
                flags.visibility = Some(Visibility::Hidden);
                flags.tab_index = Some(-1);
            }

            if *flags != before {
                changed.push(position);
            }
        }

        self.initialized = true;
        trace!(?op, first_pass, changed = changed.len(), "accessibility pass");
        changed
    }

    /// Track the `state-focus` marker of a panel tile. Returns `false` for
    /// spacers and when the marker was already in the requested state.
    pub fn mark_focus(tile: &mut TileRecord, change: FocusChange) -> bool {
        if tile.spec.is_spacer() {
            return false;
        }
        let focused = change == FocusChange::Gained;
        if tile.accessibility.focused == focused {
            return false;
        }
        tile.accessibility.focused = focused;
        true
    }
}
