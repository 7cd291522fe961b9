//! Previous/next control enablement.

use carousel_model::{ControlsSpec, NavAction};

use crate::options::CarouselConfig;

/// Enablement of the two navigation controls, derived purely from the
/// current index and bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationButtonState {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl NavigationButtonState {
    pub fn derive(index: usize, increment: usize, tile_count: usize) -> Self {
        Self {
            prev_enabled: index > 0,
            next_enabled: index + increment < tile_count,
        }
    }

    pub fn is_enabled(&self, action: NavAction) -> bool {
        match action {
            NavAction::PrevFrame => self.prev_enabled,
            NavAction::NextFrame => self.next_enabled,
        }
    }

    /// Controls whose enablement differs between `self` and `next`, with
    /// their new enablement. Unchanged controls are left in place.
    pub fn changes_to(&self, next: &Self) -> Vec<(NavAction, bool)> {
        NavAction::ALL
            .into_iter()
            .filter(|action| self.is_enabled(*action) != next.is_enabled(*action))
            .map(|action| (action, next.is_enabled(action)))
            .collect()
    }
}

/// Build the description of the controls inserted at init.
pub fn controls_spec(
    config: &CarouselConfig,
    buttons: NavigationButtonState,
) -> ControlsSpec {
    ControlsSpec {
        prev_text: config.prev_text.clone(),
        next_text: config.next_text.clone(),
        placement: config.controls_placement(),
        prev_enabled: buttons.prev_enabled,
        next_enabled: buttons.next_enabled,
    }
}
