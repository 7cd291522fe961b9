//! Pixel metrics derived from the first tile and the configured deltas.

use carousel_model::{ContainerLayout, ControlsPosition};

use crate::options::CarouselConfig;

/// Width of one tile as a percentage of the tile holder, truncated to three
/// decimals (`33.333` for an increment of 3).
pub fn tile_width_percent(increment: usize) -> f32 {
    let increment = increment.max(1) as f64;
    (((100.0 / increment) * 1000.0).trunc() / 1000.0) as f32
}

pub fn container_layout(config: &CarouselConfig, tile_width: f32) -> ContainerLayout {
    let frame_width = tile_width * config.increment as f32;
    ContainerLayout {
        wrapper_margin: config.wrapper_delta,
        viewport_margin: config.viewport_delta,
        viewport_width: frame_width + config.viewport_delta as f32,
        frame_width,
        tile_width_percent: tile_width_percent(config.increment),
    }
}

/// Center a pair of controls beneath a viewport of `viewport_width`.
pub fn center_controls(
    viewport_width: f32,
    prev_width: f32,
    next_width: f32,
) -> ControlsPosition {
    let width = prev_width + next_width;
    ControlsPosition {
        width,
        left: viewport_width / 2.0 - width / 2.0,
    }
}
