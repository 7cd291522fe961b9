//! Geometry and control descriptions exchanged with the container service.

use crate::handle::NodeHandle;

/// Handles returned after the tile holder has been wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerHandles {
    /// Parent region enclosing the wrapper and any sibling controls; the
    /// delegated control listener is attached here.
    pub region: NodeHandle,
    /// Outer `carousel-container` region.
    pub wrapper: NodeHandle,
    /// Clipping `carousel-viewport` region the tile holder now lives in.
    pub viewport: NodeHandle,
}

/// Derived dimensions applied to the wrapped structure once at init.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ContainerLayout {
    /// Wrapper margin in pixels (`wrapperDelta`).
    pub wrapper_margin: i64,
    /// Viewport margin in pixels (`viewportDelta`).
    pub viewport_margin: i64,
    /// `tileWidth * increment + viewportDelta`.
    pub viewport_width: f32,
    /// `tileWidth * increment`.
    pub frame_width: f32,
    /// Width of one tile as a percentage of the holder, three decimals.
    pub tile_width_percent: f32,
}

/// Where the previous/next controls are inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ControlsPlacement {
    /// Directly before the wrapper, as siblings.
    #[default]
    BeforeWrapper,
    /// Inside a controls wrapper appended to the wrapper, centered beneath
    /// the viewport.
    Encapsulated,
}

/// Everything the container service needs to build the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ControlsSpec {
    pub prev_text: String,
    pub next_text: String,
    pub placement: ControlsPlacement,
    /// Initial enablement; a disabled control renders as an inert
    /// placeholder instead of a button.
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Handles of the rendered controls, used for width measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlHandles {
    pub prev: NodeHandle,
    pub next: NodeHandle,
}

/// Centering applied to encapsulated controls.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlsPosition {
    pub width: f32,
    pub left: f32,
}
