use crate::handle::NodeHandle;

/// Measured pixel box of a tile.
///
/// Width is taken from the first tile and assumed for every tile; height may
/// vary per tile and is only authoritative for the tile it was measured on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMetrics {
    pub width: f32,
    pub height: f32,
}

impl TileMetrics {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A tile that cannot be laid out horizontally.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.width > 0.0)
    }
}

/// Whether a tile holds content or only pads a short final frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TileRole {
    #[default]
    Panel,
    /// Structural padding; never toggled, never focused.
    Spacer,
}

/// An image (or other media) whose fetch is deferred until its tile
/// enters the active frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeferredMedia {
    /// Source to fetch once the tile becomes active.
    pub original: String,
    /// Live source; `None` until the media has been requested.
    pub src: Option<String>,
}

impl DeferredMedia {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            src: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.src.is_some()
    }

    /// Promote `original` into `src` when no source is set yet. Returns
    /// `true` if the source changed.
    pub fn resolve(&mut self) -> bool {
        if self.src.is_some() {
            return false;
        }
        self.src = Some(self.original.clone());
        true
    }
}

/// Input description of one tile handed to the engine at init.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileSpec {
    pub node: NodeHandle,
    pub role: TileRole,
    pub media: Vec<DeferredMedia>,
}

impl TileSpec {
    pub fn panel(node: NodeHandle) -> Self {
        Self {
            node,
            role: TileRole::Panel,
            media: Vec::new(),
        }
    }

    pub fn spacer(node: NodeHandle) -> Self {
        Self {
            node,
            role: TileRole::Spacer,
            media: Vec::new(),
        }
    }

    pub fn with_media(mut self, original: impl Into<String>) -> Self {
        self.media.push(DeferredMedia::new(original));
        self
    }

    pub fn is_spacer(&self) -> bool {
        self.role == TileRole::Spacer
    }
}

/// Screen-reader visibility of a tile (`state-hidden` / `state-visible`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Visibility {
    Hidden,
    Visible,
}

/// Accessibility flags tracked per tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TileAccessibility {
    /// `None` until the first toggle pass touches the tile.
    pub visibility: Option<Visibility>,
    /// `Some(-1)` once initialized: reachable by programmatic focus only,
    /// never part of the sequential tab order.
    pub tab_index: Option<i32>,
    /// Mirrors the `state-focus` marker maintained by focus/blur bindings.
    pub focused: bool,
}

impl TileAccessibility {
    pub fn is_hidden(&self) -> bool {
        self.visibility == Some(Visibility::Hidden)
    }

    /// Whether the tile is a sequential (tab key) focus stop.
    pub fn is_tab_stop(&self) -> bool {
        self.tab_index.is_some_and(|index| index >= 0)
    }
}
