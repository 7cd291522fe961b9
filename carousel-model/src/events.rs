use std::fmt::{self, Display};

/// Lifecycle notifications published to the host's notifier, in the order
/// they are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum LifecycleEvent {
    BeforeInit,
    AfterInit,
    PreFrameChange,
    PostFrameChange,
}

impl LifecycleEvent {
    pub const fn name(self) -> &'static str {
        match self {
            LifecycleEvent::BeforeInit => "beforeInit",
            LifecycleEvent::AfterInit => "afterInit",
            LifecycleEvent::PreFrameChange => "preFrameChange",
            LifecycleEvent::PostFrameChange => "postFrameChange",
        }
    }
}

impl Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Focus transitions reported by the host for a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum FocusChange {
    Gained,
    Lost,
}
