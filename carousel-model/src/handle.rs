use std::fmt::{self, Display};

/// Opaque reference to a node owned by the presentation layer.
///
/// The engine never dereferences a handle; it only passes handles back to
/// the collaborator that minted them (tiles, wrapper, viewport, controls).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeHandle(pub u64);

impl NodeHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

impl From<u64> for NodeHandle {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
