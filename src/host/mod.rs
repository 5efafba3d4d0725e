//! Host rendering environment seam.
//!
//! The geometry core never owns the visual tree. It reads resolved style, layout offsets and
//! tree structure through [`RenderHost`], which a browser binding or the in-memory
//! [`SnapshotHost`](crate::SnapshotHost) implements.

use std::fmt;
use std::ops::BitOr;

use crate::foundation::core::Vec2;

pub(crate) mod snapshot;

/// Relationship of one node to another, as a DOM `compareDocumentPosition` bit set.
///
/// `a.compare(b)` reports where `b` sits relative to `a`: [`PRECEDING`](Self::PRECEDING)
/// means `b` comes before `a`, [`CONTAINS`](Self::CONTAINS) means `b` is an ancestor of `a`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DocumentPosition(u16);

impl DocumentPosition {
    /// The nodes do not share a root.
    pub const DISCONNECTED: Self = Self(0x01);
    /// The other node precedes the reference node.
    pub const PRECEDING: Self = Self(0x02);
    /// The other node follows the reference node.
    pub const FOLLOWING: Self = Self(0x04);
    /// The other node is an ancestor of the reference node.
    pub const CONTAINS: Self = Self(0x08);
    /// The other node is a descendant of the reference node.
    pub const CONTAINED_BY: Self = Self(0x10);

    /// No bits set (same node).
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Wrap raw DOM bits.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Raw DOM bits.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Whether every bit of `flag` is set.
    pub const fn has(self, flag: Self) -> bool {
        flag.0 != 0 && self.0 & flag.0 == flag.0
    }
}

impl BitOr for DocumentPosition {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Read-only view of the host's rendered tree.
///
/// Implementations must answer from the tree state current at the call; the core never caches.
pub trait RenderHost {
    /// Opaque node handle.
    type Node: Copy + Eq + fmt::Debug;

    /// Resolved (post-cascade) value of `property`, or `None` when the host does not know it.
    fn computed_style(&self, node: Self::Node, property: &str) -> Option<String>;

    /// `(offsetLeft, offsetTop)`: position relative to the nearest positioned ancestor.
    fn layout_offset(&self, node: Self::Node) -> Vec2;

    /// Parent node, `None` at a root.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Structural relation of `other` to `node`. Hosts without a native query return `None`,
    /// which routes ordering through [`RenderHost::source_index`].
    fn compare_document_position(
        &self,
        node: Self::Node,
        other: Self::Node,
    ) -> Option<DocumentPosition> {
        let _ = (node, other);
        None
    }

    /// Legacy linear document index.
    fn source_index(&self, node: Self::Node) -> usize;
}

#[cfg(test)]
#[path = "../../tests/unit/host/position.rs"]
mod tests;
