use std::collections::{BTreeMap, HashMap};
use std::io::Read;

use crate::foundation::core::Vec2;
use crate::foundation::error::{GeomError, GeomResult};
use crate::host::{DocumentPosition, RenderHost};

/// One node of a recorded render tree.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SnapshotNode {
    pub id: String,
    /// Resolved style, keyed by property name (prefixed names included verbatim).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
    /// `[offsetLeft, offsetTop]`.
    #[serde(default)]
    pub offset: [f64; 2],
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SnapshotNode>,
}

impl SnapshotNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn offset(mut self, left: f64, top: f64) -> Self {
        self.offset = [left, top];
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    pub fn child(mut self, node: SnapshotNode) -> Self {
        self.children.push(node);
        self
    }
}

/// Serialized form of a [`SnapshotHost`]: a forest of root trees.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    /// Emulate a host without `compareDocumentPosition`.
    #[serde(default)]
    pub legacy_ordering: bool,
    pub roots: Vec<SnapshotNode>,
}

/// Handle into a [`SnapshotHost`]; the value is the node's pre-order index over the forest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

#[derive(Clone, Debug)]
struct FlatNode {
    id: String,
    style: BTreeMap<String, String>,
    offset: Vec2,
    parent: Option<NodeId>,
    root: NodeId,
    // exclusive end of this node's subtree in pre-order
    subtree_end: usize,
}

/// In-memory [`RenderHost`] backed by a recorded render tree.
#[derive(Clone, Debug)]
pub struct SnapshotHost {
    nodes: Vec<FlatNode>,
    by_id: HashMap<String, NodeId>,
    legacy_ordering: bool,
}

impl SnapshotHost {
    #[tracing::instrument(skip(snapshot), fields(roots = snapshot.roots.len()))]
    pub fn new(snapshot: Snapshot) -> GeomResult<Self> {
        let mut host = Self {
            nodes: Vec::new(),
            by_id: HashMap::new(),
            legacy_ordering: snapshot.legacy_ordering,
        };
        for root in snapshot.roots {
            let root_id = NodeId(host.nodes.len());
            host.push_subtree(root, None, root_id)?;
        }
        tracing::debug!(nodes = host.nodes.len(), "snapshot host built");
        Ok(host)
    }

    pub fn from_json_str(s: &str) -> GeomResult<Self> {
        let snapshot: Snapshot =
            serde_json::from_str(s).map_err(|e| GeomError::serde(e.to_string()))?;
        Self::new(snapshot)
    }

    pub fn from_reader(r: impl Read) -> GeomResult<Self> {
        let snapshot: Snapshot =
            serde_json::from_reader(r).map_err(|e| GeomError::serde(e.to_string()))?;
        Self::new(snapshot)
    }

    fn push_subtree(
        &mut self,
        node: SnapshotNode,
        parent: Option<NodeId>,
        root: NodeId,
    ) -> GeomResult<()> {
        let idx = NodeId(self.nodes.len());
        if self.by_id.insert(node.id.clone(), idx).is_some() {
            return Err(GeomError::validation(format!(
                "duplicate node id '{}'",
                node.id
            )));
        }
        self.nodes.push(FlatNode {
            id: node.id,
            style: node.style,
            offset: Vec2::new(node.offset[0], node.offset[1]),
            parent,
            root,
            subtree_end: idx.0 + 1,
        });
        for child in node.children {
            self.push_subtree(child, Some(idx), root)?;
        }
        self.nodes[idx.0].subtree_end = self.nodes.len();
        Ok(())
    }

    pub fn node(&self, id: &str) -> GeomResult<NodeId> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| GeomError::unknown_node(id))
    }

    pub fn id_of(&self, node: NodeId) -> &str {
        &self.nodes[node.0].id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Overwrite one resolved style value, as a style recalculation would.
    pub fn set_style(
        &mut self,
        node: NodeId,
        property: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.nodes[node.0]
            .style
            .insert(property.into(), value.into());
    }

    /// Move a node within its positioning context, as a reflow would.
    pub fn set_offset(&mut self, node: NodeId, offset: Vec2) {
        self.nodes[node.0].offset = offset;
    }

    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        ancestor.0 < node.0 && node.0 < self.nodes[ancestor.0].subtree_end
    }
}

impl RenderHost for SnapshotHost {
    type Node = NodeId;

    fn computed_style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes[node.0].style.get(property).cloned()
    }

    fn layout_offset(&self, node: NodeId) -> Vec2 {
        self.nodes[node.0].offset
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn compare_document_position(&self, node: NodeId, other: NodeId) -> Option<DocumentPosition> {
        if self.legacy_ordering {
            return None;
        }
        if node == other {
            return Some(DocumentPosition::empty());
        }
        if self.nodes[node.0].root != self.nodes[other.0].root {
            return Some(DocumentPosition::DISCONNECTED);
        }
        let pos = if self.is_ancestor(other, node) {
            DocumentPosition::CONTAINS | DocumentPosition::PRECEDING
        } else if self.is_ancestor(node, other) {
            DocumentPosition::CONTAINED_BY | DocumentPosition::FOLLOWING
        } else if other.0 < node.0 {
            DocumentPosition::PRECEDING
        } else {
            DocumentPosition::FOLLOWING
        };
        Some(pos)
    }

    fn source_index(&self, node: NodeId) -> usize {
        node.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/snapshot.rs"]
mod tests;
