use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Node, NodePath, QuantityKind, QuantitySeriesRef};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("path not found in world: {path}")]
    NotFound { path: NodePath },
}

/// The full hierarchical dataset. Constructed once from an externally loaded
/// node tree and read-only afterwards; resolution and interpolation are pure
/// functions over it, so per-year builds may run in parallel against a shared
/// reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct World {
    root: Node,
}

impl World {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Node lookup. `NotFound` means the path is absent from the tree, which
    /// is distinct from a present node lacking a quantity.
    pub fn get(&self, path: &NodePath) -> Result<&Node, WorldError> {
        let mut node = &self.root;
        for segment in path.segments() {
            node = node
                .children
                .get(segment)
                .ok_or_else(|| WorldError::NotFound { path: path.clone() })?;
        }
        Ok(node)
    }

    pub fn contains(&self, path: &NodePath) -> bool {
        self.get(path).is_ok()
    }

    /// Series block carried by the node at `path` for `kind`. `Ok(None)` is
    /// the valid partial state of a node inheriting the quantity.
    pub fn series(
        &self,
        path: &NodePath,
        kind: QuantityKind,
    ) -> Result<Option<QuantitySeriesRef<'_>>, WorldError> {
        Ok(self.get(path)?.series(kind))
    }

    pub fn children(&self, path: &NodePath) -> Result<Vec<NodePath>, WorldError> {
        let node = self.get(path)?;
        Ok(node.children.keys().map(|label| path.child(label)).collect())
    }

    /// All leaf paths, depth-first, ordered lexicographically by segment.
    pub fn leaves(&self) -> Vec<NodePath> {
        if self.root.children.is_empty() {
            return Vec::new();
        }
        let mut leaves = Vec::new();
        collect_leaves(&self.root, NodePath::root(), &mut leaves);
        leaves
    }

    pub fn leaves_under(&self, scope: &NodePath) -> Result<Vec<NodePath>, WorldError> {
        let node = self.get(scope)?;
        let mut leaves = Vec::new();
        collect_leaves(node, scope.clone(), &mut leaves);
        Ok(leaves)
    }
}

fn collect_leaves(node: &Node, path: NodePath, leaves: &mut Vec<NodePath>) {
    if node.children.is_empty() {
        leaves.push(path);
        return;
    }
    for (label, child) in &node.children {
        collect_leaves(child, path.child(label), leaves);
    }
}
