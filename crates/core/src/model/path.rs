use std::fmt;

use serde::{Deserialize, Serialize};

/// Hierarchical address of a node, e.g. `Europe/Germany/Power plant/Gas`.
///
/// The root of the world is the empty path. The last two segments of a leaf
/// path form its (Category, Specific) key.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(Vec<String>);

/// Trailing (Category, Specific) pair of a leaf path. Canonical row ordering
/// of the output tables is the lexicographic ordering of this key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LeafKey {
    pub category: String,
    pub specific: String,
}

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn child(&self, label: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(label.into());
        Self(segments)
    }

    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// The path itself first, then each ancestor, ending at the root.
    pub fn self_and_ancestors(&self) -> impl Iterator<Item = NodePath> + '_ {
        (0..=self.0.len())
            .rev()
            .map(move |depth| Self(self.0[..depth].to_vec()))
    }

    pub fn leaf_key(&self) -> Option<LeafKey> {
        let [.., category, specific] = self.0.as_slice() else {
            return None;
        };
        Some(LeafKey {
            category: category.clone(),
            specific: specific.clone(),
        })
    }

    /// Deepest scope shared by all `paths`; the root when `paths` is empty.
    pub fn common_prefix(paths: &[NodePath]) -> NodePath {
        let Some((first, rest)) = paths.split_first() else {
            return NodePath::root();
        };
        let mut prefix = first.segments().to_vec();
        for path in rest {
            let shared = prefix
                .iter()
                .zip(path.segments())
                .take_while(|(left, right)| left == right)
                .count();
            prefix.truncate(shared);
        }
        NodePath(prefix)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("/")
        } else {
            f.write_str(&self.0.join("/"))
        }
    }
}

impl fmt::Display for LeafKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.category, self.specific)
    }
}
