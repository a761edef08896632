use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use crate::builder::BuildError;
use crate::model::{LeafKey, Material, NodePath, Series, Vocabulary};
use crate::resolver::OverrideResolver;

pub fn module_name() -> &'static str {
    "validation"
}

/// Validate and canonicalize enumerated leaf paths.
///
/// Exact duplicates are dropped; two different paths sharing a (Category,
/// Specific) key are a structural error. The result is sorted by key, which is
/// the canonical row order of the output tables.
pub fn ensure_unique_leaf_keys(
    leaf_paths: &[NodePath],
) -> Result<Vec<(NodePath, LeafKey)>, BuildError> {
    let mut by_key: BTreeMap<LeafKey, NodePath> = BTreeMap::new();
    for path in leaf_paths {
        let Some(key) = path.leaf_key() else {
            return Err(BuildError::MalformedLeafPath { path: path.clone() });
        };
        match by_key.get(&key) {
            Some(existing) if existing == path => {}
            Some(existing) => {
                return Err(BuildError::DuplicateLeafPath {
                    key,
                    first: existing.clone(),
                    second: path.clone(),
                });
            }
            None => {
                by_key.insert(key, path.clone());
            }
        }
    }
    Ok(by_key.into_iter().map(|(key, path)| (path, key)).collect())
}

/// Warn about materials present in resolved intensity blocks but absent from
/// the vocabulary; such materials never reach the output tables. Resolution
/// failures are ignored here, they surface as build errors later.
pub fn warn_unlisted_materials(
    resolver: &mut OverrideResolver<'_>,
    leaves: &[(NodePath, LeafKey)],
    vocabulary: &Vocabulary,
) {
    let mut reported: BTreeSet<NodePath> = BTreeSet::new();
    for (path, _) in leaves {
        let Ok((owner, block)) = resolver.resolve_intensities(path) else {
            continue;
        };
        if !reported.insert(owner.clone()) {
            continue;
        }
        let unlisted = unlisted_materials(block, vocabulary);
        if !unlisted.is_empty() {
            warn!(
                owner = %owner,
                materials = ?unlisted,
                "materials absent from vocabulary are dropped from output"
            );
        }
    }
}

fn unlisted_materials<'b>(
    block: &'b BTreeMap<Material, Series>,
    vocabulary: &Vocabulary,
) -> Vec<&'b str> {
    block
        .keys()
        .filter(|material| !vocabulary.materials().contains(*material))
        .map(String::as_str)
        .collect()
}
