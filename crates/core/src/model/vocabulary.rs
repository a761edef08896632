use serde::{Deserialize, Serialize};

use crate::model::node::{Indicator, Material};

/// Canonical material and indicator orderings for a build.
///
/// Passed explicitly into the builder rather than held as ambient global
/// state, so builds stay reproducible and testable in isolation. The order
/// given here is the column order of the output tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    materials: Vec<Material>,
    indicators: Vec<Indicator>,
}

impl Vocabulary {
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn new<M, I>(materials: M, indicators: I) -> Self
    where
        M: IntoIterator<Item = Material>,
        I: IntoIterator<Item = Indicator>,
    {
        Self {
            materials: dedup_keep_order(materials),
            indicators: dedup_keep_order(indicators),
        }
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }
}

fn dedup_keep_order(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::BTreeSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
