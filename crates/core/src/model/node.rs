use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{QuantityKind, QuantitySeriesRef, Series};

/// Material name from the fixed vocabulary (e.g. "Steel", "PVC").
pub type Material = String;

/// Indicator name from the fixed vocabulary (e.g. "CO2", "PM25").
pub type Indicator = String;

/// One level of the world hierarchy (World, Region, Country, Category or
/// Specific). Any quantity may be absent; an absent quantity is inherited from
/// the nearest ancestor that carries it. Nodes with no children are leaves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensities: Option<BTreeMap<Material, Series>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicators: Option<BTreeMap<Material, BTreeMap<Indicator, Series>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Series>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, Node>,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The series block this node carries for `kind`, or `None` when the
    /// quantity is absent. An empty block counts as absent so that it never
    /// shadows ancestor data.
    pub fn series(&self, kind: QuantityKind) -> Option<QuantitySeriesRef<'_>> {
        match kind {
            QuantityKind::Intensity => self
                .intensities
                .as_ref()
                .filter(|block| !block.is_empty())
                .map(QuantitySeriesRef::Intensity),
            QuantityKind::Indicator => self
                .indicators
                .as_ref()
                .filter(|block| !block.is_empty())
                .map(QuantitySeriesRef::Indicator),
            QuantityKind::Target => self
                .targets
                .as_ref()
                .filter(|series| !series.is_empty())
                .map(QuantitySeriesRef::Target),
        }
    }
}
