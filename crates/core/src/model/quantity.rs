use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::node::{Indicator, Material};
use crate::model::Series;

/// The three quantity families a node may carry. Override resolution runs
/// independently per (path, kind) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityKind {
    Intensity,
    Indicator,
    Target,
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuantityKind::Intensity => "intensity",
            QuantityKind::Indicator => "indicator",
            QuantityKind::Target => "target",
        };
        f.write_str(name)
    }
}

/// Borrowed view of the series block a node carries for one quantity kind.
/// The variant always matches the kind the block was looked up with.
#[derive(Debug, Clone, Copy)]
pub enum QuantitySeriesRef<'w> {
    /// Material -> year series.
    Intensity(&'w BTreeMap<Material, Series>),
    /// Material -> indicator -> year series.
    Indicator(&'w BTreeMap<Material, BTreeMap<Indicator, Series>>),
    /// Scalar target year series.
    Target(&'w Series),
}

impl QuantitySeriesRef<'_> {
    pub fn kind(&self) -> QuantityKind {
        match self {
            QuantitySeriesRef::Intensity(_) => QuantityKind::Intensity,
            QuantitySeriesRef::Indicator(_) => QuantityKind::Indicator,
            QuantitySeriesRef::Target(_) => QuantityKind::Target,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            QuantitySeriesRef::Intensity(block) => block.is_empty(),
            QuantitySeriesRef::Indicator(block) => block.is_empty(),
            QuantitySeriesRef::Target(series) => series.is_empty(),
        }
    }
}
