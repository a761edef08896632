// Override resolver - walks the hierarchy from a path towards the root and
// returns the series of the nearest node carrying the requested quantity.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;
use tracing::debug;

use crate::model::{
    Indicator, Material, NodePath, QuantityKind, QuantitySeriesRef, Series, World,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("path not found in world: {path}")]
    NotFound { path: NodePath },

    #[error("no node from {path} up to the root supplies {kind} data")]
    UnresolvedQuantity { path: NodePath, kind: QuantityKind },
}

/// Outcome of one override resolution: the owning node's path and its series
/// block, verbatim. Series of different ancestors are never merged.
#[derive(Debug, Clone)]
pub struct Resolution<'w> {
    pub owning_path: NodePath,
    pub series: QuantitySeriesRef<'w>,
}

/// Per-quantity, per-path override resolution over a read-only world.
///
/// Resolution is independent for every (path, kind) pair: sibling leaves may
/// inherit the same quantity from different ancestors, and one leaf may
/// inherit intensities while carrying its own targets. Owning paths are
/// memoized so repeated lookups across materials and years skip the ancestor
/// walk.
pub struct OverrideResolver<'w> {
    world: &'w World,
    owners: HashMap<(NodePath, QuantityKind), NodePath>,
}

impl<'w> OverrideResolver<'w> {
    pub fn new(world: &'w World) -> Self {
        Self {
            world,
            owners: HashMap::new(),
        }
    }

    pub fn world(&self) -> &'w World {
        self.world
    }

    /// Nearest node, starting at `path` itself, that carries a non-empty
    /// series block for `kind`.
    pub fn resolve(
        &mut self,
        path: &NodePath,
        kind: QuantityKind,
    ) -> Result<Resolution<'w>, ResolutionError> {
        let owning_path = self.owner_for(path, kind)?;
        let series = self
            .world
            .series(&owning_path, kind)
            .ok()
            .flatten()
            .ok_or_else(|| ResolutionError::UnresolvedQuantity {
                path: path.clone(),
                kind,
            })?;
        Ok(Resolution { owning_path, series })
    }

    /// Resolution narrowed to the intensity block: material -> year series.
    pub fn resolve_intensities(
        &mut self,
        path: &NodePath,
    ) -> Result<(NodePath, &'w BTreeMap<Material, Series>), ResolutionError> {
        let resolution = self.resolve(path, QuantityKind::Intensity)?;
        match resolution.series {
            QuantitySeriesRef::Intensity(block) => Ok((resolution.owning_path, block)),
            _ => Err(ResolutionError::UnresolvedQuantity {
                path: path.clone(),
                kind: QuantityKind::Intensity,
            }),
        }
    }

    /// Resolution narrowed to the indicator block: material -> indicator ->
    /// year series.
    pub fn resolve_indicators(
        &mut self,
        path: &NodePath,
    ) -> Result<(NodePath, &'w BTreeMap<Material, BTreeMap<Indicator, Series>>), ResolutionError>
    {
        let resolution = self.resolve(path, QuantityKind::Indicator)?;
        match resolution.series {
            QuantitySeriesRef::Indicator(block) => Ok((resolution.owning_path, block)),
            _ => Err(ResolutionError::UnresolvedQuantity {
                path: path.clone(),
                kind: QuantityKind::Indicator,
            }),
        }
    }

    /// Resolution narrowed to the scalar target series.
    pub fn resolve_targets(
        &mut self,
        path: &NodePath,
    ) -> Result<(NodePath, &'w Series), ResolutionError> {
        let resolution = self.resolve(path, QuantityKind::Target)?;
        match resolution.series {
            QuantitySeriesRef::Target(series) => Ok((resolution.owning_path, series)),
            _ => Err(ResolutionError::UnresolvedQuantity {
                path: path.clone(),
                kind: QuantityKind::Target,
            }),
        }
    }

    fn owner_for(
        &mut self,
        path: &NodePath,
        kind: QuantityKind,
    ) -> Result<NodePath, ResolutionError> {
        if !self.world.contains(path) {
            return Err(ResolutionError::NotFound { path: path.clone() });
        }

        let key = (path.clone(), kind);
        if let Some(owner) = self.owners.get(&key) {
            return Ok(owner.clone());
        }

        for ancestor in path.self_and_ancestors() {
            if matches!(self.world.series(&ancestor, kind), Ok(Some(_))) {
                debug!(path = %path, owner = %ancestor, kind = %kind, "resolved quantity owner");
                self.owners.insert(key, ancestor.clone());
                return Ok(ancestor);
            }
        }

        Err(ResolutionError::UnresolvedQuantity {
            path: path.clone(),
            kind,
        })
    }
}
