// ProcessableInput builder - orchestrates override resolution and temporal
// interpolation across leaves, materials and requested years.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use polars::prelude::PolarsError;
use thiserror::Error;
use tracing::debug;

use crate::builder::tables::{
    indicators_frame, intensities_frame, targets_frame, ProcessableInput,
};
use crate::interpolate::value_at;
use crate::model::{LeafKey, NodePath, QuantityKind, Vocabulary, World, Year};
use crate::resolver::OverrideResolver;
use crate::validation::{ensure_unique_leaf_keys, warn_unlisted_materials};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("duplicate leaf path: {key} appears at both {first} and {second}")]
    DuplicateLeafPath {
        key: LeafKey,
        first: NodePath,
        second: NodePath,
    },

    #[error("leaf path {path} is too short to carry a (Category, Specific) key")]
    MalformedLeafPath { path: NodePath },

    #[error("year {year} incomplete at {path} ({kind}): {reason}")]
    IncompleteYear {
        year: Year,
        path: NodePath,
        kind: QuantityKind,
        reason: String,
    },

    #[error("failed to assemble output tables: {0}")]
    TableAssembly(#[from] PolarsError),
}

/// Build the dense per-year tables for `leaf_paths`.
///
/// Stateless and idempotent: identical inputs yield identical tables, and a
/// produced year is never revisited. The first failing year aborts the batch;
/// callers that prefer to skip-and-report drive [`build_year`] themselves.
pub fn build_processable_input(
    world: &World,
    vocabulary: &Vocabulary,
    years: &[Year],
    leaf_paths: &[NodePath],
) -> Result<BTreeMap<Year, ProcessableInput>, BuildError> {
    let leaves = ensure_unique_leaf_keys(leaf_paths)?;
    let scope = NodePath::common_prefix(leaf_paths);
    let mut resolver = OverrideResolver::new(world);
    warn_unlisted_materials(&mut resolver, &leaves, vocabulary);

    let requested: BTreeSet<Year> = years.iter().copied().collect();
    let mut outputs = BTreeMap::new();
    for year in requested {
        let input = assemble_year(&mut resolver, vocabulary, &leaves, &scope, year)?;
        outputs.insert(year, input);
    }
    Ok(outputs)
}

/// [`build_processable_input`] over every leaf the world defines.
pub fn build_all(
    world: &World,
    vocabulary: &Vocabulary,
    years: &[Year],
) -> Result<BTreeMap<Year, ProcessableInput>, BuildError> {
    let leaf_paths = world.leaves();
    build_processable_input(world, vocabulary, years, &leaf_paths)
}

/// Single-year build, for callers scheduling years independently.
pub fn build_year(
    world: &World,
    vocabulary: &Vocabulary,
    year: Year,
    leaf_paths: &[NodePath],
) -> Result<ProcessableInput, BuildError> {
    let leaves = ensure_unique_leaf_keys(leaf_paths)?;
    let scope = NodePath::common_prefix(leaf_paths);
    let mut resolver = OverrideResolver::new(world);
    warn_unlisted_materials(&mut resolver, &leaves, vocabulary);
    assemble_year(&mut resolver, vocabulary, &leaves, &scope, year)
}

fn assemble_year(
    resolver: &mut OverrideResolver<'_>,
    vocabulary: &Vocabulary,
    leaves: &[(NodePath, LeafKey)],
    scope: &NodePath,
    year: Year,
) -> Result<ProcessableInput, BuildError> {
    debug!(year, leaves = leaves.len(), "assembling processable input");

    let keys: Vec<LeafKey> = leaves.iter().map(|(_, key)| key.clone()).collect();

    let mut intensity_columns: Vec<Vec<f64>> =
        vec![Vec::with_capacity(leaves.len()); vocabulary.materials().len()];
    let mut target_values: Vec<f64> = Vec::with_capacity(leaves.len());

    for (path, _) in leaves {
        let (owner, block) = resolver
            .resolve_intensities(path)
            .map_err(|error| incomplete(year, path, QuantityKind::Intensity, error))?;
        for (column, material) in intensity_columns.iter_mut().zip(vocabulary.materials()) {
            let series = block.get(material).ok_or_else(|| {
                incomplete(
                    year,
                    path,
                    QuantityKind::Intensity,
                    format!("material {material:?} missing from series owned by {owner}"),
                )
            })?;
            let value = value_at(series, year)
                .map_err(|error| incomplete(year, path, QuantityKind::Intensity, error))?;
            column.push(value);
        }

        let (_, targets) = resolver
            .resolve_targets(path)
            .map_err(|error| incomplete(year, path, QuantityKind::Target, error))?;
        let target = value_at(targets, year)
            .map_err(|error| incomplete(year, path, QuantityKind::Target, error))?;
        target_values.push(target);
    }

    // Indicator factors are shared by every leaf in scope, so they are
    // resolved once at the deepest common ancestor and interpolated per cell.
    let (indicator_owner, indicator_block) = resolver
        .resolve_indicators(scope)
        .map_err(|error| incomplete(year, scope, QuantityKind::Indicator, error))?;
    let mut indicator_columns: Vec<Vec<f64>> =
        vec![Vec::with_capacity(vocabulary.materials().len()); vocabulary.indicators().len()];
    for material in vocabulary.materials() {
        let per_indicator = indicator_block.get(material).ok_or_else(|| {
            incomplete(
                year,
                scope,
                QuantityKind::Indicator,
                format!("material {material:?} missing from factors owned by {indicator_owner}"),
            )
        })?;
        for (column, indicator) in indicator_columns.iter_mut().zip(vocabulary.indicators()) {
            let series = per_indicator.get(indicator).ok_or_else(|| {
                incomplete(
                    year,
                    scope,
                    QuantityKind::Indicator,
                    format!(
                        "indicator {indicator:?} missing for material {material:?} \
                         (owner {indicator_owner})"
                    ),
                )
            })?;
            let value = value_at(series, year)
                .map_err(|error| incomplete(year, scope, QuantityKind::Indicator, error))?;
            column.push(value);
        }
    }

    Ok(ProcessableInput {
        intensities: intensities_frame(&keys, vocabulary, &intensity_columns)?,
        indicators: indicators_frame(vocabulary, &indicator_columns)?,
        targets: targets_frame(&keys, &target_values)?,
    })
}

fn incomplete(
    year: Year,
    path: &NodePath,
    kind: QuantityKind,
    reason: impl fmt::Display,
) -> BuildError {
    BuildError::IncompleteYear {
        year,
        path: path.clone(),
        kind,
        reason: reason.to_string(),
    }
}
