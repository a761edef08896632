use polars::prelude::{Column, DataFrame, NamedFrom, PolarsError, Series as PlSeries};

use crate::model::{LeafKey, Vocabulary};

/// Dense single-year table set, ready for downstream processing.
///
/// - `intensities`: Category, Specific, then one column per vocabulary
///   material, rows ordered by (Category, Specific);
/// - `indicators`: Material, then one column per vocabulary indicator, rows in
///   vocabulary material order;
/// - `targets`: Category, Specific, Target, same row order as intensities.
#[derive(Debug, Clone)]
pub struct ProcessableInput {
    pub intensities: DataFrame,
    pub indicators: DataFrame,
    pub targets: DataFrame,
}

pub(crate) fn intensities_frame(
    keys: &[LeafKey],
    vocabulary: &Vocabulary,
    columns: &[Vec<f64>],
) -> Result<DataFrame, PolarsError> {
    let mut frame_columns: Vec<Column> = Vec::with_capacity(vocabulary.materials().len() + 2);
    frame_columns.extend(key_columns(keys));
    for (material, values) in vocabulary.materials().iter().zip(columns) {
        frame_columns.push(float_column(material, values));
    }
    DataFrame::new(frame_columns)
}

pub(crate) fn indicators_frame(
    vocabulary: &Vocabulary,
    columns: &[Vec<f64>],
) -> Result<DataFrame, PolarsError> {
    let mut frame_columns: Vec<Column> = Vec::with_capacity(vocabulary.indicators().len() + 1);
    frame_columns.push(string_column(
        "Material",
        vocabulary.materials().iter().map(String::as_str).collect(),
    ));
    for (indicator, values) in vocabulary.indicators().iter().zip(columns) {
        frame_columns.push(float_column(indicator, values));
    }
    DataFrame::new(frame_columns)
}

pub(crate) fn targets_frame(keys: &[LeafKey], values: &[f64]) -> Result<DataFrame, PolarsError> {
    let mut frame_columns: Vec<Column> = key_columns(keys);
    frame_columns.push(float_column("Target", values));
    DataFrame::new(frame_columns)
}

fn key_columns(keys: &[LeafKey]) -> Vec<Column> {
    vec![
        string_column(
            "Category",
            keys.iter().map(|key| key.category.as_str()).collect(),
        ),
        string_column(
            "Specific",
            keys.iter().map(|key| key.specific.as_str()).collect(),
        ),
    ]
}

fn string_column(name: &str, values: Vec<&str>) -> Column {
    PlSeries::new(name.into(), values).into()
}

fn float_column(name: &str, values: &[f64]) -> Column {
    PlSeries::new(name.into(), values).into()
}
