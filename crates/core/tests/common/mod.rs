use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use matflow_core::{Node, Series, Vocabulary, World};
use polars::prelude::DataFrame;

#[allow(dead_code)]
pub fn fixture_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(file_name)
}

#[allow(dead_code)]
pub fn read_fixture(file_name: &str) -> String {
    let path = fixture_path(file_name);
    fs::read_to_string(path).expect("fixture should be readable")
}

#[allow(dead_code)]
pub fn series(pairs: &[(i32, f64)]) -> Series {
    Series::from_pairs(pairs.iter().copied()).expect("fixture series should be valid")
}

#[allow(dead_code)]
pub fn wrap(label: &str, child: Node) -> Node {
    let mut children = BTreeMap::new();
    children.insert(label.to_string(), child);
    Node {
        children,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn intensity_block(entries: &[(&str, &[(i32, f64)])]) -> BTreeMap<String, Series> {
    entries
        .iter()
        .map(|(material, pairs)| (material.to_string(), series(pairs)))
        .collect()
}

#[allow(dead_code)]
pub fn indicator_block(
    entries: &[(&str, &[(&str, &[(i32, f64)])])],
) -> BTreeMap<String, BTreeMap<String, Series>> {
    entries
        .iter()
        .map(|(material, factors)| {
            let per_indicator = factors
                .iter()
                .map(|(indicator, pairs)| (indicator.to_string(), series(pairs)))
                .collect();
            (material.to_string(), per_indicator)
        })
        .collect()
}

/// Europe region with two countries. Germany's leaf fully overrides its
/// intensities and targets; UK's leaf carries only targets and inherits
/// intensities from the region. Indicators live on the region node.
#[allow(dead_code)]
pub fn europe_world() -> World {
    let germany_leaf = Node {
        intensities: Some(intensity_block(&[
            ("Steel", &[(2014, 4.11), (2016, 5.3), (2018, 6.0)]),
            ("PVC", &[(2014, 1.0), (2016, 1.5), (2018, 2.0)]),
        ])),
        targets: Some(series(&[(2014, 4.0), (2016, 5.0), (2018, 6.2018)])),
        ..Default::default()
    };
    let uk_leaf = Node {
        targets: Some(series(&[(2014, 1.5), (2017, 2.5)])),
        ..Default::default()
    };

    let mut europe_children = BTreeMap::new();
    europe_children.insert(
        "Germany".to_string(),
        wrap("Power plant", wrap("Gas-country-override", germany_leaf)),
    );
    europe_children.insert(
        "UK".to_string(),
        wrap("Power plant", wrap("NotOverriden", uk_leaf)),
    );

    let europe = Node {
        intensities: Some(intensity_block(&[
            ("Steel", &[(2014, 7.10), (2017, 9.10)]),
            ("PVC", &[(2014, 2.0), (2017, 3.5)]),
        ])),
        indicators: Some(indicator_block(&[
            ("Steel", &[("CO2", &[(2014, 1.2)]), ("PM25", &[(2014, 0.1)])]),
            ("PVC", &[("CO2", &[(2014, 2.4)]), ("PM25", &[(2014, 0.2)])]),
        ])),
        children: europe_children,
        ..Default::default()
    };

    World::new(wrap("Europe", europe))
}

#[allow(dead_code)]
pub fn europe_vocabulary() -> Vocabulary {
    Vocabulary::new(
        ["PVC", "Steel"].map(String::from),
        ["CO2", "PM25"].map(String::from),
    )
}

/// Tool/Hammer with an exact-year override for every requested year, so no
/// interpolation is ever involved.
#[allow(dead_code)]
pub fn scaling_world() -> World {
    let hammer = Node {
        intensities: Some(intensity_block(&[
            ("Steel", &[(2010, 5.0), (2011, 6.0), (2020, 15.0)]),
            ("Wood", &[(2010, 1.0), (2011, 2.0), (2020, 11.0)]),
        ])),
        targets: Some(series(&[(2010, 1.0), (2011, 2.0), (2020, 3.0)])),
        ..Default::default()
    };
    let root = Node {
        indicators: Some(indicator_block(&[
            ("Steel", &[("CO2", &[(2010, 2.0)])]),
            ("Wood", &[("CO2", &[(2010, 1.0)])]),
        ])),
        children: wrap("Tool", wrap("Hammer", hammer)).children,
        ..Default::default()
    };
    World::new(root)
}

#[allow(dead_code)]
pub fn scaling_vocabulary() -> Vocabulary {
    Vocabulary::new(
        ["Steel", "Wood"].map(String::from),
        ["CO2"].map(String::from),
    )
}

#[allow(dead_code)]
pub fn float_cell(frame: &DataFrame, column: &str, row: usize) -> f64 {
    frame
        .column(column)
        .expect("column should exist")
        .as_materialized_series()
        .f64()
        .expect("column should be f64")
        .get(row)
        .expect("cell should not be null")
}

#[allow(dead_code)]
pub fn str_cell(frame: &DataFrame, column: &str, row: usize) -> String {
    frame
        .column(column)
        .expect("column should exist")
        .as_materialized_series()
        .str()
        .expect("column should be string")
        .get(row)
        .expect("cell should not be null")
        .to_string()
}
