// ScalingTest dataset: every requested year is explicitly present in the
// leaf's override series, so values pass through with no interpolation.

mod common;

use matflow_core::build_all;

#[test]
fn exact_year_overrides_bypass_interpolation() {
    let world = common::scaling_world();
    let outputs = build_all(&world, &common::scaling_vocabulary(), &[2010, 2011, 2020]).unwrap();

    let expected = [
        (2010, 5.0, 1.0),
        (2011, 6.0, 2.0),
        (2020, 15.0, 11.0),
    ];
    for (year, steel, wood) in expected {
        let input = &outputs[&year];
        assert_eq!(common::str_cell(&input.intensities, "Category", 0), "Tool");
        assert_eq!(common::str_cell(&input.intensities, "Specific", 0), "Hammer");
        assert_eq!(common::float_cell(&input.intensities, "Steel", 0), steel);
        assert_eq!(common::float_cell(&input.intensities, "Wood", 0), wood);
    }
}

#[test]
fn targets_are_scalar_per_leaf_and_year() {
    let world = common::scaling_world();
    let outputs = build_all(&world, &common::scaling_vocabulary(), &[2010, 2011, 2020]).unwrap();

    assert_eq!(common::float_cell(&outputs[&2010].targets, "Target", 0), 1.0);
    assert_eq!(common::float_cell(&outputs[&2011].targets, "Target", 0), 2.0);
    assert_eq!(common::float_cell(&outputs[&2020].targets, "Target", 0), 3.0);
}

#[test]
fn root_level_indicators_reach_the_output() {
    let world = common::scaling_world();
    let outputs = build_all(&world, &common::scaling_vocabulary(), &[2010]).unwrap();

    let indicators = &outputs[&2010].indicators;
    assert_eq!(common::str_cell(indicators, "Material", 0), "Steel");
    assert_eq!(common::str_cell(indicators, "Material", 1), "Wood");
    assert_eq!(common::float_cell(indicators, "CO2", 0), 2.0);
    assert_eq!(common::float_cell(indicators, "CO2", 1), 1.0);
}
