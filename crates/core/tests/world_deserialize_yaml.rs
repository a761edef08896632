mod common;

use matflow_core::{build_year, World};

#[test]
fn yaml_world_deserializes_and_builds() {
    let fixture = common::read_fixture("world.yaml");
    let world: World = serde_yaml::from_str(&fixture).expect("world should deserialize");

    assert_eq!(world, common::europe_world());

    let leaves = world.leaves();
    let input = build_year(&world, &common::europe_vocabulary(), 2016, &leaves).unwrap();
    let expected = 7.10 + (9.10 - 7.10) * 2.0 / 3.0;
    assert_eq!(common::float_cell(&input.intensities, "Steel", 1), expected);
}

#[test]
fn yaml_world_round_trips_through_json() {
    let fixture = common::read_fixture("world.yaml");
    let world: World = serde_yaml::from_str(&fixture).expect("world should deserialize");

    let json = serde_json::to_string(&world).expect("world should serialize");
    let reparsed: World = serde_json::from_str(&json).expect("json should deserialize");
    assert_eq!(world, reparsed);
}
