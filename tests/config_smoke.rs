use std::fs;

use shapefield_engine::{SimConfig, WorldBounds, WorldCore};

#[test]
fn bundled_config_parses_and_matches_defaults() {
    let json = fs::read_to_string("content/shapes.json").expect("content/shapes.json should exist");

    let config = SimConfig::from_json(&json).expect("shapes.json should parse");
    assert_eq!(config, SimConfig::default());
    assert_eq!(config.world, WorldBounds::new(1200.0, 800.0));
    assert_eq!(config.palette.len(), 10);
}

#[test]
fn world_from_bundled_config_populates_on_restart() {
    let json = fs::read_to_string("content/shapes.json").expect("content/shapes.json should exist");

    let mut world = WorldCore::from_config_json(&json).expect("shapes.json should parse");
    assert_eq!(world.shape_count(), 0);
    assert_eq!(world.restart(), 900);

    let bounds = world.bounds();
    for s in world.shapes() {
        let aabb = s.aabb();
        assert!(aabb.width() > 0.0);
        assert!(s.pos.x > 0.0 && s.pos.x < bounds.width);
        assert!(s.pos.y > 0.0 && s.pos.y < bounds.height);
    }
}

#[test]
fn malformed_config_is_an_error_not_a_panic() {
    assert!(WorldCore::from_config_json("not json").is_err());
    assert!(WorldCore::from_config_json(r##"{"colors": ["#12"]}"##).is_err());
    assert!(WorldCore::from_config_json(r#"{"world": {"width": -1, "height": 10}}"#).is_err());
}
