use super::*;
use crate::rigid_body::Vec2;
use crate::rigid_body_system::CORRECTION_PASSES;

fn small_world() -> WorldCore {
    let mut world = WorldCore::new(200.0, 100.0);
    world.set_seed(4242);
    world
}

#[test]
fn new_world_is_empty_until_populated() {
    let mut world = small_world();
    assert_eq!(world.shape_count(), 0);

    world.set_shape_count(25);
    assert_eq!(world.restart(), 25);
    assert_eq!(world.shape_count(), 25);
}

#[test]
fn negative_counts_clamp_to_empty() {
    let mut world = small_world();
    assert_eq!(world.init_shapes(-5), 0);

    world.set_shape_count(-1);
    assert_eq!(world.desired_shape_count(), 0);
    assert_eq!(world.restart(), 0);
}

#[test]
fn restart_replaces_the_whole_collection() {
    let mut world = small_world();
    world.init_shapes(10);
    let before: Vec<Vec2> = world.shapes().iter().map(|s| s.pos).collect();

    world.init_shapes(10);
    let after: Vec<Vec2> = world.shapes().iter().map(|s| s.pos).collect();

    assert_eq!(after.len(), 10);
    assert_ne!(before, after);
}

#[test]
fn queue_updates_advances_clock_per_tick() {
    let mut world = small_world();
    world.init_shapes(5);
    world.reset_clock(1000.0);

    world.queue_updates(3);
    assert_eq!(world.tick(), 3);
    assert_eq!(world.clock().last_tick, 1045.0);

    world.queue_updates(0);
    assert_eq!(world.tick(), 3);
}

#[test]
fn run_frame_runs_whole_ticks_only() {
    let mut world = small_world();
    world.init_shapes(5);
    world.reset_clock(0.0);

    assert_eq!(world.run_frame(10.0), 0);
    assert_eq!(world.run_frame(15.0), 0);
    assert_eq!(world.run_frame(47.0), 3);
    assert_eq!(world.clock().last_tick, 45.0);
    // Remainder carries into the next frame.
    assert_eq!(world.run_frame(61.0), 1);
    assert_eq!(world.tick(), 4);
}

#[test]
fn update_stamps_the_clock() {
    let mut world = small_world();
    world.update(500.0);
    assert_eq!(world.clock().last_tick, 500.0);
    assert_eq!(world.tick(), 1);

    world.advance_one_tick();
    assert_eq!(world.clock().last_tick, 500.0);
    assert_eq!(world.tick(), 2);
}

#[test]
fn same_seed_gives_identical_runs() {
    let run = || {
        let mut world = small_world();
        world.init_shapes(40);
        world.reset_clock(0.0);
        world.run_frame(300.0);
        world
            .shapes()
            .iter()
            .map(|s| (s.pos, s.velocity, s.angle))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn shapes_stay_in_bounds_over_many_ticks() {
    let mut world = small_world();
    world.init_shapes(30);
    world.queue_updates(400);

    // Walls read the AABB from before the second pair sweep, so a late
    // push can leave a shape slightly outside until the next tick.
    let b = world.bounds();
    let slack = 2.0 * world.config().shape_size;
    for s in world.shapes() {
        assert!(s.pos.x >= -slack && s.pos.x <= b.width + slack);
        assert!(s.pos.y >= -slack && s.pos.y <= b.height + slack);
    }
}

#[test]
fn collisions_never_change_spin() {
    let mut world = small_world();
    world.init_shapes(60);
    let spins: Vec<f32> = world.shapes().iter().map(|s| s.angular_vel).collect();

    world.queue_updates(100);

    let after: Vec<f32> = world.shapes().iter().map(|s| s.angular_vel).collect();
    assert_eq!(spins, after);
}

#[test]
fn perf_stats_count_pairs_per_tick() {
    let mut world = small_world();
    world.init_shapes(10);
    world.enable_perf_metrics(true);

    world.advance_one_tick();
    let stats = world.get_perf_stats();
    // 10 shapes -> 45 pairs, once per correction pass.
    assert_eq!(stats.pairs_tested(), 45 * CORRECTION_PASSES as u32);
    assert_eq!(stats.shape_count(), 10);
    assert_eq!(stats.tick(), 1);
    assert!(stats.tick_ms() >= 0.0);

    world.enable_perf_metrics(false);
    assert_eq!(world.get_perf_stats().pairs_tested(), 0);
}

#[test]
fn render_buffers_mirror_shapes() {
    let mut world = small_world();
    world.set_shapes(vec![
        Shape::new_circle(10.0, 10.0, 3.0).with_color(0x112233),
        Shape::new_square(50.0, 50.0, 4.0),
        Shape::new_triangle(80.0, 20.0, 5.0).with_angle(1.0),
    ]);

    assert_eq!(world.extract_render_data(), 3);
    let buf = world.render_buffers();

    assert_eq!(buf.kinds, vec![0u8, 1, 2]);
    assert_eq!(buf.colors[0], 0x112233);
    assert_eq!(buf.vertex_counts, vec![0u8, 4, 3]);
    assert_eq!(&buf.transforms[0..4], &[10.0f32, 10.0, 0.0, 3.0]);
    assert_eq!(buf.vertices.len(), 3 * 8);
    // Circle slots are zeroed, square slots hold its corners.
    assert!(buf.vertices[0..8].iter().all(|v| *v == 0.0));
    assert_eq!(&buf.vertices[8..10], &[54.0f32, 54.0]);
    // Unused fourth triangle slot.
    assert_eq!(&buf.vertices[22..24], &[0.0f32, 0.0]);
}

#[test]
fn load_config_replaces_bounds_and_repopulates() {
    let mut world = small_world();
    world
        .load_config_json(r##"{"shape_count": 7, "world": {"width": 300, "height": 150}, "tick_length_ms": 10, "colors": ["#ff0000"]}"##)
        .expect("config should load");

    assert_eq!(world.shape_count(), 7);
    assert_eq!(world.bounds(), WorldBounds::new(300.0, 150.0));
    assert_eq!(world.clock().tick_length, 10.0);
    assert!(world.shapes().iter().all(|s| s.color == 0xff0000));
}

#[test]
fn bad_config_leaves_world_untouched() {
    let mut world = small_world();
    world.init_shapes(3);

    let err = world.load_config_json(r#"{"max_omega": -10}"#).unwrap_err();
    assert!(err.contains("omega"));
    assert_eq!(world.shape_count(), 3);
    assert_eq!(world.bounds(), WorldBounds::new(200.0, 100.0));
}

#[test]
fn world_resize_ignores_non_positive_sizes() {
    let mut world = small_world();
    world.set_world_size(0.0, 50.0);
    assert_eq!(world.bounds(), WorldBounds::new(200.0, 100.0));

    world.set_world_size(640.0, 480.0);
    assert_eq!(world.bounds(), WorldBounds::new(640.0, 480.0));
}
