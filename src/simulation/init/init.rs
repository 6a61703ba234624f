use std::f32::consts::TAU;

use rand::Rng;

use crate::domain::config::{SimConfig, WorldBounds};
use crate::domain::shape::{ShapeKind, COLOR_WHITE};
use crate::rigid_body::{Shape, Vec2};
use crate::rigid_body_system::RigidBodySystem;

use super::perf_stats::PerfStats;
use super::random::{lerp_uniform, pick_index, seeded};
use super::{RenderBuffers, TickClock, WorldCore};

pub(super) fn create_world_core(config: SimConfig) -> WorldCore {
    WorldCore {
        bounds: config.world,
        bodies: RigidBodySystem::new(),
        clock: TickClock::new(0.0, config.tick_length_ms),
        rng: seeded(config.seed),
        config,
        tick: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        render: RenderBuffers::default(),
    }
}

pub(super) fn repopulate(world: &mut WorldCore, count: u32) -> usize {
    let shapes = init_shapes(count, &world.config, &world.bounds, &mut world.rng);
    world.bodies.replace(shapes);
    crate::console_log!("spawned {} shapes", world.bodies.shape_count());
    world.bodies.shape_count()
}

/// Build `count` shapes with random kind, pose, velocity, spin and color.
///
/// Positions are drawn from `[size, extent - size]` on each axis. Speed and
/// spin are uniform in the configured ranges, heading uniform in [0, 2π).
/// Every returned shape already has valid geometry. Degenerate configs
/// (world smaller than a shape, inverted ranges, empty palette) are
/// tolerated: the values are used as-is and an empty palette yields white.
pub fn init_shapes<R: Rng>(
    count: u32,
    config: &SimConfig,
    bounds: &WorldBounds,
    rng: &mut R,
) -> Vec<Shape> {
    let size = config.shape_size;
    let mut shapes = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
        let x = lerp_uniform(rng, size, bounds.width - size);
        let y = lerp_uniform(rng, size, bounds.height - size);
        let angle = rng.gen::<f32>() * TAU;
        let speed = lerp_uniform(rng, config.min_speed, config.max_speed);
        let dir = rng.gen::<f32>() * TAU;
        let omega = lerp_uniform(rng, config.min_omega, config.max_omega);
        let color = pick_index(rng, config.palette.len())
            .map(|i| config.palette[i])
            .unwrap_or(COLOR_WHITE);

        let mut shape = Shape::new(kind, x, y, size);
        shape.angle = angle;
        shape.velocity = Vec2::from_angle(dir) * speed;
        shape.angular_vel = omega;
        shape.color = color;
        shape.recompute_geometry();
        shapes.push(shape);
    }

    shapes
}
