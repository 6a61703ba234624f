use crate::domain::config::{SimConfig, WorldBounds};

use super::perf_stats::PerfStats;
use super::random::seeded;
use super::WorldCore;

pub(super) fn apply_config(world: &mut WorldCore, config: SimConfig) {
    world.bounds = config.world;
    world.clock.tick_length = config.tick_length_ms;
    world.rng = seeded(config.seed);
    world.config = config;
}

pub(super) fn set_shape_count(world: &mut WorldCore, count: i32) {
    world.config.shape_count = count.max(0) as u32;
}

pub(super) fn set_world_size(world: &mut WorldCore, width: f32, height: f32) {
    if !(width > 0.0 && height > 0.0) {
        crate::console_warn!("ignoring world size {}x{}", width, height);
        return;
    }
    world.bounds = WorldBounds::new(width, height);
    world.config.world = world.bounds;
}

pub(super) fn set_seed(world: &mut WorldCore, seed: u64) {
    world.config.seed = seed;
    world.rng = seeded(seed);
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}
