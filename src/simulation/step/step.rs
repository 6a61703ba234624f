use super::perf_timer::timed;
use super::{PerfTimer, WorldCore};

/// One logical tick: pose integration plus the correction passes
pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    let dt = world.clock.dt();
    let bounds = world.bounds;

    let (counters, tick_ms) = timed(perf_on, || world.bodies.update(dt, &bounds));

    world.tick += 1;

    if perf_on {
        world
            .perf_stats
            .record_tick(counters, tick_ms, world.bodies.shape_count(), world.tick);
    }
}

/// Fixed-timestep frame driver.
///
/// Ticks owed since `last_tick` all run now, each advancing the clock by one
/// tick length, so the simulated rate is independent of the frame rate.
pub(super) fn run_frame(world: &mut WorldCore, t_frame: f64) -> u32 {
    let frame_start = if world.perf_enabled { Some(PerfTimer::start()) } else { None };

    let num_ticks = world.clock.ticks_due(t_frame);
    world.queue_updates(num_ticks);

    if let Some(start) = frame_start {
        world.perf_stats.record_frame(num_ticks, start.elapsed_ms());
    }
    num_ticks
}
