//! World - fixed-timestep shape simulation
//!
//! `WorldCore` owns everything a run needs: shapes, world bounds, clock,
//! configuration, RNG and perf counters. Nothing is global, so several
//! independent simulations can coexist.
//!
//! - Collision pipeline lives in rigid_body_system/
//! - Population setup in init/
//! - Tick scheduling in clock/
//! - Render buffer extraction in render/

use rand::rngs::SmallRng;

use crate::domain::config::{SimConfig, WorldBounds};
use crate::rigid_body::Shape;
use crate::rigid_body_system::RigidBodySystem;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "clock/clock.rs"]
mod clock;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use clock::{tick_count_for_elapsed, TickClock};
pub use facade::World;
pub use init::init_shapes;
pub use perf_stats::PerfStats;
pub use render_extract::RenderBuffers;

use perf_timer::PerfTimer;

/// The simulation context
pub struct WorldCore {
    config: SimConfig,
    bounds: WorldBounds,
    bodies: RigidBodySystem,
    clock: TickClock,
    rng: SmallRng,

    // State
    tick: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,

    render: RenderBuffers,
}

impl WorldCore {
    /// Create a world with default configuration and the given bounds.
    /// Starts empty; call `restart` or `init_shapes` to populate.
    pub fn new(width: f32, height: f32) -> Self {
        let config = SimConfig {
            world: WorldBounds::new(width, height),
            ..SimConfig::default()
        };
        init::create_world_core(config)
    }

    pub fn with_config(config: SimConfig) -> Self {
        init::create_world_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = SimConfig::from_json(json)?;
        Ok(Self::with_config(config))
    }

    /// Replace configuration, bounds and tick length, then repopulate
    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        let config = SimConfig::from_json(json)?;
        settings::apply_config(self, config);
        self.restart();
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn width(&self) -> f32 { self.bounds.width }

    pub fn height(&self) -> f32 { self.bounds.height }

    pub fn shape_count(&self) -> usize {
        self.bodies.shape_count()
    }

    pub fn shapes(&self) -> &[Shape] {
        self.bodies.shapes()
    }

    /// Number of logical ticks simulated so far
    pub fn tick(&self) -> u64 { self.tick }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    // === POPULATION ===

    /// Replace the collection with `count` fresh random shapes.
    /// Negative counts produce an empty collection.
    pub fn init_shapes(&mut self, count: i32) -> usize {
        init::repopulate(self, count.max(0) as u32)
    }

    /// Repopulate with the configured shape count
    pub fn restart(&mut self) -> usize {
        init::repopulate(self, self.config.shape_count)
    }

    /// Replace the collection with caller-built shapes
    pub fn set_shapes(&mut self, shapes: Vec<Shape>) {
        self.bodies.replace(shapes);
        self.bodies.recompute_all();
    }

    // === SETTINGS ===

    /// Desired count for the next `restart`. Negative values clamp to 0.
    pub fn set_shape_count(&mut self, count: i32) {
        settings::set_shape_count(self, count);
    }

    pub fn desired_shape_count(&self) -> u32 {
        self.config.shape_count
    }

    /// Resize the world. Takes effect from the next tick.
    pub fn set_world_size(&mut self, width: f32, height: f32) {
        settings::set_world_size(self, width, height);
    }

    pub fn set_seed(&mut self, seed: u64) {
        settings::set_seed(self, seed);
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === TICKING ===

    /// Run exactly one logical tick; the clock is not touched
    pub fn advance_one_tick(&mut self) {
        step::step(self);
    }

    /// One logical tick stamped with `tick_timestamp` (ms)
    pub fn update(&mut self, tick_timestamp: f64) {
        self.clock.last_tick = tick_timestamp;
        self.advance_one_tick();
    }

    /// Run `num_ticks` ticks back to back, advancing the clock before each
    pub fn queue_updates(&mut self, num_ticks: u32) {
        for _ in 0..num_ticks {
            let next = self.clock.last_tick + self.clock.tick_length;
            self.update(next);
        }
    }

    /// Host frame callback: run however many ticks fit since `last_tick`.
    /// Returns the number of ticks executed.
    pub fn run_frame(&mut self, t_frame: f64) -> u32 {
        step::run_frame(self, t_frame)
    }

    /// Anchor the clock at `now` (ms) without simulating
    pub fn reset_clock(&mut self, now: f64) {
        self.clock.last_tick = now;
    }

    // === RENDERING ===

    /// Refresh the flat render buffers from the current shape state
    pub fn extract_render_data(&mut self) -> usize {
        render_extract::extract(self)
    }

    pub fn render_buffers(&self) -> &RenderBuffers {
        &self.render
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
