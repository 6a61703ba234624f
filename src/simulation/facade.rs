use wasm_bindgen::prelude::*;

use super::clock::tick_count_for_elapsed;
use super::perf_stats::PerfStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world with default configuration and given bounds
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    /// Create a world from a JSON config document
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn shape_count(&self) -> usize { self.core.shape_count() }

    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u64 { self.core.tick() }

    #[wasm_bindgen(getter)]
    pub fn last_tick(&self) -> f64 { self.core.clock().last_tick }

    #[wasm_bindgen(getter)]
    pub fn tick_length(&self) -> f64 { self.core.clock().tick_length }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === POPULATION API ===

    /// Replace all shapes with `count` random ones; returns the new count
    pub fn init_shapes(&mut self, count: i32) -> usize {
        self.core.init_shapes(count)
    }

    /// Shape count used by `restart` (slider value)
    pub fn set_shape_count(&mut self, count: i32) {
        self.core.set_shape_count(count);
    }

    pub fn restart(&mut self) -> usize {
        self.core.restart()
    }

    pub fn set_world_size(&mut self, width: f32, height: f32) {
        self.core.set_world_size(width, height);
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.core.set_seed(seed);
    }

    // === CLOCK API ===

    pub fn reset_clock(&mut self, now: f64) {
        self.core.reset_clock(now);
    }

    /// Advance one logical tick stamped `tick_timestamp` (ms)
    pub fn update(&mut self, tick_timestamp: f64) {
        self.core.update(tick_timestamp);
    }

    pub fn queue_updates(&mut self, num_ticks: u32) {
        self.core.queue_updates(num_ticks);
    }

    pub fn advance_one_tick(&mut self) {
        self.core.advance_one_tick();
    }

    /// requestAnimationFrame hook; returns ticks executed
    pub fn run_frame(&mut self, t_frame: f64) -> u32 {
        self.core.run_frame(t_frame)
    }

    #[wasm_bindgen(js_name = tickCountForElapsed)]
    pub fn tick_count_for_elapsed(t_frame: f64, last_tick: f64, tick_length: f64) -> u32 {
        tick_count_for_elapsed(t_frame, last_tick, tick_length)
    }

    // === RENDER API ===

    /// Refresh render buffers; returns shape count. Pointers below stay
    /// valid until the next call that changes the shape count.
    pub fn extract_render_data(&mut self) -> usize {
        self.core.extract_render_data()
    }

    pub fn kinds_ptr(&self) -> *const u8 {
        self.core.render_buffers().kinds.as_ptr()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.core.render_buffers().colors.as_ptr()
    }

    pub fn vertex_counts_ptr(&self) -> *const u8 {
        self.core.render_buffers().vertex_counts.as_ptr()
    }

    pub fn transforms_ptr(&self) -> *const f32 {
        self.core.render_buffers().transforms.as_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.core.render_buffers().transforms.len()
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.core.render_buffers().vertices.as_ptr()
    }

    pub fn vertices_len(&self) -> usize {
        self.core.render_buffers().vertices.len()
    }
}
