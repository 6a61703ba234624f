use wasm_bindgen::prelude::*;

use crate::rigid_body_system::TickCounters;

/// Snapshot of the most recent tick / frame. All zeros while perf is off.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) frame_ms: f64,
    pub(super) ticks_last_frame: u32,
    pub(super) pairs_tested: u32,
    pub(super) contacts: u32,
    pub(super) impulses: u32,
    pub(super) wall_hits: u32,
    pub(super) shape_count: u32,
    pub(super) tick: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(super) fn record_tick(&mut self, counters: TickCounters, tick_ms: f64, shape_count: usize, tick: u64) {
        self.tick_ms = tick_ms;
        self.pairs_tested = counters.pairs_tested;
        self.contacts = counters.contacts;
        self.impulses = counters.impulses;
        self.wall_hits = counters.wall_hits;
        self.shape_count = shape_count as u32;
        self.tick = tick;
    }

    pub(super) fn record_frame(&mut self, ticks: u32, frame_ms: f64) {
        self.ticks_last_frame = ticks;
        self.frame_ms = frame_ms;
    }
}

#[wasm_bindgen]
impl PerfStats {
    /// Wall time of the last tick
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    /// Wall time of the last `run_frame`, all ticks included
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    pub fn ticks_last_frame(&self) -> u32 { self.ticks_last_frame }
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    pub fn contacts(&self) -> u32 { self.contacts }
    pub fn impulses(&self) -> u32 { self.impulses }
    pub fn wall_hits(&self) -> u32 { self.wall_hits }
    pub fn shape_count(&self) -> u32 { self.shape_count }
    pub fn tick(&self) -> u64 { self.tick }
}
