use crate::domain::config::DEFAULT_TICK_LENGTH_MS;

/// Fixed-timestep clock. All times in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickClock {
    /// Timestamp of the last simulated tick
    pub last_tick: f64,
    /// Logical duration of one tick
    pub tick_length: f64,
}

impl TickClock {
    pub fn new(last_tick: f64, tick_length: f64) -> Self {
        Self { last_tick, tick_length }
    }

    /// Seconds of simulated time per tick
    #[inline]
    pub fn dt(&self) -> f32 {
        (self.tick_length / 1000.0) as f32
    }

    /// Ticks owed at frame time `t_frame`
    pub fn ticks_due(&self, t_frame: f64) -> u32 {
        tick_count_for_elapsed(t_frame, self.last_tick, self.tick_length)
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_TICK_LENGTH_MS)
    }
}

/// How many whole ticks fit between `last_tick` and `t_frame`.
///
/// Nothing runs until the frame is strictly past one full tick; after that
/// the count is `floor(elapsed / tick_length)`. Non-positive or NaN tick
/// lengths yield 0.
pub fn tick_count_for_elapsed(t_frame: f64, last_tick: f64, tick_length: f64) -> u32 {
    if !(tick_length > 0.0) {
        return 0;
    }
    if t_frame > last_tick + tick_length {
        let ticks = ((t_frame - last_tick) / tick_length).floor();
        // `as` saturates on overflow
        ticks as u32
    } else {
        0
    }
}
