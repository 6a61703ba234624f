//! Simulation configuration
//!
//! Loaded from a JSON document (see `content/shapes.json`). Every key is
//! optional; missing keys fall back to [`SimConfig::default`]. The raw
//! document is validated and converted into the runtime [`SimConfig`].

use serde::{Deserialize, Serialize};

use super::shape::{format_hex_color, parse_hex_color, Color};

pub const DEFAULT_SHAPE_COUNT: u32 = 900;
pub const DEFAULT_SHAPE_SIZE: f32 = 4.0;
pub const DEFAULT_MIN_SPEED: f32 = 40.0;
pub const DEFAULT_MAX_SPEED: f32 = 160.0;
pub const DEFAULT_MIN_OMEGA: f32 = -3.0;
pub const DEFAULT_MAX_OMEGA: f32 = 3.0;
pub const DEFAULT_WORLD_WIDTH: f32 = 1200.0;
pub const DEFAULT_WORLD_HEIGHT: f32 = 800.0;
pub const DEFAULT_TICK_LENGTH_MS: f64 = 15.0;
pub const DEFAULT_SEED: u64 = 12345;

pub const DEFAULT_PALETTE: [Color; 10] = [
    0xf72585, 0xb5179e, 0x7209b7, 0x560bad, 0x480ca8, 0x3a0ca3, 0x3f37c9, 0x4361ee, 0x4895ef,
    0x4cc9f0,
];

/// Rectangular world the shapes live in. Origin is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(DEFAULT_WORLD_WIDTH, DEFAULT_WORLD_HEIGHT)
    }
}

/// Runtime configuration, read by the population initializer and the clock
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub shape_count: u32,
    pub shape_size: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_omega: f32,
    pub max_omega: f32,
    pub palette: Vec<Color>,
    pub world: WorldBounds,
    pub tick_length_ms: f64,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            shape_count: DEFAULT_SHAPE_COUNT,
            shape_size: DEFAULT_SHAPE_SIZE,
            min_speed: DEFAULT_MIN_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            min_omega: DEFAULT_MIN_OMEGA,
            max_omega: DEFAULT_MAX_OMEGA,
            palette: DEFAULT_PALETTE.to_vec(),
            world: WorldBounds::default(),
            tick_length_ms: DEFAULT_TICK_LENGTH_MS,
            seed: DEFAULT_SEED,
        }
    }
}

/// On-disk / over-the-wire form of [`SimConfig`]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
struct ConfigDoc {
    shape_count: u32,
    shape_size: f32,
    min_speed: f32,
    max_speed: f32,
    min_omega: f32,
    max_omega: f32,
    colors: Vec<String>,
    world: WorldBounds,
    tick_length_ms: f64,
    seed: u64,
}

impl Default for ConfigDoc {
    fn default() -> Self {
        SimConfig::default().to_doc()
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let doc: ConfigDoc = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_doc(doc)
    }

    pub fn to_json(&self) -> String {
        // ConfigDoc holds only plain numbers and strings.
        serde_json::to_string(&self.to_doc()).unwrap_or_default()
    }

    fn from_doc(doc: ConfigDoc) -> Result<Self, String> {
        let palette = doc
            .colors
            .iter()
            .map(|c| parse_hex_color(c))
            .collect::<Result<Vec<_>, _>>()?;

        let config = Self {
            shape_count: doc.shape_count,
            shape_size: doc.shape_size,
            min_speed: doc.min_speed,
            max_speed: doc.max_speed,
            min_omega: doc.min_omega,
            max_omega: doc.max_omega,
            palette,
            world: doc.world,
            tick_length_ms: doc.tick_length_ms,
            seed: doc.seed,
        };
        config.validate()?;
        Ok(config)
    }

    fn to_doc(&self) -> ConfigDoc {
        ConfigDoc {
            shape_count: self.shape_count,
            shape_size: self.shape_size,
            min_speed: self.min_speed,
            max_speed: self.max_speed,
            min_omega: self.min_omega,
            max_omega: self.max_omega,
            colors: self.palette.iter().map(|c| format_hex_color(*c)).collect(),
            world: self.world,
            tick_length_ms: self.tick_length_ms,
            seed: self.seed,
        }
    }

    /// Check the external-interface constraints.
    ///
    /// Configs built in code skip this; the initializer tolerates any values.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.shape_size > 0.0) {
            return Err(format!("shape_size must be positive, got {}", self.shape_size));
        }
        if !(self.min_speed <= self.max_speed) {
            return Err(format!(
                "min_speed ({}) must not exceed max_speed ({})",
                self.min_speed, self.max_speed
            ));
        }
        if !(self.min_omega <= self.max_omega) {
            return Err(format!(
                "min_omega ({}) must not exceed max_omega ({})",
                self.min_omega, self.max_omega
            ));
        }
        if self.palette.is_empty() {
            return Err("colors must not be empty".to_string());
        }
        if !(self.world.width > 0.0 && self.world.height > 0.0) {
            return Err(format!(
                "world must have positive size, got {}x{}",
                self.world.width, self.world.height
            ));
        }
        if !(self.tick_length_ms > 0.0) {
            return Err(format!("tick_length_ms must be positive, got {}", self.tick_length_ms));
        }
        Ok(())
    }
}
