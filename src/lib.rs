//! Shapefield Engine - fixed-timestep 2D shape collisions in WASM
//!
//! Circles, squares and triangles bounce around a rectangular world.
//! Detection is AABB-only, response is an equal-mass elastic impulse, and
//! the simulation advances in fixed ticks decoupled from the render rate.
//!
//! Architecture:
//! - core/        - Macros and utilities
//! - domain/      - Shape kinds, configuration
//! - systems/     - Geometry and the collision pipeline
//! - simulation/  - WorldCore orchestration + wasm facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

#[doc(hidden)]
pub use web_sys;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Shapefield engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::{SimConfig, WorldBounds};
pub use domain::shape::ShapeKind;
pub use rigid_body::{Aabb, Shape, Vec2};
pub use rigid_body_system::{Contact, RigidBodySystem};
pub use simulation::{init_shapes, tick_count_for_elapsed, World, WorldCore};

#[wasm_bindgen]
pub fn kind_circle() -> u8 { ShapeKind::Circle as u8 }
#[wasm_bindgen]
pub fn kind_square() -> u8 { ShapeKind::Square as u8 }
#[wasm_bindgen]
pub fn kind_triangle() -> u8 { ShapeKind::Triangle as u8 }
