//! Domain types shared by the systems and the simulation facade

pub mod config;
pub mod shape;

pub use config::{SimConfig, WorldBounds};
pub use shape::{Color, ShapeKind};
