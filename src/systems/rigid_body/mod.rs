//! Shape - A solid body that moves as a unit
//!
//! The body stores its pose (center, angle, size) and derives its
//! world-space vertices and bounding box from it. Derived geometry is
//! rebuilt from scratch on every recompute, never patched incrementally.

mod body;
mod geometry;
mod vec2;

pub use body::Shape;
pub use geometry::{compute_geometry, triangle_circumradius, Aabb};
pub use vec2::Vec2;
