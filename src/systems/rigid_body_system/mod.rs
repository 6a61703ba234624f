//! RigidBodySystem - AABB collision pipeline for kinematic shapes
//!
//! Detection is bounding-box only, for every shape kind including rotated
//! polygons. Response is an equal-mass elastic impulse along the contact
//! normal plus a half/half positional split. Walls reflect velocity.
//!
//! Per tick:
//! - integrate pose, recompute geometry
//! - `CORRECTION_PASSES` x (pairs in ascending order, walls, recompute)

mod collision;
mod resolve;
mod system;
mod walls;

pub use collision::{aabb_contact, test_overlap, Contact};
pub use resolve::resolve;
pub use system::{RigidBodySystem, TickCounters, CORRECTION_PASSES};
pub use walls::contain_in_world;
