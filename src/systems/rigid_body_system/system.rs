use crate::domain::config::WorldBounds;
use crate::rigid_body::Shape;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::collision::test_overlap;
use super::resolve::resolve;
use super::walls::contain_in_world;

/// Correction passes per tick. Changing it changes settling behavior.
pub const CORRECTION_PASSES: usize = 2;

/// Below this many shapes the rayon split costs more than it saves
#[cfg(feature = "parallel")]
const PARALLEL_MIN_SHAPES: usize = 256;

/// Counters for one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickCounters {
    pub pairs_tested: u32,
    pub contacts: u32,
    pub impulses: u32,
    pub wall_hits: u32,
}

/// Owns every shape in the simulation
pub struct RigidBodySystem {
    shapes: Vec<Shape>,
}

impl RigidBodySystem {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Replace the whole collection (restart)
    pub fn replace(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Recompute vertices and AABB for every shape
    pub fn recompute_all(&mut self) {
        #[cfg(feature = "parallel")]
        {
            if self.shapes.len() >= PARALLEL_MIN_SHAPES {
                self.shapes.par_iter_mut().for_each(|s| s.recompute_geometry());
                return;
            }
        }
        for s in self.shapes.iter_mut() {
            s.recompute_geometry();
        }
    }

    fn integrate_all(&mut self, dt: f32) {
        #[cfg(feature = "parallel")]
        {
            if self.shapes.len() >= PARALLEL_MIN_SHAPES {
                self.shapes.par_iter_mut().for_each(|s| s.integrate(dt));
                return;
            }
        }
        for s in self.shapes.iter_mut() {
            s.integrate(dt);
        }
    }

    /// Test and resolve every unordered pair in ascending (i, j) order.
    ///
    /// Bounding boxes are not refreshed inside the sweep: a pair resolved
    /// early moves positions that later pairs still see at their old AABB.
    fn resolve_pairs(&mut self, counters: &mut TickCounters) {
        let n = self.shapes.len();
        for i in 0..n {
            let (head, tail) = self.shapes.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                counters.pairs_tested = counters.pairs_tested.saturating_add(1);
                if let Some(contact) = test_overlap(a, b) {
                    counters.contacts = counters.contacts.saturating_add(1);
                    if resolve(a, b, contact) {
                        counters.impulses = counters.impulses.saturating_add(1);
                    }
                }
            }
        }
    }

    fn contain_all(&mut self, bounds: &WorldBounds, counters: &mut TickCounters) {
        for s in self.shapes.iter_mut() {
            if contain_in_world(s, bounds) {
                counters.wall_hits = counters.wall_hits.saturating_add(1);
            }
        }
    }

    /// Advance every shape by one logical tick of `dt` seconds.
    ///
    /// Phase order: integrate, recompute, then `CORRECTION_PASSES` rounds of
    /// pairs, walls, recompute. Each phase finishes before the next starts.
    pub fn update(&mut self, dt: f32, bounds: &WorldBounds) -> TickCounters {
        let mut counters = TickCounters::default();

        self.integrate_all(dt);
        self.recompute_all();

        for _ in 0..CORRECTION_PASSES {
            self.resolve_pairs(&mut counters);
            self.contain_all(bounds, &mut counters);
            self.recompute_all();
        }

        counters
    }
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new()
    }
}
