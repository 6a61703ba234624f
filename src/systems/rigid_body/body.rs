use crate::domain::shape::{Color, ShapeKind, COLOR_WHITE};

use super::geometry::{compute_geometry, Aabb};
use super::vec2::Vec2;

/// Shape - a kinematic rigid body moving as a unit
#[derive(Clone, Debug)]
pub struct Shape {
    // === Physics State ===
    pub kind: ShapeKind,
    /// World position of the center
    pub pos: Vec2,
    /// Velocity vector (world units per second)
    pub velocity: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    /// Angular velocity (radians per second). Collisions never change it.
    pub angular_vel: f32,
    /// Radius for circles, half-side for squares, half reference side for triangles
    pub size: f32,

    /// Display only
    pub color: Color,

    // === Derived geometry ===
    // Written only by `recompute_geometry`.
    vertices: Vec<Vec2>,
    aabb: Aabb,
}

impl Shape {
    /// Create a shape at rest with geometry already computed
    pub fn new(kind: ShapeKind, x: f32, y: f32, size: f32) -> Self {
        let mut shape = Self {
            kind,
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            angle: 0.0,
            angular_vel: 0.0,
            size,
            color: COLOR_WHITE,
            vertices: Vec::with_capacity(kind.vertex_count()),
            aabb: Aabb::default(),
        };
        shape.recompute_geometry();
        shape
    }

    pub fn new_circle(x: f32, y: f32, radius: f32) -> Self {
        Self::new(ShapeKind::Circle, x, y, radius)
    }

    pub fn new_square(x: f32, y: f32, half_side: f32) -> Self {
        Self::new(ShapeKind::Square, x, y, half_side)
    }

    pub fn new_triangle(x: f32, y: f32, size: f32) -> Self {
        Self::new(ShapeKind::Triangle, x, y, size)
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.velocity = Vec2::new(vx, vy);
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self.recompute_geometry();
        self
    }

    pub fn with_angular_velocity(mut self, omega: f32) -> Self {
        self.angular_vel = omega;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Refresh vertices and AABB from the current pose
    #[inline]
    pub fn recompute_geometry(&mut self) {
        self.aabb = compute_geometry(self.kind, self.pos, self.angle, self.size, &mut self.vertices);
    }

    /// Advance pose by `dt` seconds. Geometry is stale until recomputed.
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.velocity * dt;
        self.angle += self.angular_vel * dt;
    }

    /// World-space vertices (empty for circles)
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }
}
