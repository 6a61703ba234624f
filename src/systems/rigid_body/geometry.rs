use std::f32::consts::TAU;

use crate::domain::shape::ShapeKind;

use super::vec2::Vec2;

/// Axis-aligned bounding box in world coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Aabb {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Square box of half-extent `r` around `center`
    pub fn around(center: Vec2, r: f32) -> Self {
        Self {
            min_x: center.x - r,
            min_y: center.y - r,
            max_x: center.x + r,
            max_y: center.y + r,
        }
    }

    /// Component-wise min/max over a point set.
    /// An empty set yields an inverted (infinite) box.
    pub fn from_points(points: &[Vec2]) -> Self {
        let mut aabb = Self {
            min_x: f32::INFINITY,
            min_y: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            max_y: f32::NEG_INFINITY,
        };
        for p in points {
            aabb.min_x = aabb.min_x.min(p.x);
            aabb.min_y = aabb.min_y.min(p.y);
            aabb.max_x = aabb.max_x.max(p.x);
            aabb.max_y = aabb.max_y.max(p.y);
        }
        aabb
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }
}

/// Square corners in local space, counter-clockwise from (+s, +s)
const SQUARE_CORNERS: [(f32, f32); 4] = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

/// Distance from center to each triangle vertex.
/// `size` is half of the reference side, so R = 2*size / sqrt(3).
#[inline]
pub fn triangle_circumradius(size: f32) -> f32 {
    (2.0 * size) / 3.0f32.sqrt()
}

/// Rebuild `vertices` and return the AABB for a shape pose.
///
/// `vertices` is cleared and refilled every call; circles leave it empty.
pub fn compute_geometry(
    kind: ShapeKind,
    pos: Vec2,
    angle: f32,
    size: f32,
    vertices: &mut Vec<Vec2>,
) -> Aabb {
    vertices.clear();

    match kind {
        ShapeKind::Circle => Aabb::around(pos, size),
        ShapeKind::Triangle => {
            let radius = triangle_circumradius(size);
            for i in 0..3 {
                let ang = angle + i as f32 * TAU / 3.0;
                vertices.push(pos + Vec2::from_angle(ang) * radius);
            }
            Aabb::from_points(vertices)
        }
        ShapeKind::Square => {
            let (sin, cos) = angle.sin_cos();
            for (lx, ly) in SQUARE_CORNERS {
                let local = Vec2::new(lx * size, ly * size);
                vertices.push(pos + local.rotate(sin, cos));
            }
            Aabb::from_points(vertices)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_box_is_center_plus_radius() {
        let mut verts = Vec::new();
        let aabb = compute_geometry(ShapeKind::Circle, Vec2::new(50.0, 50.0), 1.3, 10.0, &mut verts);
        assert_eq!(aabb, Aabb::new(40.0, 40.0, 60.0, 60.0));
        assert!(verts.is_empty());
    }

    #[test]
    fn axis_aligned_square_box_matches_half_side() {
        let mut verts = Vec::new();
        let aabb = compute_geometry(ShapeKind::Square, Vec2::new(15.0, 0.0), 0.0, 10.0, &mut verts);
        assert_eq!(verts.len(), 4);
        assert_eq!(verts[0], Vec2::new(25.0, 10.0));
        assert_eq!(verts[2], Vec2::new(5.0, -10.0));
        assert_eq!(aabb, Aabb::new(5.0, -10.0, 25.0, 10.0));
    }

    #[test]
    fn rotated_square_box_grows() {
        let mut verts = Vec::new();
        let aabb = compute_geometry(
            ShapeKind::Square,
            Vec2::zero(),
            std::f32::consts::FRAC_PI_4,
            10.0,
            &mut verts,
        );
        let expected = 10.0 * 2.0f32.sqrt();
        assert!((aabb.max_x - expected).abs() < 1e-4);
        assert!((aabb.min_y + expected).abs() < 1e-4);
    }

    #[test]
    fn triangle_vertices_sit_on_circumcircle() {
        let mut verts = Vec::new();
        let center = Vec2::new(3.0, -2.0);
        let aabb = compute_geometry(ShapeKind::Triangle, center, 0.0, 10.0, &mut verts);
        assert_eq!(verts.len(), 3);

        let r = triangle_circumradius(10.0);
        for v in &verts {
            assert!(((*v - center).length() - r).abs() < 1e-4);
        }
        // First vertex points along +x at angle 0.
        assert!((aabb.max_x - (center.x + r)).abs() < 1e-4);
    }

    #[test]
    fn polygon_box_contains_every_vertex() {
        let mut verts = Vec::new();
        for kind in [ShapeKind::Square, ShapeKind::Triangle] {
            let aabb = compute_geometry(kind, Vec2::new(7.0, 9.0), 123.456, 4.0, &mut verts);
            for v in &verts {
                assert!(v.x >= aabb.min_x && v.x <= aabb.max_x);
                assert!(v.y >= aabb.min_y && v.y <= aabb.max_y);
            }
        }
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        let a = compute_geometry(ShapeKind::Triangle, Vec2::new(1.0, 2.0), 0.7, 5.0, &mut first);
        let b = compute_geometry(ShapeKind::Triangle, Vec2::new(1.0, 2.0), 0.7, 5.0, &mut second);
        assert_eq!(a, b);
        assert_eq!(first, second);
    }
}
