use crate::rigid_body::{Aabb, Shape, Vec2};

/// Result of an AABB overlap test
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Axis-aligned unit normal pointing from `a` toward `b`
    pub normal: Vec2,
    /// Penetration along `normal`. Zero for boxes that only touch.
    pub depth: f32,
}

/// Minimum-translation contact between two boxes.
///
/// Touching boxes (shared edge or corner) report a contact of depth 0.
/// The axis with the smaller overlap wins; on a tie the Y axis is used.
pub fn aabb_contact(a: &Aabb, b: &Aabb) -> Option<Contact> {
    if a.max_x < b.min_x || a.min_x > b.max_x || a.max_y < b.min_y || a.min_y > b.max_y {
        return None;
    }

    let overlap_x = a.max_x.min(b.max_x) - a.min_x.max(b.min_x);
    let overlap_y = a.max_y.min(b.max_y) - a.min_y.max(b.min_y);

    if overlap_x < overlap_y {
        let nx = if a.min_x < b.min_x { 1.0 } else { -1.0 };
        Some(Contact { normal: Vec2::new(nx, 0.0), depth: overlap_x })
    } else {
        let ny = if a.min_y < b.min_y { 1.0 } else { -1.0 };
        Some(Contact { normal: Vec2::new(0.0, ny), depth: overlap_y })
    }
}

/// Overlap test on the shapes' current bounding boxes
#[inline]
pub fn test_overlap(a: &Shape, b: &Shape) -> Option<Contact> {
    aabb_contact(a.aabb(), b.aabb())
}
