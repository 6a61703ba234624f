use crate::domain::config::WorldBounds;
use crate::rigid_body::Shape;

/// Push a shape back inside the world and reflect velocity on contact.
///
/// Works on the current AABB; geometry is stale afterwards. The min side of
/// an axis is checked first, so a shape wider than the world is only ever
/// pushed toward +x (or +y).
///
/// Returns `true` if the shape was moved.
pub fn contain_in_world(shape: &mut Shape, bounds: &WorldBounds) -> bool {
    let aabb = *shape.aabb();

    let dx = if aabb.min_x < 0.0 {
        -aabb.min_x
    } else if aabb.max_x > bounds.width {
        bounds.width - aabb.max_x
    } else {
        0.0
    };

    let dy = if aabb.min_y < 0.0 {
        -aabb.min_y
    } else if aabb.max_y > bounds.height {
        bounds.height - aabb.max_y
    } else {
        0.0
    };

    if dx != 0.0 {
        shape.pos.x += dx;
        shape.velocity.x = -shape.velocity.x;
    }
    if dy != 0.0 {
        shape.pos.y += dy;
        shape.velocity.y = -shape.velocity.y;
    }

    dx != 0.0 || dy != 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::Vec2;

    fn world() -> WorldBounds {
        WorldBounds::new(100.0, 80.0)
    }

    #[test]
    fn left_wall_pushes_right_and_reflects() {
        let mut s = Shape::new_circle(4.0, 40.0, 10.0).with_velocity(-30.0, 5.0);
        assert!(contain_in_world(&mut s, &world()));
        // min_x was -6
        assert_eq!(s.pos, Vec2::new(10.0, 40.0));
        assert_eq!(s.velocity, Vec2::new(30.0, 5.0));
    }

    #[test]
    fn bottom_wall_pushes_up_and_reflects() {
        let mut s = Shape::new_square(50.0, 75.0, 10.0).with_velocity(1.0, 20.0);
        assert!(contain_in_world(&mut s, &world()));
        assert_eq!(s.pos, Vec2::new(50.0, 70.0));
        assert_eq!(s.velocity, Vec2::new(1.0, -20.0));
    }

    #[test]
    fn corner_reflects_both_axes_in_one_call() {
        let mut s = Shape::new_circle(95.0, 2.0, 10.0).with_velocity(12.0, -7.0);
        assert!(contain_in_world(&mut s, &world()));
        assert_eq!(s.pos, Vec2::new(90.0, 10.0));
        assert_eq!(s.velocity, Vec2::new(-12.0, 7.0));
    }

    #[test]
    fn inside_shape_is_untouched() {
        let mut s = Shape::new_triangle(50.0, 40.0, 4.0).with_velocity(3.0, 3.0);
        assert!(!contain_in_world(&mut s, &world()));
        assert_eq!(s.pos, Vec2::new(50.0, 40.0));
        assert_eq!(s.velocity, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn exact_touch_is_not_a_violation() {
        let mut s = Shape::new_circle(10.0, 70.0, 10.0).with_velocity(-1.0, 1.0);
        assert!(!contain_in_world(&mut s, &world()));
        assert_eq!(s.velocity, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn oversized_shape_only_gets_min_side_correction() {
        // 120 wide in a 100 wide world: violates both x walls.
        let mut s = Shape::new_circle(50.0, 40.0, 60.0).with_velocity(5.0, 0.0);
        contain_in_world(&mut s, &world());
        assert_eq!(s.pos.x, 60.0);
        assert_eq!(s.velocity.x, -5.0);
    }
}
