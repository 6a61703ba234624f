use crate::rigid_body::Shape;

use super::collision::Contact;

/// Separate a colliding pair and exchange their normal velocities.
///
/// Positional correction splits `depth` evenly between the two bodies.
/// The impulse is perfectly elastic for equal masses; tangential velocity,
/// angle and angular velocity are untouched. Pairs already moving apart
/// along the normal keep their velocities.
///
/// Returns `true` if an impulse was applied.
pub fn resolve(a: &mut Shape, b: &mut Shape, contact: Contact) -> bool {
    let Contact { normal, depth } = contact;

    let correction = normal * (depth * 0.5);
    a.pos -= correction;
    b.pos += correction;

    let v_rel = (b.velocity - a.velocity).dot(normal);
    if v_rel > 0.0 {
        return false;
    }

    let impulse = -v_rel;
    a.velocity -= normal * impulse;
    b.velocity += normal * impulse;
    true
}
