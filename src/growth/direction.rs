//! Tangent-plane direction sampling
//!
//! Growth directions always live in the tangent plane of the current
//! surface normal: a branch starts with a uniformly random heading and
//! then wanders by bounded perturbations, one per extension step.

use crate::core::rng::GrowthRng;
use crate::core::types::{Quat, Vec3};

/// Pick a tangent for `normal` by crossing it against two fixed world
/// axes and keeping the larger result. The axes are non-parallel to each
/// other, so at least one cross product is nonzero for any unit normal.
fn tangent_axis(normal: Vec3) -> Vec3 {
    let forward_tangent = normal.cross(Vec3::Z);
    let up_tangent = normal.cross(Vec3::Y);
    if forward_tangent.length_squared() > up_tangent.length_squared() {
        forward_tangent
    } else {
        up_tangent
    }
}

/// Sample a uniformly random unit direction in the tangent plane of
/// `normal`.
pub fn sample_full_circle(normal: Vec3, rng: &mut GrowthRng) -> Vec3 {
    let tangent = tangent_axis(normal);
    let angle = rng.range(0.0, 360.0).to_radians();
    (Quat::from_axis_angle(normal, angle) * tangent).normalize()
}

/// Rotate `direction` about `normal` by a uniformly random angle within
/// `max_delta_degrees` either way, re-normalized.
pub fn perturb(direction: Vec3, normal: Vec3, max_delta_degrees: f32, rng: &mut GrowthRng) -> Vec3 {
    let angle = rng.range(-max_delta_degrees, max_delta_degrees).to_radians();
    (Quat::from_axis_angle(normal, angle) * direction).normalize()
}
