//! Surface queries for growth
//!
//! The growth engine sees its environment only through [`SurfaceQuery`];
//! what geometry backs it is the host's business. Two reference
//! implementations ship with the crate for tests and the demo utility:
//! an analytic infinite plane and a noise heightfield.

pub mod heightfield;
pub mod plane;

pub use heightfield::{HeightfieldParams, HeightfieldSurface};
pub use plane::PlaneSurface;

use crate::core::types::Vec3;

/// Result of a successful ray query against a surface
#[derive(Clone, Copy, Debug)]
pub struct SurfaceHit {
    /// World-space point where the ray met the surface
    pub point: Vec3,
    /// Unit surface normal at the hit point
    pub normal: Vec3,
    /// Distance from the ray origin to the hit point
    pub distance: f32,
}

/// Ray and line-of-sight queries against a 3D environment
pub trait SurfaceQuery {
    /// Cast a ray and return the nearest hit within `max_distance`, if any.
    ///
    /// `direction` is expected to be unit length. Pass `f32::INFINITY`
    /// for an unbounded cast; implementations may clamp the traced span.
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<SurfaceHit>;

    /// Line-of-sight query: true when geometry lies strictly between
    /// `from` and `to`. An endpoint resting exactly on a surface is not
    /// an obstruction.
    fn linecast(&self, from: Vec3, to: Vec3) -> bool;
}
