//! Infinite horizontal plane surface

use crate::core::types::Vec3;

use super::{SurfaceHit, SurfaceQuery};

/// Infinite plane at `y = height` facing +Y.
///
/// The simplest possible growth substrate; mostly useful as a test
/// surface and for benchmarking the engine without noise evaluation.
#[derive(Clone, Copy, Debug)]
pub struct PlaneSurface {
    pub height: f32,
}

impl PlaneSurface {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl SurfaceQuery for PlaneSurface {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<SurfaceHit> {
        if direction.y.abs() < 1e-8 {
            return None;
        }
        let t = (self.height - origin.y) / direction.y;
        if t < 0.0 || t > max_distance {
            return None;
        }
        let mut point = origin + direction * t;
        point.y = self.height;
        Some(SurfaceHit {
            point,
            normal: Vec3::Y,
            distance: t,
        })
    }

    fn linecast(&self, from: Vec3, to: Vec3) -> bool {
        // Obstructed only when the segment strictly crosses the plane;
        // an endpoint sitting on it does not count.
        (from.y - self.height) * (to.y - self.height) < 0.0
    }
}
