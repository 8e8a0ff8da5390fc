//! Path-building growth engine
//!
//! Grows one branch across a surface:
//! 1. Seeding: an unbounded raycast plants the first waypoint
//! 2. Extending: a fixed number of iterations, each perturbing the wander
//!    direction and probing the surface through a 4-stage fallback
//! 3. Obstructed extensions insert a surface-snapped midpoint before the
//!    endpoint
//!
//! A stalled iteration (all four stages miss) is spent without appending,
//! so a branch can finish shorter than configured; midpoint insertion can
//! make it longer.

use glam::Vec3;

use crate::core::rng::GrowthRng;
use crate::growth::config::GrowthConfig;
use crate::growth::direction;
use crate::growth::path::{GrowthPath, OrientedPoint};
use crate::math::Ray;
use crate::surface::{SurfaceHit, SurfaceQuery};

/// Grows a single path over a [`SurfaceQuery`].
pub struct GrowthEngine<'a, S: SurfaceQuery> {
    surface: &'a S,
    config: &'a GrowthConfig,
}

impl<'a, S: SurfaceQuery> GrowthEngine<'a, S> {
    pub fn new(surface: &'a S, config: &'a GrowthConfig) -> Self {
        Self { surface, config }
    }

    /// Grow a path from a seed ray.
    ///
    /// Returns an empty path when the seed ray never finds the surface.
    /// `segment_count` bounds the extension iterations, not the final
    /// waypoint count.
    pub fn grow(&self, seed: Ray, rng: &mut GrowthRng) -> GrowthPath {
        let mut path = GrowthPath::new();

        let Some(hit) = self.surface.raycast(seed.origin, seed.direction, f32::INFINITY) else {
            log::debug!("seed ray missed, no branch");
            return path;
        };

        let mut tail = OrientedPoint::new(
            hit.point + hit.normal * self.config.surface_offset,
            hit.normal,
        );
        path.push(tail);

        let mut dir = direction::sample_full_circle(tail.normal, rng);

        for _ in 1..self.config.segment_count {
            dir = direction::perturb(dir, tail.normal, self.config.direction_change_range, rng);
            if let Some(new_tail) = self.extend(&mut path, tail, dir) {
                tail = new_tail;
            }
        }

        log::debug!("grew branch with {} waypoint(s)", path.len());
        path
    }

    /// One extension attempt: probe with the fallback stages and append
    /// the outcome. None when every stage missed (a stall).
    fn extend(&self, path: &mut GrowthPath, tail: OrientedPoint, dir: Vec3) -> Option<OrientedPoint> {
        let hit = self.probe(tail, dir)?;
        Some(self.attach(path, tail, hit))
    }

    /// Ordered fallback raycasts, each reaching one segment length:
    /// 1. out along the tail normal (keep climbing the same face)
    /// 2. along the wander direction from half a step above the tail
    /// 3. back toward the surface, one step ahead (wrap a convex edge)
    /// 4. reversed wander direction from one step below (last resort)
    fn probe(&self, tail: OrientedPoint, dir: Vec3) -> Option<SurfaceHit> {
        let len = self.config.segment_length;

        if let Some(hit) = self.surface.raycast(tail.position, tail.normal, len) {
            return Some(hit);
        }

        let origin = tail.position + tail.normal * (len / 2.0);
        if let Some(hit) = self.surface.raycast(origin, dir, len) {
            return Some(hit);
        }

        let origin = origin + dir * len;
        if let Some(hit) = self.surface.raycast(origin, -tail.normal, len) {
            return Some(hit);
        }

        let origin = origin - tail.normal * len;
        self.surface.raycast(origin, -dir, len)
    }

    /// Append the hit as a new waypoint carrying the tail/hit averaged
    /// normal; exactly opposed normals average to zero and fall back to
    /// the raw hit normal. When the direct line from the tail to the hit
    /// is blocked, insert a surface-snapped midpoint first so the ribbon
    /// hugs the fold instead of cutting through it.
    fn attach(&self, path: &mut GrowthPath, tail: OrientedPoint, hit: SurfaceHit) -> OrientedPoint {
        let normal = ((tail.normal + hit.normal) / 2.0).normalize_or(hit.normal);

        if self.surface.linecast(tail.position, hit.point) {
            let middle = self.snap_midpoint(tail.position, hit.point, normal);
            path.push(OrientedPoint::new(middle, normal));
        }

        let node = OrientedPoint::new(
            hit.point + hit.normal * self.config.surface_offset,
            normal,
        );
        path.push(node);
        node
    }

    /// Surface-snap the midpoint of `a -> b`: probe back toward the
    /// surface from one unit above it; if nothing is there, lift the
    /// midpoint by half the span instead.
    fn snap_midpoint(&self, a: Vec3, b: Vec3, normal: Vec3) -> Vec3 {
        let middle = (a + b) / 2.0;
        match self.surface.raycast(middle + normal, -normal, self.config.segment_length) {
            Some(hit) => hit.point + normal * self.config.surface_offset,
            None => middle + normal * (a.distance(b) / 2.0),
        }
    }
}
