//! Noise-heightfield surface for demos and integration tests

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::core::types::Vec3;

use super::{SurfaceHit, SurfaceQuery};

/// Ray-march step while looking for a surface crossing
const MARCH_STEP: f32 = 0.05;

/// Bisection passes used to tighten a bracketed crossing
const BISECT_ITERS: u32 = 16;

/// Clearance below which an interior line sample counts as buried
const LINE_TOLERANCE: f32 = 1e-3;

/// Parameters controlling the heightfield
#[derive(Clone, Debug)]
pub struct HeightfieldParams {
    pub seed: u32,
    pub scale: f32,        // Horizontal scale (larger = smoother)
    pub height_scale: f32, // Vertical scale (max height)
    pub octaves: u32,      // FBM octaves (detail levels)
    pub persistence: f32,  // FBM persistence (0.5 typical)
    pub lacunarity: f32,   // FBM lacunarity (2.0 typical)
    /// Cap on how far an unbounded raycast is traced
    pub max_trace: f32,
}

impl Default for HeightfieldParams {
    fn default() -> Self {
        Self {
            seed: 12345,
            scale: 40.0,
            height_scale: 8.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            max_trace: 256.0,
        }
    }
}

/// Heightfield surface backed by fractal Brownian motion (FBM) noise.
///
/// Rays are resolved by fixed-step marching with bisection refinement,
/// so hits carry a small positional tolerance. Rays starting below the
/// terrain report no hit.
pub struct HeightfieldSurface {
    params: HeightfieldParams,
    noise: Fbm<Perlin>,
}

impl HeightfieldSurface {
    /// Create a new heightfield with the given parameters
    pub fn new(params: HeightfieldParams) -> Self {
        let noise = Fbm::<Perlin>::new(params.seed)
            .set_octaves(params.octaves as usize)
            .set_persistence(params.persistence as f64)
            .set_lacunarity(params.lacunarity as f64);

        Self { params, noise }
    }

    /// Get heightfield parameters
    pub fn params(&self) -> &HeightfieldParams {
        &self.params
    }

    /// Terrain height at world position (x, z)
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let nx = (x / self.params.scale) as f64;
        let nz = (z / self.params.scale) as f64;

        // Noise value in [-1, 1], mapped to [0, height_scale]
        let noise_value = self.noise.get([nx, nz]);
        let normalized = (noise_value + 1.0) / 2.0;
        (normalized * self.params.height_scale as f64) as f32
    }

    /// Surface normal at (x, z) from central height differences
    pub fn normal_at(&self, x: f32, z: f32) -> Vec3 {
        let eps = 0.05;
        let dh_dx = (self.height_at(x + eps, z) - self.height_at(x - eps, z)) / (2.0 * eps);
        let dh_dz = (self.height_at(x, z + eps) - self.height_at(x, z - eps)) / (2.0 * eps);
        Vec3::new(-dh_dx, 1.0, -dh_dz).normalize()
    }

    /// Signed height of `p` above the terrain
    fn clearance(&self, p: Vec3) -> f32 {
        p.y - self.height_at(p.x, p.z)
    }
}

impl SurfaceQuery for HeightfieldSurface {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<SurfaceHit> {
        let span = max_distance.min(self.params.max_trace);
        if span <= 0.0 || self.clearance(origin) < 0.0 {
            return None;
        }

        let mut t_prev = 0.0_f32;
        let mut t = MARCH_STEP.min(span);
        loop {
            if self.clearance(origin + direction * t) <= 0.0 {
                // Crossing bracketed in [t_prev, t]; bisect it down
                let (mut lo, mut hi) = (t_prev, t);
                for _ in 0..BISECT_ITERS {
                    let mid = 0.5 * (lo + hi);
                    if self.clearance(origin + direction * mid) <= 0.0 {
                        hi = mid;
                    } else {
                        lo = mid;
                    }
                }

                let mut point = origin + direction * hi;
                point.y = self.height_at(point.x, point.z);
                return Some(SurfaceHit {
                    point,
                    normal: self.normal_at(point.x, point.z),
                    distance: hi,
                });
            }
            if t >= span {
                return None;
            }
            t_prev = t;
            t = (t + MARCH_STEP).min(span);
        }
    }

    fn linecast(&self, from: Vec3, to: Vec3) -> bool {
        let length = from.distance(to);
        let samples = ((length / MARCH_STEP).ceil() as usize).clamp(1, 256);

        // Interior samples only; the endpoints themselves may legally
        // rest on the surface.
        for i in 1..samples {
            let s = i as f32 / samples as f32;
            if self.clearance(from.lerp(to, s)) < -LINE_TOLERANCE {
                return true;
            }
        }
        false
    }
}
