//! Ivy growth orchestration
//!
//! Ties the stages together:
//! 1. [`GrowthEngine`] walks an oriented path across the host surface
//! 2. [`crate::mesh::build_strip`] turns the path into a ribbon mesh
//! 3. [`crate::leaf::place_leaves`] scatters leaf poses along the ribbon

pub mod config;
pub mod direction;
pub mod engine;
pub mod path;

pub use config::GrowthConfig;
pub use engine::GrowthEngine;
pub use path::{GrowthPath, OrientedPoint};

use std::time::Instant;

use crate::core::rng::GrowthRng;
use crate::leaf::{self, LeafPlacement};
use crate::math::Ray;
use crate::mesh::{self, MeshData};
use crate::surface::SurfaceQuery;

/// One grown branch: the path it took, its ribbon mesh, and the leaf
/// poses derived from the ribbon's vertices.
#[derive(Clone, Debug)]
pub struct IvyBranch {
    pub path: GrowthPath,
    pub mesh: MeshData,
    pub leaves: Vec<LeafPlacement>,
}

/// Grows ivy branches over a host surface and turns them into geometry.
pub struct IvyGenerator {
    config: GrowthConfig,
    rng: GrowthRng,
}

impl IvyGenerator {
    /// Create a generator with the given settings and RNG seed
    pub fn new(config: GrowthConfig, seed: u64) -> Self {
        Self {
            config,
            rng: GrowthRng::new(seed),
        }
    }

    /// Get generator settings
    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Grow a single branch from a seed ray.
    ///
    /// None when the seed ray misses the surface or the resulting path is
    /// too short to mesh; neither case is an error.
    pub fn grow_branch<S: SurfaceQuery>(&mut self, surface: &S, seed: Ray) -> Option<IvyBranch> {
        let engine = GrowthEngine::new(surface, &self.config);
        let path = engine.grow(seed, &mut self.rng);

        if !path.is_viable() {
            log::debug!("branch abandoned with {} waypoint(s)", path.len());
            return None;
        }

        let mesh = mesh::build_strip(&path, self.config.strip_width);
        let leaves = if self.config.leaf_enabled {
            leaf::place_leaves(&mesh, &path, &self.config, &mut self.rng)
        } else {
            Vec::new()
        };

        Some(IvyBranch { path, mesh, leaves })
    }

    /// Grow a whole patch: `branch_count` sequential attempts from the
    /// same seed ray, each wandering its own way. Abandoned attempts are
    /// skipped, so the result can hold fewer branches than configured.
    pub fn grow_patch<S: SurfaceQuery>(&mut self, surface: &S, seed: Ray) -> Vec<IvyBranch> {
        let start = Instant::now();
        let mut branches = Vec::new();

        for _ in 0..self.config.branch_count {
            if let Some(branch) = self.grow_branch(surface, seed) {
                branches.push(branch);
            }
        }

        let total_leaves: usize = branches.iter().map(|b| b.leaves.len()).sum();
        log::info!(
            "grew {}/{} branches ({} leaves) in {:.2}ms",
            branches.len(),
            self.config.branch_count,
            total_leaves,
            start.elapsed().as_secs_f64() * 1000.0,
        );

        branches
    }
}
