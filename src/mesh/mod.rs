//! Mesh buffers and builders

pub mod combine;
pub mod obj;
pub mod strip;

pub use combine::{combine, combine_all};
pub use strip::build_strip;

use crate::core::types::{Vec2, Vec3};

/// CPU-side triangle mesh buffers.
///
/// Parallel per-vertex arrays plus a triangle index list. The crate only
/// builds and merges these; uploading or converting them is up to the
/// host.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
