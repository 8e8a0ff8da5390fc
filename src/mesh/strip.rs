//! Ribbon strip construction from a growth path
//!
//! Two vertices per waypoint, straddling it across the width axis; six
//! indices per waypoint pair. UV rows are keyed on the waypoint's index
//! parity, so the texture row flips every segment rather than advancing
//! monotonically. Shading normals are recomputed from the final triangles
//! instead of taken from the growth normals.

use crate::core::types::{Vec2, Vec3};
use crate::growth::path::GrowthPath;
use crate::mesh::MeshData;

/// Index pattern stitching one quad between a waypoint pair
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 3, 2, 1];

/// Build a ribbon mesh along `path`. Paths shorter than two waypoints
/// yield an empty mesh.
pub fn build_strip(path: &GrowthPath, width: f32) -> MeshData {
    let points = path.points();
    if points.len() < 2 {
        return MeshData::new();
    }

    let mut mesh = MeshData::new();
    mesh.positions.reserve(points.len() * 2);
    mesh.normals.reserve(points.len() * 2);
    mesh.uvs.reserve(points.len() * 2);
    mesh.indices.reserve((points.len() - 1) * 6);

    for (i, point) in points.iter().enumerate() {
        // Local forward: the deltas into and out of this waypoint summed,
        // with the path ends contributing only one of the two.
        let mut forward = Vec3::ZERO;
        if i > 0 {
            forward += point.position - points[i - 1].position;
        }
        if i + 1 < points.len() {
            forward += points[i + 1].position - point.position;
        }
        let forward = forward.normalize_or(Vec3::Z);

        let up = point.normal.normalize_or_zero();
        let width_axis = forward.cross(up);

        mesh.positions.push(point.position + width_axis * (width / 2.0));
        mesh.positions.push(point.position - width_axis * (width / 2.0));
        mesh.normals.push(up);
        mesh.normals.push(up);

        let row = (i % 2) as f32;
        mesh.uvs.push(Vec2::new(0.0, row));
        mesh.uvs.push(Vec2::new(1.0, row));
    }

    for i in 0..(points.len() as u32 - 1) {
        for offset in QUAD_INDICES {
            mesh.indices.push(offset + i * 2);
        }
    }

    recompute_normals(&mut mesh);
    mesh
}

/// Replace per-vertex normals with the average of adjoining face normals.
/// Vertices touched by no non-degenerate face keep their stored normal.
pub fn recompute_normals(mesh: &mut MeshData) {
    let mut accumulated = vec![Vec3::ZERO; mesh.positions.len()];

    for tri in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (mesh.positions[b] - mesh.positions[a])
            .cross(mesh.positions[c] - mesh.positions[a]);
        if face.length_squared() <= 1e-12 {
            continue;
        }
        let face = face.normalize();
        accumulated[a] += face;
        accumulated[b] += face;
        accumulated[c] += face;
    }

    for (normal, sum) in mesh.normals.iter_mut().zip(accumulated) {
        if sum.length_squared() > 1e-12 {
            *normal = sum.normalize();
        }
    }
}
