//! Merging independently built meshes

use crate::core::types::Mat4;
use crate::mesh::MeshData;

/// Merge meshes into one, transforming each by its paired world matrix
/// and rebasing its indices past the vertices already emitted. An empty
/// input yields an empty mesh, not an error.
pub fn combine(parts: &[(&MeshData, Mat4)]) -> MeshData {
    let mut merged = MeshData::new();

    for (mesh, matrix) in parts {
        let base = merged.positions.len() as u32;

        merged
            .positions
            .extend(mesh.positions.iter().map(|p| matrix.transform_point3(*p)));
        merged.normals.extend(
            mesh.normals
                .iter()
                .map(|n| matrix.transform_vector3(*n).normalize_or_zero()),
        );
        merged.uvs.extend_from_slice(&mesh.uvs);
        merged.indices.extend(mesh.indices.iter().map(|i| i + base));
    }

    merged
}

/// Merge a patch's branch ribbons and its leaf meshes into one mesh
/// each, in world space.
pub fn combine_all(
    branches: &[(&MeshData, Mat4)],
    leaves: &[(&MeshData, Mat4)],
) -> (MeshData, MeshData) {
    (combine(branches), combine(leaves))
}
