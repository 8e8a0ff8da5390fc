//! Wavefront OBJ export
//!
//! Minimal writer used by the demo utility; emits one object with
//! position, texture, and normal records per vertex.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::types::Result;
use crate::mesh::MeshData;

/// Write `mesh` as a Wavefront OBJ object named `name`.
pub fn write_obj(mesh: &MeshData, path: &Path, name: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "o {}", name)?;
    for p in &mesh.positions {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for uv in &mesh.uvs {
        writeln!(out, "vt {} {}", uv.x, uv.y)?;
    }
    for n in &mesh.normals {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    // OBJ indices are 1-based
    for tri in mesh.indices.chunks_exact(3) {
        writeln!(
            out,
            "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}",
            a = tri[0] + 1,
            b = tri[1] + 1,
            c = tri[2] + 1,
        )?;
    }
    out.flush()?;

    Ok(())
}
