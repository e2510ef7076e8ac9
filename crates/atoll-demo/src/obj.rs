//! Wavefront OBJ export of mesh buffers.

use std::io::{BufWriter, Write};
use std::path::Path;

use atoll_mesh::MeshData;

/// Writes `mesh` to `path` as a Wavefront OBJ object named `name`.
///
/// Positions and (when present) UVs are emitted per vertex and faces
/// reference them 1-based. Triangles keep the mesh's winding order, so the
/// exported faces match the buffers exactly.
pub fn write_obj(path: &Path, mesh: &MeshData, name: &str) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "o {name}")?;
    for p in &mesh.positions {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for uv in &mesh.uvs {
        writeln!(out, "vt {} {}", uv.x, uv.y)?;
    }

    let textured = !mesh.uvs.is_empty();
    for tri in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        if textured {
            writeln!(out, "f {a}/{a} {b}/{b} {c}/{c}")?;
        } else {
            writeln!(out, "f {a} {b} {c}")?;
        }
    }
    out.flush()
}
