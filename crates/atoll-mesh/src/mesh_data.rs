//! Mesh buffer shared by the surface and skirt builders.

use glam::{Vec2, Vec3};

/// Triangle mesh output of a build pass.
///
/// Every three consecutive indices form one triangle, wound
/// counter-clockwise when viewed from the front face. `uvs` is either empty
/// or holds exactly one entry per vertex; only the surface mesh carries UVs.
/// Quads never share vertices with their neighbors.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Triangle indices into `positions`.
    pub indices: Vec<u32>,
    /// Per-vertex texture coordinates, when present.
    pub uvs: Vec<Vec2>,
}

impl MeshData {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a quad as the two triangles `{a, b, c}` and `{b, d, c}`.
    ///
    /// Corners arrive in the fixed order `[a, b, c, d]`: `a`/`b` span one
    /// edge of the quad and `c`/`d` the opposite edge, with `c` under/behind
    /// `a` and `d` under/behind `b`.
    pub fn push_quad(&mut self, corners: [Vec3; 4]) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&corners);
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 1, base + 3, base + 2]);
    }

    /// Appends a quad with per-corner UVs, same corner ordering as
    /// [`push_quad`].
    pub fn push_quad_uv(&mut self, corners: [Vec3; 4], uvs: [Vec2; 4]) {
        self.push_quad(corners);
        self.uvs.extend_from_slice(&uvs);
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of quads (two triangles each).
    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    /// Returns `true` when the mesh holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
