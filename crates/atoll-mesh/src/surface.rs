//! Surface mesh construction: one flat quad per non-water cell.

use atoll_terrain::Grid;
use glam::{Vec2, Vec3};

use crate::mesh_data::MeshData;

/// Builds the flat surface mesh for every non-water cell of `grid`.
///
/// Each cell becomes a unit quad centered on `(x, 0, y)` in the horizontal
/// plane. UVs map the cell footprint to
/// `[x/size, (x+1)/size] × [y/size, (y+1)/size]`, so a texture with one
/// pixel per cell spans the whole grid exactly once. Water cells emit
/// nothing — the hole they leave is covered by the skirt mesh.
pub fn build_terrain_mesh(grid: &Grid) -> MeshData {
    let mut mesh = MeshData::new();
    let size = grid.size() as f32;

    for (x, y, cell) in grid.cells() {
        if cell.land_type.is_water() {
            continue;
        }
        let xf = x as f32;
        let yf = y as f32;
        mesh.push_quad_uv(
            [
                Vec3::new(xf - 0.5, 0.0, yf + 0.5),
                Vec3::new(xf + 0.5, 0.0, yf + 0.5),
                Vec3::new(xf - 0.5, 0.0, yf - 0.5),
                Vec3::new(xf + 0.5, 0.0, yf - 0.5),
            ],
            [
                Vec2::new(xf / size, (yf + 1.0) / size),
                Vec2::new((xf + 1.0) / size, (yf + 1.0) / size),
                Vec2::new(xf / size, yf / size),
                Vec2::new((xf + 1.0) / size, yf / size),
            ],
        );
    }
    mesh
}
