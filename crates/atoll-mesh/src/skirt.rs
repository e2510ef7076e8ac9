//! Skirt mesh construction: vertical walls at land/water boundaries.

use atoll_terrain::Grid;
use glam::Vec3;

use crate::edge_direction::EdgeDirection;
use crate::mesh_data::MeshData;

/// Depth of the skirt wall below the surface plane.
const SKIRT_DEPTH: f32 = 1.0;

/// Builds vertical skirt quads wherever a non-water cell borders a water
/// cell.
///
/// Each non-water cell tests its four orthogonal neighbors independently;
/// out-of-bounds neighbors are skipped, not treated as water. Every matching
/// boundary gets one outward-facing quad on the shared cell edge, spanning
/// height 0 down to `-SKIRT_DEPTH`. A cell emits 0–4 quads; walls emitted by
/// adjacent cells are not deduplicated. The skirt mesh carries no UVs.
pub fn build_edge_mesh(grid: &Grid) -> MeshData {
    let mut mesh = MeshData::new();
    for (x, y, cell) in grid.cells() {
        if cell.land_type.is_water() {
            continue;
        }
        for direction in EdgeDirection::ALL {
            if water_neighbor(grid, x, y, direction) {
                mesh.push_quad(skirt_corners(x, y, direction));
            }
        }
    }
    mesh
}

/// Counts the land/water boundary edges of `grid` — the number of quads
/// [`build_edge_mesh`] emits.
pub fn boundary_edge_count(grid: &Grid) -> usize {
    grid.cells()
        .filter(|(_, _, cell)| !cell.land_type.is_water())
        .map(|(x, y, _)| {
            EdgeDirection::ALL
                .into_iter()
                .filter(|&direction| water_neighbor(grid, x, y, direction))
                .count()
        })
        .sum()
}

/// `true` when the neighbor of `(x, y)` in `direction` exists and is water.
fn water_neighbor(grid: &Grid, x: u32, y: u32, direction: EdgeDirection) -> bool {
    let (nx, ny) = direction.offset(i64::from(x), i64::from(y));
    let size = i64::from(grid.size());
    if nx < 0 || ny < 0 || nx >= size || ny >= size {
        return false;
    }
    grid.get(nx as u32, ny as u32).land_type.is_water()
}

/// Corner layout `[a, b, c, d]` for the skirt quad of cell `(x, y)` toward
/// `direction`: `a`/`b` span the top edge at height 0 and `c`/`d` sit
/// directly below them at `-SKIRT_DEPTH`.
///
/// Each direction is enumerated explicitly; combined with the
/// `{a,b,c}/{b,d,c}` index pattern the winding is counter-clockwise seen
/// from the water side, matching [`EdgeDirection::normal`].
fn skirt_corners(x: u32, y: u32, direction: EdgeDirection) -> [Vec3; 4] {
    let xf = x as f32;
    let yf = y as f32;
    match direction {
        EdgeDirection::PosX => [
            Vec3::new(xf + 0.5, 0.0, yf - 0.5),
            Vec3::new(xf + 0.5, 0.0, yf + 0.5),
            Vec3::new(xf + 0.5, -SKIRT_DEPTH, yf - 0.5),
            Vec3::new(xf + 0.5, -SKIRT_DEPTH, yf + 0.5),
        ],
        EdgeDirection::NegX => [
            Vec3::new(xf - 0.5, 0.0, yf + 0.5),
            Vec3::new(xf - 0.5, 0.0, yf - 0.5),
            Vec3::new(xf - 0.5, -SKIRT_DEPTH, yf + 0.5),
            Vec3::new(xf - 0.5, -SKIRT_DEPTH, yf - 0.5),
        ],
        EdgeDirection::PosY => [
            Vec3::new(xf + 0.5, 0.0, yf + 0.5),
            Vec3::new(xf - 0.5, 0.0, yf + 0.5),
            Vec3::new(xf + 0.5, -SKIRT_DEPTH, yf + 0.5),
            Vec3::new(xf - 0.5, -SKIRT_DEPTH, yf + 0.5),
        ],
        EdgeDirection::NegY => [
            Vec3::new(xf - 0.5, 0.0, yf - 0.5),
            Vec3::new(xf + 0.5, 0.0, yf - 0.5),
            Vec3::new(xf - 0.5, -SKIRT_DEPTH, yf - 0.5),
            Vec3::new(xf + 0.5, -SKIRT_DEPTH, yf - 0.5),
        ],
    }
}
