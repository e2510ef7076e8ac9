//! End-to-end pipeline tests: config → grid → meshes + texture.

use atoll_config::Config;
use atoll_mesh::{boundary_edge_count, build_edge_mesh, build_terrain_mesh};
use atoll_terrain::{Grid, LandType, generate_parallel};
use atoll_texture::TerrainTexture;

fn generated_grid(seed: u64) -> Grid {
    let mut config = Config::default();
    config.terrain.size = 48;
    config.terrain.seed = seed;
    let grid_config = config.terrain.to_grid_config().unwrap();
    Grid::generate(&grid_config).unwrap()
}

#[test]
fn test_builders_agree_on_one_grid() {
    let config = Config::default();
    let grid_config = config.terrain.to_grid_config().unwrap();
    let grid = Grid::generate(&grid_config).unwrap();

    let terrain_mesh = build_terrain_mesh(&grid);
    let edge_mesh = build_edge_mesh(&grid);
    let texture = TerrainTexture::build(&grid, &config.output.colors);

    assert_eq!(grid.cell_count(), grid_config.size as usize * grid_config.size as usize);
    assert_eq!(terrain_mesh.quad_count(), grid.land_cell_count());
    assert_eq!(edge_mesh.quad_count(), boundary_edge_count(&grid));
    assert_eq!(
        texture.pixels().len(),
        grid.cell_count() * 4,
        "one RGBA pixel per cell"
    );
}

#[test]
fn test_full_pipeline_is_deterministic() {
    let grid_a = generated_grid(2024);
    let grid_b = generated_grid(2024);

    let mesh_a = build_terrain_mesh(&grid_a);
    let mesh_b = build_terrain_mesh(&grid_b);
    assert_eq!(mesh_a.positions, mesh_b.positions);
    assert_eq!(mesh_a.indices, mesh_b.indices);
    assert_eq!(mesh_a.uvs, mesh_b.uvs);

    let skirt_a = build_edge_mesh(&grid_a);
    let skirt_b = build_edge_mesh(&grid_b);
    assert_eq!(skirt_a.positions, skirt_b.positions);

    let colors = Config::default().output.colors;
    let tex_a = TerrainTexture::build(&grid_a, &colors);
    let tex_b = TerrainTexture::build(&grid_b, &colors);
    assert_eq!(tex_a.pixels(), tex_b.pixels());
}

#[test]
fn test_parallel_generation_feeds_identical_builders() {
    let mut config = Config::default();
    config.terrain.size = 32;
    config.terrain.seed = 11;
    let grid_config = config.terrain.to_grid_config().unwrap();

    let serial = Grid::generate(&grid_config).unwrap();
    let parallel = generate_parallel(&grid_config, 4).unwrap();

    let mesh_serial = build_terrain_mesh(&serial);
    let mesh_parallel = build_terrain_mesh(&parallel);
    assert_eq!(mesh_serial.positions, mesh_parallel.positions);

    let tex_serial = TerrainTexture::build(&serial, &config.output.colors);
    let tex_parallel = TerrainTexture::build(&parallel, &config.output.colors);
    assert_eq!(tex_serial.pixels(), tex_parallel.pixels());
}

#[test]
fn test_texture_colors_track_the_grid() {
    let config = Config::default();
    let grid = generated_grid(5);
    let texture = TerrainTexture::build(&grid, &config.output.colors);
    for (x, y, cell) in grid.cells() {
        assert_eq!(
            texture.pixel(x, y),
            config.output.colors.color_for(cell.land_type)
        );
    }
}

#[test]
fn test_default_falloff_floods_the_border() {
    // With the stock config the outermost ring carries a bias near 1, so
    // every border cell lands under the water threshold.
    let grid = generated_grid(3);
    let edge = grid.size() - 1;
    for c in 0..grid.size() {
        assert_eq!(grid.get(c, 0).land_type, LandType::Water);
        assert_eq!(grid.get(c, edge).land_type, LandType::Water);
        assert_eq!(grid.get(0, c).land_type, LandType::Water);
        assert_eq!(grid.get(edge, c).land_type, LandType::Water);
    }
}
