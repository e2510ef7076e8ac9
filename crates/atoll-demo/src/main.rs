//! Terrain generator binary: config → grid → meshes + texture → disk artifacts.
//!
//! Configuration is loaded from `atoll.ron` (created with defaults on first
//! run) and can be overridden via CLI flags. Run with
//! `cargo run -p atoll-demo -- --size 128 --seed 7` to generate a 128×128
//! island into the output directory.

mod logging;
mod obj;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use atoll_config::{CliArgs, Config};
use atoll_mesh::{boundary_edge_count, build_edge_mesh, build_terrain_mesh};
use atoll_terrain::{Grid, LandType, default_thread_count, generate_parallel};
use atoll_texture::TerrainTexture;
use clap::Parser;
use tracing::info;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("atoll.ron"));
    let mut config = Config::load_or_create(&config_path)?;
    config.apply_cli_overrides(args);
    logging::init(&config.debug.log_level);

    let grid_config = config.terrain.to_grid_config()?;

    let start = Instant::now();
    let grid = if config.terrain.parallel {
        generate_parallel(&grid_config, default_thread_count())?
    } else {
        Grid::generate(&grid_config)?
    };
    info!(
        size = grid.size(),
        seed = grid_config.seed,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "generated grid"
    );
    info!(
        water = grid.count_of(LandType::Water),
        grass = grid.count_of(LandType::Grass),
        rock = grid.count_of(LandType::Rock),
        "land coverage"
    );

    let terrain_mesh = build_terrain_mesh(&grid);
    let edge_mesh = build_edge_mesh(&grid);
    info!(
        terrain_quads = terrain_mesh.quad_count(),
        edge_quads = edge_mesh.quad_count(),
        boundary_edges = boundary_edge_count(&grid),
        "built meshes"
    );

    let texture = TerrainTexture::build(&grid, &config.output.colors);

    let out_dir = &config.output.dir;
    std::fs::create_dir_all(out_dir)?;
    texture.save_png(&out_dir.join("map.png"), config.output.texture_upscale)?;
    if config.output.write_obj {
        obj::write_obj(&out_dir.join("terrain.obj"), &terrain_mesh, "terrain")?;
        obj::write_obj(&out_dir.join("skirt.obj"), &edge_mesh, "skirt")?;
    }
    info!(dir = %out_dir.display(), "artifacts written");
    Ok(())
}
