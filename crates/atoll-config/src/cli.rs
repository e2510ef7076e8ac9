//! Command-line argument parsing for the terrain generator.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Terrain generator command-line arguments.
///
/// CLI values override settings loaded from the RON config file.
#[derive(Parser, Debug)]
#[command(name = "atoll", about = "Procedural island terrain generator")]
pub struct CliArgs {
    /// Grid side length in cells.
    #[arg(long)]
    pub size: Option<u32>,

    /// World seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Noise coordinate scale.
    #[arg(long)]
    pub noise_scale: Option<f64>,

    /// Falloff curve sharpness.
    #[arg(long)]
    pub falloff_sharpness: Option<f64>,

    /// Generate rows on a worker pool.
    #[arg(long)]
    pub parallel: Option<bool>,

    /// Output directory for generated artifacts.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Integer upscale factor for the PNG map.
    #[arg(long)]
    pub texture_upscale: Option<u32>,

    /// Write the meshes as Wavefront OBJ files.
    #[arg(long)]
    pub write_obj: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to the config file (overrides the default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Applies CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(size) = args.size {
            self.terrain.size = size;
        }
        if let Some(seed) = args.seed {
            self.terrain.seed = seed;
        }
        if let Some(scale) = args.noise_scale {
            self.terrain.noise_scale = scale;
        }
        if let Some(sharpness) = args.falloff_sharpness {
            self.terrain.falloff_sharpness = sharpness;
        }
        if let Some(parallel) = args.parallel {
            self.terrain.parallel = parallel;
        }
        if let Some(ref dir) = args.out_dir {
            self.output.dir = dir.clone();
        }
        if let Some(upscale) = args.texture_upscale {
            self.output.texture_upscale = upscale;
        }
        if let Some(write_obj) = args.write_obj {
            self.output.write_obj = write_obj;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
