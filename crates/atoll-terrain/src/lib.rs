//! Procedural island terrain generation: coherent noise, border falloff, and
//! threshold-based land classification over a bounded square grid.

mod classify;
mod config;
mod falloff;
mod grid;
mod land;
mod noise_field;
mod parallel;

pub use classify::classify;
pub use config::{
    DEFAULT_FALLOFF_SHARPNESS, ELEVATION_MAX, GridConfig, GridConfigError, Level, default_levels,
};
pub use falloff::FalloffField;
pub use grid::Grid;
pub use land::{Cell, LandType};
pub use noise_field::NoiseField;
pub use parallel::{default_thread_count, generate_parallel};
