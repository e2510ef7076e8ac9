//! Configuration for the terrain generator.
//!
//! Settings persist to disk as a RON file and can be overridden per run via
//! CLI flags. The terrain section converts into a validated
//! [`atoll_terrain::GridConfig`] before any generation starts.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, OutputConfig, TerrainConfig};
pub use error::ConfigError;
