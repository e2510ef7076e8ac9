//! Generation configuration and its up-front validation.

use serde::{Deserialize, Serialize};

use crate::land::LandType;

/// Maximum elevation a cell can reach: noise is sampled in `[0, 1]` and the
/// falloff bias only subtracts from it.
pub const ELEVATION_MAX: f64 = 1.0;

/// Default steepness of the border falloff curve.
pub const DEFAULT_FALLOFF_SHARPNESS: f64 = 2.2;

/// One classification threshold.
///
/// Elevations strictly below `max_elevation` that no earlier level claimed
/// map to `land_type`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Upper (exclusive) elevation bound of this band.
    pub max_elevation: f64,
    /// Land type assigned to elevations in this band.
    pub land_type: LandType,
}

/// The stock three-band classification: water below 0.35, grass below 0.75,
/// rock as the catch-all.
pub fn default_levels() -> Vec<Level> {
    vec![
        Level {
            max_elevation: 0.35,
            land_type: LandType::Water,
        },
        Level {
            max_elevation: 0.75,
            land_type: LandType::Grass,
        },
        Level {
            max_elevation: ELEVATION_MAX,
            land_type: LandType::Rock,
        },
    ]
}

/// Errors rejected by [`GridConfig::validate`] before any grid is allocated.
#[derive(Debug, thiserror::Error)]
pub enum GridConfigError {
    /// Grid size of zero.
    #[error("grid size must be positive")]
    ZeroSize,

    /// Noise scale of zero or below (or NaN).
    #[error("noise scale must be positive, got {0}")]
    NonPositiveNoiseScale(f64),

    /// No classification levels configured.
    #[error("at least one classification level is required")]
    EmptyLevels,

    /// Levels out of ascending order.
    #[error("levels must be strictly ascending by max_elevation (level {index} breaks the order)")]
    UnsortedLevels {
        /// Index of the first level that is not above its predecessor.
        index: usize,
    },

    /// The final level does not cover the full elevation range.
    #[error("final level must be a catch-all with max_elevation >= {ELEVATION_MAX}, got {0}")]
    MissingCatchAll(f64),

    /// Falloff sharpness at or below the curve's minimum of 2.
    #[error("falloff sharpness must be greater than 2, got {0}")]
    FalloffSharpnessTooLow(f64),
}

/// Configuration for one terrain generation run.
///
/// Identical configs (including `seed`) reproduce bit-identical grids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Side length of the square grid in cells.
    pub size: u32,
    /// Coordinate multiplier applied before noise sampling. Larger values
    /// produce higher-frequency terrain features.
    pub noise_scale: f64,
    /// World seed driving the noise lattice and its sample offsets.
    pub seed: u64,
    /// Steepness of the border falloff curve. Must be greater than 2.
    pub falloff_sharpness: f64,
    /// Classification thresholds, strictly ascending by `max_elevation`.
    /// The final level is the catch-all and must reach [`ELEVATION_MAX`].
    pub levels: Vec<Level>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 96,
            noise_scale: 0.08,
            seed: 0,
            falloff_sharpness: DEFAULT_FALLOFF_SHARPNESS,
            levels: default_levels(),
        }
    }
}

impl GridConfig {
    /// Checks every structural invariant of the config.
    ///
    /// Generation entry points call this before allocating anything, so an
    /// invalid config can never produce a partial grid.
    pub fn validate(&self) -> Result<(), GridConfigError> {
        if self.size == 0 {
            return Err(GridConfigError::ZeroSize);
        }
        if !(self.noise_scale > 0.0) {
            return Err(GridConfigError::NonPositiveNoiseScale(self.noise_scale));
        }
        if self.levels.is_empty() {
            return Err(GridConfigError::EmptyLevels);
        }
        for (index, pair) in self.levels.windows(2).enumerate() {
            if pair[1].max_elevation <= pair[0].max_elevation {
                return Err(GridConfigError::UnsortedLevels { index: index + 1 });
            }
        }
        let last = self.levels[self.levels.len() - 1].max_elevation;
        if last < ELEVATION_MAX {
            return Err(GridConfigError::MissingCatchAll(last));
        }
        if !(self.falloff_sharpness > 2.0) {
            return Err(GridConfigError::FalloffSharpnessTooLow(
                self.falloff_sharpness,
            ));
        }
        Ok(())
    }
}
