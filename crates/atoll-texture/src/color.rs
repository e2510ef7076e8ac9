//! Land type → RGBA color mapping.

use atoll_terrain::LandType;
use serde::{Deserialize, Serialize};

/// RGBA color assigned to each land type when rasterizing the grid.
///
/// Only the discrete type → color mapping is contract; the channel values
/// themselves are styling and can be overridden per field in config files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorMap {
    /// Color for [`LandType::Water`].
    pub water: [u8; 4],
    /// Color for [`LandType::Grass`].
    pub grass: [u8; 4],
    /// Color for [`LandType::Rock`].
    pub rock: [u8; 4],
}

impl ColorMap {
    /// Returns the color for `land_type`.
    pub fn color_for(&self, land_type: LandType) -> [u8; 4] {
        match land_type {
            LandType::Water => self.water,
            LandType::Grass => self.grass,
            LandType::Rock => self.rock,
        }
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self {
            water: [30, 80, 200, 255],
            grass: [64, 160, 48, 255],
            rock: [128, 128, 128, 255],
        }
    }
}
