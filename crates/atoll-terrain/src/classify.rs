//! Threshold classification of noise and bias into land types.

use crate::config::Level;
use crate::land::LandType;

/// Classifies a cell from its noise sample and falloff bias.
///
/// Elevation is `noise_value - bias_value`. Levels are scanned in ascending
/// order and the first whose `max_elevation` strictly exceeds the elevation
/// wins. When no threshold matches — reachable only at the upper elevation
/// boundary of a validated level table — the final level acts as the
/// catch-all.
///
/// # Panics
///
/// Panics if `levels` is empty. Generation validates the level table before
/// any cell is classified.
pub fn classify(noise_value: f64, bias_value: f64, levels: &[Level]) -> LandType {
    let elevation = noise_value - bias_value;
    for level in levels {
        if elevation < level.max_elevation {
            return level.land_type;
        }
    }
    levels[levels.len() - 1].land_type
}
