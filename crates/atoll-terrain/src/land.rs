//! Land types and the per-cell classification record.

use serde::{Deserialize, Serialize};

/// The discrete land classification of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandType {
    /// Open water. Water cells contribute no surface geometry.
    Water,
    /// Grassland.
    Grass,
    /// Bare rock.
    Rock,
}

impl LandType {
    /// Returns `true` for [`LandType::Water`].
    pub fn is_water(self) -> bool {
        matches!(self, LandType::Water)
    }
}

/// A single classified grid cell. Created during generation and immutable
/// afterward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The land type assigned by classification.
    pub land_type: LandType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_water_is_water() {
        assert!(LandType::Water.is_water());
        assert!(!LandType::Grass.is_water());
        assert!(!LandType::Rock.is_water());
    }
}
