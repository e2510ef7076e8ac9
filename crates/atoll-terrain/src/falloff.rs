//! Square border falloff biasing elevation toward water at the grid edge.

/// Border bias field, independent of noise.
///
/// Rises from 0 at the grid center to 1 at the border, using the Chebyshev
/// distance so the iso-lines are squares aligned with the grid.
#[derive(Clone, Copy, Debug)]
pub struct FalloffField {
    sharpness: f64,
}

impl FalloffField {
    /// Creates a field with the given curve sharpness (must be > 2, enforced
    /// by config validation).
    pub fn new(sharpness: f64) -> Self {
        Self { sharpness }
    }

    /// Bias at `(x, y)` for a grid of side `size`.
    ///
    /// Each axis is normalized to `[-1, 1]` about the grid center
    /// (`v = 2·coord/size − 1`), the larger absolute coordinate is kept, and
    /// the result is shaped with `d³ / (d³ + (a − a·d)³)` where `a` is the
    /// sharpness. Stateless apart from `a`.
    pub fn bias(&self, x: f64, y: f64, size: u32) -> f64 {
        let size = f64::from(size);
        let vx = 2.0 * x / size - 1.0;
        let vy = 2.0 * y / size - 1.0;
        let d = vx.abs().max(vy.abs());

        let a = self.sharpness;
        let steep = d.powi(3);
        steep / (steep + (a - a * d).powi(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::DEFAULT_FALLOFF_SHARPNESS;

    fn default_field() -> FalloffField {
        FalloffField::new(DEFAULT_FALLOFF_SHARPNESS)
    }

    #[test]
    fn test_center_has_zero_bias() {
        let field = default_field();
        assert_eq!(field.bias(32.0, 32.0, 64), 0.0);
    }

    #[test]
    fn test_border_bias_approaches_one() {
        let field = default_field();
        let edge = field.bias(0.0, 32.0, 64);
        assert!(edge > 0.99, "edge bias {edge} should be near 1");
    }

    #[test]
    fn test_bias_stays_in_unit_range() {
        let field = default_field();
        for y in 0..64 {
            for x in 0..64 {
                let b = field.bias(f64::from(x), f64::from(y), 64);
                assert!((0.0..=1.0).contains(&b), "bias {b} out of range at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_monotonic_from_center_to_border_along_row() {
        let field = default_field();
        let mut previous = field.bias(32.0, 32.0, 64);
        for x in (0..32).rev() {
            let b = field.bias(f64::from(x), 32.0, 64);
            assert!(
                b >= previous,
                "bias decreased moving outward at x={x}: {b} < {previous}"
            );
            previous = b;
        }
    }

    #[test]
    fn test_monotonic_along_diagonal() {
        let field = default_field();
        let mut previous = field.bias(32.0, 32.0, 64);
        for c in (0..32).rev() {
            let b = field.bias(f64::from(c), f64::from(c), 64);
            assert!(
                b >= previous,
                "bias decreased moving outward at ({c}, {c}): {b} < {previous}"
            );
            previous = b;
        }
    }

    #[test]
    fn test_square_symmetry() {
        let field = default_field();
        // Chebyshev distance: all four points at the same offset from the
        // center carry the same bias.
        let bias = field.bias(8.0, 32.0, 64);
        assert_eq!(field.bias(56.0, 32.0, 64), bias);
        assert_eq!(field.bias(32.0, 8.0, 64), bias);
        assert_eq!(field.bias(32.0, 56.0, 64), bias);
    }

    #[test]
    fn test_sharper_curve_is_flatter_inland() {
        let gentle = FalloffField::new(2.2);
        let sharp = FalloffField::new(4.0);
        let inland = 16.0;
        assert!(
            sharp.bias(inland, 32.0, 64) < gentle.bias(inland, 32.0, 64),
            "higher sharpness should suppress bias away from the border"
        );
    }
}
