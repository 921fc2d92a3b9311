//! # Unit Types
//!
//! Type-safe wrappers for angles. These keep degrees and radians from being
//! mixed up while remaining lightweight (just f64 wrappers).
//!
//! Stress values are deliberately left as plain `f64`. The caller chooses the
//! stress unit (psi, kPa, MPa, ...) and sign convention; the transformation only
//! needs the three components to agree with each other.
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::units::{Degrees, Radians};
//!
//! let theta = Degrees(90.0);
//! let rad: Radians = theta.into();
//! assert!((rad.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl Degrees {
    /// Angle swept on Mohr's circle for this physical plane rotation.
    ///
    /// A rotation of θ on the element is a rotation of 2θ on the circle.
    pub fn on_circle(self) -> Radians {
        Degrees(2.0 * self.0).into()
    }
}

impl Radians {
    /// Simultaneous sine and cosine
    pub fn sin_cos(self) -> (f64, f64) {
        self.0.sin_cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_degrees_to_radians() {
        let rad: Radians = Degrees(180.0).into();
        assert_relative_eq!(rad.0, PI, epsilon = 1e-12);
    }

    #[test]
    fn test_on_circle_doubles_angle() {
        // 45 degrees on the element is a quarter turn on the circle
        assert_relative_eq!(Degrees(45.0).on_circle().0, PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(Degrees(-90.0).on_circle().0, -PI, epsilon = 1e-12);
    }

    #[test]
    fn test_sin_cos_at_quarter_turn() {
        let (sin, cos) = Degrees(45.0).on_circle().sin_cos();
        assert_relative_eq!(sin, 1.0, epsilon = 1e-12);
        assert_relative_eq!(cos, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_serialization() {
        let theta = Degrees(22.5);
        let json = serde_json::to_string(&theta).unwrap();
        assert_eq!(json, "22.5");

        let roundtrip: Degrees = serde_json::from_str(&json).unwrap();
        assert_eq!(theta, roundtrip);
    }
}
