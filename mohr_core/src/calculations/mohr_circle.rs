//! # Mohr's Circle Calculation
//!
//! Transforms a plane stress state (σx, σz, τxz) to a plane inclined at θ and
//! derives the circle geometry used to visualize it.
//!
//! ## Method
//!
//! - Centre `C = (σx + σz) / 2`
//! - Radius `R = sqrt(((σx − σz) / 2)² + τxz²)`
//! - Principal stresses `σ1 = C + R`, `σ2 = C − R`
//! - Transformed stresses rotate the state by `2θ` around the circle
//!
//! Everything is closed form. The only input requirement is that all four
//! values are finite; a zero stress state is valid and collapses the circle
//! to a point.
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::calculations::mohr_circle::{calculate, MohrInput};
//!
//! let result = calculate(&MohrInput::new(100.0, -50.0, 40.0, 45.0)).unwrap();
//! assert!((result.transformed.sigma_x - 65.0).abs() < 1e-9);
//! assert!((result.transformed.sigma_z + 15.0).abs() < 1e-9);
//! assert!((result.transformed.tau + 75.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CalcResult;
use crate::input::{ensure_finite, InputField};
use crate::plot::PlotGeometry;
use crate::settings::PlotSettings;
use crate::units::Degrees;

/// Plane inclination, in degrees. Any finite value is accepted; the
/// transformation repeats every 180°.
pub type Inclination = Degrees;

/// The three in-plane stress components.
///
/// Units and sign convention are up to the caller, as long as all three agree.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StressState {
    /// Normal stress acting along x
    pub sigma_x: f64,

    /// Normal stress acting along z
    pub sigma_z: f64,

    /// Shear stress on the x/z faces
    pub tau_xz: f64,
}

impl StressState {
    pub fn new(sigma_x: f64, sigma_z: f64, tau_xz: f64) -> Self {
        StressState {
            sigma_x,
            sigma_z,
            tau_xz,
        }
    }

    /// Mean normal stress `(σx + σz) / 2`
    ///
    /// Halved before summing so near-`f64::MAX` inputs stay finite.
    pub fn mean_normal(&self) -> f64 {
        self.sigma_x / 2.0 + self.sigma_z / 2.0
    }

    /// Half the normal stress difference `(σx − σz) / 2`
    pub fn half_difference(&self) -> f64 {
        self.sigma_x / 2.0 - self.sigma_z / 2.0
    }
}

/// Input parameters for a Mohr's circle calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "sigma_x": 100.0,
///   "sigma_z": -50.0,
///   "tau_xz": 40.0,
///   "theta": 45.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MohrInput {
    /// Horizontal normal stress σx
    pub sigma_x: f64,

    /// Vertical normal stress σz
    pub sigma_z: f64,

    /// Shear stress τxz
    pub tau_xz: f64,

    /// Plane inclination θ
    pub theta: Inclination,
}

impl MohrInput {
    /// Create an input from raw values, with `theta_deg` in degrees.
    pub fn new(sigma_x: f64, sigma_z: f64, tau_xz: f64, theta_deg: f64) -> Self {
        MohrInput {
            sigma_x,
            sigma_z,
            tau_xz,
            theta: Degrees(theta_deg),
        }
    }

    /// Stress components without the inclination
    pub fn stress_state(&self) -> StressState {
        StressState::new(self.sigma_x, self.sigma_z, self.tau_xz)
    }

    /// Set all four inputs back to zero.
    pub fn reset(&mut self) {
        *self = MohrInput::default();
    }

    /// Get a value by field
    pub fn value(&self, field: InputField) -> f64 {
        match field {
            InputField::SigmaX => self.sigma_x,
            InputField::SigmaZ => self.sigma_z,
            InputField::TauXz => self.tau_xz,
            InputField::Theta => self.theta.0,
        }
    }

    /// Validate input parameters. Every value must be finite.
    pub fn validate(&self) -> CalcResult<()> {
        for field in InputField::ALL {
            ensure_finite(field, self.value(field))?;
        }
        Ok(())
    }
}

/// Centre and radius of Mohr's circle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CircleGeometry {
    /// Centre on the normal stress axis, C
    pub center: f64,

    /// Radius R, never negative
    pub radius: f64,
}

impl CircleGeometry {
    /// An isotropic state (σx = σz, τxz = 0) collapses the circle to a point.
    pub fn is_degenerate(&self) -> bool {
        self.radius == 0.0
    }

    /// Distance of a (σ, τ) point from the circle centre
    pub fn distance_from_center(&self, sigma: f64, tau: f64) -> f64 {
        (sigma - self.center).hypot(tau)
    }
}

/// Principal stresses, `major >= minor`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PrincipalStresses {
    /// Major principal stress σ1
    pub major: f64,

    /// Minor principal stress σ2
    pub minor: f64,
}

/// Stresses on the plane inclined at θ.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TransformedStresses {
    /// Transformed lateral stress σx′
    pub sigma_x: f64,

    /// Transformed longitudinal stress σz′
    pub sigma_z: f64,

    /// Transformed shear stress τ′
    pub tau: f64,
}

/// Results from a Mohr's circle calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "circle": { "center": 25.0, "radius": 85.0 },
///   "principal": { "major": 110.0, "minor": -60.0 },
///   "transformed": { "sigma_x": 100.0, "sigma_z": -50.0, "tau": 40.0 },
///   "max_shear": 85.0,
///   "plot": { "circle": [ ... ], "lines": { ... }, ... }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MohrResult {
    pub circle: CircleGeometry,
    pub principal: PrincipalStresses,
    pub transformed: TransformedStresses,

    /// Maximum in-plane shear stress, equal to the radius
    pub max_shear: f64,

    /// Geometry for rendering the diagram
    pub plot: PlotGeometry,
}

impl MohrResult {
    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Centre and radius for a stress state.
pub fn circle_geometry(state: &StressState) -> CircleGeometry {
    CircleGeometry {
        center: state.mean_normal(),
        radius: state.half_difference().hypot(state.tau_xz),
    }
}

/// Principal stresses from the circle. σ1 is the major stress by construction.
pub fn principal_stresses(circle: &CircleGeometry) -> PrincipalStresses {
    PrincipalStresses {
        major: circle.center + circle.radius,
        minor: circle.center - circle.radius,
    }
}

/// Stresses on the plane inclined at `theta`.
///
/// The sign of τ′ follows the plotting convention used for the construction
/// lines: the x-face point is drawn at (σx′, −τ′).
pub fn transform(state: &StressState, theta: Inclination) -> TransformedStresses {
    let center = state.mean_normal();
    let half_diff = state.half_difference();
    let (sin_2t, cos_2t) = theta.on_circle().sin_cos();

    TransformedStresses {
        sigma_x: center + half_diff * cos_2t + state.tau_xz * sin_2t,
        sigma_z: center - half_diff * cos_2t - state.tau_xz * sin_2t,
        tau: -half_diff * sin_2t + state.tau_xz * cos_2t,
    }
}

/// Run the calculation with default plot settings.
///
/// # Returns
///
/// * `Ok(MohrResult)` - Circle, principal and transformed stresses, plot geometry
/// * `Err(CalcError)` - If any input is not finite
pub fn calculate(input: &MohrInput) -> CalcResult<MohrResult> {
    calculate_with(input, &PlotSettings::default())
}

/// Run the calculation with explicit plot settings.
pub fn calculate_with(input: &MohrInput, settings: &PlotSettings) -> CalcResult<MohrResult> {
    input.validate()?;
    settings.validate()?;

    let state = input.stress_state();
    let circle = circle_geometry(&state);
    let principal = principal_stresses(&circle);
    let transformed = transform(&state, input.theta);
    let plot = PlotGeometry::build(&state, &circle, &principal, &transformed, settings);

    debug!(
        sigma_x = input.sigma_x,
        sigma_z = input.sigma_z,
        tau_xz = input.tau_xz,
        theta = input.theta.0,
        center = circle.center,
        radius = circle.radius,
        "calculated Mohr's circle"
    );

    Ok(MohrResult {
        circle,
        principal,
        transformed,
        max_shear: circle.radius,
        plot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn worked_example(theta: f64) -> MohrInput {
        MohrInput::new(100.0, -50.0, 40.0, theta)
    }

    #[test]
    fn test_worked_example_circle() {
        let result = calculate(&worked_example(0.0)).unwrap();

        // C = (100 - 50) / 2, R = sqrt(75² + 40²) = sqrt(7225)
        assert_relative_eq!(result.circle.center, 25.0, epsilon = 1e-12);
        assert_relative_eq!(result.circle.radius, 85.0, epsilon = 1e-12);
        assert_relative_eq!(result.principal.major, 110.0, epsilon = 1e-12);
        assert_relative_eq!(result.principal.minor, -60.0, epsilon = 1e-12);
        assert_eq!(result.max_shear, result.circle.radius);
    }

    #[test]
    fn test_worked_example_at_45_degrees() {
        let result = calculate(&worked_example(45.0)).unwrap();
        let t = result.transformed;

        assert_abs_diff_eq!(t.sigma_x, 65.0, epsilon = 1e-9);
        assert_abs_diff_eq!(t.sigma_z, -15.0, epsilon = 1e-9);
        assert_abs_diff_eq!(t.tau, -75.0, epsilon = 1e-9);

        // (65 - 25)² + 75² = 85²
        assert_relative_eq!(result.circle.distance_from_center(t.sigma_x, -t.tau), 85.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_inclination_is_identity() {
        let state = StressState::new(100.0, -50.0, 40.0);
        let t = transform(&state, Degrees(0.0));
        assert_abs_diff_eq!(t.sigma_x, 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.sigma_z, -50.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.tau, 40.0, epsilon = 1e-12);
    }

    #[test]
    fn test_extreme_equal_normals() {
        let result = calculate(&MohrInput::new(1e308, 1e308, 0.0, 0.0)).unwrap();
        assert_eq!(result.circle.center, 1e308);
        assert_eq!(result.circle.radius, 0.0);
        assert_eq!(result.principal.major, 1e308);
        assert_eq!(result.principal.minor, 1e308);
        assert_eq!(result.transformed.sigma_x, 1e308);
        assert_eq!(result.transformed.tau, 0.0);
    }

    #[test]
    fn test_extreme_opposite_normals() {
        let result = calculate(&MohrInput::new(f64::MAX, -f64::MAX, 0.0, 0.0)).unwrap();
        assert_eq!(result.circle.center, 0.0);
        assert_eq!(result.circle.radius, f64::MAX);
        assert_eq!(result.max_shear, f64::MAX);
        assert_eq!(result.transformed.sigma_x, f64::MAX);
        assert_eq!(result.transformed.sigma_z, -f64::MAX);
        assert_eq!(result.transformed.tau, 0.0);
        assert!(result.plot.circle.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn test_quarter_turn_swaps_faces() {
        let state = StressState::new(80.0, 20.0, -30.0);
        let a = transform(&state, Degrees(17.0));
        let b = transform(&state, Degrees(107.0));
        assert_abs_diff_eq!(b.sigma_x, a.sigma_z, epsilon = 1e-9);
        assert_abs_diff_eq!(b.sigma_z, a.sigma_x, epsilon = 1e-9);
        assert_abs_diff_eq!(b.tau, -a.tau, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_state_is_degenerate() {
        let result = calculate(&MohrInput::default()).unwrap();
        assert_eq!(result.circle.center, 0.0);
        assert_eq!(result.circle.radius, 0.0);
        assert!(result.circle.is_degenerate());
        assert_eq!(result.principal.major, 0.0);
        assert_eq!(result.principal.minor, 0.0);

        for theta in [-90.0, -30.0, 0.0, 12.5, 45.0, 270.0] {
            let t = transform(&StressState::default(), Degrees(theta));
            assert_eq!(t.sigma_x, 0.0);
            assert_eq!(t.sigma_z, 0.0);
            assert_eq!(t.tau, 0.0);
        }
    }

    #[test]
    fn test_isotropic_state_is_degenerate() {
        let circle = circle_geometry(&StressState::new(-40.0, -40.0, 0.0));
        assert_eq!(circle.center, -40.0);
        assert!(circle.is_degenerate());
    }

    #[test]
    fn test_pure_shear() {
        let result = calculate(&MohrInput::new(0.0, 0.0, 50.0, 0.0)).unwrap();
        assert_eq!(result.circle.center, 0.0);
        assert_relative_eq!(result.circle.radius, 50.0);
        assert_relative_eq!(result.principal.major, 50.0);
        assert_relative_eq!(result.principal.minor, -50.0);
    }

    #[test]
    fn test_inclination_outside_conventional_range() {
        let state = StressState::new(100.0, -50.0, 40.0);
        let a = transform(&state, Degrees(30.0));
        let b = transform(&state, Degrees(210.0));
        assert_abs_diff_eq!(a.sigma_x, b.sigma_x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.tau, b.tau, epsilon = 1e-9);
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let input = MohrInput::new(f64::NAN, 0.0, 0.0, 0.0);
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.field(), Some("sigma_x"));

        let input = MohrInput::new(0.0, 0.0, 0.0, f64::INFINITY);
        assert_eq!(calculate(&input).unwrap_err().field(), Some("theta"));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = PlotSettings { circle_samples: 0 };
        assert!(calculate_with(&worked_example(0.0), &settings).is_err());

        let settings = PlotSettings { circle_samples: usize::MAX };
        let err = calculate_with(&worked_example(0.0), &settings).unwrap_err();
        assert_eq!(err.field(), Some("circle_samples"));
    }

    #[test]
    fn test_reset() {
        let mut input = worked_example(30.0);
        input.reset();
        assert_eq!(input, MohrInput::default());
        assert_eq!(input.theta, Degrees(0.0));
    }

    #[test]
    fn test_deterministic() {
        let a = calculate(&worked_example(33.3)).unwrap();
        let b = calculate(&worked_example(33.3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serialization() {
        let input = worked_example(45.0);
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: MohrInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = calculate(&input).unwrap();
        let json = result.to_json_pretty().unwrap();
        assert!(json.contains("\"max_shear\""));
    }
}
