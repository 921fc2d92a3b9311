//! # Input Form
//!
//! Front ends collect the four inputs as text. [`StressInputForm`] holds that
//! text exactly as typed and turns it into a validated [`MohrInput`]. Text that
//! does not parse is reported as a [`CalcError`]; it is never replaced by a
//! default.
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::input::{InputField, StressInputForm};
//!
//! let mut form = StressInputForm::default();
//! form.set(InputField::SigmaX, "100");
//! form.set(InputField::SigmaZ, "-50");
//! form.set(InputField::TauXz, "40");
//! form.set(InputField::Theta, "45");
//!
//! let input = form.parse().unwrap();
//! assert_eq!(input.sigma_z, -50.0);
//!
//! form.set(InputField::SigmaZ, "fifty");
//! assert_eq!(form.parse().unwrap_err().field(), Some("sigma_z"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::mohr_circle::MohrInput;
use crate::errors::{CalcError, CalcResult};

/// Initial and reset value of every field
pub const DEFAULT_FIELD_VALUE: &str = "0";

/// The four canonical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    SigmaX,
    SigmaZ,
    TauXz,
    Theta,
}

impl InputField {
    /// All fields, in form order
    pub const ALL: [InputField; 4] = [
        InputField::SigmaX,
        InputField::SigmaZ,
        InputField::TauXz,
        InputField::Theta,
    ];

    /// Label shown next to the input box
    pub fn label(self) -> &'static str {
        match self {
            InputField::SigmaX => "Horizontal Stress",
            InputField::SigmaZ => "Vertical Stress",
            InputField::TauXz => "Shear Stress",
            InputField::Theta => "Inclination",
        }
    }

    /// Machine name, as used in JSON and error messages
    pub fn key(self) -> &'static str {
        match self {
            InputField::SigmaX => "sigma_x",
            InputField::SigmaZ => "sigma_z",
            InputField::TauXz => "tau_xz",
            InputField::Theta => "theta",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            InputField::SigmaX => "σx",
            InputField::SigmaZ => "σz",
            InputField::TauXz => "τxz",
            InputField::Theta => "θ",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw text of the four input boxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressInputForm {
    pub sigma_x: String,
    pub sigma_z: String,
    pub tau_xz: String,
    pub theta: String,
}

impl Default for StressInputForm {
    fn default() -> Self {
        StressInputForm {
            sigma_x: DEFAULT_FIELD_VALUE.to_string(),
            sigma_z: DEFAULT_FIELD_VALUE.to_string(),
            tau_xz: DEFAULT_FIELD_VALUE.to_string(),
            theta: DEFAULT_FIELD_VALUE.to_string(),
        }
    }
}

impl StressInputForm {
    /// Fill the form from already-parsed values.
    pub fn from_input(input: &MohrInput) -> Self {
        StressInputForm {
            sigma_x: input.sigma_x.to_string(),
            sigma_z: input.sigma_z.to_string(),
            tau_xz: input.tau_xz.to_string(),
            theta: input.theta.0.to_string(),
        }
    }

    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::SigmaX => &self.sigma_x,
            InputField::SigmaZ => &self.sigma_z,
            InputField::TauXz => &self.tau_xz,
            InputField::Theta => &self.theta,
        }
    }

    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        let slot = match field {
            InputField::SigmaX => &mut self.sigma_x,
            InputField::SigmaZ => &mut self.sigma_z,
            InputField::TauXz => &mut self.tau_xz,
            InputField::Theta => &mut self.theta,
        };
        *slot = value.into();
    }

    /// Set every field, vertical stress included, back to `"0"`.
    pub fn reset(&mut self) {
        *self = StressInputForm::default();
    }

    /// Parse all four fields.
    ///
    /// The first failing field, in form order, is reported.
    pub fn parse(&self) -> CalcResult<MohrInput> {
        Ok(MohrInput::new(
            parse_field(InputField::SigmaX, &self.sigma_x)?,
            parse_field(InputField::SigmaZ, &self.sigma_z)?,
            parse_field(InputField::TauXz, &self.tau_xz)?,
            parse_field(InputField::Theta, &self.theta)?,
        ))
    }
}

/// Parse one field as a finite real number.
///
/// Surrounding whitespace is ignored. Blank text is a missing field; text that
/// is not a number, or parses to NaN or infinity, is invalid input.
pub fn parse_field(field: InputField, raw: &str) -> CalcResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        debug!(field = field.key(), "blank input field");
        return Err(CalcError::missing_field(field.key()));
    }

    let value: f64 = trimmed.parse().map_err(|_| {
        debug!(field = field.key(), value = trimmed, "rejected non-numeric input");
        CalcError::invalid_input(
            field.key(),
            trimmed,
            format!("{} must be a number", field.label()),
        )
    })?;

    ensure_finite(field, value)
}

/// Reject NaN and infinities.
pub fn ensure_finite(field: InputField, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field.key(),
            value.to_string(),
            format!("{} must be a finite number", field.label()),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worked_form() -> StressInputForm {
        StressInputForm {
            sigma_x: "100".to_string(),
            sigma_z: "-50".to_string(),
            tau_xz: "40".to_string(),
            theta: "45".to_string(),
        }
    }

    #[test]
    fn test_default_form_parses_to_zero() {
        let input = StressInputForm::default().parse().unwrap();
        assert_eq!(input, MohrInput::default());
    }

    #[test]
    fn test_parse_valid() {
        let input = worked_form().parse().unwrap();
        assert_eq!(input, MohrInput::new(100.0, -50.0, 40.0, 45.0));
    }

    #[test]
    fn test_whitespace_and_exponents() {
        let mut form = worked_form();
        form.set(InputField::SigmaX, "  1.5e2 ");
        assert_eq!(form.parse().unwrap().sigma_x, 150.0);
    }

    #[test]
    fn test_non_numeric_is_invalid() {
        let mut form = worked_form();
        form.set(InputField::SigmaZ, "abc");
        match form.parse().unwrap_err() {
            CalcError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "sigma_z");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_is_missing() {
        let mut form = worked_form();
        form.set(InputField::Theta, "   ");
        assert_eq!(form.parse().unwrap_err(), CalcError::missing_field("theta"));
    }

    #[test]
    fn test_non_finite_is_invalid() {
        for text in ["NaN", "inf", "-infinity"] {
            let mut form = worked_form();
            form.set(InputField::TauXz, text);
            let err = form.parse().unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
            assert_eq!(err.field(), Some("tau_xz"));
        }
    }

    #[test]
    fn test_first_failing_field_reported() {
        let mut form = worked_form();
        form.set(InputField::Theta, "x");
        form.set(InputField::SigmaX, "y");
        assert_eq!(form.parse().unwrap_err().field(), Some("sigma_x"));
    }

    #[test]
    fn test_reset_clears_all_four() {
        let mut form = worked_form();
        form.reset();
        for field in InputField::ALL {
            assert_eq!(form.get(field), DEFAULT_FIELD_VALUE);
        }
        assert_eq!(form.parse().unwrap(), MohrInput::default());
    }

    #[test]
    fn test_from_input() {
        let form = StressInputForm::from_input(&MohrInput::new(1.5, -2.0, 0.0, 30.0));
        assert_eq!(form.sigma_x, "1.5");
        assert_eq!(form.sigma_z, "-2");
        assert_eq!(form.parse().unwrap().theta.0, 30.0);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = InputField::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(labels, ["Horizontal Stress", "Vertical Stress", "Shear Stress", "Inclination"]);
    }
}
