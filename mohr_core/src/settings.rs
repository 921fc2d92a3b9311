//! # Settings
//!
//! Configuration shared by the front ends: how finely the circle is sampled
//! and how many decimals the report shows. Every field has a default, so a
//! partial JSON document (or an empty one) is a valid configuration.
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::settings::MohrSettings;
//!
//! let settings = MohrSettings::from_json(r#"{ "plot": { "circle_samples": 361 } }"#).unwrap();
//! assert_eq!(settings.plot.circle_samples, 361);
//! assert_eq!(settings.report.decimal_places, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default number of circle samples (closed interval, first == last)
pub const DEFAULT_CIRCLE_SAMPLES: usize = 101;

/// Upper bound for `circle_samples`
pub const MAX_CIRCLE_SAMPLES: usize = 100_000;

/// Default number of decimals in formatted results
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

/// Upper bound for `decimal_places`
pub const MAX_DECIMAL_PLACES: usize = 10;

/// Root settings container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MohrSettings {
    /// Plot geometry settings
    pub plot: PlotSettings,

    /// Result formatting settings
    pub report: ReportSettings,
}

impl MohrSettings {
    /// Validate all sections.
    pub fn validate(&self) -> CalcResult<()> {
        self.plot.validate()?;
        self.report.validate()
    }

    /// Parse settings from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: MohrSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Plot geometry settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    /// Number of points sampled around the circle, endpoints included
    pub circle_samples: usize,
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            circle_samples: DEFAULT_CIRCLE_SAMPLES,
        }
    }
}

impl PlotSettings {
    /// A closed polyline needs at least a start and an end point.
    pub fn validate(&self) -> CalcResult<()> {
        if self.circle_samples < 2 {
            return Err(CalcError::invalid_input(
                "circle_samples",
                self.circle_samples.to_string(),
                "At least 2 samples are needed to close the circle",
            ));
        }
        if self.circle_samples > MAX_CIRCLE_SAMPLES {
            return Err(CalcError::invalid_input(
                "circle_samples",
                self.circle_samples.to_string(),
                format!("Circle samples must be at most {}", MAX_CIRCLE_SAMPLES),
            ));
        }
        Ok(())
    }
}

/// Result formatting settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Decimals shown for every reported value
    pub decimal_places: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

impl ReportSettings {
    pub fn validate(&self) -> CalcResult<()> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(CalcError::invalid_input(
                "decimal_places",
                self.decimal_places.to_string(),
                format!("Decimal places must be at most {}", MAX_DECIMAL_PLACES),
            ));
        }
        Ok(())
    }
}
