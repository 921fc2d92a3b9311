//! # Results Report
//!
//! Labelled scalar results, grouped the way the results panel shows them:
//!
//! ```text
//! Properties of Mohr's Circle
//!   Radius: 85.00
//!   Centre: 25.00
//! Results of Stress Analysis
//!   Maximum Shear Stress: 85.00
//!   Major Principle Stress: 110.00
//!   ...
//! ```
//!
//! Labels are kept verbatim (including "Principle") so output matches the
//! terminology users already know from the tool.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::mohr_circle::MohrResult;
use crate::settings::ReportSettings;

/// One reported quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportItem {
    Radius,
    Centre,
    MaximumShearStress,
    MajorPrincipalStress,
    MinorPrincipalStress,
    TransformedLateralStress,
    TransformedLongitudinalStress,
    TransformedShearStress,
}

impl ReportItem {
    pub fn label(self) -> &'static str {
        match self {
            ReportItem::Radius => "Radius",
            ReportItem::Centre => "Centre",
            ReportItem::MaximumShearStress => "Maximum Shear Stress",
            ReportItem::MajorPrincipalStress => "Major Principle Stress",
            ReportItem::MinorPrincipalStress => "Minor Principle Stress",
            ReportItem::TransformedLateralStress => "Transformed Lateral Stress",
            ReportItem::TransformedLongitudinalStress => "Transformed Longitudinal Stress",
            ReportItem::TransformedShearStress => "Transformed Shear Stress",
        }
    }

    pub fn value(self, result: &MohrResult) -> f64 {
        match self {
            ReportItem::Radius => result.circle.radius,
            ReportItem::Centre => result.circle.center,
            ReportItem::MaximumShearStress => result.max_shear,
            ReportItem::MajorPrincipalStress => result.principal.major,
            ReportItem::MinorPrincipalStress => result.principal.minor,
            ReportItem::TransformedLateralStress => result.transformed.sigma_x,
            ReportItem::TransformedLongitudinalStress => result.transformed.sigma_z,
            ReportItem::TransformedShearStress => result.transformed.tau,
        }
    }
}

/// Section titles and their items, in display order
const SECTIONS: [(&str, &[ReportItem]); 2] = [
    (
        "Properties of Mohr's Circle",
        &[ReportItem::Radius, ReportItem::Centre],
    ),
    (
        "Results of Stress Analysis",
        &[
            ReportItem::MaximumShearStress,
            ReportItem::MajorPrincipalStress,
            ReportItem::MinorPrincipalStress,
            ReportItem::TransformedLateralStress,
            ReportItem::TransformedLongitudinalStress,
            ReportItem::TransformedShearStress,
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub item: ReportItem,
    pub label: String,
    pub value: f64,
    pub formatted: String,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.formatted)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub lines: Vec<ReportLine>,
}

/// Formatted results, ready for a text panel or terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsReport {
    pub sections: Vec<ReportSection>,
}

impl ResultsReport {
    pub fn from_result(result: &MohrResult, settings: &ReportSettings) -> Self {
        let sections = SECTIONS
            .iter()
            .map(|(title, items)| ReportSection {
                title: title.to_string(),
                lines: items
                    .iter()
                    .map(|&item| {
                        let value = item.value(result);
                        ReportLine {
                            item,
                            label: item.label().to_string(),
                            value,
                            formatted: format_value(value, settings.decimal_places),
                        }
                    })
                    .collect(),
            })
            .collect();

        ResultsReport { sections }
    }

    /// Find the line for an item
    pub fn line(&self, item: ReportItem) -> Option<&ReportLine> {
        self.sections
            .iter()
            .flat_map(|s| s.lines.iter())
            .find(|l| l.item == item)
    }
}

impl fmt::Display for ResultsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", section.title)?;
            for line in &section.lines {
                writeln!(f, "  {}", line)?;
            }
        }
        Ok(())
    }
}

/// Format with a fixed number of decimals. Negative zero prints as zero.
pub fn format_value(value: f64, decimals: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::mohr_circle::{calculate, MohrInput};

    fn worked_report(theta: f64) -> ResultsReport {
        let result = calculate(&MohrInput::new(100.0, -50.0, 40.0, theta)).unwrap();
        ResultsReport::from_result(&result, &ReportSettings::default())
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(85.0, 2), "85.00");
        assert_eq!(format_value(-0.0, 2), "0.00");
        assert_eq!(format_value(1.005, 0), "1");
        assert_eq!(format_value(-15.0, 3), "-15.000");
    }

    #[test]
    fn test_sections() {
        let report = worked_report(0.0);
        assert_eq!(report.sections.len(), 2);
        assert_eq!(report.sections[0].title, "Properties of Mohr's Circle");
        assert_eq!(report.sections[0].lines.len(), 2);
        assert_eq!(report.sections[1].title, "Results of Stress Analysis");
        assert_eq!(report.sections[1].lines.len(), 6);
    }

    #[test]
    fn test_worked_example_lines() {
        let report = worked_report(45.0);
        let text = |item| report.line(item).unwrap().to_string();

        assert_eq!(text(ReportItem::Radius), "Radius: 85.00");
        assert_eq!(text(ReportItem::Centre), "Centre: 25.00");
        assert_eq!(text(ReportItem::MaximumShearStress), "Maximum Shear Stress: 85.00");
        assert_eq!(text(ReportItem::MajorPrincipalStress), "Major Principle Stress: 110.00");
        assert_eq!(text(ReportItem::MinorPrincipalStress), "Minor Principle Stress: -60.00");
        assert_eq!(text(ReportItem::TransformedLateralStress), "Transformed Lateral Stress: 65.00");
        assert_eq!(text(ReportItem::TransformedLongitudinalStress), "Transformed Longitudinal Stress: -15.00");
        assert_eq!(text(ReportItem::TransformedShearStress), "Transformed Shear Stress: -75.00");
    }

    #[test]
    fn test_display() {
        let text = worked_report(0.0).to_string();
        assert!(text.starts_with("Properties of Mohr's Circle\n  Radius: 85.00\n"));
        assert!(text.contains("\nResults of Stress Analysis\n"));
        assert!(text.contains("  Transformed Shear Stress: 40.00\n"));
    }

    #[test]
    fn test_decimal_places_setting() {
        let result = calculate(&MohrInput::new(1.0, 0.0, 0.0, 0.0)).unwrap();
        let report = ResultsReport::from_result(&result, &ReportSettings { decimal_places: 4 });
        assert_eq!(report.line(ReportItem::Centre).unwrap().formatted, "0.5000");
    }
}
