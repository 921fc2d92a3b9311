//! Results view for Mohr's circle calculations
//!
//! Shows:
//! - Properties of Mohr's Circle (radius, centre)
//! - Results of Stress Analysis (max shear, principal and transformed stresses)
//! - The diagram

use iced::widget::{text, Canvas, Column, Space};
use iced::{Element, Length};

use mohr_core::calculations::mohr_circle::MohrResult;
use mohr_core::report::ResultsReport;
use mohr_core::settings::ReportSettings;

use crate::Message;
use super::shared::diagrams::MohrDiagram;

/// Render the calculation results
pub fn view<'a>(result: &'a MohrResult, settings: &ReportSettings) -> Column<'a, Message> {
    let mut content = view_calculation_results(result, settings);

    if result.circle.is_degenerate() {
        content = content.push(
            text("Isotropic stress state: the circle collapses to a single point")
                .size(10)
                .color([0.9, 0.5, 0.0]),
        );
    }

    let canvas_widget: Element<'_, Message> = Canvas::new(MohrDiagram::new(result.plot.clone()))
        .width(Length::Fill)
        .height(Length::Fixed(460.0))
        .into();

    content
        .push(Space::new().height(15))
        .push(canvas_widget)
}

/// Render the report sections as text
fn view_calculation_results<'a>(result: &'a MohrResult, settings: &ReportSettings) -> Column<'a, Message> {
    let report = ResultsReport::from_result(result, settings);
    let mut content = Column::new().push(text("Calculation Results").size(14));

    for section in report.sections {
        content = content
            .push(Space::new().height(12))
            .push(text(section.title).size(12));
        for line in section.lines {
            content = content.push(text(line.to_string()).size(11));
        }
    }

    content
}
