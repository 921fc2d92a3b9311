//! Results Panel (Right Side)
//!
//! Shows the input error when the form does not parse, otherwise the
//! calculation results and diagram.

use iced::widget::{column, container, scrollable, text, Column, Space};
use iced::{Element, Length};

use crate::{App, Message};
use super::result_mohr_circle;

/// Render the results panel based on the current calculation state
///
/// The `input_ratio` parameter is the ratio used by the input panel.
/// This panel uses the complementary ratio (1 - input_ratio).
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let content: Column<'_, Message> = match &app.outcome {
        Ok(result) => result_mohr_circle::view(result, &app.settings.report),
        Err(error) => column![
            text("Input Error").size(14),
            Space::new().height(8),
            text(error.to_string()).size(12).color([0.8, 0.2, 0.2]),
        ],
    };

    // Use complementary ratio (scale to 0-100 for better precision)
    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}
