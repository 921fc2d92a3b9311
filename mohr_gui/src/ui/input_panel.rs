//! Input Panel (Left)
//!
//! One text box per stress input, each followed by the value as parsed, and a
//! "Clear Entries" button that resets all four fields.

use iced::widget::{button, container, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use mohr_core::input::{parse_field, InputField};

use crate::{App, Message};

/// Render the input panel
///
/// The `ratio` parameter determines the relative size of this panel vs results panel.
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let mut panel = Column::new()
        .spacing(6)
        .push(text("Input Parameters:").size(14))
        .push(Space::new().height(8));

    for field in InputField::ALL {
        let raw = app.form.get(field);
        panel = panel
            .push(labeled_input(field, raw))
            .push(parsed_value(field, raw));
    }

    panel = panel.push(Space::new().height(10)).push(
        button(text("Clear Entries").size(11))
            .on_press(Message::ClearEntries)
            .padding(Padding::from([6, 12])),
    );

    // Convert ratio to fill portion (scale to 0-100 for better precision)
    let portion = (ratio * 100.0) as u16;

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Echo of the parsed value under each box, e.g. `σx: 100`
fn parsed_value(field: InputField, raw: &str) -> Element<'static, Message> {
    match parse_field(field, raw) {
        Ok(value) => text(format!("{}: {}", field.symbol(), value))
            .size(10)
            .color([0.5, 0.5, 0.5])
            .into(),
        Err(_) => text(format!("{}: not a number", field.symbol()))
            .size(10)
            .color([0.8, 0.2, 0.2])
            .into(),
    }
}

fn labeled_input<'a>(field: InputField, value: &'a str) -> Element<'a, Message> {
    row![
        text(format!("{}:", field.label())).size(11).width(Length::Fixed(110.0)),
        text_input("0", value)
            .on_input(move |v| Message::FieldChanged(field, v))
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
