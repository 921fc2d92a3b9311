//! # Mohr GUI Application
//!
//! Graphical interface for Mohr's circle of stress.
//! Built with Iced framework for cross-platform support (Windows, macOS, Linux, WASM).
//!
//! Every edit to an input box re-parses the whole form and recomputes the
//! result from scratch; the app keeps only the raw text and the last outcome.

mod ui;

use iced::widget::{column, container, row, Space};
use iced::{Element, Length, Theme};
use tracing::{info, warn};

use mohr_core::calculations::mohr_circle::{calculate_with, MohrResult};
use mohr_core::input::{InputField, StressInputForm};
use mohr_core::settings::MohrSettings;
use mohr_core::CalcError;

/// Share of the window width given to the input panel
const INPUT_PANEL_RATIO: f32 = 0.3;

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(InputField, String),
    ClearEntries,
    ToggleDarkMode,
}

pub struct App {
    /// Raw text of the four input boxes
    pub form: StressInputForm,
    pub settings: MohrSettings,

    /// Result of the last recalculation, or why the form was rejected
    pub outcome: Result<MohrResult, CalcError>,
    pub status: String,
    pub dark_mode: bool,
}

impl App {
    fn new() -> Self {
        let form = StressInputForm::default();
        let settings = MohrSettings::default();
        let mut app = App {
            outcome: evaluate(&form, &settings),
            form,
            settings,
            status: String::new(),
            dark_mode: false,
        };
        app.update_status();
        app
    }

    fn title(&self) -> String {
        "Mohr's Circle Demonstrator".to_string()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::FieldChanged(field, value) => {
                self.form.set(field, value);
                self.recalculate();
            }
            Message::ClearEntries => {
                self.form.reset();
                self.recalculate();
                info!("cleared entries");
                self.status = "Entries cleared".to_string();
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
        }
    }

    fn recalculate(&mut self) {
        self.outcome = evaluate(&self.form, &self.settings);
        if let Err(e) = &self.outcome {
            warn!(error = %e, "input rejected");
        }
        self.update_status();
    }

    fn update_status(&mut self) {
        self.status = match &self.outcome {
            Ok(result) if result.circle.is_degenerate() => "Isotropic stress state".to_string(),
            Ok(_) => "Ready".to_string(),
            Err(e) => format!("Input error ({})", e.error_code()),
        };
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header(self.title(), self.dark_mode);

        let panels = row![
            ui::input_panel::view_input_panel(self, INPUT_PANEL_RATIO),
            Space::new().width(10),
            ui::results_panel::view_results_panel(self, INPUT_PANEL_RATIO),
        ]
        .height(Length::Fill);

        let status_bar = ui::status_bar::view_status_bar(&self.status);

        container(column![header, panels, status_bar].spacing(8))
            .padding(10)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn evaluate(form: &StressInputForm, settings: &MohrSettings) -> Result<MohrResult, CalcError> {
    form.parse().and_then(|input| calculate_with(&input, &settings.plot))
}

fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let _ = mohr_core::telemetry::init_tracing(mohr_core::telemetry::GUI_DEFAULT_FILTER);
    info!("starting Mohr's circle GUI");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size((1100.0, 760.0))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_zero_state() {
        let app = App::new();
        let result = app.outcome.as_ref().unwrap();
        assert!(result.circle.is_degenerate());
        assert_eq!(app.status, "Isotropic stress state");
    }

    #[test]
    fn test_field_change_recalculates() {
        let mut app = App::new();
        app.update(Message::FieldChanged(InputField::SigmaX, "100".to_string()));
        app.update(Message::FieldChanged(InputField::SigmaZ, "-50".to_string()));
        app.update(Message::FieldChanged(InputField::TauXz, "40".to_string()));

        let result = app.outcome.as_ref().unwrap();
        assert!((result.circle.radius - 85.0).abs() < 1e-9);
        assert_eq!(app.status, "Ready");
    }

    #[test]
    fn test_bad_input_shows_error() {
        let mut app = App::new();
        app.update(Message::FieldChanged(InputField::Theta, "forty".to_string()));
        let err = app.outcome.as_ref().unwrap_err();
        assert_eq!(err.field(), Some("theta"));
        assert!(err.to_string().contains("theta"));
        assert!(app.status.contains("INVALID_INPUT"));
    }

    #[test]
    fn test_fixing_input_clears_error() {
        let mut app = App::new();
        app.update(Message::FieldChanged(InputField::SigmaX, "".to_string()));
        assert_eq!(app.outcome.as_ref().unwrap_err().error_code(), "MISSING_FIELD");

        app.update(Message::FieldChanged(InputField::SigmaX, "10".to_string()));
        assert!(app.outcome.is_ok());
        assert_eq!(app.status, "Ready");
    }

    #[test]
    fn test_clear_entries_resets_all_fields() {
        let mut app = App::new();
        app.update(Message::FieldChanged(InputField::SigmaZ, "abc".to_string()));
        app.update(Message::ClearEntries);

        for field in InputField::ALL {
            assert_eq!(app.form.get(field), "0");
        }
        assert!(app.outcome.is_ok());
        assert_eq!(app.status, "Entries cleared");
    }
}
