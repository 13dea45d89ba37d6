//! Status Bar (Bottom)
//!
//! Displays:
//! - Current angle mode
//! - Error code of the last failed operation
//! - Light/dark theme toggle

use calc_core::{AngleMode, CalcError};
use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(
    mode: AngleMode,
    last_error: Option<&CalcError>,
    dark_mode: bool,
) -> Element<'static, Message> {
    let mode_info = match mode {
        AngleMode::Radians => "Radians",
        AngleMode::Degrees => "Degrees",
    };

    let error_info = last_error
        .map(|e| e.error_code().to_string())
        .unwrap_or_default();

    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    row![
        text(mode_info).size(10),
        Space::new().width(Length::Fill),
        text(error_info).size(10).color([0.6, 0.3, 0.0]),
        button(text(theme_label).size(10))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([2, 8]))
            .style(button::secondary),
    ]
    .spacing(8)
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
