//! Display (Top)
//!
//! Shows the angle-mode indicator above the right-aligned display text.

use calc_core::AngleMode;
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Render the display panel
pub fn view_display(display: &str, mode: AngleMode) -> Element<'_, Message> {
    column![
        text(mode.label()).size(12).color([0.5, 0.5, 0.5]),
        container(text(display).size(36))
            .width(Length::Fill)
            .align_x(Alignment::End),
    ]
    .spacing(4)
    .into()
}
