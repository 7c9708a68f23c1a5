//! Status Bar (Bottom)
//!
//! Displays the last status message and store counts.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(status: &str, result_count: usize, selected_count: usize) -> Element<'_, Message> {
    row![
        text(status).size(10),
        Space::new().width(Length::Fill),
        text(format!("{} result(s), {} selected", result_count, selected_count)).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
