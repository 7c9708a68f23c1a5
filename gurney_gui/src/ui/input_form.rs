//! Calculator form
//!
//! Alloy pick list, inner diameter and wall thickness inputs, and the
//! "Add Result" button. Values are kept as raw text and validated by the
//! calculator on submit.

use iced::widget::{button, column, pick_list, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::{App, Message};

/// Render the input form
pub fn view(app: &App) -> Column<'_, Message> {
    let alloy_row = row![
        text("Select Alloy").size(12).width(Length::Fixed(180.0)),
        pick_list(
            &app.alloy_ids[..],
            app.selected_alloy.clone(),
            Message::AlloySelected
        )
        .placeholder("-- Choose Alloy --")
        .width(Length::Fill)
        .text_size(12),
    ]
    .align_y(Alignment::Center);

    let mut form = column![
        text("New Result").size(14),
        Space::new().height(4),
        alloy_row,
        labeled_input(
            "Internal Diameter (d, nm)",
            "e.g., 50000",
            &app.diameter_nm,
            Message::DiameterChanged
        ),
        labeled_input(
            "Wall Thickness (t, nm)",
            "e.g., 1000",
            &app.thickness_nm,
            Message::ThicknessChanged
        ),
        Space::new().height(4),
        button(text("Add Result").size(12))
            .on_press(Message::AddResult)
            .padding(Padding::from([6, 16]))
            .width(Length::Fill)
            .style(button::primary),
    ]
    .spacing(6);

    if let Some(ref error) = app.error_message {
        form = form.push(text(error).size(11).color([0.8, 0.2, 0.2]));
    }

    form
}

/// Helper to create a labeled text input that submits on Enter
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(12).width(Length::Fixed(180.0)),
        text_input(placeholder, value)
            .on_input(on_change)
            .on_submit(Message::AddResult)
            .width(Length::Fill)
            .padding(4)
            .size(12),
    ]
    .align_y(Alignment::Center)
    .into()
}
