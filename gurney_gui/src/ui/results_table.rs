//! Results table
//!
//! One row per stored result with a selection checkbox and a delete button.
//! Values come pre-formatted from `gurney_core::presentation`.

use iced::widget::{button, checkbox, column, container, row, text, Column, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use gurney_core::presentation::{rows, ResultRow, COLUMN_HEADERS};
use gurney_core::ResultStore;

use crate::Message;

/// Relative column widths, matching `COLUMN_HEADERS`
const COLUMN_PORTIONS: [u16; 8] = [1, 3, 2, 2, 3, 3, 3, 4];

/// Render the results table
pub fn view(store: &ResultStore) -> Element<'_, Message> {
    let title = text("Results").size(14);

    if store.is_empty() {
        return column![
            title,
            Space::new().height(4),
            text("No results yet.").size(11).color([0.5, 0.5, 0.5]),
        ]
        .into();
    }

    let mut header: Row<'_, Message> = row![text("Sel").size(11).width(Length::Fixed(36.0))];
    for (label, portion) in COLUMN_HEADERS.iter().zip(COLUMN_PORTIONS) {
        header = header.push(text(*label).size(11).width(Length::FillPortion(portion)));
    }
    header = header.push(Space::new().width(Length::Fixed(64.0)));

    let mut table: Column<'_, Message> = column![header].spacing(2);
    for result_row in rows(store) {
        table = table.push(view_row(result_row));
    }

    column![
        title,
        Space::new().height(4),
        container(table.padding(6))
            .width(Length::Fill)
            .style(container::bordered_box),
    ]
    .into()
}

fn view_row(result_row: ResultRow) -> Element<'static, Message> {
    let id = result_row.id;

    let mut line: Row<'static, Message> = row![checkbox(result_row.selected)
        .on_toggle(move |_| Message::ToggleSelect(id))
        .width(Length::Fixed(36.0))]
    .align_y(Alignment::Center);

    for (cell, portion) in result_row.cells().into_iter().zip(COLUMN_PORTIONS) {
        line = line.push(text(cell).size(11).width(Length::FillPortion(portion)));
    }

    line.push(
        button(text("Delete").size(10))
            .on_press(Message::DeleteResult(id))
            .padding(Padding::from([2, 8]))
            .width(Length::Fixed(64.0))
            .style(button::danger),
    )
    .into()
}
