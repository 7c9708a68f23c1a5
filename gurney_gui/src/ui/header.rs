//! Application header

use iced::widget::{column, text};
use iced::{Element, Length};

use crate::Message;

/// Render the title block
pub fn view_header() -> Element<'static, Message> {
    column![
        text("Gurney Velocity & Fragment Efficiency Calculator").size(22),
        text("vf = 2830 · (Ms/Mc + 0.5)^-0.5    fragment size = d/t    efficiency = C/Ms")
            .size(11)
            .color([0.5, 0.5, 0.5]),
    ]
    .spacing(4)
    .width(Length::Fill)
    .into()
}
