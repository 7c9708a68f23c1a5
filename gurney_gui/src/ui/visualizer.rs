//! Selection visualizer
//!
//! Draws one card per selected result: a circle whose color and size encode
//! efficiency, and a velocity bar that fills faster for faster fragments.
//! Cards fade in one after another. All encodings are relative to the
//! current selection.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, column, row, scrollable, text, Canvas, Space};
use iced::{Alignment, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

use gurney_core::presentation::{format_derived, VisualEncoding, CIRCLE_RANGE_PX, MIN_CIRCLE_PX};

use crate::Message;

/// Card width (px)
const CARD_WIDTH: f32 = 190.0;
/// Card height (px)
const CARD_HEIGHT: f32 = 260.0;
/// Horizontal gap between cards (px)
const CARD_GAP: f32 = 16.0;

/// Render the visualizer section
pub fn view(encodings: Vec<VisualEncoding>, elapsed_secs: f64) -> Element<'static, Message> {
    let count = encodings.len();
    let canvas_width = count as f32 * (CARD_WIDTH + CARD_GAP) + CARD_GAP;

    let cards = Canvas::new(SelectionCards {
        encodings,
        elapsed_secs,
    })
    .width(Length::Fixed(canvas_width))
    .height(Length::Fixed(CARD_HEIGHT + 2.0 * CARD_GAP));

    let controls = row![
        text(format!("Visualizing {} selected result(s)", count)).size(14),
        Space::new().width(Length::Fill),
        button(text("Restart Animation").size(11))
            .on_press(Message::RestartAnimation)
            .style(button::secondary),
    ]
    .align_y(Alignment::Center);

    column![
        controls,
        scrollable(cards).direction(Direction::Horizontal(Scrollbar::default())),
        view_legend(),
    ]
    .spacing(8)
    .into()
}

fn view_legend() -> Element<'static, Message> {
    column![
        text("Legend").size(12),
        text(format!(
            "Circle: color runs red (lowest efficiency) to green (highest); diameter {:.0}-{:.0} px",
            MIN_CIRCLE_PX,
            MIN_CIRCLE_PX + CIRCLE_RANGE_PX
        ))
        .size(10),
        text("Bar: fills sooner for higher fragment velocity").size(10),
        text("Values are relative to the current selection").size(10).color([0.5, 0.5, 0.5]),
    ]
    .spacing(2)
    .into()
}

fn card_velocity_label(velocity_m_s: f64) -> String {
    format!("vf = {} m/s", format_derived(velocity_m_s))
}

fn card_ratio_label(fragment_ratio: f64) -> String {
    format!("d/t = {}", format_derived(fragment_ratio))
}

/// Canvas program for the selected result cards
struct SelectionCards {
    encodings: Vec<VisualEncoding>,
    elapsed_secs: f64,
}

impl SelectionCards {
    fn draw_card(&self, frame: &mut Frame, encoding: &VisualEncoding, origin: Point) {
        let entry = encoding.entry_progress(self.elapsed_secs) as f32;
        if entry <= 0.0 {
            return;
        }

        let text_color = Color { a: entry, ..Color::from_rgb(0.2, 0.2, 0.2) };
        let muted = Color { a: entry, ..Color::from_rgb(0.5, 0.5, 0.5) };
        let center_x = origin.x + CARD_WIDTH / 2.0;

        // Card outline
        let outline = Path::rectangle(origin, Size::new(CARD_WIDTH, CARD_HEIGHT));
        frame.stroke(&outline, Stroke::default().with_color(muted).with_width(1.0));

        // Efficiency circle, grows in with the card
        let [r, g, b] = encoding.color.to_unit();
        let radius = encoding.size_px as f32 / 2.0 * entry;
        let circle_center = Point::new(center_x, origin.y + 12.0 + (MIN_CIRCLE_PX + CIRCLE_RANGE_PX) as f32 / 2.0);
        if radius > 0.0 {
            let circle = Path::circle(circle_center, radius);
            frame.fill(&circle, Color::from_rgba(r, g, b, entry));
        }

        frame.fill_text(Text {
            content: format_derived(encoding.efficiency),
            position: Point::new(center_x, circle_center.y - 7.0),
            color: Color { a: entry, ..Color::WHITE },
            size: iced::Pixels(13.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        });

        // Caption
        let caption_y = origin.y + 170.0;
        frame.fill_text(Text {
            content: encoding.alloy_id.clone(),
            position: Point::new(center_x, caption_y),
            color: text_color,
            size: iced::Pixels(13.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        });
        frame.fill_text(Text {
            content: card_velocity_label(encoding.velocity_m_s),
            position: Point::new(center_x, caption_y + 18.0),
            color: text_color,
            size: iced::Pixels(10.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        });
        frame.fill_text(Text {
            content: card_ratio_label(encoding.fragment_ratio),
            position: Point::new(center_x, caption_y + 32.0),
            color: text_color,
            size: iced::Pixels(10.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        });

        // Velocity bar
        let bar_margin = 16.0;
        let bar_width = CARD_WIDTH - 2.0 * bar_margin;
        let bar_origin = Point::new(origin.x + bar_margin, origin.y + CARD_HEIGHT - 30.0);
        let track = Path::rectangle(bar_origin, Size::new(bar_width, 10.0));
        frame.fill(&track, Color { a: 0.2 * entry, ..muted });

        let fill = encoding.bar_progress(self.elapsed_secs) as f32;
        if fill > 0.0 {
            let bar = Path::rectangle(bar_origin, Size::new(bar_width * fill, 10.0));
            frame.fill(&bar, Color::from_rgba(0.2, 0.5, 0.8, entry));
        }

        frame.fill_text(Text {
            content: format!("{:.1} s", encoding.bar_duration_secs),
            position: Point::new(center_x, bar_origin.y + 12.0),
            color: muted,
            size: iced::Pixels(9.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        });
    }
}

impl canvas::Program<Message> for SelectionCards {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for (index, encoding) in self.encodings.iter().enumerate() {
            let origin = Point::new(CARD_GAP + index as f32 * (CARD_WIDTH + CARD_GAP), CARD_GAP);
            self.draw_card(&mut frame, encoding, origin);
        }

        vec![frame.into_geometry()]
    }
}
