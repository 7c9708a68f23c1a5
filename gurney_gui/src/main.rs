//! # Gurney GUI Application
//!
//! Desktop interface for the fragmentation calculator, built with Iced.
//!
//! Layout, top to bottom: header, input form, results table, selection
//! visualizer (shown once at least one result is selected), status bar.
//!
//! An optional configuration file can be given as the first argument:
//!
//! ```text
//! gurney_gui my_alloys.json
//! ```

mod ui;

use std::path::Path;

use iced::time::Instant;
use iced::widget::{column, container, rule, scrollable};
use iced::{Element, Length, Subscription, Task};
use tracing::Level;

use gurney_core::presentation::VisualEncoding;
use gurney_core::{Calculator, CalculatorConfig, RecordId, ResultStore};

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let calculator = match load_calculator() {
        Ok(calculator) => calculator,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    iced::application(move || App::new(calculator.clone()), App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .window_size((900.0, 820.0))
        .run()
}

fn load_calculator() -> gurney_core::CalcResult<Calculator> {
    let config = match std::env::args().nth(1) {
        Some(path) => CalculatorConfig::load(Path::new(&path))?,
        None => CalculatorConfig::default(),
    };
    Calculator::new(config)
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Form
    AlloySelected(String),
    DiameterChanged(String),
    ThicknessChanged(String),
    AddResult,

    // Table
    DeleteResult(RecordId),
    ToggleSelect(RecordId),

    // Visualizer
    RestartAnimation,
    AnimationFrame(Instant),
}

/// Application state
pub struct App {
    pub calculator: Calculator,
    pub store: ResultStore,

    /// Alloy ids for the pick list, in catalog order
    pub alloy_ids: Vec<String>,

    // Form fields (raw text, validated on submit)
    pub selected_alloy: Option<String>,
    pub diameter_nm: String,
    pub thickness_nm: String,

    pub error_message: Option<String>,
    pub status: String,

    // Visualizer animation clock
    pub animation_start: Instant,
    pub now: Instant,
    pub animating: bool,
}

impl App {
    fn new(calculator: Calculator) -> Self {
        let alloy_ids = calculator.list_ids().into_iter().map(String::from).collect();
        let now = Instant::now();
        App {
            calculator,
            store: ResultStore::new(),
            alloy_ids,
            selected_alloy: None,
            diameter_nm: String::new(),
            thickness_nm: String::new(),
            error_message: None,
            status: "Ready".to_string(),
            animation_start: now,
            now,
            animating: false,
        }
    }

    fn title(&self) -> String {
        format!("Gurney - {} result(s)", self.store.len())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AlloySelected(alloy) => {
                self.selected_alloy = Some(alloy);
            }
            Message::DiameterChanged(value) => {
                self.diameter_nm = value;
            }
            Message::ThicknessChanged(value) => {
                self.thickness_nm = value;
            }
            Message::AddResult => self.add_result(),
            Message::DeleteResult(id) => {
                let was_selected = self.store.is_selected(id);
                if self.store.delete(id) {
                    self.status = format!("Deleted result {}", id);
                    if was_selected {
                        self.restart_animation();
                    }
                }
            }
            Message::ToggleSelect(id) => match self.store.toggle_select(id) {
                Ok(()) => self.restart_animation(),
                // The table was drawn from a stale store; nothing to toggle
                Err(e) => self.status = e.to_string(),
            },
            Message::RestartAnimation => self.restart_animation(),
            Message::AnimationFrame(now) => {
                self.now = now;
                let elapsed = self.elapsed_secs();
                if self.encodings().iter().all(|e| e.is_settled(elapsed)) {
                    self.animating = false;
                }
            }
        }
        Task::none()
    }

    fn add_result(&mut self) {
        let alloy = self.selected_alloy.as_deref().unwrap_or("");
        let result = self
            .calculator
            .parse_input(alloy, &self.diameter_nm, &self.thickness_nm)
            .and_then(|input| self.calculator.compute(&input));

        match result {
            Ok(output) => {
                let id = self.store.append(output);
                self.status = format!("Added result {}", id);
                self.error_message = None;
                self.selected_alloy = None;
                self.diameter_nm.clear();
                self.thickness_nm.clear();
            }
            Err(e) => {
                tracing::info!(code = e.error_code(), "Rejected form input");
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn restart_animation(&mut self) {
        let now = Instant::now();
        self.animation_start = now;
        self.now = now;
        self.animating = self.store.selected_count() > 0;
    }

    /// Seconds since the current animation started
    pub fn elapsed_secs(&self) -> f64 {
        self.now
            .saturating_duration_since(self.animation_start)
            .as_secs_f64()
    }

    /// Visual encoding of the current selection
    pub fn encodings(&self) -> Vec<VisualEncoding> {
        VisualEncoding::for_selection(&self.store.selected())
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.animating {
            iced::window::frames().map(Message::AnimationFrame)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let mut content = column![
            ui::header::view_header(),
            rule::horizontal(1),
            ui::input_form::view(self),
            rule::horizontal(1),
            ui::results_table::view(&self.store),
        ]
        .spacing(12)
        .padding(16);

        if self.store.selected_count() > 0 {
            content = content
                .push(rule::horizontal(1))
                .push(ui::visualizer::view(self.encodings(), self.elapsed_secs()));
        }

        let body = container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill);

        column![
            body,
            container(ui::status_bar::view_status_bar(
                &self.status,
                self.store.len(),
                self.store.selected_count(),
            ))
            .padding([0, 16]),
        ]
        .into()
    }
}
