//! # Presentation
//!
//! Display-independent half of the presentation layer: table rows with
//! rounded values, and the color/size/duration encoding of the current
//! selection. Front ends (terminal, GUI) draw what these types describe.
//!
//! ## Modules
//!
//! - [`table`] - Rounded, formatted rows for the results table
//! - [`visual`] - Min–max normalization and per-record visual encoding

pub mod table;
pub mod visual;

pub use table::{format_derived, round_to, rows, ResultRow, COLUMN_HEADERS};
pub use visual::{
    normalize, MetricRange, Rgb, VisualEncoding, BAR_RANGE_SECS, CIRCLE_RANGE_PX, ENTRY_SECS,
    ENTRY_STAGGER_SECS, MAX_BAR_SECS, MIN_BAR_SECS, MIN_CIRCLE_PX,
};
