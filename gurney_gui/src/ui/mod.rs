//! UI components
//!
//! - `header` - title and formula line
//! - `input_form` - alloy, diameter and thickness inputs
//! - `results_table` - stored results with select and delete controls
//! - `visualizer` - animated cards for the selected results
//! - `status_bar` - last action and counts

pub mod header;
pub mod input_form;
pub mod results_table;
pub mod status_bar;
pub mod visualizer;
