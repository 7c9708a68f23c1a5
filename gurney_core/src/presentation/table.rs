//! Tabular view of stored results
//!
//! Formats records for display. This is the only place values are rounded;
//! the store keeps full precision.

use serde::{Deserialize, Serialize};

use crate::store::{RecordId, ResultRecord, ResultStore};

/// Decimal places shown for derived quantities
pub const DISPLAY_DECIMALS: usize = 3;

/// Column headers, in display order
pub const COLUMN_HEADERS: [&str; 8] = [
    "ID",
    "Alloy",
    "Ms (kg)",
    "C (kg)",
    "vf (m/s)",
    "Fragment Size (d/t)",
    "Efficiency (C/Ms)",
    "d / t (nm)",
];

/// Round a value to `digits` decimal places (half away from zero)
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// One display row, with derived values formatted to three decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub id: RecordId,
    pub selected: bool,
    pub alloy: String,
    pub ms: String,
    pub c: String,
    pub velocity: String,
    pub fragment_ratio: String,
    pub efficiency: String,
    pub geometry: String,
}

impl ResultRow {
    pub fn from_record(record: &ResultRecord, selected: bool) -> Self {
        ResultRow {
            id: record.id,
            selected,
            alloy: record.alloy_id.clone(),
            ms: format_constant(record.ms_kg),
            c: format_constant(record.c_kg),
            velocity: format_derived(record.velocity_m_s),
            fragment_ratio: format_derived(record.fragment_ratio),
            efficiency: format_derived(record.efficiency),
            geometry: format!(
                "{} / {}",
                format_constant(record.inner_diameter_nm),
                format_constant(record.wall_thickness_nm)
            ),
        }
    }

    /// Cells in [`COLUMN_HEADERS`] order
    pub fn cells(&self) -> [String; 8] {
        [
            self.id.to_string(),
            self.alloy.clone(),
            self.ms.clone(),
            self.c.clone(),
            self.velocity.clone(),
            self.fragment_ratio.clone(),
            self.efficiency.clone(),
            self.geometry.clone(),
        ]
    }
}

/// Rows for every record in the store, in insertion order
pub fn rows(store: &ResultStore) -> Vec<ResultRow> {
    store
        .records()
        .iter()
        .map(|r| ResultRow::from_record(r, store.is_selected(r.id)))
        .collect()
}

/// Format a derived quantity with [`DISPLAY_DECIMALS`] places
pub fn format_derived(value: f64) -> String {
    format!("{:.*}", DISPLAY_DECIMALS, round_to(value, DISPLAY_DECIMALS as u32))
}

/// Format a catalog constant or input as entered (no trailing zeros)
fn format_constant(value: f64) -> String {
    format!("{}", value)
}
