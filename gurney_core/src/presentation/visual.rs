//! Visual encoding of selected results
//!
//! Maps each selected record to a circle (color and size from efficiency)
//! and an animated velocity bar (duration from velocity). Both metrics are
//! min–max normalized across the current selection only.
//!
//! ## Normalization
//!
//! ```text
//! ratio = (m - min) / (max - min)     if max != min
//! ratio = 0                           if max == min
//! ```
//!
//! A single selected record, or a selection whose values are all equal,
//! therefore gets ratio 0 for every metric.

use serde::{Deserialize, Serialize};

use crate::store::{RecordId, ResultRecord};

/// Circle diameter at efficiency ratio 0 (px)
pub const MIN_CIRCLE_PX: f64 = 60.0;
/// Added circle diameter at efficiency ratio 1 (px)
pub const CIRCLE_RANGE_PX: f64 = 80.0;
/// Bar duration at velocity ratio 0 (s)
pub const MAX_BAR_SECS: f64 = 5.0;
/// Duration removed at velocity ratio 1 (s)
pub const BAR_RANGE_SECS: f64 = 3.0;
/// Duration floor (s)
pub const MIN_BAR_SECS: f64 = 1.0;
/// Delay between successive cards entering (s)
pub const ENTRY_STAGGER_SECS: f64 = 0.15;
/// Card fade-in and circle grow time (s)
pub const ENTRY_SECS: f64 = 0.5;

/// Min–max normalize `value` into [0, 1] over `[min, max]`.
///
/// Returns 0 for a degenerate range, never NaN.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span == 0.0 {
        0.0
    } else {
        (value - min) / span
    }
}

/// Closed range of a metric over a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    /// Range of `values`, or `None` when empty
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(MetricRange { min: v, max: v }),
            Some(r) => Some(MetricRange {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
    }

    pub fn ratio(&self, value: f64) -> f64 {
        normalize(value, self.min, self.max)
    }
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Red at ratio 0 through green at ratio 1, blue channel fixed at 100
    pub fn efficiency_scale(ratio: f64) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        Rgb {
            r: (255.0 * (1.0 - ratio)).round() as u8,
            g: (255.0 * ratio).round() as u8,
            b: 100,
        }
    }

    /// Channels as floats in [0, 1]
    pub fn to_unit(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// How one selected record is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualEncoding {
    pub id: RecordId,
    pub alloy_id: String,
    /// Full-precision efficiency, for the circle label
    pub efficiency: f64,
    /// Full-precision velocity (m/s), for the bar label
    pub velocity_m_s: f64,
    /// Full-precision fragment ratio, for the caption
    pub fragment_ratio: f64,
    /// Normalized efficiency across the selection
    pub efficiency_ratio: f64,
    /// Normalized velocity across the selection
    pub velocity_ratio: f64,
    pub color: Rgb,
    /// Circle diameter (px)
    pub size_px: f64,
    /// Velocity bar fill time (s); faster fragments fill sooner
    pub bar_duration_secs: f64,
    /// Card entry delay (s)
    pub entry_delay_secs: f64,
}

impl VisualEncoding {
    /// Encode a selection, keeping its order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gurney_core::{Calculator, ResultStore};
    /// use gurney_core::presentation::VisualEncoding;
    ///
    /// let calculator = Calculator::reference();
    /// let mut store = ResultStore::new();
    /// let input = calculator.parse_input("45KH", "50000", "1000").unwrap();
    /// let id = store.append(calculator.compute(&input).unwrap());
    /// store.toggle_select(id).unwrap();
    ///
    /// let encodings = VisualEncoding::for_selection(&store.selected());
    /// assert_eq!(encodings[0].efficiency_ratio, 0.0);
    /// assert_eq!(encodings[0].size_px, 60.0);
    /// ```
    pub fn for_selection(selected: &[&ResultRecord]) -> Vec<VisualEncoding> {
        let (Some(eff_range), Some(vel_range)) = (
            MetricRange::of(selected.iter().map(|r| r.efficiency)),
            MetricRange::of(selected.iter().map(|r| r.velocity_m_s)),
        ) else {
            return Vec::new();
        };

        selected
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let efficiency_ratio = eff_range.ratio(record.efficiency);
                let velocity_ratio = vel_range.ratio(record.velocity_m_s);
                VisualEncoding {
                    id: record.id,
                    alloy_id: record.alloy_id.clone(),
                    efficiency: record.efficiency,
                    velocity_m_s: record.velocity_m_s,
                    fragment_ratio: record.fragment_ratio,
                    efficiency_ratio,
                    velocity_ratio,
                    color: Rgb::efficiency_scale(efficiency_ratio),
                    size_px: MIN_CIRCLE_PX + efficiency_ratio * CIRCLE_RANGE_PX,
                    bar_duration_secs: (MAX_BAR_SECS - velocity_ratio * BAR_RANGE_SECS)
                        .max(MIN_BAR_SECS),
                    entry_delay_secs: index as f64 * ENTRY_STAGGER_SECS,
                }
            })
            .collect()
    }

    /// Card entry progress in [0, 1] at `elapsed_secs` after the animation starts
    pub fn entry_progress(&self, elapsed_secs: f64) -> f64 {
        ((elapsed_secs - self.entry_delay_secs) / ENTRY_SECS).clamp(0.0, 1.0)
    }

    /// Velocity bar fill in [0, 1] at `elapsed_secs`, eased in and out
    pub fn bar_progress(&self, elapsed_secs: f64) -> f64 {
        ease_in_out((elapsed_secs / self.bar_duration_secs).clamp(0.0, 1.0))
    }

    /// Whether every part of this card has finished animating
    pub fn is_settled(&self, elapsed_secs: f64) -> bool {
        self.entry_progress(elapsed_secs) >= 1.0 && elapsed_secs >= self.bar_duration_secs
    }
}

/// Smoothstep easing
fn ease_in_out(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}
