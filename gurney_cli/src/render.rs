//! Text rendering of store contents for the terminal.
//!
//! `format_*` functions build the text; `print_*` write it out.

use gurney_core::presentation::{format_derived, rows, VisualEncoding, COLUMN_HEADERS};
use gurney_core::{CalcError, ResultStore};

/// Width of the velocity line in characters
const LINE_WIDTH: usize = 40;

/// Print the results table, one row per record in insertion order
pub fn print_table(store: &ResultStore) {
    println!("{}", format_table(store));
}

/// Print the visual encoding of the current selection
pub fn print_visual(store: &ResultStore) {
    println!("{}", format_visual(store));
}

/// Print an error and its JSON form to stderr
pub fn print_error(error: &CalcError) {
    eprintln!("{}", format_error(error));
}

pub fn format_table(store: &ResultStore) -> String {
    let mut lines = vec![String::new(), "Saved Results".to_string(), "═════════════".to_string()];

    if store.is_empty() {
        lines.push("No results yet.".to_string());
        return lines.join("\n");
    }

    let rows = rows(store);
    let mut widths: Vec<usize> = COLUMN_HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.cells().iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = COLUMN_HEADERS
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<w$}", h, w = *w))
        .collect();
    lines.push(format!("    {}", header.join(" │ ")));
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    lines.push(format!("    {}", rule.join("─┼─")));

    for row in &rows {
        let mark = if row.selected { "[x]" } else { "[ ]" };
        let cells: Vec<String> = row
            .cells()
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<w$}", c, w = *w))
            .collect();
        lines.push(format!("{} {}", mark, cells.join(" │ ")));
    }

    lines.join("\n")
}

pub fn format_visual(store: &ResultStore) -> String {
    let encodings = VisualEncoding::for_selection(&store.selected());
    if encodings.is_empty() {
        return "Nothing selected. Use 'sel <id>' to select results.".to_string();
    }

    let mut lines = vec![
        String::new(),
        "Fragmentation Efficiency & Velocity".to_string(),
        "═══════════════════════════════════".to_string(),
    ];
    for encoding in &encodings {
        lines.extend(format_card(encoding));
    }
    lines.push(String::new());
    lines.push("Circle color = efficiency (red → green), size ∝ efficiency.".to_string());
    lines.push("Line fill time = Gurney velocity (faster fragments fill sooner).".to_string());
    lines.join("\n")
}

fn format_card(encoding: &VisualEncoding) -> Vec<String> {
    // One 'o' per 10 px of circle diameter
    let circle = "o".repeat((encoding.size_px / 10.0).round() as usize);
    vec![
        String::new(),
        format!(
            "  {} {}  ({}, {:.0} px)",
            circle,
            format_derived(encoding.efficiency),
            encoding.color,
            encoding.size_px
        ),
        format!(
            "  {}  vf: {} m/s | d/t: {}",
            encoding.alloy_id,
            format_derived(encoding.velocity_m_s),
            format_derived(encoding.fragment_ratio)
        ),
        format!(
            "  {}> fills in {:.2} s",
            "=".repeat(LINE_WIDTH),
            encoding.bar_duration_secs
        ),
    ]
}

pub fn format_error(error: &CalcError) -> String {
    let mut text = format!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        text.push_str("\n\nError JSON:\n");
        text.push_str(&json);
    }
    text
}
