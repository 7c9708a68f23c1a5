//! `gurney compute` - one calculation, printed and optionally as JSON

use anyhow::{bail, Result};
use clap::Args;
use gurney_core::presentation::format_derived;
use gurney_core::{CalculationOutput, Calculator};
use tracing::info;

use crate::render::print_error;

/// Arguments for a single calculation
#[derive(Args)]
pub struct ComputeArgs {
    /// Alloy id (see `gurney alloys`)
    #[arg(short, long)]
    pub alloy: String,

    /// Inner diameter d (nm)
    #[arg(short, long)]
    pub diameter: String,

    /// Wall thickness t (nm)
    #[arg(short, long)]
    pub thickness: String,

    /// Print only the JSON result
    #[arg(long)]
    pub json: bool,
}

pub fn execute(calculator: &Calculator, args: ComputeArgs) -> Result<()> {
    let output = match calculator
        .parse_input(&args.alloy, &args.diameter, &args.thickness)
        .and_then(|input| calculator.compute(&input))
    {
        Ok(output) => output,
        Err(e) => {
            print_error(&e);
            bail!("calculation failed ({})", e.error_code());
        }
    };
    info!(alloy = %output.alloy_id, "Calculation complete");

    println!("{}", render_output(calculator, &output, args.json)?);
    Ok(())
}

/// Build the text for one result: JSON alone, or the report followed by JSON
fn render_output(calculator: &Calculator, output: &CalculationOutput, json_only: bool) -> Result<String> {
    let json = serde_json::to_string_pretty(output)?;
    if json_only {
        return Ok(json);
    }

    let lines = [
        "═══════════════════════════════════════".to_string(),
        "  GURNEY VELOCITY & FRAGMENT EFFICIENCY".to_string(),
        "═══════════════════════════════════════".to_string(),
        String::new(),
        "Input:".to_string(),
        format!("  Alloy:     {}", output.alloy_id),
        format!("  Ms:        {} kg", output.ms_kg),
        format!("  C:         {} kg", output.c_kg),
        format!("  Mc:        {} kg", calculator.global_constant()),
        format!("  d:         {} nm", output.inner_diameter_nm),
        format!("  t:         {} nm", output.wall_thickness_nm),
        String::new(),
        "Results:".to_string(),
        format!("  vf         = {} m/s", format_derived(output.velocity_m_s)),
        format!("  d/t        = {}", format_derived(output.fragment_ratio)),
        format!("  C/Ms       = {}", format_derived(output.efficiency)),
        String::new(),
        "JSON Output (for API use):".to_string(),
        json,
    ];
    Ok(lines.join("\n"))
}
