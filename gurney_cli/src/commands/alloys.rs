//! `gurney alloys` - list the configured alloy table

use anyhow::Result;
use gurney_core::Calculator;

pub fn execute(calculator: &Calculator) -> Result<()> {
    println!("Global constant Mc = {} kg", calculator.global_constant());
    println!();
    println!("{:<16} {:>10} {:>10} {:>16}", "Alloy", "Ms (kg)", "C (kg)", "Density (kg/m³)");
    for alloy in calculator.catalog().iter() {
        println!(
            "{:<16} {:>10} {:>10} {:>16}",
            alloy.id, alloy.ms_kg, alloy.c_kg, alloy.density_kg_m3
        );
    }
    Ok(())
}
