//! # Gurney CLI Application
//!
//! Terminal interface for the fragmentation calculator.
//!
//! ```text
//! gurney compute --alloy 45KH --diameter 50000 --thickness 1000
//! gurney alloys
//! gurney session
//! ```

mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gurney_core::{Calculator, CalculatorConfig};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Gurney velocity & fragment efficiency calculator
#[derive(Parser)]
#[command(name = "gurney")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Gurney velocity & fragment efficiency calculator", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// Configuration file (JSON) with global constant and alloy table
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a single result
    Compute(commands::compute::ComputeArgs),
    /// List the configured alloys
    Alloys,
    /// Interactive session with a result table and selection
    Session,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let calculator = load_calculator(cli.config.as_ref())?;

    match cli.command {
        Commands::Compute(args) => commands::compute::execute(&calculator, args),
        Commands::Alloys => commands::alloys::execute(&calculator),
        Commands::Session => commands::session::execute(&calculator),
    }
}

/// Build the calculator from a config file, or the reference deployment
fn load_calculator(path: Option<&PathBuf>) -> Result<Calculator> {
    let config = match path {
        Some(path) => CalculatorConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    Calculator::new(config).context("invalid calculator configuration")
}
