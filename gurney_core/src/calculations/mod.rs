//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Output` - Calculation results (JSON-serializable)
//! - `calculate(input, ...) -> Result<*Output, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`fragmentation`] - Gurney velocity, fragment ratio and efficiency of a cased charge

pub mod fragmentation;

pub use fragmentation::{calculate, CalculationInput, CalculationOutput};
