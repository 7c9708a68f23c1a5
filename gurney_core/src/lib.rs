//! # gurney_core - Fragmentation Calculation Engine
//!
//! `gurney_core` computes Gurney fragment velocity, fragment size ratio and
//! efficiency for cased charges, keeps the results of a session in an
//! ordered store, and derives the table and visual encoding front ends draw.
//!
//! ## Design Philosophy
//!
//! - **Injected configuration**: catalog and calibration constant are loaded
//!   once and passed in, never global
//! - **Pure formulas**: calculations take input and return results
//! - **JSON-First**: inputs, results and errors implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use gurney_core::{Calculator, ResultStore};
//!
//! let calculator = Calculator::reference();
//! let mut store = ResultStore::new();
//!
//! let input = calculator.parse_input("45KH", "50000", "1000").unwrap();
//! let output = calculator.compute(&input).unwrap();
//! let id = store.append(output);
//!
//! let json = serde_json::to_string_pretty(store.get(id).unwrap()).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`materials`] - Alloy constants and the catalog
//! - [`equations`] - Closed-form fragmentation formulas
//! - [`calculations`] - Input validation and the calculation pipeline
//! - [`calculator`] - Catalog + calibration constant bound together
//! - [`config`] - Configuration loading
//! - [`store`] - Session result store with selection
//! - [`presentation`] - Table rows and visual encoding
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod calculator;
pub mod config;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod presentation;
pub mod store;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationInput, CalculationOutput};
pub use calculator::Calculator;
pub use config::CalculatorConfig;
pub use errors::{CalcError, CalcResult};
pub use materials::{AlloyConstant, MaterialCatalog};
pub use store::{RecordId, ResultRecord, ResultStore, StoreSnapshot};
