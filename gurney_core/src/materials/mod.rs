//! # Materials Database
//!
//! Alloy definitions and the catalog used to look them up.
//!
//! ## Example
//!
//! ```rust
//! use gurney_core::materials::MaterialCatalog;
//!
//! let catalog = MaterialCatalog::reference();
//! let alloy = catalog.lookup("45KH").unwrap();
//! println!("Ms = {} kg, C = {} kg", alloy.ms_kg, alloy.c_kg);
//! ```

pub mod alloy;
pub mod catalog;

pub use alloy::AlloyConstant;
pub use catalog::MaterialCatalog;
