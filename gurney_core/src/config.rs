//! # Calculator Configuration
//!
//! The calibration constant and alloy table the formula engine runs against.
//! A configuration is loaded once at startup (built-in defaults or a JSON
//! file) and is read-only afterwards; nothing is ever written back.
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "global_constant": 3.4,
//!   "alloys": [
//!     { "id": "45KH", "ms_kg": 19.6, "density_kg_m3": 7190.0, "c_kg": 3.4 },
//!     { "id": "40CrMnSiMoV", "ms_kg": 17.64, "density_kg_m3": 7190.0, "c_kg": 3.74 }
//!   ]
//! }
//! ```
//!
//! Both fields are optional; missing ones fall back to the reference
//! deployment.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::AlloyConstant;

/// Charge-to-metal calibration constant Mc of the reference deployment (kg)
pub const REFERENCE_GLOBAL_CONSTANT: f64 = 3.4;

/// Calculator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Charge-to-metal calibration constant Mc used by the velocity formula.
    /// Not alloy-dependent.
    pub global_constant: f64,

    /// Alloy table, in the order choice widgets should list it
    pub alloys: Vec<AlloyConstant>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            global_constant: REFERENCE_GLOBAL_CONSTANT,
            alloys: AlloyConstant::reference_entries(),
        }
    }
}

impl CalculatorConfig {
    /// Parse a configuration from JSON text.
    ///
    /// Only the document shape is checked here; the values are checked by
    /// [`validate`](Self::validate) and when the catalog is built.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid configuration JSON: {}", e),
        })
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// * `CalcError::FileError` - file cannot be read
    /// * `CalcError::SerializationError` - file is not valid configuration JSON
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use gurney_core::config::CalculatorConfig;
    /// use std::path::Path;
    ///
    /// let config = CalculatorConfig::load(Path::new("gurney.json"))?;
    /// println!("Mc = {}", config.global_constant);
    /// # Ok::<(), gurney_core::errors::CalcError>(())
    /// ```
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read config", path.display().to_string(), e.to_string())
        })?;

        let config = Self::from_json_str(&contents).map_err(|e| match e {
            CalcError::SerializationError { reason } => CalcError::SerializationError {
                reason: format!("{} ({})", reason, path.display()),
            },
            other => other,
        })?;

        tracing::debug!(
            path = %path.display(),
            alloys = config.alloys.len(),
            "Loaded calculator configuration"
        );
        Ok(config)
    }

    /// Check the scalar settings.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.global_constant.is_finite() || self.global_constant <= 0.0 {
            return Err(CalcError::invalid_config(
                "global_constant",
                format!("must be a positive number, got {}", self.global_constant),
            ));
        }
        Ok(())
    }
}
