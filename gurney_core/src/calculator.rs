//! # Calculator
//!
//! Binds a validated [`MaterialCatalog`] and calibration constant into one
//! object that front ends construct at startup and pass around read-only.
//!
//! ## Example
//!
//! ```rust
//! use gurney_core::{Calculator, CalculatorConfig};
//!
//! let calculator = Calculator::new(CalculatorConfig::default()).unwrap();
//! let input = calculator.parse_input("45KH", "50000", "1000").unwrap();
//! let output = calculator.compute(&input).unwrap();
//! assert_eq!(output.fragment_ratio, 50.0);
//! ```

use crate::calculations::fragmentation::{self, CalculationInput, CalculationOutput};
use crate::config::CalculatorConfig;
use crate::errors::CalcResult;
use crate::materials::{AlloyConstant, MaterialCatalog};

/// Formula engine configured with a catalog and global constant.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    catalog: MaterialCatalog,
    global_constant: f64,
}

impl Calculator {
    /// Build a calculator from configuration.
    ///
    /// # Errors
    ///
    /// * `CalcError::InvalidConfig` - global constant is not a positive number
    /// * `CalcError::InvalidCatalogEntry` - an alloy entry is unusable
    pub fn new(config: CalculatorConfig) -> CalcResult<Self> {
        config.validate()?;
        let catalog = MaterialCatalog::new(config.alloys)?;

        tracing::info!(
            global_constant = config.global_constant,
            alloys = catalog.len(),
            "Calculator configured"
        );

        Ok(Calculator {
            catalog,
            global_constant: config.global_constant,
        })
    }

    /// Calculator for the reference deployment
    pub fn reference() -> Self {
        Calculator {
            catalog: MaterialCatalog::reference(),
            global_constant: crate::config::REFERENCE_GLOBAL_CONSTANT,
        }
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    pub fn global_constant(&self) -> f64 {
        self.global_constant
    }

    /// Look up an alloy in the configured catalog
    pub fn lookup(&self, alloy_id: &str) -> CalcResult<&AlloyConstant> {
        self.catalog.lookup(alloy_id)
    }

    /// Alloy ids in declaration order
    pub fn list_ids(&self) -> Vec<&str> {
        self.catalog.list_ids()
    }

    /// Validate raw form text into a [`CalculationInput`]
    pub fn parse_input(
        &self,
        alloy_id: &str,
        inner_diameter: &str,
        wall_thickness: &str,
    ) -> CalcResult<CalculationInput> {
        CalculationInput::parse(alloy_id, inner_diameter, wall_thickness, &self.catalog)
    }

    /// Run the formula engine on a validated input
    pub fn compute(&self, input: &CalculationInput) -> CalcResult<CalculationOutput> {
        fragmentation::calculate(input, &self.catalog, self.global_constant)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn test_reference_matches_default_config() {
        let from_config = Calculator::new(CalculatorConfig::default()).unwrap();
        assert_eq!(from_config, Calculator::reference());
    }

    #[test]
    fn test_rejects_bad_catalog() {
        let config = CalculatorConfig {
            alloys: vec![AlloyConstant::new("ZERO", 0.0, 7000.0, 1.0)],
            ..CalculatorConfig::default()
        };
        assert!(matches!(
            Calculator::new(config),
            Err(CalcError::InvalidCatalogEntry { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_global_constant() {
        let config = CalculatorConfig {
            global_constant: -1.0,
            ..CalculatorConfig::default()
        };
        assert!(matches!(Calculator::new(config), Err(CalcError::InvalidConfig { .. })));
    }

    #[test]
    fn test_parse_and_compute() {
        let calculator = Calculator::reference();
        let input = calculator.parse_input("40CrMnSiMoV", "20000", "400").unwrap();
        let output = calculator.compute(&input).unwrap();
        assert_eq!(output.fragment_ratio, 50.0);
        assert_eq!(output.alloy_id, "40CrMnSiMoV");
    }

    #[test]
    fn test_blank_alloy_is_invalid_input() {
        let calculator = Calculator::reference();
        let err = calculator.parse_input("", "50000", "1000").unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "alloy_id"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_list_ids() {
        let calculator = Calculator::reference();
        assert_eq!(calculator.list_ids(), vec!["45KH", "40CrMnSiMoV"]);
        assert!(calculator.lookup("45KH").is_ok());
    }
}
