//! # Fragmentation Calculation
//!
//! Computes Gurney velocity, fragment size ratio and efficiency for a cased
//! charge made of a catalog alloy.
//!
//! ## Assumptions
//!
//! - Cylindrical casing described by inner diameter and wall thickness only
//! - Alloy constants Ms and C taken from the catalog, Mc from configuration
//! - Results kept at full precision; rounding is a display concern
//!
//! ## Example
//!
//! ```rust
//! use gurney_core::calculations::fragmentation::{calculate, CalculationInput};
//! use gurney_core::materials::MaterialCatalog;
//!
//! let catalog = MaterialCatalog::reference();
//! let input = CalculationInput {
//!     alloy_id: "45KH".to_string(),
//!     inner_diameter_nm: 50_000.0,
//!     wall_thickness_nm: 1_000.0,
//! };
//!
//! let output = calculate(&input, &catalog, 3.4).unwrap();
//! assert_eq!(output.fragment_ratio, 50.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::gurney::{efficiency_ratio, fragment_ratio, gurney_velocity};
use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialCatalog;

/// Input parameters for one calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "alloy_id": "45KH",
///   "inner_diameter_nm": 50000.0,
///   "wall_thickness_nm": 1000.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Catalog key of the casing alloy
    pub alloy_id: String,

    /// Inner diameter d in nanometres
    pub inner_diameter_nm: f64,

    /// Wall thickness t in nanometres
    pub wall_thickness_nm: f64,
}

impl CalculationInput {
    /// Build an input from raw form text.
    ///
    /// Empty fields and text that is not a finite, strictly positive number
    /// are both reported as `InvalidInput` naming the field.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gurney_core::calculations::fragmentation::CalculationInput;
    /// use gurney_core::materials::MaterialCatalog;
    ///
    /// let catalog = MaterialCatalog::reference();
    /// let input = CalculationInput::parse("45KH", "50000", "1000", &catalog).unwrap();
    /// assert_eq!(input.wall_thickness_nm, 1000.0);
    ///
    /// let err = CalculationInput::parse("45KH", "50000", "abc", &catalog).unwrap_err();
    /// assert_eq!(err.error_code(), "INVALID_INPUT");
    /// ```
    pub fn parse(
        alloy_id: &str,
        inner_diameter: &str,
        wall_thickness: &str,
        catalog: &MaterialCatalog,
    ) -> CalcResult<Self> {
        let input = CalculationInput {
            alloy_id: alloy_id.trim().to_string(),
            inner_diameter_nm: parse_length("inner_diameter_nm", inner_diameter)?,
            wall_thickness_nm: parse_length("wall_thickness_nm", wall_thickness)?,
        };
        input.validate(catalog)?;
        Ok(input)
    }

    /// Validate input parameters against the catalog.
    pub fn validate(&self, catalog: &MaterialCatalog) -> CalcResult<()> {
        if self.alloy_id.trim().is_empty() {
            return Err(CalcError::invalid_input("alloy_id", "", REQUIRED_FIELD_EMPTY));
        }
        if !catalog.contains(&self.alloy_id) {
            return Err(CalcError::unknown_alloy(&self.alloy_id));
        }
        check_positive("inner_diameter_nm", self.inner_diameter_nm, "Inner diameter")?;
        check_positive("wall_thickness_nm", self.wall_thickness_nm, "Wall thickness")?;
        Ok(())
    }
}

const REQUIRED_FIELD_EMPTY: &str = "Required field is empty";

fn parse_length(field: &str, text: &str) -> CalcResult<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CalcError::invalid_input(field, "", REQUIRED_FIELD_EMPTY));
    }
    text.parse::<f64>()
        .map_err(|_| CalcError::invalid_input(field, text, "Not a number"))
}

fn check_positive(field: &str, value: f64, label: &str) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be a finite number", label),
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be positive", label),
        ));
    }
    Ok(())
}

/// Results of one calculation, before the store assigns an id.
///
/// ## JSON Example
///
/// ```json
/// {
///   "alloy_id": "45KH",
///   "ms_kg": 19.6,
///   "c_kg": 3.4,
///   "velocity_m_s": 1130.67,
///   "fragment_ratio": 50.0,
///   "efficiency": 0.1735,
///   "inner_diameter_nm": 50000.0,
///   "wall_thickness_nm": 1000.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutput {
    /// Catalog key of the casing alloy
    pub alloy_id: String,

    /// Ms used for this calculation (kg)
    pub ms_kg: f64,

    /// C used for this calculation (kg)
    pub c_kg: f64,

    /// Gurney fragment velocity (m/s)
    pub velocity_m_s: f64,

    /// Fragment size ratio d/t
    pub fragment_ratio: f64,

    /// Efficiency C/Ms
    pub efficiency: f64,

    /// Inner diameter d (nm)
    pub inner_diameter_nm: f64,

    /// Wall thickness t (nm)
    pub wall_thickness_nm: f64,
}

/// Run the fragmentation calculation.
///
/// # Arguments
///
/// * `input` - Alloy and casing geometry
/// * `catalog` - Alloy constants
/// * `global_constant` - Calibration constant Mc
///
/// # Returns
///
/// * `Ok(CalculationOutput)` - Full-precision results
/// * `Err(CalcError::UnknownAlloy)` - Alloy not in the catalog
///
/// Geometry is not re-validated here: a zero wall thickness yields an
/// infinite fragment ratio. Use [`CalculationInput::parse`] or
/// [`CalculationInput::validate`] at the input boundary.
pub fn calculate(
    input: &CalculationInput,
    catalog: &MaterialCatalog,
    global_constant: f64,
) -> CalcResult<CalculationOutput> {
    let alloy = catalog.lookup(&input.alloy_id)?;

    let velocity_m_s = gurney_velocity(alloy.ms_kg, global_constant);
    let fragment_ratio = fragment_ratio(input.inner_diameter_nm, input.wall_thickness_nm);
    let efficiency = efficiency_ratio(alloy.c_kg, alloy.ms_kg);

    tracing::debug!(
        alloy = %alloy.id,
        velocity_m_s,
        fragment_ratio,
        efficiency,
        "Computed fragmentation result"
    );

    Ok(CalculationOutput {
        alloy_id: alloy.id.clone(),
        ms_kg: alloy.ms_kg,
        c_kg: alloy.c_kg,
        velocity_m_s,
        fragment_ratio,
        efficiency,
        inner_diameter_nm: input.inner_diameter_nm,
        wall_thickness_nm: input.wall_thickness_nm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::AlloyConstant;

    fn test_input() -> CalculationInput {
        CalculationInput {
            alloy_id: "45KH".to_string(),
            inner_diameter_nm: 50_000.0,
            wall_thickness_nm: 1_000.0,
        }
    }

    #[test]
    fn test_reference_example() {
        let catalog = MaterialCatalog::reference();
        let output = calculate(&test_input(), &catalog, 3.4).unwrap();

        assert_eq!(output.fragment_ratio, 50.0);
        assert!((output.efficiency - 3.4 / 19.6).abs() < 1e-12);
        assert!((output.efficiency - 0.17347).abs() < 1e-5);
        // 2830 * (19.6/3.4 + 0.5)^-0.5
        assert!((output.velocity_m_s - 1130.6706).abs() < 0.01);
        assert_eq!(output.ms_kg, 19.6);
        assert_eq!(output.c_kg, 3.4);
        assert_eq!(output.alloy_id, "45KH");
    }

    #[test]
    fn test_second_reference_alloy() {
        let catalog = MaterialCatalog::reference();
        let input = CalculationInput {
            alloy_id: "40CrMnSiMoV".to_string(),
            ..test_input()
        };
        let output = calculate(&input, &catalog, 3.4).unwrap();
        assert!((output.velocity_m_s - 1186.5817).abs() < 0.01);
        assert!((output.efficiency - 3.74 / 17.64).abs() < 1e-12);
    }

    #[test]
    fn test_global_constant_is_honoured() {
        let catalog = MaterialCatalog::reference();
        let low = calculate(&test_input(), &catalog, 3.4).unwrap();
        let high = calculate(&test_input(), &catalog, 6.8).unwrap();
        assert!(high.velocity_m_s > low.velocity_m_s);
        assert_eq!(high.efficiency, low.efficiency);
        assert_eq!(high.fragment_ratio, low.fragment_ratio);
    }

    #[test]
    fn test_fragment_ratio_matches_division() {
        let catalog = MaterialCatalog::reference();
        for (d, t) in [(1.0, 3.0), (12_345.6, 78.9), (0.5, 0.25)] {
            let input = CalculationInput {
                inner_diameter_nm: d,
                wall_thickness_nm: t,
                ..test_input()
            };
            let output = calculate(&input, &catalog, 3.4).unwrap();
            assert_eq!(output.fragment_ratio, d / t);
        }
    }

    #[test]
    fn test_efficiency_for_every_catalog_entry() {
        let catalog = MaterialCatalog::reference();
        for alloy in catalog.iter() {
            let input = CalculationInput {
                alloy_id: alloy.id.clone(),
                ..test_input()
            };
            let output = calculate(&input, &catalog, 3.4).unwrap();
            assert_eq!(output.efficiency, alloy.c_kg / alloy.ms_kg);
        }
    }

    #[test]
    fn test_unknown_alloy() {
        let catalog = MaterialCatalog::reference();
        let input = CalculationInput {
            alloy_id: "Unobtainium".to_string(),
            ..test_input()
        };
        assert_eq!(
            calculate(&input, &catalog, 3.4).unwrap_err(),
            CalcError::unknown_alloy("Unobtainium")
        );
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = MaterialCatalog::new(vec![AlloyConstant::new("X", 10.0, 8000.0, 2.0)]).unwrap();
        let input = CalculationInput {
            alloy_id: "X".to_string(),
            ..test_input()
        };
        let output = calculate(&input, &catalog, 5.0).unwrap();
        assert!((output.efficiency - 0.2).abs() < 1e-12);
        // 2830 * (2 + 0.5)^-0.5
        assert!((output.velocity_m_s - 2830.0 / 2.5_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_parse_valid() {
        let catalog = MaterialCatalog::reference();
        let input = CalculationInput::parse(" 45KH ", " 50000 ", "1e3", &catalog).unwrap();
        assert_eq!(input, test_input());
    }

    #[test]
    fn test_parse_empty_fields() {
        let catalog = MaterialCatalog::reference();
        assert_eq!(
            CalculationInput::parse("", "50000", "1000", &catalog).unwrap_err(),
            CalcError::invalid_input("alloy_id", "", "Required field is empty")
        );
        assert_eq!(
            CalculationInput::parse("45KH", "", "1000", &catalog).unwrap_err(),
            CalcError::invalid_input("inner_diameter_nm", "", "Required field is empty")
        );
        assert_eq!(
            CalculationInput::parse("45KH", "50000", "  ", &catalog).unwrap_err(),
            CalcError::invalid_input("wall_thickness_nm", "", "Required field is empty")
        );
    }

    #[test]
    fn test_parse_names_failing_field() {
        let catalog = MaterialCatalog::reference();

        let err = CalculationInput::parse("45KH", "abc", "1000", &catalog).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "inner_diameter_nm"));

        let err = CalculationInput::parse("45KH", "50000", "0", &catalog).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "wall_thickness_nm"));

        let err = CalculationInput::parse("45KH", "-1", "1000", &catalog).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "inner_diameter_nm"));

        let err = CalculationInput::parse("45KH", "50000", "inf", &catalog).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "wall_thickness_nm"));

        let err = CalculationInput::parse("45KH", "NaN", "1000", &catalog).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "inner_diameter_nm"));
    }

    #[test]
    fn test_parse_unknown_alloy() {
        let catalog = MaterialCatalog::reference();
        let err = CalculationInput::parse("45kh", "50000", "1000", &catalog).unwrap_err();
        assert_eq!(err, CalcError::unknown_alloy("45kh"));
    }

    #[test]
    fn test_serialization() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: CalculationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
