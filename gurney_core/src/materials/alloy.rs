//! Alloy Constants
//!
//! Physical constants for the casing alloys supported by the calculator.
//! Values are per unit charge and come from the reference deployment.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Physical constants for one alloy.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "45KH",
///   "ms_kg": 19.6,
///   "density_kg_m3": 7190.0,
///   "c_kg": 3.4
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlloyConstant {
    /// Catalog key (e.g., "45KH")
    pub id: String,

    /// Ms - mass of explosive charge per unit (kg)
    pub ms_kg: f64,

    /// Density (kg/m³). Carried as metadata; no formula reads it.
    pub density_kg_m3: f64,

    /// C - metal-mass-related constant (kg)
    pub c_kg: f64,
}

impl AlloyConstant {
    /// Create a new alloy entry
    pub fn new(id: impl Into<String>, ms_kg: f64, density_kg_m3: f64, c_kg: f64) -> Self {
        AlloyConstant {
            id: id.into(),
            ms_kg,
            density_kg_m3,
            c_kg,
        }
    }

    /// Check the entry can be used by the formula engine.
    ///
    /// Ms is a divisor in both the velocity and efficiency formulas, so it
    /// must be a finite, strictly positive number.
    pub fn validate(&self) -> CalcResult<()> {
        if self.id.trim().is_empty() {
            return Err(CalcError::invalid_catalog_entry(
                &self.id,
                "Alloy id must not be empty",
            ));
        }
        if !self.ms_kg.is_finite() || self.ms_kg <= 0.0 {
            return Err(CalcError::invalid_catalog_entry(
                &self.id,
                format!("Ms must be a positive number, got {}", self.ms_kg),
            ));
        }
        if !self.c_kg.is_finite() {
            return Err(CalcError::invalid_catalog_entry(
                &self.id,
                format!("C must be a finite number, got {}", self.c_kg),
            ));
        }
        if !self.density_kg_m3.is_finite() {
            return Err(CalcError::invalid_catalog_entry(
                &self.id,
                format!("Density must be a finite number, got {}", self.density_kg_m3),
            ));
        }
        Ok(())
    }

    /// Entries of the reference deployment, in declaration order
    pub fn reference_entries() -> Vec<AlloyConstant> {
        REFERENCE_ALLOYS.clone()
    }
}

static REFERENCE_ALLOYS: Lazy<Vec<AlloyConstant>> = Lazy::new(|| {
    vec![
        AlloyConstant::new("45KH", 19.6, 7190.0, 3.4),
        AlloyConstant::new("40CrMnSiMoV", 17.64, 7190.0, 3.74),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_entries_are_valid() {
        let entries = AlloyConstant::reference_entries();
        assert_eq!(entries.len(), 2);
        for entry in &entries {
            assert!(entry.validate().is_ok(), "{} should be valid", entry.id);
        }
        assert_eq!(entries[0].id, "45KH");
        assert_eq!(entries[1].id, "40CrMnSiMoV");
    }

    #[test]
    fn test_zero_ms_rejected() {
        let entry = AlloyConstant::new("BAD", 0.0, 7000.0, 1.0);
        let err = entry.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CATALOG_ENTRY");
    }

    #[test]
    fn test_non_finite_values_rejected() {
        assert!(AlloyConstant::new("A", f64::NAN, 7000.0, 1.0).validate().is_err());
        assert!(AlloyConstant::new("B", 1.0, 7000.0, f64::INFINITY).validate().is_err());
        assert!(AlloyConstant::new("C", 1.0, f64::NAN, 1.0).validate().is_err());
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(AlloyConstant::new("  ", 1.0, 7000.0, 1.0).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let entry = AlloyConstant::new("45KH", 19.6, 7190.0, 3.4);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"ms_kg\":19.6"));
        let parsed: AlloyConstant = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, parsed);
    }
}
