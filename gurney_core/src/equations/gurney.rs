//! # Fragmentation Formulas
//!
//! Closed-form expressions for a cased charge.
//!
//! ## Notation
//!
//! - `Ms` = Mass of explosive charge per unit (kg)
//! - `Mc` = Charge-to-metal calibration constant (kg), the "global constant"
//! - `C`  = Metal-mass-related constant (kg)
//! - `d`  = Inner diameter of the casing (nm)
//! - `t`  = Wall thickness of the casing (nm)
//! - `v`  = Fragment ejection velocity (m/s)
//!
//! None of these functions guard against a zero denominator. Callers
//! validate inputs first; the catalog guarantees Ms > 0.

/// Gurney characteristic velocity coefficient (m/s)
pub const GURNEY_COEFFICIENT_M_S: f64 = 2830.0;

/// Fragment ejection velocity (Gurney-style closed form)
///
/// # Formula
/// - v = 2830 · (Ms/Mc + 1/2)^(-1/2)
///
/// # Arguments
/// * `ms_kg` - Explosive charge mass per unit
/// * `global_constant` - Calibration constant Mc
///
/// # Returns
/// Velocity in m/s
#[inline]
pub fn gurney_velocity(ms_kg: f64, global_constant: f64) -> f64 {
    GURNEY_COEFFICIENT_M_S * (ms_kg / global_constant + 0.5).powf(-0.5)
}

/// Fragment size ratio d/t (dimensionless)
#[inline]
pub fn fragment_ratio(inner_diameter_nm: f64, wall_thickness_nm: f64) -> f64 {
    inner_diameter_nm / wall_thickness_nm
}

/// Efficiency ratio C/Ms (dimensionless)
#[inline]
pub fn efficiency_ratio(c_kg: f64, ms_kg: f64) -> f64 {
    c_kg / ms_kg
}
