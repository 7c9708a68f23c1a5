//! # Fragmentation Equations
//!
//! All closed-form expressions used by the calculator live here so they can
//! be checked against references in one place and shared by every
//! calculation type.
//!
//! ## Modules
//!
//! - [`gurney`] - Gurney velocity, fragment ratio, efficiency ratio
//!
//! ## References
//!
//! - R. W. Gurney, "The Initial Velocities of Fragments from Bombs, Shells
//!   and Grenades", BRL Report 405 (1943)

pub mod gurney;

pub use gurney::{efficiency_ratio, fragment_ratio, gurney_velocity, GURNEY_COEFFICIENT_M_S};
