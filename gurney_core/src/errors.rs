//! # Error Types
//!
//! Structured error types for gurney_core. Each variant carries enough
//! context for a front end to tell the user what to fix, and serializes to
//! JSON so the CLI can echo it in machine-readable form.
//!
//! ## Example
//!
//! ```rust
//! use gurney_core::errors::{CalcError, CalcResult};
//!
//! fn validate_thickness(wall_thickness_nm: f64) -> CalcResult<()> {
//!     if wall_thickness_nm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "wall_thickness_nm".to_string(),
//!             value: wall_thickness_nm.to_string(),
//!             reason: "Wall thickness must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for gurney_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for catalog, calculation and store operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A user-supplied value is invalid (not a number, not positive, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Alloy id not present in the catalog
    #[error("Unknown alloy: {alloy_id}")]
    UnknownAlloy { alloy_id: String },

    /// Catalog entry rejected at load time
    #[error("Invalid catalog entry '{alloy_id}': {reason}")]
    InvalidCatalogEntry { alloy_id: String, reason: String },

    /// Record id not present in the result store
    #[error("Unknown record: {id}")]
    UnknownRecord { id: u64 },

    /// Configuration value rejected at load time
    #[error("Invalid configuration '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownAlloy error
    pub fn unknown_alloy(alloy_id: impl Into<String>) -> Self {
        CalcError::UnknownAlloy {
            alloy_id: alloy_id.into(),
        }
    }

    /// Create an InvalidCatalogEntry error
    pub fn invalid_catalog_entry(alloy_id: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidCatalogEntry {
            alloy_id: alloy_id.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if the caller can correct the problem and carry on.
    ///
    /// Catalog and configuration errors are fatal at startup; everything a
    /// user typed (or clicked) is recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::UnknownAlloy { .. }
                | CalcError::UnknownRecord { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownAlloy { .. } => "UNKNOWN_ALLOY",
            CalcError::InvalidCatalogEntry { .. } => "INVALID_CATALOG_ENTRY",
            CalcError::UnknownRecord { .. } => "UNKNOWN_RECORD",
            CalcError::InvalidConfig { .. } => "INVALID_CONFIG",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
