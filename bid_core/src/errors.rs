//! # Error Types
//!
//! Structured error types for bid_core. A bid either computes or fails with
//! enough context (field, offending value, reason) for a caller to decide what
//! to show the user.
//!
//! The most important distinction is [`CalcError::NotComputable`]: the job
//! itself is not estimable (no slab area, no thickness). Callers must branch on
//! it and hide any previously rendered figures rather than show a zero bid.
//!
//! ## Example
//!
//! ```rust
//! use bid_core::errors::{CalcError, CalcResult};
//!
//! fn require_slab(area_sf: f64) -> CalcResult<()> {
//!     if area_sf <= 0.0 {
//!         return Err(CalcError::not_computable(
//!             "slab_area_sf",
//!             area_sf.to_string(),
//!             "Slab area must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_slab(0.0).unwrap_err().is_not_computable());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bid_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for estimation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input or rate value is invalid (non-finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The measurements do not describe an estimable job
    #[error("Not computable: '{field}' = {value} - {reason}")]
    NotComputable {
        field: String,
        value: String,
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

    /// Create a NotComputable error
    pub fn not_computable(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::NotComputable {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True when the job itself is not estimable, as opposed to a malformed request.
    pub fn is_not_computable(&self) -> bool {
        matches!(self, CalcError::NotComputable { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::NotComputable { .. } => "NOT_COMPUTABLE",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}
