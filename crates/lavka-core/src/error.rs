//! # Error Types
//!
//! Domain-specific error types for lavka-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lavka-core errors (this file)                                         │
//! │  ├── CoreError        - Domain errors (type mismatches at the          │
//! │  │                      untyped boundary, wrapped validation)           │
//! │  └── ValidationError  - Field validation failures                      │
//! │                                                                         │
//! │  lavka-data errors (separate crate)                                    │
//! │  └── DataError        - File, JSON and config failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DataError → caller                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, found JSON type)
//! 3. Errors are enum variants, never String
//! 4. Rejected writes leave the prior value in place; an error here never
//!    means partial state

use serde_json::Value;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core catalog errors.
///
/// In the typed API most misuse is a compile error; `TypeMismatch` covers the
/// places where untyped JSON values enter the catalog.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An untyped value did not have the shape an operation requires.
    ///
    /// ## When This Occurs
    /// - A catalog document entry is a bare string where a product record
    ///   is required
    /// - A `products` key holds something other than an array
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Builds a `TypeMismatch` describing the JSON type actually found.
    pub fn type_mismatch(expected: impl Into<String>, found: &Value) -> Self {
        CoreError::TypeMismatch {
            expected: expected.into(),
            found: json_kind(found).to_string(),
        }
    }

    /// Returns true if this error is a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, CoreError::TypeMismatch { .. })
    }

    /// Returns true if this error is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}

/// Names the JSON type of a value for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation errors.
///
/// These errors occur when input doesn't meet the catalog rules.
/// The write is rejected and the prior valid state is retained.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., non-finite price, wrongly typed field).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
