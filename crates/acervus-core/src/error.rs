//! # Error Types
//!
//! Domain-specific error types for acervus-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  acervus-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations                       │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  └── ParseMoneyError  - Decimal text that is not a price               │
//! │                                                                         │
//! │  acervus-store errors (separate crate)                                 │
//! │  └── StoreError       - CoreError + persistence failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → CLI message          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed lines in a persisted file are NOT errors. The codec drops them
//! without producing any of these types.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No catalog entry matches the requested name (case-insensitive).
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Insufficient stock to complete sale.
    ///
    /// ## User Workflow
    /// ```text
    /// sell("Rice", 60)
    ///      │
    ///      ▼
    /// Check stock: available=50
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Rice", available: 50, requested: 60 }
    ///      │
    ///      ▼
    /// Catalog and ledger untouched
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A monetary computation exceeded the representable range.
    #[error("Amount overflow while computing {what}")]
    Overflow { what: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true if this error was caused by the caller's input
    /// rather than by catalog state.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CoreError::Validation(_) | CoreError::Overflow { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Every store operation validates before it mutates anything.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (not a number, not a price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// Reasons decimal text cannot become [`crate::Money`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseMoneyError {
    #[error("empty amount")]
    Empty,

    #[error("invalid digit in amount")]
    InvalidDigit,

    #[error("at most 2 decimal places are supported")]
    TooPrecise,

    #[error("amount out of range")]
    OutOfRange,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Rice".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Rice: available 3, requested 5"
        );
        assert_eq!(
            CoreError::ProductNotFound("Pen".to_string()).to_string(),
            "Product not found: Pen"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert!(core_err.is_invalid_input());
        assert!(!CoreError::ProductNotFound("x".into()).is_invalid_input());
    }
}
