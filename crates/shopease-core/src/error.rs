//! # Error Types
//!
//! Domain-specific error types for shopease-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopease-core errors (this file)                                       │
//! │  ├── CoreError        - Catalog construction failures                   │
//! │  └── ValidationError  - Field validation failures                       │
//! │                                                                         │
//! │  Everything downstream of a valid catalog is a TOTAL function:          │
//! │  cart, filter and session operations never return errors. Removing     │
//! │  a missing cart line is a no-op, not a failure.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These only arise when constructing a [`crate::Catalog`]: the catalog is
/// the single fallible boundary of the crate. A catalog that passes
/// `try_new` can be browsed, filtered and shopped without further checks.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two catalog products share an id.
    ///
    /// ## When This Occurs
    /// - The static catalog source contains a duplicate entry
    /// - A caller concatenated two catalogs without de-duplicating
    #[error("Duplicate product id in catalog: {id}")]
    DuplicateProduct { id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation errors.
///
/// These errors occur when a catalog product (or a search query) doesn't
/// meet requirements. Used for early validation before state is built.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., rating outside 0-5).
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::DuplicateProduct {
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate product id in catalog: 42");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        };
        assert!(err.to_string().starts_with("stock must be between 0"));
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
