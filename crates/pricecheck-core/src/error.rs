//! # Error Types
//!
//! Domain-specific error types for pricecheck-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pricecheck-core errors (this file)                                    │
//! │  ├── CoreError        - Malformed product payloads                     │
//! │  └── ValidationError  - Search term input failures                     │
//! │                                                                         │
//! │  pricecheck-kiosk errors (separate crate)                              │
//! │  └── KioskError       - Config, lookup and runtime failures            │
//! │                                                                         │
//! │  Flow: CoreError / ValidationError → KioskError → kiosk message        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Missing or unparsable record fields are NOT errors: they degrade to "-"
//! or 0 field by field. Only a payload that is not an object at all fails.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The lookup payload is not a JSON object.
    ///
    /// ## When This Occurs
    /// - The API answered with an array, string or number
    /// - A proxy returned an unrelated JSON document
    #[error("Malformed product record: expected an object, got {found}")]
    MalformedRecord { found: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Surfaced to the shopper immediately; they never change the display state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Manual entry was empty or whitespace only.
    #[error("Please enter an item code, barcode, or subcode")]
    EmptySearchTerm,
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
        let err = CoreError::MalformedRecord {
            found: "array".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed product record: expected an object, got array"
        );
    }

    #[test]
    fn test_validation_error_message() {
        assert_eq!(
            ValidationError::EmptySearchTerm.to_string(),
            "Please enter an item code, barcode, or subcode"
        );
    }
}
