//! # Validation Module
//!
//! Search term validation shared by the manual entry surface and the
//! scanner stream.
//!
//! ## Usage
//! ```rust
//! use pricecheck_core::validation::validate_search_term;
//!
//! assert_eq!(validate_search_term("  9556001  ").unwrap(), "9556001");
//! assert!(validate_search_term("   ").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a search term (item code, barcode or subcode).
///
/// ## Rules
/// - Leading and trailing whitespace is removed
/// - The trimmed term must not be empty
///
/// ## Returns
/// The trimmed term.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Manual entry: shopper types "  ABC123 " and taps Search                │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_search_term ← THIS FUNCTION                                   │
/// │       │                                                                 │
/// │       ├── empty? → "Please enter an item code, barcode, or subcode"     │
/// │       │                                                                 │
/// │       └── OK("ABC123") → display goes to Loading                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_search_term(term: &str) -> ValidationResult<String> {
    let term = term.trim();

    if term.is_empty() {
        return Err(ValidationError::EmptySearchTerm);
    }

    Ok(term.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_search_term_trims() {
        assert_eq!(validate_search_term("ABC123").unwrap(), "ABC123");
        assert_eq!(validate_search_term(" \tABC 123\n").unwrap(), "ABC 123");
    }

    #[test]
    fn test_validate_search_term_rejects_blank() {
        assert_eq!(
            validate_search_term(""),
            Err(ValidationError::EmptySearchTerm)
        );
        assert_eq!(
            validate_search_term("   \t"),
            Err(ValidationError::EmptySearchTerm)
        );
    }
}
