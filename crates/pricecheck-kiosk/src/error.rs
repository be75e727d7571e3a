//! # Kiosk Error Types
//!
//! Error types for the kiosk runtime.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Kiosk Error Categories                            │
//! │                                                                         │
//! │  ┌────────────────┐ ┌────────────────┐ ┌────────────┐ ┌─────────────┐ │
//! │  │ Configuration  │ │     Lookup     │ │   Input    │ │  Internal   │ │
//! │  │                │ │                │ │            │ │             │ │
//! │  │ InvalidConfig  │ │ProductNotFound │ │ Validation │ │ChannelError │ │
//! │  │ InvalidUrl     │ │ HttpStatus     │ │            │ │ShuttingDown │ │
//! │  │ ConfigLoad...  │ │ Transport      │ │            │ │             │ │
//! │  │ ConfigSave...  │ │ Decode         │ │            │ │             │ │
//! │  └────────────────┘ └────────────────┘ └────────────┘ └─────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No category is fatal to the kiosk: lookup errors become an error screen
//! that resets itself, validation errors become an alert.

use pricecheck_core::{CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for kiosk operations.
pub type KioskResult<T> = Result<T, KioskError>;

/// Message shown when a lookup fails without a usable reason.
pub const GENERIC_LOOKUP_FAILURE: &str = "Failed to load product information. Please try again.";

/// Message shown when the API has no such product.
pub const NOT_FOUND_MESSAGE: &str = "Product not found";

/// Kiosk error type covering every runtime failure.
#[derive(Debug, Error)]
pub enum KioskError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid kiosk configuration.
    #[error("Invalid kiosk configuration: {0}")]
    InvalidConfig(String),

    /// Invalid API URL.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Lookup Errors
    // =========================================================================
    /// The API has no product for the search term.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The API answered with a non-success status other than 404.
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The response body could not be read as a product.
    #[error("Invalid product response: {0}")]
    Decode(String),

    // =========================================================================
    // Input Errors
    // =========================================================================
    /// Manual entry rejected before any lookup.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // =========================================================================
    // Internal Errors
    // =========================================================================
    /// Kiosk runtime is shutting down.
    #[error("Kiosk is shutting down")]
    ShuttingDown,

    /// Channel send/receive failed.
    #[error("Channel error: {0}")]
    ChannelError(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for KioskError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            if status == reqwest::StatusCode::NOT_FOUND {
                return KioskError::ProductNotFound(
                    err.url().map(|u| u.to_string()).unwrap_or_default(),
                );
            }
            return KioskError::HttpStatus(status.as_u16());
        }
        if err.is_decode() {
            return KioskError::Decode(err.to_string());
        }
        KioskError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for KioskError {
    fn from(err: serde_json::Error) -> Self {
        KioskError::Decode(err.to_string())
    }
}

impl From<CoreError> for KioskError {
    fn from(err: CoreError) -> Self {
        KioskError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for KioskError {
    fn from(err: url::ParseError) -> Self {
        KioskError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for KioskError {
    fn from(err: std::io::Error) -> Self {
        KioskError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for KioskError {
    fn from(err: toml::de::Error) -> Self {
        KioskError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for KioskError {
    fn from(err: toml::ser::Error) -> Self {
        KioskError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl KioskError {
    /// Returns true if the API has no such product.
    pub fn is_not_found(&self) -> bool {
        matches!(self, KioskError::ProductNotFound(_))
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            KioskError::InvalidConfig(_)
                | KioskError::InvalidUrl(_)
                | KioskError::ConfigLoadFailed(_)
                | KioskError::ConfigSaveFailed(_)
        )
    }

    /// Text shown to the shopper for this error.
    ///
    /// ## Mapping
    /// - not found → "Product not found"
    /// - HTTP status → "HTTP error! status: N"
    /// - transport failure → its own message, or the generic retry hint
    /// - validation → the validation message
    /// - everything else → the generic retry hint
    pub fn user_message(&self) -> String {
        match self {
            KioskError::ProductNotFound(_) => NOT_FOUND_MESSAGE.to_string(),
            KioskError::HttpStatus(_) | KioskError::Validation(_) => self.to_string(),
            KioskError::Transport(msg) if !msg.trim().is_empty() => msg.clone(),
            _ => GENERIC_LOOKUP_FAILURE.to_string(),
        }
    }
}
