//! # pricecheck-core: Pure Business Logic for the Price Checker Kiosk
//!
//! This crate holds the pricing and presentation rules of the kiosk as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Price Checker Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/kiosk (pricechecker)                    │   │
//! │  │        config load ──► console renderer ──► stdin events        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    pricecheck-kiosk (tokio)                     │   │
//! │  │   display state machine, input router, slideshow, fetch         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pricecheck-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  record   │  │  pricing  │  │   stock   │  │  product  │  │   │
//! │  │   │ normalize │  │  tiers    │  │  levels   │  │  details  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`record`] - Loose product record and key normalization
//! - [`pricing`] - Normal / promo / member tier resolution
//! - [`stock`] - Stock level classification
//! - [`product`] - Product panel details and the combined view
//! - [`money`] - Money type with integer arithmetic
//! - [`validation`] - Search term validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pricecheck_core::product::{ImageLocations, ProductView};
//! use pricecheck_core::record::{normalize_keys, ProductRecord};
//! use serde_json::json;
//!
//! let body = normalize_keys(json!({
//!     "itemCode": "A100",
//!     "normalPrice": "10.90",
//!     "promoPrice": "9.50",
//!     "isPromoValid": "T",
//!     "balQty": "42"
//! }));
//! let record = ProductRecord::from_json(body).unwrap().unwrap();
//!
//! let images = ImageLocations {
//!     product_base: "https://img.example/".to_string(),
//!     default_image: "https://img.example/none.png".to_string(),
//! };
//! let view = ProductView::build(&record, &images);
//!
//! assert_eq!(view.pricing.promo.unwrap().savings.to_string(), "1.40");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod product;
pub mod record;
pub mod stock;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{resolve, PricingPresentation};
pub use product::{ImageLocations, ProductDetails, ProductView};
pub use record::{normalize_keys, ProductRecord};
pub use stock::{classify, StockInfo, StockLevel};
pub use validation::validate_search_term;
