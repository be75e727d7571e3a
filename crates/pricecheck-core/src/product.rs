//! # Product View
//!
//! The full payload of the product panel: identity details, pricing tiers
//! and stock badge, derived once per lookup.
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │  [image]   Kopi O Kosong 20s          (name)       │
//! │            Item A100  ·  Barcode 9556001234567     │
//! │            Brand: AHHUAT                           │
//! │            Location: AISLE 4 (From HQ Stock)       │
//! │                                                    │
//! │  NORMAL 10.90   PROMO 9.50   MEMBER 8.30           │
//! │  Stock: 5 PCS  [LOW]                               │
//! └────────────────────────────────────────────────────┘
//! ```

use crate::pricing::{resolve, PricingPresentation};
use crate::record::{loose_flag, loose_text, ProductRecord};
use crate::stock::{classify, StockInfo};
use serde::Serialize;
use ts_rs::TS;

/// Placeholder for any missing text field.
pub const MISSING_TEXT: &str = "-";

/// Name shown when the record has no description.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Suffix appended to the location when stock came from HQ.
pub const HQ_SUFFIX: &str = " (From HQ Stock)";

// =============================================================================
// Image Locations
// =============================================================================

/// Where product images are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLocations {
    /// Prefix for `{ItemCode}.png` images.
    pub product_base: String,
    /// Shown when the primary image fails to load.
    pub default_image: String,
}

/// Image to show, with a fallback for load failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub src: String,
    pub fallback: String,
}

// =============================================================================
// Details
// =============================================================================

/// Identity block of the product panel. Every field has a display value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub item_code: String,
    pub barcode: String,
    pub name: String,
    pub brand: String,
    /// Includes the HQ suffix when `from_hq` is set.
    pub location: String,
    pub from_hq: bool,
    pub image: ProductImage,
}

impl ProductDetails {
    pub fn from_record(record: &ProductRecord, images: &ImageLocations) -> Self {
        let item_code = loose_text(&record.item_code);
        let from_hq = loose_flag(&record.is_fallback_from_hq);

        let mut location =
            loose_text(&record.location).unwrap_or_else(|| MISSING_TEXT.to_string());
        if from_hq {
            location.push_str(HQ_SUFFIX);
        }

        let src = match loose_text(&record.item_image) {
            Some(encoded) => format!("data:image/jpeg;base64,{}", encoded),
            None => format!(
                "{}{}.png",
                images.product_base,
                item_code.as_deref().unwrap_or_default()
            ),
        };

        ProductDetails {
            barcode: loose_text(&record.barcode)
                .or_else(|| item_code.clone())
                .unwrap_or_else(|| MISSING_TEXT.to_string()),
            item_code: item_code.unwrap_or_else(|| MISSING_TEXT.to_string()),
            name: loose_text(&record.item_description)
                .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
            brand: loose_text(&record.item_brand).unwrap_or_else(|| MISSING_TEXT.to_string()),
            location,
            from_hq,
            image: ProductImage {
                src,
                fallback: images.default_image.clone(),
            },
        }
    }
}

// =============================================================================
// Product View
// =============================================================================

/// Everything the product panel renders.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub details: ProductDetails,
    pub pricing: PricingPresentation,
    pub stock: StockInfo,
}

impl ProductView {
    /// Derives the panel contents from a record.
    pub fn build(record: &ProductRecord, images: &ImageLocations) -> Self {
        ProductView {
            details: ProductDetails::from_record(record, images),
            pricing: resolve(record),
            stock: classify(&record.bal_qty, &record.uom),
        }
    }
}
