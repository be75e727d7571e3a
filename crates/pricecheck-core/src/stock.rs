//! # Stock Classifier
//!
//! Buckets the on-hand balance into the badge the kiosk shows next to the
//! price.
//!
//! ```text
//!   qty == 0        → OutOfStock   (red badge)
//!   0 < qty <= 10   → Low          (amber badge)
//!   otherwise       → Normal
//! ```
//!
//! The level is decided on the parsed value; only the displayed quantity is
//! rounded.

use crate::pricing::DEFAULT_UNIT;
use crate::record::{loose_text, number_or_zero};
use serde::Serialize;
use serde_json::Value;
use ts_rs::TS;

/// Highest quantity still reported as low stock.
pub const LOW_STOCK_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    OutOfStock,
    Low,
    Normal,
}

/// Stock badge content.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StockInfo {
    /// Balance rounded to the nearest whole unit.
    pub quantity: i64,
    pub unit: String,
    pub level: StockLevel,
}

/// Classifies a raw balance quantity and unit of measure.
///
/// Unparsable quantities read as 0; a missing unit reads as `"Unit"`.
///
/// ```rust
/// use pricecheck_core::stock::{classify, StockLevel};
/// use serde_json::json;
///
/// let info = classify(&json!("5"), &json!("PCS"));
/// assert_eq!(info.level, StockLevel::Low);
/// assert_eq!(info.unit, "PCS");
/// ```
pub fn classify(bal_qty: &Value, uom: &Value) -> StockInfo {
    let qty = number_or_zero(bal_qty);

    let level = if qty == 0.0 {
        StockLevel::OutOfStock
    } else if qty > 0.0 && qty <= LOW_STOCK_THRESHOLD {
        StockLevel::Low
    } else {
        StockLevel::Normal
    };

    StockInfo {
        quantity: qty.round() as i64,
        unit: loose_text(uom).unwrap_or_else(|| DEFAULT_UNIT.to_string()),
        level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_levels() {
        assert_eq!(classify(&json!("0"), &json!(null)).level, StockLevel::OutOfStock);
        assert_eq!(classify(&json!("5"), &json!(null)).level, StockLevel::Low);
        assert_eq!(classify(&json!("10"), &json!(null)).level, StockLevel::Low);
        assert_eq!(classify(&json!("11"), &json!(null)).level, StockLevel::Normal);
        assert_eq!(classify(&json!(250), &json!(null)).level, StockLevel::Normal);
    }

    #[test]
    fn test_classify_unparsable_is_out_of_stock() {
        let info = classify(&json!("n/a"), &json!(""));
        assert_eq!(info.quantity, 0);
        assert_eq!(info.level, StockLevel::OutOfStock);
        assert_eq!(info.unit, "Unit");
    }

    /// 0.4 displays as 0 but still counts as low, not out of stock.
    #[test]
    fn test_level_uses_unrounded_quantity() {
        let info = classify(&json!("0.4"), &json!("KG"));
        assert_eq!(info.quantity, 0);
        assert_eq!(info.level, StockLevel::Low);

        let info = classify(&json!("10.4"), &json!("KG"));
        assert_eq!(info.quantity, 10);
        assert_eq!(info.level, StockLevel::Normal);
    }

    #[test]
    fn test_negative_balance_is_normal() {
        let info = classify(&json!("-3"), &json!("PCS"));
        assert_eq!(info.quantity, -3);
        assert_eq!(info.level, StockLevel::Normal);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(classify(&json!("12.5"), &json!(null)).quantity, 13);
        assert_eq!(classify(&json!(12.49), &json!(null)).quantity, 12);
    }
}
