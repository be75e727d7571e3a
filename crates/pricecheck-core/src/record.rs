//! # Product Record
//!
//! The loose product record returned by the lookup API, plus the helpers
//! that read its fields the forgiving way the kiosk needs.
//!
//! ## Wire Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /api/pricechecker/9556001234567                                    │
//! │                                                                         │
//! │  { "itemCode": "A100", "normalPrice": "10.90", "isPromoValid": "T",     │
//! │    "promotion": { "minQty": "3", "fromDate": "2024-03-01" } }           │
//! │        │                                                                │
//! │        ▼  normalize_keys (once, at the fetch boundary)                  │
//! │  { "ItemCode": "A100", "NormalPrice": "10.90", "IsPromoValid": "T",     │
//! │    "Promotion": { "MinQty": "3", "FromDate": "2024-03-01" } }           │
//! │        │                                                                │
//! │        ▼  ProductRecord::from_json                                      │
//! │  ProductRecord { normal_price: "10.90", promotion: Some(..), .. }       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every field stays a raw [`serde_json::Value`]: the backend mixes numbers,
//! numeric strings and `"T"` flags, and a bad field must degrade to `"-"` or
//! `0` on its own instead of rejecting the whole record.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Product Record
// =============================================================================

/// A product as returned by the lookup API, after key normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProductRecord {
    pub item_code: Value,
    pub barcode: Value,
    pub item_description: Value,
    pub item_brand: Value,
    pub location: Value,

    /// Stock and location came from the central warehouse record.
    #[serde(rename = "IsFallbackFromHQ", alias = "IsFallbackFromHq")]
    pub is_fallback_from_hq: Value,

    /// Optional base64 JPEG.
    pub item_image: Value,

    pub bal_qty: Value,

    #[serde(rename = "UOM", alias = "Uom")]
    pub uom: Value,

    pub normal_price: Value,
    pub promo_price: Value,
    pub member_price1: Value,

    /// `true` or the literal `"T"`; anything else is invalid.
    pub is_promo_valid: Value,

    /// Present only when the API sent an object.
    #[serde(deserialize_with = "lenient_promotion")]
    pub promotion: Option<Promotion>,
}

/// Promotion terms attached to a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Promotion {
    pub min_qty: Value,
    pub max_qty: Value,
    pub from_date: Value,
    pub to_date: Value,
}

impl ProductRecord {
    /// Decodes a normalized response body.
    ///
    /// ## Returns
    /// - `Ok(None)` for `null` or `false` (the API's "no such product")
    /// - `Ok(Some(record))` for any object
    /// - `Err(MalformedRecord)` for anything else
    pub fn from_json(body: Value) -> CoreResult<Option<ProductRecord>> {
        match body {
            Value::Null | Value::Bool(false) => Ok(None),
            Value::Object(_) => serde_json::from_value(body)
                .map(Some)
                .map_err(|e| CoreError::MalformedRecord {
                    found: e.to_string(),
                }),
            other => Err(CoreError::MalformedRecord {
                found: json_kind(&other).to_string(),
            }),
        }
    }

    /// Unit of measure, if the record carries one.
    pub fn unit_of_measure(&self) -> Option<String> {
        loose_text(&self.uom)
    }

    /// Whether the promotion price may be shown at all.
    pub fn promo_flag(&self) -> bool {
        loose_flag(&self.is_promo_valid)
    }

    /// Promotion minimum quantity, `None` when absent, not a number
    /// or not finite.
    pub fn min_qty(&self) -> Option<f64> {
        self.promotion
            .as_ref()
            .and_then(|p| loose_number(&p.min_qty))
            .filter(|q| q.is_finite())
    }

    /// Promotion maximum quantity, `None` when absent, not a number
    /// or not finite.
    pub fn max_qty(&self) -> Option<f64> {
        self.promotion
            .as_ref()
            .and_then(|p| loose_number(&p.max_qty))
            .filter(|q| q.is_finite())
    }
}

fn lenient_promotion<'de, D>(deserializer: D) -> Result<Option<Promotion>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

fn json_kind(value: &Value) -> &'static str {
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
// Key Normalization
// =============================================================================

/// Upper-cases the first character of every object key, recursively.
///
/// Arrays are walked element by element; scalars come back unchanged.
///
/// ```rust
/// use pricecheck_core::record::normalize_keys;
/// use serde_json::json;
///
/// let body = json!({ "itemCode": "A1", "promotion": { "minQty": 2 } });
/// assert_eq!(
///     normalize_keys(body),
///     json!({ "ItemCode": "A1", "Promotion": { "MinQty": 2 } })
/// );
/// ```
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut normalized = Map::with_capacity(map.len());
            for (key, inner) in map {
                normalized.insert(capitalize(&key), normalize_keys(inner));
            }
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        scalar => scalar,
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Loose Field Readers
// =============================================================================

/// Reads a number the way a browser's `parseFloat` would.
///
/// JSON numbers are used as is. Strings use their longest leading decimal
/// prefix (`"12.5kg"` is 12.5). Everything else is not a number.
pub fn loose_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_leading_float(s),
        _ => None,
    }
}

/// [`loose_number`], with "not a number" and zero both reading as 0.
pub fn number_or_zero(value: &Value) -> f64 {
    loose_number(value).filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// `true` only for boolean true or the exact string `"T"`.
pub fn loose_flag(value: &Value) -> bool {
    matches!(value, Value::Bool(true)) || matches!(value, Value::String(s) if s == "T")
}

/// Text content of a field: non-empty strings, and non-zero numbers
/// rendered as text. Anything else is absent.
pub fn loose_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Parses the longest leading decimal prefix of `input`.
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with an
/// optional fraction, an optional exponent, and `Infinity`.
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].replace("Infinity", "inf").parse().ok();
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_keys_recurses() {
        let body = json!({
            "itemCode": "A100",
            "uom": "PCS",
            "promotion": { "minQty": "3", "toDate": null },
            "tags": [{ "name": "x" }, 5, "y"],
            "": 1
        });
        let normalized = normalize_keys(body);
        assert_eq!(
            normalized,
            json!({
                "ItemCode": "A100",
                "Uom": "PCS",
                "Promotion": { "MinQty": "3", "ToDate": null },
                "Tags": [{ "Name": "x" }, 5, "y"],
                "": 1
            })
        );
    }

    #[test]
    fn test_normalize_keys_leaves_scalars() {
        assert_eq!(normalize_keys(json!("itemCode")), json!("itemCode"));
        assert_eq!(normalize_keys(json!(null)), json!(null));
        assert_eq!(normalize_keys(json!(4.5)), json!(4.5));
    }

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("10.90"), Some(10.9));
        assert_eq!(parse_leading_float("  12.5kg"), Some(12.5));
        assert_eq!(parse_leading_float("-3"), Some(-3.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("5."), Some(5.0));
        assert_eq!(parse_leading_float("1e3x"), Some(1000.0));
        assert_eq!(parse_leading_float("2e"), Some(2.0));
        assert_eq!(parse_leading_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("-"), None);
    }

    #[test]
    fn test_loose_number_by_kind() {
        assert_eq!(loose_number(&json!(7)), Some(7.0));
        assert_eq!(loose_number(&json!("7.25")), Some(7.25));
        assert_eq!(loose_number(&json!(true)), None);
        assert_eq!(loose_number(&json!(null)), None);
        assert_eq!(number_or_zero(&json!("n/a")), 0.0);
        assert_eq!(number_or_zero(&json!("Infinity")), 0.0);
    }

    #[test]
    fn test_loose_flag_only_true_or_t() {
        assert!(loose_flag(&json!(true)));
        assert!(loose_flag(&json!("T")));
        assert!(!loose_flag(&json!("t")));
        assert!(!loose_flag(&json!("true")));
        assert!(!loose_flag(&json!(1)));
        assert!(!loose_flag(&json!(null)));
    }

    #[test]
    fn test_loose_text() {
        assert_eq!(loose_text(&json!("PCS")), Some("PCS".to_string()));
        assert_eq!(loose_text(&json!(42)), Some("42".to_string()));
        assert_eq!(loose_text(&json!("")), None);
        assert_eq!(loose_text(&json!(0)), None);
        assert_eq!(loose_text(&json!(null)), None);
    }

    #[test]
    fn test_from_json_object() {
        let body = normalize_keys(json!({
            "itemCode": "A100",
            "uom": "BOX",
            "isFallbackFromHQ": true,
            "memberPrice1": "8.00",
            "promotion": { "minQty": 3, "maxQty": "6" }
        }));
        let record = ProductRecord::from_json(body).unwrap().unwrap();
        assert_eq!(record.item_code, json!("A100"));
        assert_eq!(record.unit_of_measure(), Some("BOX".to_string()));
        assert_eq!(record.is_fallback_from_hq, json!(true));
        assert_eq!(record.member_price1, json!("8.00"));
        assert_eq!(record.min_qty(), Some(3.0));
        assert_eq!(record.max_qty(), Some(6.0));
    }

    #[test]
    fn test_from_json_uppercase_uom() {
        let record = ProductRecord::from_json(json!({ "UOM": "KG" }))
            .unwrap()
            .unwrap();
        assert_eq!(record.unit_of_measure(), Some("KG".to_string()));
    }

    #[test]
    fn test_from_json_missing_fields_default() {
        let record = ProductRecord::from_json(json!({})).unwrap().unwrap();
        assert_eq!(record, ProductRecord::default());
        assert!(record.promotion.is_none());
        assert_eq!(record.min_qty(), None);
    }

    #[test]
    fn test_from_json_non_object_promotion_is_dropped() {
        let record = ProductRecord::from_json(json!({ "Promotion": "none" }))
            .unwrap()
            .unwrap();
        assert!(record.promotion.is_none());

        let record = ProductRecord::from_json(json!({ "Promotion": {} }))
            .unwrap()
            .unwrap();
        assert_eq!(record.promotion, Some(Promotion::default()));
    }

    #[test]
    fn test_from_json_not_found_and_malformed() {
        assert!(ProductRecord::from_json(json!(null)).unwrap().is_none());
        assert!(ProductRecord::from_json(json!(false)).unwrap().is_none());

        let err = ProductRecord::from_json(json!([1, 2])).unwrap_err();
        assert!(matches!(err, CoreError::MalformedRecord { ref found } if found == "array"));
    }
}
