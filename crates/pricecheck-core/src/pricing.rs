//! # Pricing Resolver
//!
//! Turns a raw [`ProductRecord`] into the price tiers the kiosk shows.
//!
//! ## Tier Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        resolve(record)                                  │
//! │                                                                         │
//! │  NORMAL  always shown                                                   │
//! │                                                                         │
//! │  PROMO   IsPromoValid (true | "T")                                      │
//! │          AND 0 < promo < normal                                         │
//! │          savings = normal - promo                                       │
//! │          + quantity rule   if MinQty > 1                                │
//! │          + validity window if Promotion object present                  │
//! │                                                                         │
//! │  MEMBER  member > 0                                                     │
//! │          AND (promo flag off OR promo == 0 OR member < promo)           │
//! │          MinQty > 1 → bundle: total = member × MinQty                   │
//! │                       savings = normal × MinQty - total                 │
//! │          otherwise  → savings = normal - member                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tier decisions compare the parsed decimal values. Every amount the
//! kiosk displays is then carried as [`Money`] so savings are exact to
//! the cent.
//!
//! `resolve` is pure and total: unparsable numbers read as 0 and missing
//! text reads as a default label.

use crate::money::Money;
use crate::record::{loose_text, number_or_zero, ProductRecord};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;
use ts_rs::TS;

/// Unit label used on price tiers when the record has no UOM.
pub const DEFAULT_UNIT: &str = "Unit";

/// Unit label used inside quantity rules when the record has no UOM.
pub const DEFAULT_RULE_UNIT: &str = "unit";

/// Placeholder for an absent or unreadable date.
pub const MISSING_DATE: &str = "-";

// =============================================================================
// Presentation Types
// =============================================================================

/// Everything the price panel shows for one product.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingPresentation {
    pub normal: NormalTier,
    pub promo: Option<PromoTier>,
    pub member: Option<MemberTier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NormalTier {
    pub amount: Money,
    pub unit: String,
}

/// Promotion price tier.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PromoTier {
    pub amount: Money,
    pub unit: String,
    /// Per-unit saving against the normal price, never negative.
    pub savings: Money,
    pub quantity_rule: Option<QuantityRule>,
    pub validity: Option<ValidityWindow>,
}

/// Member (loyalty) price tier.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MemberTier {
    pub amount: Money,
    pub unit: String,
    /// Bundle saving when `bundle` is set, per-unit saving otherwise.
    /// Negative when the member price is above the normal price.
    pub total_savings: Money,
    pub bundle: Option<MemberBundle>,
}

/// Member price for the promotion's minimum purchase.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MemberBundle {
    pub total_qty: f64,
    pub total_amount: Money,
    pub rule: QuantityRule,
}

/// Minimum (and optional maximum) purchase quantity.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuantityRule {
    pub min_qty: f64,
    /// Only set when positive and different from `min_qty`.
    pub max_qty: Option<f64>,
    pub unit: String,
}

impl QuantityRule {
    /// Shopper-facing text, e.g. `Min. Buy: 3 (Max: 6) PCS(s)`.
    pub fn label(&self) -> String {
        let mut text = format!("Min. Buy: {}", self.min_qty);
        if let Some(max) = self.max_qty {
            text.push_str(&format!(" (Max: {})", max));
        }
        text.push_str(&format!(" {}(s)", self.unit));
        text
    }
}

/// Promotion validity dates. Each end is independently optional.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ValidityWindow {
    #[ts(as = "Option<String>")]
    pub from: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub until: Option<NaiveDate>,
}

impl ValidityWindow {
    /// `dd/mm/yyyy`, or `-`.
    pub fn from_label(&self) -> String {
        format_date(self.from)
    }

    /// `dd/mm/yyyy`, or `-`.
    pub fn until_label(&self) -> String {
        format_date(self.until)
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Computes the price tiers for a product record.
///
/// ## Example
/// ```rust
/// use pricecheck_core::pricing::resolve;
/// use pricecheck_core::record::ProductRecord;
/// use serde_json::json;
///
/// let record = ProductRecord::from_json(json!({
///     "NormalPrice": "10.00",
///     "PromoPrice": "9.00",
///     "MemberPrice1": "8.00",
///     "IsPromoValid": true
/// })).unwrap().unwrap();
///
/// let pricing = resolve(&record);
/// assert_eq!(pricing.promo.unwrap().savings.cents(), 100);
/// assert_eq!(pricing.member.unwrap().amount.cents(), 800);
/// ```
pub fn resolve(record: &ProductRecord) -> PricingPresentation {
    let normal_price = number_or_zero(&record.normal_price);
    let promo_price = number_or_zero(&record.promo_price);
    let member_price = number_or_zero(&record.member_price1);
    let promo_valid = record.promo_flag();

    let unit = record
        .unit_of_measure()
        .unwrap_or_else(|| DEFAULT_UNIT.to_string());
    let rule = quantity_rule(record);

    let normal = NormalTier {
        amount: Money::from_amount(normal_price),
        unit: unit.clone(),
    };

    let has_promo = promo_valid && promo_price > 0.0 && promo_price < normal_price;
    let promo = has_promo.then(|| PromoTier {
        amount: Money::from_amount(promo_price),
        unit: unit.clone(),
        savings: Money::from_amount(normal_price) - Money::from_amount(promo_price),
        quantity_rule: rule.clone(),
        validity: record.promotion.as_ref().map(|p| ValidityWindow {
            from: parse_date(&p.from_date),
            until: parse_date(&p.to_date),
        }),
    });

    let show_member =
        member_price > 0.0 && (!promo_valid || promo_price == 0.0 || member_price < promo_price);
    let member = show_member.then(|| {
        let amount = Money::from_amount(member_price);
        let normal_amount = Money::from_amount(normal_price);
        match rule {
            Some(rule) => {
                let total_amount = amount.times(rule.min_qty);
                MemberTier {
                    amount,
                    unit: unit.clone(),
                    total_savings: normal_amount.times(rule.min_qty) - total_amount,
                    bundle: Some(MemberBundle {
                        total_qty: rule.min_qty,
                        total_amount,
                        rule,
                    }),
                }
            }
            None => MemberTier {
                amount,
                unit: unit.clone(),
                total_savings: normal_amount - amount,
                bundle: None,
            },
        }
    });

    PricingPresentation {
        normal,
        promo,
        member,
    }
}

/// Quantity rule for the record, present only when MinQty > 1.
fn quantity_rule(record: &ProductRecord) -> Option<QuantityRule> {
    let min_qty = record.min_qty().filter(|q| *q > 1.0)?;
    let max_qty = record.max_qty().filter(|q| *q > 0.0 && *q != min_qty);
    let unit = record
        .unit_of_measure()
        .unwrap_or_else(|| DEFAULT_RULE_UNIT.to_string());

    Some(QuantityRule {
        min_qty,
        max_qty,
        unit,
    })
}

// =============================================================================
// Dates
// =============================================================================

/// Reads a promotion date. Accepts RFC 3339 timestamps (the date as written
/// in its own offset), `YYYY-MM-DDTHH:MM:SS[.fff]`, `YYYY-MM-DD HH:MM:SS`
/// and `YYYY-MM-DD`.
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    let text = loose_text(value)?;
    let text = text.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.naive_local().date());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(ts.date());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// `dd/mm/yyyy`, or `-` when absent.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => MISSING_DATE.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
