//! # Money Module
//!
//! Provides the `Money` type for price amounts shown on the kiosk.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The lookup API sends prices as decimal strings ("10.90").              │
//! │  Subtracting parsed floats gives 10.9 - 9.5 = 1.4000000000000004        │
//! │                                                                         │
//! │  OUR SOLUTION: parse once, round to cents, do all math in cents         │
//! │    1090 - 950 = 140 cents → "1.40" every time                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricecheck_core::money::Money;
//!
//! let normal = Money::from_amount(10.90);
//! let promo = Money::from_amount(9.50);
//! assert_eq!((normal - promo).cents(), 140);
//! assert_eq!(Money::from_cents(123_450).to_string(), "1,234.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents / sen).
///
/// ## Design Decisions
/// - **i64 (signed)**: member bundle savings can go negative when the member
///   price is above the normal price
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No currency symbol**: the render surface owns the currency label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude produced from a parsed amount: one trillion in
    /// major units. Differences of two clamped values stay well inside i64.
    pub const LIMIT: Money = Money(100_000_000_000_000);

    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use pricecheck_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a parsed decimal amount, rounding to the
    /// nearest cent (half away from zero).
    ///
    /// Non-finite input yields zero; anything beyond [`Money::LIMIT`] is
    /// clamped to it.
    pub fn from_amount(amount: f64) -> Self {
        Money::from_cents_f64(amount * 100.0)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies by a (possibly fractional) quantity, rounding to the cent.
    ///
    /// Promotion quantities come from the API as loose numbers, so `2.5` is
    /// a legal minimum purchase.
    ///
    /// ```rust
    /// use pricecheck_core::money::Money;
    ///
    /// let unit = Money::from_cents(800);
    /// assert_eq!(unit.times(3.0).cents(), 2400);
    /// ```
    pub fn times(&self, quantity: f64) -> Money {
        Money::from_cents_f64(self.0 as f64 * quantity)
    }

    fn from_cents_f64(cents: f64) -> Money {
        if !cents.is_finite() {
            return Money::zero();
        }
        let limit = Money::LIMIT.0 as f64;
        Money(cents.round().clamp(-limit, limit) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Two decimals with comma thousands separators: `1,234.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.dollars().abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{}{}.{:02}", sign, grouped, self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
