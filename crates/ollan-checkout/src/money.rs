//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A 10% discount on ₦40.30 in floats:                                    │
//! │    40.3 * 0.1 = 4.0299999999999994  → Wrong kobo on the receipt!        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Kobo                                             │
//! │    ₦40.30 = 4030 kobo; 10% = 403 kobo, exactly                          │
//! │    Rounding happens once, explicitly, in integer math                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ollan_checkout::money::Money;
//!
//! // Create from kobo (preferred) or whole naira
//! let price = Money::from_kobo(1099);   // ₦10.99
//! let fee = Money::from_naira(1500);    // ₦1500.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;                      // ₦21.98
//! let total = price + Money::from_kobo(500);    // ₦15.99
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (kobo for NGN).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  CartLine.unit_price ──► line total ──► cart subtotal                   │
/// │                                              │                          │
/// │  delivery fee ◄── fee schedule               ▼                          │
/// │       │                              promo discount                     │
/// │       └──────────────┬───────────────────────┘                          │
/// │                      ▼                                                  │
/// │            PricedOrder.grand_total                                      │
/// │                                                                         │
/// │  EVERY monetary value in the engine flows through this type             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from kobo (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use ollan_checkout::money::Money;
    ///
    /// let price = Money::from_kobo(1099); // Represents ₦10.99
    /// assert_eq!(price.kobo(), 1099);
    /// ```
    ///
    /// ## Why Kobo?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The engine, the order payload, and the API all use kobo.
    /// Only the UI converts to naira for display.
    #[inline]
    pub const fn from_kobo(kobo: i64) -> Self {
        Money(kobo)
    }

    /// Creates a Money value from whole naira.
    ///
    /// Convenient for the fee schedule and thresholds, which are defined in
    /// whole naira.
    ///
    /// ## Example
    /// ```rust
    /// use ollan_checkout::money::Money;
    ///
    /// let fee = Money::from_naira(1500);
    /// assert_eq!(fee.kobo(), 150_000);
    /// ```
    #[inline]
    pub const fn from_naira(naira: i64) -> Self {
        Money(naira * 100)
    }

    /// Returns the value in kobo (smallest currency unit).
    #[inline]
    pub const fn kobo(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (naira) portion.
    ///
    /// ## Example
    /// ```rust
    /// use ollan_checkout::money::Money;
    ///
    /// let price = Money::from_kobo(1099);
    /// assert_eq!(price.naira(), 10);
    /// ```
    #[inline]
    pub const fn naira(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (kobo) portion (always 0-99).
    #[inline]
    pub const fn kobo_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use ollan_checkout::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use ollan_checkout::money::Money;
    ///
    /// let unit_price = Money::from_naira(2000);
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total, Money::from_naira(4000));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Calculates a percentage discount amount at the given rate.
    ///
    /// Returns the discount itself, not the discounted remainder, because
    /// the discount is a separate line on the priced order.
    ///
    /// ## Implementation
    /// Integer math with explicit rounding: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides round-half-up behavior (5000/10000 = 0.5).
    /// i128 intermediate prevents overflow on large carts.
    ///
    /// ## Example
    /// ```rust
    /// use ollan_checkout::money::Money;
    /// use ollan_checkout::types::DiscountRate;
    ///
    /// let qualifying = Money::from_naira(4000);
    /// let rate = DiscountRate::from_bps(1000); // 10%
    /// assert_eq!(qualifying.discount_amount(rate), Money::from_naira(400));
    /// ```
    pub fn discount_amount(&self, rate: DiscountRate) -> Money {
        let discount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_kobo(discount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and the CLI. Use frontend formatting for actual
/// UI display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₦{}.{:02}", sign, self.naira().abs(), self.kobo_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kobo() {
        let money = Money::from_kobo(1099);
        assert_eq!(money.kobo(), 1099);
        assert_eq!(money.naira(), 10);
        assert_eq!(money.kobo_part(), 99);
    }

    #[test]
    fn test_from_naira() {
        assert_eq!(Money::from_naira(1500).kobo(), 150_000);
        assert_eq!(Money::from_naira(0), Money::zero());
        assert_eq!(Money::from_naira(-5).kobo(), -500);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_kobo(1099)), "₦10.99");
        assert_eq!(format!("{}", Money::from_naira(1500)), "₦1500.00");
        assert_eq!(format!("{}", Money::from_kobo(-550)), "-₦5.50");
        assert_eq!(format!("{}", Money::from_kobo(0)), "₦0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_kobo(1000);
        let b = Money::from_kobo(500);

        assert_eq!((a + b).kobo(), 1500);
        assert_eq!((a - b).kobo(), 500);
        let result: Money = a * 3;
        assert_eq!(result.kobo(), 3000);
    }

    #[test]
    fn test_discount_amount_basic() {
        // ₦4000 at 10% = ₦400
        let qualifying = Money::from_naira(4000);
        let rate = DiscountRate::from_bps(1000);
        assert_eq!(qualifying.discount_amount(rate), Money::from_naira(400));
    }

    #[test]
    fn test_discount_amount_rounds_half_up() {
        // 1005 kobo at 10% = 100.5 kobo → 101 kobo
        let amount = Money::from_kobo(1005);
        let rate = DiscountRate::from_bps(1000);
        assert_eq!(amount.discount_amount(rate).kobo(), 101);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_kobo(299);
        assert_eq!(unit_price.multiply_quantity(3).kobo(), 897);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_kobo(100);
        assert!(positive.is_positive());

        let negative = Money::from_kobo(-100);
        assert!(negative.is_negative());
    }
}
