//! # Domain Types
//!
//! Core domain types for checkout pricing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌──────────────────┐  │
//! │  │    CartLine     │   │  DeliverySelection  │   │   PricedOrder    │  │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ──────────────  │  │
//! │  │  product_id     │   │  Express            │   │  subtotal        │  │
//! │  │  unit_price     │   │  Timeframe { slot } │   │  delivery_fee    │  │
//! │  │  category       │   │  Pickup { location }│   │  discount        │  │
//! │  │  quantity       │   └─────────────────────┘   │  grand_total     │  │
//! │  └─────────────────┘                             └──────────────────┘  │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DiscountRate   │   │    PromoKind    │   │  AppliedPromo   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │ CategoryDiscount│   │  code           │       │
//! │  │  1000 = 10%     │   │ FreeDelivery    │   │  kind, amount   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are plain values. They are computed fresh on every
//! checkout-state change and none of them is persisted here; the order
//! service is the system of record.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::slots::Slot;

// =============================================================================
// Discount Rate
// =============================================================================

/// Percentage discount represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (the supermarket category discount)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A single line of the customer's cart, snapshotted for pricing.
///
/// ## Design Notes
/// The cart itself lives in the storefront (or behind `GET /cart`); the
/// engine only ever sees this frozen view. `unit_price` is the price at
/// the time the snapshot was taken.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Product ID as issued by the catalog service (opaque here).
    pub product_id: String,

    /// Unit price in kobo at snapshot time.
    pub unit_price: Money,

    /// Product category, when the catalog provides one.
    /// Category-discount codes only look at lines that have a category.
    pub category: Option<String>,

    /// Quantity in cart (must be positive).
    pub quantity: i64,
}

impl CartLine {
    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Delivery Selection
// =============================================================================

/// The customer's delivery choice.
///
/// A proper sum type: there is no "nil" sentinel. "Not selected yet" is
/// `Option<DeliverySelection>` at the caller boundary, never a magic value.
///
/// ## Availability
/// `Timeframe` and `Pickup` are only selectable for campus delivery
/// areas; every other area takes `Express`. The pricing operations fail
/// with `InvalidSelection` instead of silently coercing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "option", rename_all = "snake_case")]
pub enum DeliverySelection {
    /// Flat-fee express delivery, available everywhere.
    Express,
    /// Scheduled delivery in one of the fixed daily slots.
    Timeframe { slot: Slot },
    /// Free pickup from a fixed point tied to the delivery area.
    Pickup { location: String },
}

impl DeliverySelection {
    /// Short label used in customer-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            DeliverySelection::Express => "Express delivery",
            DeliverySelection::Timeframe { .. } => "Timeframe delivery",
            DeliverySelection::Pickup { .. } => "Pickup",
        }
    }
}

/// Express is the storefront's default option.
impl Default for DeliverySelection {
    fn default() -> Self {
        DeliverySelection::Express
    }
}

// =============================================================================
// Promo Code Results
// =============================================================================

/// Which promo rule fired. The storefront needs this for messaging
/// ("10% off supermarket items" vs "free delivery").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PromoKind {
    /// Percentage discount over the supermarket-category subtotal.
    CategoryDiscount,
    /// Zeroes the delivery fee.
    FreeDelivery,
}

/// A successfully applied promo code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppliedPromo {
    /// The code, normalized (trimmed, uppercased).
    pub code: String,

    /// Which rule fired.
    pub kind: PromoKind,

    /// The discount amount this code grants.
    pub amount: Money,
}

/// A promo code that was rejected without blocking checkout.
///
/// Only unrecognized codes downgrade to a warning; every other promo
/// failure is a hard error. The storefront shows `message` next to the
/// code field and prices the order without a discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PromoWarning {
    /// The rejected code, normalized.
    pub code: String,

    /// Customer-facing message for the code field.
    pub message: String,
}

// =============================================================================
// Priced Order
// =============================================================================

/// The engine's output: one consistent set of checkout numbers.
///
/// ## Invariants
/// - `grand_total == subtotal + delivery_fee - discount`
/// - `grand_total >= 0`
/// - `discount <= subtotal + delivery_fee`
///
/// Construct only through [`PricedOrder::new`], which clamps the discount
/// and derives the grand total, so the invariants hold by construction.
///
/// The order service independently re-validates pricing; these numbers are
/// advisory display values, never the final charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PricedOrder {
    /// Sum of all line totals.
    pub subtotal: Money,

    /// Computed delivery fee before any promo.
    pub delivery_fee: Money,

    /// Discount granted by the applied promo code (zero without one).
    pub discount: Money,

    /// `subtotal + delivery_fee - discount`, never negative.
    pub grand_total: Money,
}

impl PricedOrder {
    /// Builds a priced order, clamping the discount so the grand total
    /// can never go negative.
    ///
    /// The promo rules already bound the discount, so the clamp should
    /// never fire today; it guards future rule changes.
    pub fn new(subtotal: Money, delivery_fee: Money, discount: Money) -> Self {
        let cap = subtotal + delivery_fee;
        let discount = if discount > cap { cap } else { discount };
        PricedOrder {
            subtotal,
            delivery_fee,
            discount,
            grand_total: cap - discount,
        }
    }
}

// =============================================================================
// Checkout Quote
// =============================================================================

/// Everything the checkout screen needs after a repricing pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CheckoutQuote {
    /// The consistent totals for this cart/selection/promo combination.
    pub order: PricedOrder,

    /// The promo that was applied, if any.
    pub promo: Option<AppliedPromo>,

    /// Set when an unrecognized code was ignored (checkout proceeds).
    pub warning: Option<PromoWarning>,
}

impl CheckoutQuote {
    /// The delivery fee the customer actually pays, after a free-delivery
    /// code is taken into account. Display-level convenience.
    pub fn delivery_fee_due(&self) -> Money {
        match &self.promo {
            Some(promo) if promo.kind == PromoKind::FreeDelivery => Money::zero(),
            _ => self.order.delivery_fee,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
