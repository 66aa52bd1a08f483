//! # Pricing Operations
//!
//! The checkout pricing rules: delivery fees, promo codes, and the grand
//! total that ties them together.
//!
//! ## How a Quote Is Built
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      compute_grand_total                                │
//! │                                                                         │
//! │  cart ──► cart_subtotal ─────────────────┐                              │
//! │                                          ▼                              │
//! │  selection + area ──► compute_delivery_fee ──► fee                      │
//! │                                          │                              │
//! │  code? ──► apply_promo_code(cart, area, fee) ──► discount               │
//! │                │                                                        │
//! │                ├── InvalidCode ──► warning, discount = 0                │
//! │                └── other error ──► hard failure                         │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                   PricedOrder { subtotal, fee, discount, grand_total }  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is deterministic over its inputs: no clock, no
//! I/O, no state between calls. Callers must not swallow a hard failure
//! into a fallback fee; that would show the customer a price the order
//! service will reject.

use crate::catalog::StoreConfig;
use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::types::{AppliedPromo, CartLine, CheckoutQuote, DeliverySelection, PricedOrder, PromoKind, PromoWarning};
use crate::validation::{validate_area, validate_cart, validate_code, validate_non_negative};

// =============================================================================
// Subtotal
// =============================================================================

/// Sums the line totals of a cart snapshot.
pub fn cart_subtotal(cart: &[CartLine]) -> Money {
    cart.iter()
        .fold(Money::zero(), |acc, line| acc + line.line_total())
}

// =============================================================================
// Delivery Fee
// =============================================================================

/// Checks that `selection` is selectable at all for `area`.
///
/// Express is available everywhere. Timeframe and pickup require a campus
/// area, and a pickup location must belong to that area's fixed set.
pub fn ensure_selectable(
    config: &StoreConfig,
    selection: &DeliverySelection,
    area: &str,
) -> PricingResult<()> {
    match selection {
        DeliverySelection::Express => Ok(()),
        DeliverySelection::Timeframe { .. } => {
            if config.is_campus_area(area) {
                Ok(())
            } else {
                Err(PricingError::InvalidSelection {
                    option: selection.label().to_string(),
                    area: area.to_string(),
                })
            }
        }
        DeliverySelection::Pickup { location } => {
            if !config.is_campus_area(area) {
                Err(PricingError::InvalidSelection {
                    option: selection.label().to_string(),
                    area: area.to_string(),
                })
            } else if !config.is_valid_pickup(area, location) {
                Err(PricingError::InvalidSelection {
                    option: format!("Pickup at {}", location),
                    area: area.to_string(),
                })
            } else {
                Ok(())
            }
        }
    }
}

/// Computes the delivery fee for a selection.
///
/// ## Behavior
/// - `Express`: flat fee, regardless of subtotal or area
/// - `Timeframe`: free at or above the threshold, else the timeframe fee;
///   campus areas only
/// - `Pickup`: always free; campus areas only, at a listed location
///
/// ## Example
/// ```rust
/// use ollan_checkout::{compute_delivery_fee, DeliverySelection, Money, StoreConfig};
///
/// let config = StoreConfig::default();
/// let fee = compute_delivery_fee(
///     &config,
///     Money::from_naira(2000),
///     &DeliverySelection::Express,
///     "Bodija",
/// )
/// .unwrap();
/// assert_eq!(fee, Money::from_naira(1500));
/// ```
pub fn compute_delivery_fee(
    config: &StoreConfig,
    cart_subtotal: Money,
    selection: &DeliverySelection,
    area: &str,
) -> PricingResult<Money> {
    validate_area(area)?;
    validate_non_negative(cart_subtotal, "cart subtotal")?;
    ensure_selectable(config, selection, area)?;

    let fee = match selection {
        DeliverySelection::Express => config.express_fee,
        DeliverySelection::Timeframe { .. } => {
            if cart_subtotal >= config.free_delivery_threshold {
                Money::zero()
            } else {
                config.timeframe_fee
            }
        }
        DeliverySelection::Pickup { .. } => Money::zero(),
    };

    Ok(fee)
}

// =============================================================================
// Promo Codes
// =============================================================================

/// Applies a promo code against a cart, area, and current delivery fee.
///
/// ## Behavior
/// 1. Normalize the code (trim, case-insensitive allow-list match)
/// 2. Promo codes only work for campus areas (`UnsupportedArea`)
/// 3. Category code: 10% of the supermarket-category subtotal
///    (`NoQualifyingItems` when that subtotal is zero)
/// 4. Free-delivery code: discount equal to the current fee
///    (`AlreadyFree` when the fee is already zero; a no-op is an error,
///    not a silent success)
/// 5. Anything else: `InvalidCode`
///
/// Pure function: mutates nothing, returns the discount plus the kind tag
/// the storefront needs for messaging.
pub fn apply_promo_code(
    config: &StoreConfig,
    code: &str,
    cart: &[CartLine],
    area: &str,
    current_delivery_fee: Money,
) -> PricingResult<AppliedPromo> {
    validate_code(code)?;
    validate_cart(cart)?;
    validate_area(area)?;
    validate_non_negative(current_delivery_fee, "delivery fee")?;

    let normalized = code.trim().to_ascii_uppercase();

    // Area gate comes before allow-list lookup: outside the campus areas
    // even a well-formed code is refused as UnsupportedArea.
    if !config.is_campus_area(area) {
        return Err(PricingError::UnsupportedArea {
            area: area.to_string(),
        });
    }

    match config.classify_code(&normalized) {
        Some(PromoKind::CategoryDiscount) => {
            let qualifying = cart
                .iter()
                .filter(|line| {
                    line.category
                        .as_deref()
                        .is_some_and(|c| config.is_supermarket_category(c))
                })
                .fold(Money::zero(), |acc, line| acc + line.line_total());

            if qualifying.is_zero() {
                return Err(PricingError::NoQualifyingItems { code: normalized });
            }

            let amount = qualifying.discount_amount(config.discount_rate());
            Ok(AppliedPromo {
                code: normalized,
                kind: PromoKind::CategoryDiscount,
                amount,
            })
        }
        Some(PromoKind::FreeDelivery) => {
            if current_delivery_fee.is_zero() {
                return Err(PricingError::AlreadyFree { code: normalized });
            }
            Ok(AppliedPromo {
                code: normalized,
                kind: PromoKind::FreeDelivery,
                amount: current_delivery_fee,
            })
        }
        None => Err(PricingError::InvalidCode { code: normalized }),
    }
}

// =============================================================================
// Grand Total
// =============================================================================

/// Prices a whole checkout: subtotal, delivery fee, promo discount, grand
/// total.
///
/// ## Error Policy
/// An unrecognized code is a customer typo, not a checkout blocker: it is
/// reported in `CheckoutQuote::warning` and the order is priced without a
/// discount. Every other promo or fee failure propagates, because
/// proceeding would misstate the price.
///
/// ## Example
/// ```rust
/// use ollan_checkout::{compute_grand_total, CartLine, DeliverySelection, Money, StoreConfig};
///
/// let config = StoreConfig::default();
/// let cart = vec![CartLine {
///     product_id: "paracetamol-500".to_string(),
///     unit_price: Money::from_naira(500),
///     category: Some("Pain reliever".to_string()),
///     quantity: 2,
/// }];
///
/// let quote = compute_grand_total(
///     &config,
///     &cart,
///     &DeliverySelection::Express,
///     "Bodija",
///     None,
/// )
/// .unwrap();
/// assert_eq!(quote.order.grand_total, Money::from_naira(2500));
/// ```
pub fn compute_grand_total(
    config: &StoreConfig,
    cart: &[CartLine],
    selection: &DeliverySelection,
    area: &str,
    promo_code: Option<&str>,
) -> PricingResult<CheckoutQuote> {
    validate_cart(cart)?;
    validate_area(area)?;

    let subtotal = cart_subtotal(cart);
    let delivery_fee = compute_delivery_fee(config, subtotal, selection, area)?;

    let (promo, warning) = match promo_code {
        None => (None, None),
        Some(code) => match apply_promo_code(config, code, cart, area, delivery_fee) {
            Ok(applied) => (Some(applied), None),
            Err(err @ PricingError::InvalidCode { .. }) => {
                let warning = PromoWarning {
                    code: code.trim().to_ascii_uppercase(),
                    message: err.to_string(),
                };
                (None, Some(warning))
            }
            Err(other) => return Err(other),
        },
    };

    let discount = promo.as_ref().map(|p| p.amount).unwrap_or_default();
    let order = PricedOrder::new(subtotal, delivery_fee, discount);

    Ok(CheckoutQuote {
        order,
        promo,
        warning,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
