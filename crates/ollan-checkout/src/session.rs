//! # Checkout Session
//!
//! The explicit value the checkout screen owns between renders. All
//! pricing math stays in [`crate::pricing`]; the session only sequences
//! area, delivery, and promo changes and enforces the availability rules
//! between them.
//!
//! ## Area State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────────┐     set_area(campus)      ┌──────────────┐           │
//! │   │ Unrestricted │ ◄───────────────────────► │  Restricted  │           │
//! │   │ (any area)   │     set_area(other)       │ (campus area)│           │
//! │   └──────────────┘                           └──────────────┘           │
//! │                                                                         │
//! │   Express only                     Express / Timeframe / Pickup         │
//! │   No promo codes                   Both promo-code kinds                │
//! │                                                                         │
//! │   On Restricted ──► Unrestricted: selection resets to Express and       │
//! │   any promo code is cleared. Skipping that reset is how a stale         │
//! │   discount ends up on an express order.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::catalog::StoreConfig;
use crate::error::PricingResult;
use crate::pricing::{
    apply_promo_code, cart_subtotal, compute_delivery_fee, compute_grand_total, ensure_selectable,
};
use crate::types::{AppliedPromo, CartLine, CheckoutQuote, DeliverySelection};

// =============================================================================
// Checkout Session
// =============================================================================

/// The customer's current checkout choices.
///
/// Owned by the UI layer; every mutation goes through a method that keeps
/// the choices mutually consistent, and the quote is recomputed fresh
/// from the full session after each change. Nothing here is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSession {
    area: String,
    selection: DeliverySelection,
    promo_code: Option<String>,
}

/// What [`CheckoutSession::set_area`] had to reset, so the UI can tell
/// the customer instead of silently changing their order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AreaTransition {
    /// The previous delivery selection was not valid in the new area and
    /// was reset to express.
    pub selection_reset: bool,

    /// A promo code was active and the new area does not support codes.
    pub promo_cleared: bool,
}

impl CheckoutSession {
    /// Starts a session for `area` on the storefront's default option,
    /// express delivery.
    pub fn new(area: impl Into<String>) -> Self {
        CheckoutSession {
            area: area.into(),
            selection: DeliverySelection::Express,
            promo_code: None,
        }
    }

    /// The current delivery area.
    pub fn area(&self) -> &str {
        &self.area
    }

    /// The current delivery selection.
    pub fn selection(&self) -> &DeliverySelection {
        &self.selection
    }

    /// The promo code currently applied, if any.
    pub fn promo_code(&self) -> Option<&str> {
        self.promo_code.as_deref()
    }

    /// Changes the delivery area, resetting whatever the new area no
    /// longer supports.
    ///
    /// A timeframe or pickup selection that the new area cannot serve
    /// goes back to express (a pickup point is area-specific, so pickup
    /// resets on any area change away from its area). A promo code is
    /// cleared when the new area is not a campus area.
    pub fn set_area(&mut self, config: &StoreConfig, area: impl Into<String>) -> AreaTransition {
        self.area = area.into();
        let mut transition = AreaTransition::default();

        if ensure_selectable(config, &self.selection, &self.area).is_err() {
            self.selection = DeliverySelection::Express;
            transition.selection_reset = true;
        }

        if self.promo_code.is_some() && !config.is_campus_area(&self.area) {
            self.promo_code = None;
            transition.promo_cleared = true;
        }

        transition
    }

    /// Switches the delivery selection, failing loudly when the option is
    /// not available for the current area.
    pub fn select_delivery(
        &mut self,
        config: &StoreConfig,
        selection: DeliverySelection,
    ) -> PricingResult<()> {
        ensure_selectable(config, &selection, &self.area)?;
        self.selection = selection;
        Ok(())
    }

    /// Applies a promo code against the current cart and selection.
    ///
    /// Eligibility is checked immediately (against the fee the current
    /// selection produces) so the customer hears about a bad code when
    /// they type it, not at payment time. The stored code is the
    /// normalized form.
    pub fn apply_promo(
        &mut self,
        config: &StoreConfig,
        cart: &[CartLine],
        code: &str,
    ) -> PricingResult<AppliedPromo> {
        let subtotal = cart_subtotal(cart);
        let fee = compute_delivery_fee(config, subtotal, &self.selection, &self.area)?;
        let applied = apply_promo_code(config, code, cart, &self.area, fee)?;
        self.promo_code = Some(applied.code.clone());
        Ok(applied)
    }

    /// Removes the applied promo code.
    pub fn clear_promo(&mut self) {
        self.promo_code = None;
    }

    /// Prices the cart against the full session state.
    pub fn quote(&self, config: &StoreConfig, cart: &[CartLine]) -> PricingResult<CheckoutQuote> {
        compute_grand_total(
            config,
            cart,
            &self.selection,
            &self.area,
            self.promo_code.as_deref(),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;
    use crate::money::Money;
    use crate::slots::Slot;

    const UI: &str = "University of Ibadan";

    fn cart() -> Vec<CartLine> {
        vec![
            CartLine {
                product_id: "baby-wipes".to_string(),
                unit_price: Money::from_naira(2000),
                category: Some("Baby Care".to_string()),
                quantity: 2,
            },
            CartLine {
                product_id: "paracetamol".to_string(),
                unit_price: Money::from_naira(500),
                category: Some("Pain reliever".to_string()),
                quantity: 1,
            },
        ]
    }

    #[test]
    fn test_new_session_defaults_to_express() {
        let session = CheckoutSession::new(UI);
        assert_eq!(session.selection(), &DeliverySelection::Express);
        assert_eq!(session.promo_code(), None);
    }

    #[test]
    fn test_select_delivery_respects_area() {
        let config = StoreConfig::default();
        let mut session = CheckoutSession::new("Bodija");

        let err = session
            .select_delivery(&config, DeliverySelection::Timeframe { slot: Slot::Noon })
            .unwrap_err();
        assert!(matches!(err, PricingError::InvalidSelection { .. }));
        // The failed attempt must not change the selection.
        assert_eq!(session.selection(), &DeliverySelection::Express);

        let mut session = CheckoutSession::new(UI);
        session
            .select_delivery(&config, DeliverySelection::Timeframe { slot: Slot::Noon })
            .unwrap();
    }

    #[test]
    fn test_leaving_campus_resets_selection_and_promo() {
        let config = StoreConfig::default();
        let mut session = CheckoutSession::new(UI);
        session
            .select_delivery(&config, DeliverySelection::Timeframe { slot: Slot::Noon })
            .unwrap();
        session.apply_promo(&config, &cart(), "OLLAN10").unwrap();

        let transition = session.set_area(&config, "Bodija");

        assert!(transition.selection_reset);
        assert!(transition.promo_cleared);
        assert_eq!(session.selection(), &DeliverySelection::Express);
        assert_eq!(session.promo_code(), None);

        // The follow-up quote is a clean express order, not a stale
        // discounted one.
        let quote = session.quote(&config, &cart()).unwrap();
        assert_eq!(quote.order.discount, Money::zero());
        assert_eq!(quote.order.delivery_fee, Money::from_naira(1500));
    }

    #[test]
    fn test_moving_between_campus_areas_keeps_promo() {
        let config = StoreConfig::default();
        let mut session = CheckoutSession::new(UI);
        session.apply_promo(&config, &cart(), "OLLAN10").unwrap();

        let transition = session.set_area(&config, "UCH");

        assert!(!transition.promo_cleared);
        assert_eq!(session.promo_code(), Some("OLLAN10"));
    }

    #[test]
    fn test_pickup_resets_when_area_changes() {
        let config = StoreConfig::default();
        let mut session = CheckoutSession::new(UI);
        session
            .select_delivery(
                &config,
                DeliverySelection::Pickup {
                    location: "Awo Hall Junction".to_string(),
                },
            )
            .unwrap();

        // UCH is also a campus area, but the pickup point is UI's.
        let transition = session.set_area(&config, "UCH");
        assert!(transition.selection_reset);
        assert_eq!(session.selection(), &DeliverySelection::Express);
    }

    #[test]
    fn test_apply_promo_stores_normalized_code() {
        let config = StoreConfig::default();
        let mut session = CheckoutSession::new(UI);
        let applied = session.apply_promo(&config, &cart(), " ollan10 ").unwrap();
        assert_eq!(applied.amount, Money::from_naira(400));
        assert_eq!(session.promo_code(), Some("OLLAN10"));
    }

    #[test]
    fn test_apply_promo_checks_eligibility_immediately() {
        let config = StoreConfig::default();
        let mut session = CheckoutSession::new(UI);
        session
            .select_delivery(
                &config,
                DeliverySelection::Pickup {
                    location: "Awo Hall Junction".to_string(),
                },
            )
            .unwrap();

        // Pickup is already free; the free-delivery code is refused now.
        let err = session.apply_promo(&config, &cart(), "WASIU10").unwrap_err();
        assert!(matches!(err, PricingError::AlreadyFree { .. }));
        assert_eq!(session.promo_code(), None);
    }

    #[test]
    fn test_quote_reflects_session_state() {
        let config = StoreConfig::default();
        let mut session = CheckoutSession::new(UI);
        session
            .select_delivery(&config, DeliverySelection::Timeframe { slot: Slot::FourPm })
            .unwrap();
        session.apply_promo(&config, &cart(), "DELIVERFREE").unwrap();

        let quote = session.quote(&config, &cart()).unwrap();
        assert_eq!(quote.order.subtotal, Money::from_naira(4500));
        assert_eq!(quote.order.delivery_fee, Money::from_naira(500));
        assert_eq!(quote.order.discount, Money::from_naira(500));
        assert_eq!(quote.order.grand_total, Money::from_naira(4500));
        assert_eq!(quote.delivery_fee_due(), Money::zero());
    }
}
