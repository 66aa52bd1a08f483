//! # ollan-checkout: Pure Pricing Logic for the Ollan Storefront
//!
//! This crate is the pricing brain of the Ollan online pharmacy and
//! supermarket checkout. It contains all pricing rules as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Ollan Checkout Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront UI (TypeScript)                      │   │
//! │  │   Shop ──► Cart ──► Checkout Modal ──► Order Confirmation       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ shared types via ts-rs                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ ollan-checkout (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐  │   │
//! │  │  │  money  │ │  slots  │ │ catalog │ │ pricing │ │ session  │  │   │
//! │  │  │  Money  │ │  Slot   │ │ Store   │ │ fees,   │ │ Checkout │  │   │
//! │  │  │  kobo   │ │ resolve │ │ Config  │ │ promos  │ │ Session  │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK READS • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Order service (POST /orders/create)                │   │
//! │  │        re-validates every total before charging anyone          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CartLine, DeliverySelection, PricedOrder, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`slots`] - The four daily delivery windows and slot resolution
//! - [`catalog`] - Store configuration: areas, categories, promo allow-lists
//! - [`pricing`] - Delivery fees, promo codes, grand totals
//! - [`session`] - The checkout session and its area state machine
//! - [`error`] - Pricing and validation error types
//! - [`validation`] - Input-constraint checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input =
//!    same output. Even slot resolution takes "now" as a parameter.
//! 2. **No I/O**: Network, file system, and clock access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in kobo (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics;
//!    no silent fallback to a default fee
//!
//! ## Example Usage
//!
//! ```rust
//! use ollan_checkout::{
//!     compute_grand_total, CartLine, DeliverySelection, Money, Slot, StoreConfig,
//! };
//!
//! let config = StoreConfig::default();
//! let cart = vec![CartLine {
//!     product_id: "baby-wipes-80".to_string(),
//!     unit_price: Money::from_naira(2000),
//!     category: Some("Baby Care".to_string()),
//!     quantity: 2,
//! }];
//!
//! let quote = compute_grand_total(
//!     &config,
//!     &cart,
//!     &DeliverySelection::Timeframe { slot: Slot::Noon },
//!     "University of Ibadan",
//!     Some("OLLAN10"),
//! )
//! .unwrap();
//!
//! // ₦4000 subtotal, ₦500 timeframe fee, 10% off the supermarket items.
//! assert_eq!(quote.order.discount, Money::from_naira(400));
//! assert_eq!(quote.order.grand_total, Money::from_naira(4100));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod session;
pub mod slots;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use ollan_checkout::Money` instead of
// `use ollan_checkout::money::Money`

pub use catalog::StoreConfig;
pub use error::{PricingError, PricingResult, ValidationError};
pub use money::Money;
pub use pricing::{
    apply_promo_code, cart_subtotal, compute_delivery_fee, compute_grand_total, ensure_selectable,
};
pub use session::{AreaTransition, CheckoutSession};
pub use slots::{next_available_slot, Slot, SLOT_LEAD_SECONDS};
pub use types::*;
