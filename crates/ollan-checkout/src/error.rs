//! # Error Types
//!
//! Domain-specific error types for the pricing engine.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ollan-checkout errors (this file)                                      │
//! │  ├── PricingError     - Delivery/promo rule violations                  │
//! │  └── ValidationError  - Input constraint failures                       │
//! │                                                                         │
//! │  Callers (quote CLI, storefront) display PricingError's message         │
//! │  verbatim: each variant's text IS the customer-facing copy.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (area, code, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps to a short, specific customer-facing message
//!
//! ## Hard vs Recoverable
//! The low-level operations (`compute_delivery_fee`, `apply_promo_code`)
//! fail hard on every variant. Only `compute_grand_total` downgrades
//! `InvalidCode` to a warning, because a mistyped code must not block
//! checkout while a fee mismatch must.

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Pricing rule violations.
///
/// These errors represent a delivery or promo selection that is not
/// consistent with the customer's cart and delivery area. Callers must not
/// fall back to a default fee when one of these occurs: that would show the
/// customer a price the order service will reject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Delivery option incompatible with the delivery area.
    ///
    /// ## When This Occurs
    /// - Timeframe delivery selected outside the campus areas
    /// - Pickup selected outside the campus areas
    /// - Pickup location that does not belong to the selected area
    #[error("{option} is not available for delivery to {area}")]
    InvalidSelection { option: String, area: String },

    /// Promo code applied outside the campus areas.
    #[error("Discount codes are only available for campus delivery areas")]
    UnsupportedArea { area: String },

    /// Category-discount code applied to a cart with no matching items.
    #[error("Discount code only applies to supermarket items")]
    NoQualifyingItems { code: String },

    /// Free-delivery code applied when the fee is already zero.
    #[error("Delivery is already free for this order")]
    AlreadyFree { code: String },

    /// Code does not match either allow-list.
    #[error("\"{code}\" is not a valid discount code")]
    InvalidCode { code: String },

    /// Input constraint failure (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a caller hands the engine malformed input
/// (an empty cart, a negative price). They are caller bugs or bad form
/// state, not pricing-rule outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., unknown slot name).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The display strings are customer-facing copy and part of the
    /// engine's contract, so they are pinned here.
    #[test]
    fn test_customer_facing_messages() {
        let err = PricingError::InvalidSelection {
            option: "Timeframe delivery".to_string(),
            area: "Bodija".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Timeframe delivery is not available for delivery to Bodija"
        );

        let err = PricingError::NoQualifyingItems {
            code: "OLLAN10".to_string(),
        };
        assert_eq!(err.to_string(), "Discount code only applies to supermarket items");

        let err = PricingError::AlreadyFree {
            code: "WASIU10".to_string(),
        };
        assert_eq!(err.to_string(), "Delivery is already free for this order");

        let err = PricingError::InvalidCode {
            code: "RANDOM5".to_string(),
        };
        assert_eq!(err.to_string(), "\"RANDOM5\" is not a valid discount code");

        let err = PricingError::UnsupportedArea {
            area: "Bodija".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Discount codes are only available for campus delivery areas"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "cart".to_string(),
        };
        assert_eq!(err.to_string(), "cart is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_pricing_error() {
        let validation_err = ValidationError::Required {
            field: "delivery area".to_string(),
        };
        let err: PricingError = validation_err.into();
        assert!(matches!(err, PricingError::Validation(_)));
    }
}
