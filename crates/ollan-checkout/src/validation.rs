//! # Validation Module
//!
//! Input-constraint checks for the pricing operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront (TypeScript)                                      │
//! │  ├── Basic format checks (empty fields, disabled buttons)              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Input constraints before any pricing rule runs                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Order service                                                │
//! │  └── Server-side re-validation of every total                          │
//! │                                                                         │
//! │  Defense in depth: each layer catches different mistakes               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::CartLine;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Cart Validators
// =============================================================================

/// Validates a cart snapshot.
///
/// ## Rules
/// - Cart must have at least one line
/// - Every line needs a product id
/// - Quantity must be positive
/// - Unit price must not be negative (zero is allowed: free samples)
pub fn validate_cart(cart: &[CartLine]) -> ValidationResult<()> {
    if cart.is_empty() {
        return Err(ValidationError::Required {
            field: "cart".to_string(),
        });
    }

    for line in cart {
        if line.product_id.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "product id".to_string(),
            });
        }
        if line.quantity <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            });
        }
        if line.unit_price.is_negative() {
            return Err(ValidationError::MustNotBeNegative {
                field: "unit price".to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Scalar Validators
// =============================================================================

/// Validates a delivery-area string (non-empty after trimming).
pub fn validate_area(area: &str) -> ValidationResult<()> {
    if area.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "delivery area".to_string(),
        });
    }
    Ok(())
}

/// Validates a promo-code string (non-empty after trimming).
pub fn validate_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "discount code".to_string(),
        });
    }
    Ok(())
}

/// Validates a monetary amount that must not be negative (subtotals,
/// current fees).
pub fn validate_non_negative(amount: Money, field: &str) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
