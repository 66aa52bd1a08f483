//! # Store Configuration
//!
//! The fixed allow-lists the pricing rules consult: campus areas, pickup
//! points, supermarket categories, promo codes, and the fee schedule.
//!
//! These are configuration, not a database: the engine takes a
//! [`StoreConfig`] value explicitly on every call. The defaults below are
//! the production lists; a deployment that sources them from a remote
//! config table just deserializes its own `StoreConfig`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{DiscountRate, PromoKind};

// =============================================================================
// Store Config
// =============================================================================

/// Every list and constant the pricing rules depend on.
///
/// ## Matching Rules
/// - Promo codes: case-insensitive on trimmed input (customers type them)
/// - Areas and pickup locations: exact (they come from fixed dropdowns)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Campus delivery areas where timeframe delivery, pickup, and promo
    /// codes are available. Everywhere else is express-only.
    pub campus_areas: Vec<String>,

    /// Pickup points, keyed by campus area. A pickup selection is valid
    /// only for a location listed under its area.
    pub pickup_locations: BTreeMap<String, Vec<String>>,

    /// Categories the category-discount codes apply to.
    pub supermarket_categories: Vec<String>,

    /// Category-discount code allow-list.
    pub category_codes: Vec<String>,

    /// Discount rate for category codes, in basis points.
    pub category_discount_bps: u32,

    /// Free-delivery code allow-list.
    pub free_delivery_codes: Vec<String>,

    /// Flat express delivery fee, charged everywhere.
    pub express_fee: Money,

    /// Timeframe delivery fee below the free-delivery threshold.
    pub timeframe_fee: Money,

    /// Cart subtotal at which timeframe delivery becomes free.
    pub free_delivery_threshold: Money,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let mut pickup_locations = BTreeMap::new();
        pickup_locations.insert(
            "University of Ibadan".to_string(),
            vec![
                "Student Union Building".to_string(),
                "Awo Hall Junction".to_string(),
            ],
        );
        pickup_locations.insert(
            "UCH".to_string(),
            vec![
                "UCH Main Gate".to_string(),
                "Alexander Brown Hall".to_string(),
            ],
        );

        StoreConfig {
            campus_areas: vec!["University of Ibadan".to_string(), "UCH".to_string()],
            pickup_locations,
            supermarket_categories: vec![
                "Baby Care".to_string(),
                "Beverages".to_string(),
                "Groceries".to_string(),
                "Home Care".to_string(),
                "Personal Care".to_string(),
                "Snacks".to_string(),
            ],
            category_codes: vec!["OLLAN10".to_string()],
            category_discount_bps: 1000,
            free_delivery_codes: vec!["DELIVERFREE".to_string(), "WASIU10".to_string()],
            express_fee: Money::from_naira(1500),
            timeframe_fee: Money::from_naira(500),
            free_delivery_threshold: Money::from_naira(5000),
        }
    }
}

impl StoreConfig {
    /// Whether `area` is one of the campus delivery areas.
    pub fn is_campus_area(&self, area: &str) -> bool {
        self.campus_areas.iter().any(|a| a == area)
    }

    /// Pickup points for `area`; empty for non-campus areas.
    pub fn pickup_locations_for(&self, area: &str) -> &[String] {
        self.pickup_locations
            .get(area)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `location` is a valid pickup point for `area`.
    pub fn is_valid_pickup(&self, area: &str, location: &str) -> bool {
        self.pickup_locations_for(area).iter().any(|l| l == location)
    }

    /// Whether `category` participates in category-discount codes.
    pub fn is_supermarket_category(&self, category: &str) -> bool {
        self.supermarket_categories.iter().any(|c| c == category)
    }

    /// Looks up a code in both allow-lists. Matching is case-insensitive
    /// on the trimmed code; a code belongs to at most one kind.
    pub fn classify_code(&self, code: &str) -> Option<PromoKind> {
        let code = code.trim();
        if self
            .category_codes
            .iter()
            .any(|c| c.eq_ignore_ascii_case(code))
        {
            Some(PromoKind::CategoryDiscount)
        } else if self
            .free_delivery_codes
            .iter()
            .any(|c| c.eq_ignore_ascii_case(code))
        {
            Some(PromoKind::FreeDelivery)
        } else {
            None
        }
    }

    /// The category-discount rate.
    #[inline]
    pub fn discount_rate(&self) -> DiscountRate {
        DiscountRate::from_bps(self.category_discount_bps)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campus_areas() {
        let config = StoreConfig::default();
        assert!(config.is_campus_area("University of Ibadan"));
        assert!(config.is_campus_area("UCH"));
        assert!(!config.is_campus_area("Bodija"));
        // Areas come from a dropdown; matching is exact.
        assert!(!config.is_campus_area("university of ibadan"));
    }

    #[test]
    fn test_pickup_locations_tied_to_area() {
        let config = StoreConfig::default();
        assert!(config.is_valid_pickup("UCH", "UCH Main Gate"));
        assert!(!config.is_valid_pickup("University of Ibadan", "UCH Main Gate"));
        assert!(config.pickup_locations_for("Bodija").is_empty());
    }

    #[test]
    fn test_classify_code_is_case_insensitive_and_trims() {
        let config = StoreConfig::default();
        assert_eq!(
            config.classify_code("OLLAN10"),
            Some(PromoKind::CategoryDiscount)
        );
        assert_eq!(
            config.classify_code("  ollan10  "),
            Some(PromoKind::CategoryDiscount)
        );
        assert_eq!(
            config.classify_code("deliverfree"),
            Some(PromoKind::FreeDelivery)
        );
        assert_eq!(config.classify_code("Wasiu10"), Some(PromoKind::FreeDelivery));
        assert_eq!(config.classify_code("RANDOM5"), None);
    }

    #[test]
    fn test_fee_schedule_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.express_fee, Money::from_naira(1500));
        assert_eq!(config.timeframe_fee, Money::from_naira(500));
        assert_eq!(config.free_delivery_threshold, Money::from_naira(5000));
        assert_eq!(config.discount_rate().bps(), 1000);
    }

    /// Deployments may ship a partial config file; missing fields fall
    /// back to the defaults.
    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"category_discount_bps": 500}"#).unwrap();
        assert_eq!(config.category_discount_bps, 500);
        assert!(config.is_campus_area("UCH"));
    }
}
