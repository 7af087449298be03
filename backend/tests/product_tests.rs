//! Product catalog validation and picker contract tests

use proptest::prelude::*;

use shared::models::{Product, ProductSummary};
use shared::validation::{validate_price, validate_product_name};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_price_must_be_non_negative() {
        assert!(validate_price(0).is_ok());
        assert!(validate_price(100_000).is_ok());
        assert!(validate_price(-1).is_err());
    }

    #[test]
    fn test_product_name_bounds() {
        assert!(validate_product_name("Classic leather boot").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"x".repeat(101)).is_err());
    }

    fn sample_product() -> Product {
        Product {
            id: Uuid::new_v4(),
            name: "Classic leather boot".to_string(),
            size: "42".to_string(),
            color: "black".to_string(),
            price: 250_000,
            stock: 30,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_picker_summary_from_product() {
        let product = sample_product();
        let summary = ProductSummary::from(product.clone());

        assert_eq!(summary.id, product.id);
        assert_eq!(summary.name, product.name);
        assert_eq!(summary.size, product.size);
        assert_eq!(summary.color, product.color);
        assert_eq!(summary.price, product.price);
    }

    /// The picker payload is consumed by the legacy order-entry script and
    /// must keep exactly these keys
    #[test]
    fn test_picker_summary_json_keys() {
        let summary = ProductSummary::from(sample_product());
        let value = serde_json::to_value(&summary).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["color", "id", "name", "price", "size"]);
    }

    /// Stock is informational and may go negative without tripping
    /// validation anywhere
    #[test]
    fn test_negative_stock_is_representable() {
        let mut product = sample_product();
        product.stock = -5;
        assert_eq!(product.stock, -5);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Price validation accepts exactly the non-negative range
        #[test]
        fn prop_price_validation(price in -1_000_000i64..=1_000_000) {
            prop_assert_eq!(validate_price(price).is_ok(), price >= 0);
        }
    }
}
