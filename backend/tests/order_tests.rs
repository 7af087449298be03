//! Order status and line item entry validation tests

use proptest::prelude::*;

use shared::models::OrderStatus;
use shared::validation::validate_order_item;

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_status_labels_round_trip() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_status_label_set() {
        let labels: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "pending",
                "confirmed",
                "production",
                "ready",
                "delivered",
                "cancelled"
            ]
        );
    }

    #[test]
    fn test_new_orders_start_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert_eq!(OrderStatus::from_str("shipped"), None);
        assert_eq!(OrderStatus::from_str("PENDING"), None);
        assert_eq!(OrderStatus::from_str(""), None);
    }

    /// Plain items need at least one pair
    #[test]
    fn test_plain_item_quantity_bounds() {
        assert!(validate_order_item(1, false, 0, 0).is_ok());
        assert!(validate_order_item(500, false, 0, 0).is_ok());
        assert!(validate_order_item(0, false, 0, 0).is_err());
        assert!(validate_order_item(-1, false, 0, 0).is_err());
    }

    /// Carton items need at least one carton of at least one pair
    #[test]
    fn test_carton_item_field_bounds() {
        assert!(validate_order_item(0, true, 1, 1).is_ok());
        assert!(validate_order_item(0, true, 4, 12).is_ok());
        assert!(validate_order_item(0, true, 0, 12).is_err());
        assert!(validate_order_item(0, true, 4, 0).is_err());
        assert!(validate_order_item(0, true, -4, -12).is_err());
    }

    /// The error message names the offending field
    #[test]
    fn test_validation_messages() {
        assert_eq!(
            validate_order_item(0, false, 0, 0),
            Err("Quantity must be at least 1")
        );
        assert_eq!(
            validate_order_item(0, true, 0, 12),
            Err("Carton count must be at least 1")
        );
        assert_eq!(
            validate_order_item(0, true, 4, 0),
            Err("Pairs per carton must be at least 1")
        );
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

        /// Only the six known labels parse into a status
        #[test]
        fn prop_unknown_labels_rejected(label in "[a-z]{1,12}") {
            let known = OrderStatus::ALL.iter().any(|s| s.as_str() == label);
            prop_assert_eq!(OrderStatus::from_str(&label).is_some(), known);
        }

        /// Positive quantities always pass for plain items, regardless of
        /// whatever is left in the carton fields
        #[test]
        fn prop_plain_item_accepts_positive_quantity(
            quantity in 1i64..=100_000,
            carton_count in -10i64..=10,
            pairs_per_carton in -10i64..=10
        ) {
            prop_assert!(
                validate_order_item(quantity, false, carton_count, pairs_per_carton).is_ok()
            );
        }

        /// Carton validation never consults the plain quantity
        #[test]
        fn prop_carton_item_ignores_quantity(
            quantity in -100i64..=100,
            carton_count in 1i64..=100,
            pairs_per_carton in 1i64..=200
        ) {
            prop_assert!(
                validate_order_item(quantity, true, carton_count, pairs_per_carton).is_ok()
            );
        }
    }
}
