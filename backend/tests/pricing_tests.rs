//! Order pricing engine tests
//!
//! Covers the canonical pair count, per-item amounts and order-level
//! aggregation: plain vs carton items, empty orders, and recomputation
//! stability.

use chrono::Utc;
use proptest::prelude::*;
use uuid::Uuid;

use shared::models::{OrderItem, OrderLine, ProductSummary};
use shared::pricing::{item_amount, order_total_amount, order_total_pairs, total_pairs};

fn plain_item(quantity: i64) -> OrderItem {
    OrderItem {
        id: Uuid::new_v4(),
        order_id: Uuid::new_v4(),
        product_id: Uuid::new_v4(),
        quantity,
        is_carton: false,
        carton_count: 0,
        pairs_per_carton: 0,
        created_at: Utc::now(),
    }
}

fn carton_item(carton_count: i64, pairs_per_carton: i64) -> OrderItem {
    OrderItem {
        id: Uuid::new_v4(),
        order_id: Uuid::new_v4(),
        product_id: Uuid::new_v4(),
        quantity: 1,
        is_carton: true,
        carton_count,
        pairs_per_carton,
        created_at: Utc::now(),
    }
}

fn line(item: OrderItem, price: i64) -> OrderLine {
    let product = ProductSummary {
        id: item.product_id,
        name: "Classic leather boot".to_string(),
        size: "42".to_string(),
        color: "black".to_string(),
        price,
    };
    OrderLine { item, product }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Three pairs of a 100,000 Toman product
    #[test]
    fn test_plain_order_item() {
        let item = plain_item(3);

        assert_eq!(total_pairs(&item), 3);
        assert_eq!(item_amount(&item, 100_000), 300_000);
    }

    /// Four cartons of twelve pairs at 50,000 Toman per pair
    #[test]
    fn test_carton_order_item() {
        let item = carton_item(4, 12);

        assert_eq!(total_pairs(&item), 48);
        assert_eq!(item_amount(&item, 50_000), 2_400_000);
    }

    /// Both items together on one order
    #[test]
    fn test_mixed_order_totals() {
        let lines = vec![line(plain_item(3), 100_000), line(carton_item(4, 12), 50_000)];

        assert_eq!(order_total_pairs(&lines), 51);
        assert_eq!(order_total_amount(&lines), 2_700_000);
    }

    #[test]
    fn test_empty_order_totals() {
        let lines: Vec<OrderLine> = Vec::new();

        assert_eq!(order_total_amount(&lines), 0);
        assert_eq!(order_total_pairs(&lines), 0);
    }

    /// Carton fields defaulted to zero yield a zero-value item, not an error
    #[test]
    fn test_zeroed_carton_fields() {
        let item = carton_item(0, 0);

        assert_eq!(total_pairs(&item), 0);
        assert_eq!(item_amount(&item, 75_000), 0);
    }

    /// A carton item's plain quantity plays no part in its totals
    #[test]
    fn test_carton_item_ignores_quantity() {
        let mut item = carton_item(2, 10);
        item.quantity = 1_000;

        assert_eq!(total_pairs(&item), 20);
    }

    /// A free product prices to zero regardless of quantity
    #[test]
    fn test_zero_price_product() {
        let item = plain_item(40);

        assert_eq!(item_amount(&item, 0), 0);
    }

    /// Totals are recomputed, never cached: asking twice gives the same
    /// answer without mutating anything
    #[test]
    fn test_totals_are_stable_across_calls() {
        let lines = vec![line(plain_item(5), 80_000), line(carton_item(3, 6), 45_000)];

        let first = (order_total_amount(&lines), order_total_pairs(&lines));
        let second = (order_total_amount(&lines), order_total_pairs(&lines));

        assert_eq!(first, second);
        assert_eq!(first.0, 5 * 80_000 + 18 * 45_000);
        assert_eq!(first.1, 23);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating valid plain quantities
    fn quantity_strategy() -> impl Strategy<Value = i64> {
        1i64..=10_000
    }

    /// Strategy for generating unit prices in Toman
    fn price_strategy() -> impl Strategy<Value = i64> {
        0i64..=10_000_000
    }

    /// Strategy for generating whole order lines, plain or carton
    fn line_strategy() -> impl Strategy<Value = OrderLine> {
        (
            quantity_strategy(),
            any::<bool>(),
            1i64..=100,
            1i64..=200,
            price_strategy(),
        )
            .prop_map(|(quantity, is_carton, carton_count, pairs_per_carton, price)| {
                let item = OrderItem {
                    id: Uuid::new_v4(),
                    order_id: Uuid::new_v4(),
                    product_id: Uuid::new_v4(),
                    quantity,
                    is_carton,
                    carton_count,
                    pairs_per_carton,
                    created_at: Utc::now(),
                };
                line(item, price)
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Plain items count their quantity, pair for pair
        #[test]
        fn prop_plain_pairs_equal_quantity(quantity in quantity_strategy()) {
            prop_assert_eq!(total_pairs(&plain_item(quantity)), quantity);
        }

        /// Carton items count carton_count * pairs_per_carton
        #[test]
        fn prop_carton_pairs_product(
            carton_count in 1i64..=100,
            pairs_per_carton in 1i64..=200
        ) {
            let item = carton_item(carton_count, pairs_per_carton);
            prop_assert_eq!(total_pairs(&item), carton_count * pairs_per_carton);
        }

        /// Item amount is always unit price times pair count
        #[test]
        fn prop_item_amount_identity(item in line_strategy()) {
            prop_assert_eq!(
                item_amount(&item.item, item.product.price),
                item.product.price * total_pairs(&item.item)
            );
        }

        /// Order totals are the sums over the line items
        #[test]
        fn prop_order_totals_are_sums(
            lines in prop::collection::vec(line_strategy(), 0..20)
        ) {
            let expected_amount: i64 = lines
                .iter()
                .map(|l| item_amount(&l.item, l.product.price))
                .sum();
            let expected_pairs: i64 = lines.iter().map(|l| total_pairs(&l.item)).sum();

            prop_assert_eq!(order_total_amount(&lines), expected_amount);
            prop_assert_eq!(order_total_pairs(&lines), expected_pairs);
        }

        /// Totals are additive across order concatenation
        #[test]
        fn prop_totals_additive(
            first in prop::collection::vec(line_strategy(), 0..10),
            second in prop::collection::vec(line_strategy(), 0..10)
        ) {
            let mut combined = first.clone();
            combined.extend(second.clone());

            prop_assert_eq!(
                order_total_amount(&combined),
                order_total_amount(&first) + order_total_amount(&second)
            );
            prop_assert_eq!(
                order_total_pairs(&combined),
                order_total_pairs(&first) + order_total_pairs(&second)
            );
        }

        /// Aggregation has no side effects: calling twice yields the same
        /// result
        #[test]
        fn prop_aggregation_idempotent(
            lines in prop::collection::vec(line_strategy(), 0..20)
        ) {
            prop_assert_eq!(order_total_amount(&lines), order_total_amount(&lines));
            prop_assert_eq!(order_total_pairs(&lines), order_total_pairs(&lines));
        }
    }
}
