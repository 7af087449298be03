//! Order pricing and quantity aggregation
//!
//! Converts a line item's raw quantity representation into a canonical pair
//! count and a monetary amount, and aggregates both across an order's line
//! items. All functions are pure: no state, no I/O, no rounding, no currency
//! conversion. Totals are computed on demand and never cached, so they cannot
//! go stale.
//!
//! The engine does not validate its inputs. Quantity/price positivity is
//! enforced at the data-entry boundary only; carton fields left at zero
//! price to zero pairs and zero Toman here.

use crate::models::{OrderItem, OrderLine};

/// Number of physical pairs represented by a line item.
///
/// Carton items count `carton_count * pairs_per_carton`; plain items count
/// `quantity` directly.
pub fn total_pairs(item: &OrderItem) -> i64 {
    if item.is_carton {
        item.carton_count * item.pairs_per_carton
    } else {
        item.quantity
    }
}

/// Amount owed for a line item, in Toman, given the product's unit price
/// per pair.
pub fn item_amount(item: &OrderItem, unit_price: i64) -> i64 {
    unit_price * total_pairs(item)
}

/// Sum of [`item_amount`] over an order's line items; 0 for an empty order.
pub fn order_total_amount(lines: &[OrderLine]) -> i64 {
    lines
        .iter()
        .map(|line| item_amount(&line.item, line.product.price))
        .sum()
}

/// Sum of [`total_pairs`] over an order's line items; 0 for an empty order.
pub fn order_total_pairs(lines: &[OrderLine]) -> i64 {
    lines.iter().map(|line| total_pairs(&line.item)).sum()
}
