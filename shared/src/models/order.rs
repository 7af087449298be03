//! Order and line item models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Customer, ProductSummary};

/// Order lifecycle status
///
/// No transition rules are enforced: any status may be set at any time, and
/// `Cancelled` is reachable from every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Production,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Production,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Production => "production",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "confirmed" => Some(OrderStatus::Confirmed),
            "production" => Some(OrderStatus::Production),
            "ready" => Some(OrderStatus::Ready),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

/// A customer order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    /// Whether the order has been formally invoiced to the customer
    pub is_invoice: bool,
    pub notes: Option<String>,
}

/// One product entry within an order
///
/// A plain item specifies pairs directly via `quantity`; a carton item
/// specifies them indirectly via `carton_count` x `pairs_per_carton`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i64,
    pub is_carton: bool,
    pub carton_count: i64,
    pub pairs_per_carton: i64,
    pub created_at: DateTime<Utc>,
}

/// A line item joined with the product it references
#[derive(Debug, Clone, Serialize)]
pub struct OrderLine {
    #[serde(flatten)]
    pub item: OrderItem,
    pub product: ProductSummary,
}

/// An order with its customer, line items and derived totals
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub customer: Customer,
    pub lines: Vec<OrderLine>,
    pub total_amount: i64,
    pub total_pairs: i64,
}

/// List row for an order, with derived totals
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub is_invoice: bool,
    pub product_count: i64,
    pub total_amount: i64,
    pub total_pairs: i64,
}
