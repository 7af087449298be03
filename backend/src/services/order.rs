//! Order management service: order entry, line items and derived totals
//!
//! Totals are always recomputed from the current line items through
//! `shared::pricing`; nothing is cached or stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    Order, OrderDetail, OrderItem, OrderLine, OrderStatus, OrderSummary, ProductSummary,
};
use crate::services::customer::CustomerService;
use shared::pricing;
use shared::validation::validate_order_item;

/// Order service for order entry and aggregation
#[derive(Clone)]
pub struct OrderService {
    db: PgPool,
}

/// Input for creating an order.
///
/// The customer is referenced by name: an existing customer with that name
/// is reused, otherwise one is registered on the fly.
#[derive(Debug, Deserialize)]
pub struct CreateOrderInput {
    pub customer_name: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

/// Input for updating an order
#[derive(Debug, Deserialize)]
pub struct UpdateOrderInput {
    pub status: Option<String>,
    pub is_invoice: Option<bool>,
    pub notes: Option<String>,
}

/// Input for adding a line item to an order
#[derive(Debug, Deserialize)]
pub struct AddOrderItemInput {
    pub product_id: Uuid,
    pub quantity: Option<i64>,
    pub is_carton: Option<bool>,
    pub carton_count: Option<i64>,
    pub pairs_per_carton: Option<i64>,
}

/// CSV report row for an order
#[derive(Debug, Serialize)]
pub struct OrderReportRow {
    pub order_id: Uuid,
    pub customer: String,
    pub order_date: String,
    pub status: String,
    pub is_invoice: bool,
    pub product_count: i64,
    pub total_pairs: i64,
    pub total_amount: i64,
}

type OrderRow = (Uuid, Uuid, DateTime<Utc>, String, bool, Option<String>);
type ItemRow = (Uuid, Uuid, Uuid, i64, bool, i64, i64, DateTime<Utc>);

fn parse_status(s: &str) -> AppResult<OrderStatus> {
    OrderStatus::from_str(s)
        .ok_or_else(|| AppError::Internal(format!("Unknown order status in database: {}", s)))
}

fn order_from_row(row: OrderRow) -> AppResult<Order> {
    Ok(Order {
        id: row.0,
        customer_id: row.1,
        order_date: row.2,
        status: parse_status(&row.3)?,
        is_invoice: row.4,
        notes: row.5,
    })
}

fn item_from_row(row: ItemRow) -> OrderItem {
    OrderItem {
        id: row.0,
        order_id: row.1,
        product_id: row.2,
        quantity: row.3,
        is_carton: row.4,
        carton_count: row.5,
        pairs_per_carton: row.6,
        created_at: row.7,
    }
}

impl OrderService {
    /// Create a new OrderService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all orders with their derived totals, newest first
    pub async fn get_orders(&self) -> AppResult<Vec<OrderSummary>> {
        let rows = sqlx::query_as::<_, (Uuid, Uuid, String, DateTime<Utc>, String, bool)>(
            r#"
            SELECT o.id, o.customer_id, c.name, o.order_date, o.status, o.is_invoice
            FROM orders o
            JOIN customers c ON c.id = o.customer_id
            ORDER BY o.order_date DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let mut summaries = Vec::with_capacity(rows.len());
        for r in rows {
            let lines = self.get_order_lines(r.0).await?;
            summaries.push(OrderSummary {
                id: r.0,
                customer_id: r.1,
                customer_name: r.2,
                order_date: r.3,
                status: parse_status(&r.4)?,
                is_invoice: r.5,
                product_count: lines.len() as i64,
                total_amount: pricing::order_total_amount(&lines),
                total_pairs: pricing::order_total_pairs(&lines),
            });
        }

        Ok(summaries)
    }

    /// Get an order's line items joined with their products, in creation order
    pub async fn get_order_lines(&self, order_id: Uuid) -> AppResult<Vec<OrderLine>> {
        let rows = sqlx::query_as::<_, (
            Uuid,
            Uuid,
            Uuid,
            i64,
            bool,
            i64,
            i64,
            DateTime<Utc>,
            String,
            String,
            String,
            i64,
        )>(
            r#"
            SELECT i.id, i.order_id, i.product_id, i.quantity, i.is_carton,
                   i.carton_count, i.pairs_per_carton, i.created_at,
                   p.name, p.size, p.color, p.price
            FROM order_items i
            JOIN products p ON p.id = i.product_id
            WHERE i.order_id = $1
            ORDER BY i.created_at ASC
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| OrderLine {
                item: OrderItem {
                    id: r.0,
                    order_id: r.1,
                    product_id: r.2,
                    quantity: r.3,
                    is_carton: r.4,
                    carton_count: r.5,
                    pairs_per_carton: r.6,
                    created_at: r.7,
                },
                product: ProductSummary {
                    id: r.2,
                    name: r.8,
                    size: r.9,
                    color: r.10,
                    price: r.11,
                },
            })
            .collect())
    }

    /// Get every line item across all orders, newest first
    pub async fn get_all_order_lines(&self) -> AppResult<Vec<OrderLine>> {
        let rows = sqlx::query_as::<_, (
            Uuid,
            Uuid,
            Uuid,
            i64,
            bool,
            i64,
            i64,
            DateTime<Utc>,
            String,
            String,
            String,
            i64,
        )>(
            r#"
            SELECT i.id, i.order_id, i.product_id, i.quantity, i.is_carton,
                   i.carton_count, i.pairs_per_carton, i.created_at,
                   p.name, p.size, p.color, p.price
            FROM order_items i
            JOIN products p ON p.id = i.product_id
            ORDER BY i.created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| OrderLine {
                item: OrderItem {
                    id: r.0,
                    order_id: r.1,
                    product_id: r.2,
                    quantity: r.3,
                    is_carton: r.4,
                    carton_count: r.5,
                    pairs_per_carton: r.6,
                    created_at: r.7,
                },
                product: ProductSummary {
                    id: r.2,
                    name: r.8,
                    size: r.9,
                    color: r.10,
                    price: r.11,
                },
            })
            .collect())
    }

    /// Get an order with its customer, line items and computed totals
    pub async fn get_order_detail(&self, order_id: Uuid) -> AppResult<OrderDetail> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, customer_id, order_date, status, is_invoice, notes
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Order".to_string()))?;

        let order = order_from_row(row)?;

        let customers = CustomerService::new(self.db.clone());
        let customer = customers.get_customer(order.customer_id).await?;

        let lines = self.get_order_lines(order_id).await?;
        let total_amount = pricing::order_total_amount(&lines);
        let total_pairs = pricing::order_total_pairs(&lines);

        Ok(OrderDetail {
            order,
            customer,
            lines,
            total_amount,
            total_pairs,
        })
    }

    /// Create a new order, finding or registering the customer by name
    pub async fn create_order(&self, input: CreateOrderInput) -> AppResult<Order> {
        let customers = CustomerService::new(self.db.clone());
        let customer = customers
            .find_or_create(&input.customer_name, input.phone.as_deref())
            .await?;

        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (customer_id, notes)
            VALUES ($1, $2)
            RETURNING id, customer_id, order_date, status, is_invoice, notes
            "#,
        )
        .bind(customer.id)
        .bind(&input.notes)
        .fetch_one(&self.db)
        .await?;

        order_from_row(row)
    }

    /// Update an order's status, invoice flag or notes
    pub async fn update_order(&self, order_id: Uuid, input: UpdateOrderInput) -> AppResult<Order> {
        let existing = sqlx::query_as::<_, (String, bool, Option<String>)>(
            "SELECT status, is_invoice, notes FROM orders WHERE id = $1",
        )
        .bind(order_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Order".to_string()))?;

        // Validate status if provided; any transition is legal
        if let Some(ref status) = input.status {
            if OrderStatus::from_str(status).is_none() {
                return Err(AppError::Validation {
                    field: "status".to_string(),
                    message: "Invalid order status".to_string(),
                    message_fa: "وضعیت سفارش نامعتبر است".to_string(),
                });
            }
        }

        let status = input.status.unwrap_or(existing.0);
        let is_invoice = input.is_invoice.unwrap_or(existing.1);
        let notes = input.notes.or(existing.2);

        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            UPDATE orders
            SET status = $1, is_invoice = $2, notes = $3
            WHERE id = $4
            RETURNING id, customer_id, order_date, status, is_invoice, notes
            "#,
        )
        .bind(&status)
        .bind(is_invoice)
        .bind(&notes)
        .bind(order_id)
        .fetch_one(&self.db)
        .await?;

        order_from_row(row)
    }

    /// Delete an order (cascades to its line items)
    pub async fn delete_order(&self, order_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(order_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Order".to_string()));
        }
        Ok(())
    }

    /// Add a line item to an order
    pub async fn add_item(&self, order_id: Uuid, input: AddOrderItemInput) -> AppResult<OrderItem> {
        // Verify the order and the product exist
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM orders WHERE id = $1")
            .bind(order_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Order".to_string()))?;

        sqlx::query_scalar::<_, Uuid>("SELECT id FROM products WHERE id = $1")
            .bind(input.product_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let quantity = input.quantity.unwrap_or(1);
        let is_carton = input.is_carton.unwrap_or(false);
        let carton_count = input.carton_count.unwrap_or(0);
        let pairs_per_carton = input.pairs_per_carton.unwrap_or(0);

        if let Err(msg) = validate_order_item(quantity, is_carton, carton_count, pairs_per_carton) {
            let (field, message_fa) = if msg.starts_with("Carton count") {
                ("carton_count", "تعداد کارتن باید حداقل 1 باشد")
            } else if msg.starts_with("Pairs per carton") {
                ("pairs_per_carton", "تعداد جفت در هر کارتن باید حداقل 1 باشد")
            } else {
                ("quantity", "تعداد باید حداقل 1 باشد")
            };
            return Err(AppError::Validation {
                field: field.to_string(),
                message: msg.to_string(),
                message_fa: message_fa.to_string(),
            });
        }

        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO order_items (order_id, product_id, quantity, is_carton, carton_count, pairs_per_carton)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, order_id, product_id, quantity, is_carton, carton_count, pairs_per_carton, created_at
            "#,
        )
        .bind(order_id)
        .bind(input.product_id)
        .bind(quantity)
        .bind(is_carton)
        .bind(carton_count)
        .bind(pairs_per_carton)
        .fetch_one(&self.db)
        .await?;

        Ok(item_from_row(row))
    }

    /// Remove a line item from an order
    pub async fn remove_item(&self, order_id: Uuid, item_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM order_items WHERE id = $1 AND order_id = $2")
            .bind(item_id)
            .bind(order_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Order item".to_string()));
        }
        Ok(())
    }

    /// Build the orders report, one row per order with totals
    pub async fn get_orders_report(&self) -> AppResult<Vec<OrderReportRow>> {
        let summaries = self.get_orders().await?;

        Ok(summaries
            .into_iter()
            .map(|s| OrderReportRow {
                order_id: s.id,
                customer: s.customer_name,
                order_date: s.order_date.format("%Y-%m-%d %H:%M:%S").to_string(),
                status: s.status.as_str().to_string(),
                is_invoice: s.is_invoice,
                product_count: s.product_count,
                total_pairs: s.total_pairs,
                total_amount: s.total_amount,
            })
            .collect())
    }

    /// Export report data as CSV
    pub fn export_to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record).map_err(|e| {
                crate::error::AppError::Internal(format!("CSV serialization error: {}", e))
            })?;
        }
        let csv_data = String::from_utf8(wtr.into_inner().map_err(|e| {
            crate::error::AppError::Internal(format!("CSV writer error: {}", e))
        })?)
        .map_err(|e| crate::error::AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}
