//! Admin list rendering
//!
//! Each entity has one fixed list-display strategy below, and the admin
//! endpoints call it directly — explicit composition instead of a mutable
//! registration registry. Column labels are bilingual; values are rendered
//! server-side so the admin frontend can show them as-is.

use serde::Serialize;
use uuid::Uuid;

use crate::models::{Customer, OrderItem, OrderLine, OrderStatus, OrderSummary, Product};
use shared::pricing;

/// One rendered cell of an admin list row
#[derive(Debug, Clone, Serialize)]
pub struct DisplayField {
    pub column: &'static str,
    pub label_fa: &'static str,
    pub value: String,
}

/// One rendered admin list row
#[derive(Debug, Clone, Serialize)]
pub struct DisplayRow {
    pub id: Uuid,
    pub fields: Vec<DisplayField>,
}

fn field(column: &'static str, label_fa: &'static str, value: String) -> DisplayField {
    DisplayField {
        column,
        label_fa,
        value,
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Render an amount as "1,234,567 تومان"
pub fn format_toman(amount: i64) -> String {
    format!("{} تومان", group_thousands(amount))
}

/// Render a pair count as "1,234 جفت"
pub fn format_pairs(pairs: i64) -> String {
    format!("{} جفت", group_thousands(pairs))
}

/// Address preview for list columns: at most 50 characters
pub fn short_address(address: &str) -> String {
    if address.chars().count() > 50 {
        let preview: String = address.chars().take(50).collect();
        format!("{}...", preview)
    } else {
        address.to_string()
    }
}

/// Display label for an order status
pub fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "⏳ در انتظار تایید",
        OrderStatus::Confirmed => "✅ تایید شده",
        OrderStatus::Production => "🔧 در حال تولید",
        OrderStatus::Ready => "📦 آماده ارسال",
        OrderStatus::Delivered => "🚚 ارسال شده",
        OrderStatus::Cancelled => "❌ لغو شده",
    }
}

/// Quantity description: cartons-with-pairs for carton items, plain pairs
/// otherwise
pub fn quantity_label(item: &OrderItem) -> String {
    if item.is_carton {
        format!(
            "{} کارتن ({} جفت در هر کارتن)",
            item.carton_count, item.pairs_per_carton
        )
    } else {
        format!("{} جفت", item.quantity)
    }
}

/// List-display strategy for customers
pub fn customer_row(customer: &Customer) -> DisplayRow {
    DisplayRow {
        id: customer.id,
        fields: vec![
            field("name", "نام کامل", customer.name.clone()),
            field(
                "phone",
                "شماره تماس",
                customer.phone.clone().unwrap_or_default(),
            ),
            field(
                "address",
                "آدرس",
                customer.address.as_deref().map(short_address).unwrap_or_default(),
            ),
            field(
                "created_at",
                "تاریخ ثبت",
                customer.created_at.format("%Y-%m-%d %H:%M").to_string(),
            ),
        ],
    }
}

/// List-display strategy for products
pub fn product_row(product: &Product) -> DisplayRow {
    DisplayRow {
        id: product.id,
        fields: vec![
            field("name", "نام محصول", product.name.clone()),
            field("size", "سایز", product.size.clone()),
            field("color", "رنگ", product.color.clone()),
            field("price", "قیمت", format_toman(product.price)),
            field("stock", "موجودی", product.stock.to_string()),
        ],
    }
}

/// List-display strategy for orders
pub fn order_row(summary: &OrderSummary) -> DisplayRow {
    DisplayRow {
        id: summary.id,
        fields: vec![
            field("customer", "مشتری", summary.customer_name.clone()),
            field(
                "order_date",
                "تاریخ سفارش",
                summary.order_date.format("%Y-%m-%d %H:%M").to_string(),
            ),
            field(
                "status",
                "وضعیت سفارش",
                status_label(summary.status).to_string(),
            ),
            field(
                "is_invoice",
                "صورت حساب مشتری",
                summary.is_invoice.to_string(),
            ),
            field(
                "product_count",
                "تعداد محصولات",
                summary.product_count.to_string(),
            ),
            field("total_amount", "مبلغ کل", format_toman(summary.total_amount)),
            field(
                "total_pairs",
                "تعداد کل جفت",
                format_pairs(summary.total_pairs),
            ),
        ],
    }
}

/// List-display strategy for order line items
pub fn order_item_row(line: &OrderLine) -> DisplayRow {
    let amount = pricing::item_amount(&line.item, line.product.price);
    DisplayRow {
        id: line.item.id,
        fields: vec![
            field("order_id", "سفارش", line.item.order_id.to_string()),
            field(
                "product",
                "محصول",
                format!("{} - سایز {}", line.product.name, line.product.size),
            ),
            field("quantity", "مقدار سفارش", quantity_label(&line.item)),
            field("is_carton", "سفارش کارتنی", line.item.is_carton.to_string()),
            field("item_amount", "مبلغ آیتم", format_toman(amount)),
        ],
    }
}
