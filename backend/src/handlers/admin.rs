//! Admin list HTTP handlers
//!
//! Serve pre-rendered list rows (see `crate::admin`) with pagination.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::admin::{self, DisplayRow};
use crate::services::{CustomerService, OrderService, ProductService};
use crate::AppState;
use shared::types::{PaginatedResponse, Pagination, PaginationMeta};

fn paginate(rows: Vec<DisplayRow>, pagination: &Pagination) -> PaginatedResponse<DisplayRow> {
    let total_items = rows.len() as u64;
    let page = pagination.page.max(1);
    let per_page = pagination.per_page.clamp(1, 100);
    let start = (page as usize - 1) * per_page as usize;

    let data = rows
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .collect();

    PaginatedResponse {
        data,
        pagination: PaginationMeta::new(page, per_page, total_items),
    }
}

/// Customer list for the admin screen
pub async fn admin_list_customers(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> impl IntoResponse {
    let service = CustomerService::new(state.db.clone());

    match service.get_customers().await {
        Ok(customers) => {
            let rows: Vec<DisplayRow> = customers.iter().map(admin::customer_row).collect();
            (StatusCode::OK, Json(paginate(rows, &pagination))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Product list for the admin screen
pub async fn admin_list_products(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> impl IntoResponse {
    let service = ProductService::new(state.db.clone());

    match service.get_products().await {
        Ok(products) => {
            let rows: Vec<DisplayRow> = products.iter().map(admin::product_row).collect();
            (StatusCode::OK, Json(paginate(rows, &pagination))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Order list for the admin screen, with totals per order
pub async fn admin_list_orders(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service.get_orders().await {
        Ok(orders) => {
            let rows: Vec<DisplayRow> = orders.iter().map(admin::order_row).collect();
            (StatusCode::OK, Json(paginate(rows, &pagination))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Line item list for the admin screen
pub async fn admin_list_order_items(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service.get_all_order_lines().await {
        Ok(lines) => {
            let rows: Vec<DisplayRow> = lines.iter().map(admin::order_item_row).collect();
            (StatusCode::OK, Json(paginate(rows, &pagination))).into_response()
        }
        Err(e) => e.into_response(),
    }
}
