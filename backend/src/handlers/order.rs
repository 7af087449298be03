//! Order management HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::order::{
    AddOrderItemInput, CreateOrderInput, OrderService, UpdateOrderInput,
};
use crate::AppState;

#[derive(Deserialize)]
pub struct ReportQuery {
    pub format: Option<String>, // "json" or "csv"
}

/// List all orders with computed totals
pub async fn list_orders(State(state): State<AppState>) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service.get_orders().await {
        Ok(orders) => (
            StatusCode::OK,
            Json(serde_json::json!({ "orders": orders })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get an order with its customer, line items and totals
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service.get_order_detail(order_id).await {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new order for a customer referenced by name
pub async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<CreateOrderInput>,
) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service.create_order(input).await {
        Ok(order) => (StatusCode::CREATED, Json(order)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update an order's status, invoice flag or notes
pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Json(input): Json<UpdateOrderInput>,
) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service.update_order(order_id, input).await {
        Ok(order) => (StatusCode::OK, Json(order)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete an order and its line items
pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service.delete_order(order_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Add a line item to an order
pub async fn add_order_item(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Json(input): Json<AddOrderItemInput>,
) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service.add_item(order_id, input).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Remove a line item from an order
pub async fn remove_order_item(
    State(state): State<AppState>,
    Path((order_id, item_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let service = OrderService::new(state.db.clone());

    match service.remove_item(order_id, item_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get the orders report, as JSON or CSV
pub async fn get_orders_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let service = OrderService::new(state.db.clone());
    let data = service.get_orders_report().await?;

    if query.format.as_deref() == Some("csv") {
        let csv = OrderService::export_to_csv(&data)?;
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"orders.csv\"",
                ),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(data).into_response())
    }
}
