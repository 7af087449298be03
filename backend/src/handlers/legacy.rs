//! Legacy endpoints for the existing order-entry script
//!
//! These predate the typed API and keep its old external contract: the
//! add-item endpoint always answers HTTP 200 and reports failure as a bare
//! `{"success": false}` with no detail.

use axum::{extract::State, response::IntoResponse, Form, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::services::order::{AddOrderItemInput, OrderService};
use crate::services::product::ProductService;
use crate::AppState;

/// Form payload of the legacy add-item endpoint
#[derive(Debug, Deserialize)]
pub struct LegacyAddItemForm {
    pub order_id: Option<String>,
    pub product_id: Option<String>,
    pub quantity: Option<String>,
}

/// List products for the order-entry picker (bare JSON array)
pub async fn legacy_list_products(State(state): State<AppState>) -> impl IntoResponse {
    let service = ProductService::new(state.db.clone());

    match service.get_product_picker().await {
        Ok(products) => Json(products).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Add a plain (non-carton) line item to an order
pub async fn legacy_add_item(
    State(state): State<AppState>,
    Form(form): Form<LegacyAddItemForm>,
) -> Json<serde_json::Value> {
    let (order_id, product_id) = match (
        form.order_id.as_deref().and_then(|s| Uuid::parse_str(s).ok()),
        form.product_id.as_deref().and_then(|s| Uuid::parse_str(s).ok()),
    ) {
        (Some(order_id), Some(product_id)) => (order_id, product_id),
        _ => return Json(serde_json::json!({ "success": false })),
    };

    // Quantity defaults to 1, like the old form did
    let quantity = match form.quantity {
        None => 1,
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(q) => q,
            Err(_) => return Json(serde_json::json!({ "success": false })),
        },
    };

    let service = OrderService::new(state.db.clone());
    let input = AddOrderItemInput {
        product_id,
        quantity: Some(quantity),
        is_carton: None,
        carton_count: None,
        pairs_per_carton: None,
    };

    match service.add_item(order_id, input).await {
        Ok(item) => Json(serde_json::json!({ "success": true, "item_id": item.id })),
        Err(_) => Json(serde_json::json!({ "success": false })),
    }
}

/// The old endpoint answered non-POST requests with a failure flag rather
/// than a method error; keep that
pub async fn legacy_add_item_rejected() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "success": false }))
}
