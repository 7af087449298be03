//! Route definitions for the Footwear Order Management Platform

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Customer management
        .nest("/customers", customer_routes())
        // Product catalog
        .nest("/products", product_routes())
        // Order management
        .nest("/orders", order_routes())
        // Admin list screens
        .nest("/admin", admin_routes())
}

/// Legacy routes consumed by the existing order-entry script
pub fn legacy_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::legacy_list_products))
        .route(
            "/add-item",
            post(handlers::legacy_add_item).get(handlers::legacy_add_item_rejected),
        )
}

/// Customer management routes
fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route(
            "/:customer_id",
            get(handlers::get_customer)
                .put(handlers::update_customer)
                .delete(handlers::delete_customer),
        )
}

/// Product catalog routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/:product_id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
}

/// Order management routes
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_orders).post(handlers::create_order))
        .route("/report", get(handlers::get_orders_report))
        .route(
            "/:order_id",
            get(handlers::get_order)
                .put(handlers::update_order)
                .delete(handlers::delete_order),
        )
        .route("/:order_id/items", post(handlers::add_order_item))
        .route(
            "/:order_id/items/:item_id",
            delete(handlers::remove_order_item),
        )
}

/// Admin list routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/customers", get(handlers::admin_list_customers))
        .route("/products", get(handlers::admin_list_products))
        .route("/orders", get(handlers::admin_list_orders))
        .route("/order-items", get(handlers::admin_list_order_items))
}
