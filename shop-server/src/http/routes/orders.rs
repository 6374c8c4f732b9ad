//! Order endpoints
//!
//! Any `order_date` in the request body is ignored; orders are stamped with
//! the server clock on create and on every update.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;

use super::MessageResponse;
use crate::db::repos::{Order, OrderRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{RecordId, ValidJson};
use crate::http::server::AppState;
use crate::models::OrderInput;

/// POST /orders/ - create an order
async fn create_order(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<OrderInput>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order = OrderRepo::new(&state.pool)
        .create(&input, Utc::now())
        .await?;

    tracing::info!(order_id = order.id, user_id = order.user_id, "order created");
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /orders/ - list all orders
async fn list_orders(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = OrderRepo::new(&state.pool).list().await?;
    Ok(Json(orders))
}

/// PUT /orders/{id} - overwrite and restamp an order
async fn update_order(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    ValidJson(input): ValidJson<OrderInput>,
) -> Result<Json<Order>, ApiError> {
    let now = Utc::now();
    let changed = OrderRepo::new(&state.pool).update(id, &input, now).await?;
    if changed == 0 {
        tracing::debug!(order_id = id, "update matched no order");
    }

    Ok(Json(Order::from_input(id, input, now)))
}

/// DELETE /orders/{id} - delete an order
async fn delete_order(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = OrderRepo::new(&state.pool).delete(id).await?;
    if removed == 0 {
        tracing::debug!(order_id = id, "delete matched no order");
    }

    Ok(Json(MessageResponse::new(format!("order with id {id} deleted"))))
}

/// Order routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/", get(list_orders).post(create_order))
        .route("/orders/{id}", put(update_order).delete(delete_order))
}
