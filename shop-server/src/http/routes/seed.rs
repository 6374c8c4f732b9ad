//! Demo data endpoints
//!
//! Each call inserts `count` index-derived rows in one transaction.
//! Seeding users twice collides on email and inserts nothing the second time.
//! Demo passwords are hashed at minimum Argon2 cost so large batches stay cheap.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;

use super::MessageResponse;
use crate::db::repos::{OrderRepo, ProductRepo, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::SeedCount;
use crate::http::server::AppState;
use crate::models::{NewUser, OrderInput, ProductInput};

/// GET /fake_users/{count}
async fn fake_users(
    State(state): State<Arc<AppState>>,
    SeedCount(count): SeedCount,
) -> Result<Json<MessageResponse>, ApiError> {
    let users = NewUser::synthetic(count).await?;
    UserRepo::new(&state.pool).create_many(&users).await?;

    tracing::info!(count, "seeded users");
    Ok(Json(MessageResponse::new(format!("{count} users created"))))
}

/// GET /fake_products/{count}
async fn fake_products(
    State(state): State<Arc<AppState>>,
    SeedCount(count): SeedCount,
) -> Result<Json<MessageResponse>, ApiError> {
    let products: Vec<_> = (0..count).map(ProductInput::synthetic).collect();
    ProductRepo::new(&state.pool).create_many(&products).await?;

    tracing::info!(count, "seeded products");
    Ok(Json(MessageResponse::new(format!("{count} products created"))))
}

/// GET /fake_orders/{count}
async fn fake_orders(
    State(state): State<Arc<AppState>>,
    SeedCount(count): SeedCount,
) -> Result<Json<MessageResponse>, ApiError> {
    let orders: Vec<_> = (0..count).map(OrderInput::synthetic).collect();
    OrderRepo::new(&state.pool)
        .create_many(&orders, Utc::now())
        .await?;

    tracing::info!(count, "seeded orders");
    Ok(Json(MessageResponse::new(format!("{count} orders created"))))
}

/// Seed routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/fake_users/{count}", get(fake_users))
        .route("/fake_products/{count}", get(fake_products))
        .route("/fake_orders/{count}", get(fake_orders))
}
