//! Product endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use super::MessageResponse;
use crate::db::repos::{Product, ProductRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{RecordId, ValidJson};
use crate::http::server::AppState;
use crate::models::ProductInput;

/// POST /products/ - create a product
async fn create_product(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<ProductInput>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = ProductRepo::new(&state.pool).create(&input).await?;

    tracing::info!(product_id = product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products/ - list all products
async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = ProductRepo::new(&state.pool).list().await?;
    Ok(Json(products))
}

/// PUT /products/{id} - overwrite a product
async fn update_product(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    ValidJson(input): ValidJson<ProductInput>,
) -> Result<Json<Product>, ApiError> {
    let changed = ProductRepo::new(&state.pool).update(id, &input).await?;
    if changed == 0 {
        tracing::debug!(product_id = id, "update matched no product");
    }

    Ok(Json(Product::from_input(id, input)))
}

/// DELETE /products/{id} - delete a product
async fn delete_product(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = ProductRepo::new(&state.pool).delete(id).await?;
    if removed == 0 {
        tracing::debug!(product_id = id, "delete matched no product");
    }

    Ok(Json(MessageResponse::new(format!("product with id {id} deleted"))))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/", get(list_products).post(create_product))
        .route("/products/{id}", put(update_product).delete(delete_product))
}
