//! User endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use super::MessageResponse;
use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{RecordId, ValidJson};
use crate::http::server::AppState;
use crate::models::{NewUser, UserInput};

/// POST /users/ - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<UserInput>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let new_user = NewUser::from_input(input).await?;
    let user = UserRepo::new(&state.pool).create(&new_user).await?;

    tracing::info!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/ - list all users
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Json(users))
}

/// PUT /users/{id} - overwrite a user
async fn update_user(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    ValidJson(input): ValidJson<UserInput>,
) -> Result<Json<User>, ApiError> {
    let new_user = NewUser::from_input(input).await?;
    let changed = UserRepo::new(&state.pool).update(id, &new_user).await?;
    if changed == 0 {
        tracing::debug!(user_id = id, "update matched no user");
    }

    Ok(Json(User::from_new(id, new_user)))
}

/// DELETE /users/{id} - delete a user
async fn delete_user(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = UserRepo::new(&state.pool).delete(id).await?;
    if removed == 0 {
        tracing::debug!(user_id = id, "delete matched no user");
    }

    Ok(Json(MessageResponse::new(format!("user with id {id} deleted"))))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route("/users/{id}", put(update_user).delete(delete_user))
}
