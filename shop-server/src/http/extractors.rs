//! Custom Axum extractors
//!
//! Rejections are reported as `ApiError::Validation` so every client error
//! shares the JSON error shape.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{Validate, ValidationError};

/// Largest batch a seed endpoint will generate in one call
pub const MAX_SEED_COUNT: u32 = 10_000;

/// JSON body that has been decoded and validated
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::Malformed {
                    reason: rejection.body_text(),
                })
            })?;

        value.validate()?;
        Ok(Self(value))
    }
}

/// Extract a record id from path
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        let id = raw.parse::<i64>().map_err(|_| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be an integer",
            })
        })?;

        Ok(Self(id))
    }
}

/// Extract a seed batch size from path
pub struct SeedCount(pub u32);

impl<S> FromRequestParts<S> for SeedCount
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "count" }))?;

        let count = raw.parse::<u32>().map_err(|_| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "count",
                reason: "must be a non-negative integer",
            })
        })?;

        if count > MAX_SEED_COUNT {
            return Err(ApiError::Validation(ValidationError::OutOfRange {
                field: "count",
                reason: "must not exceed 10000",
            }));
        }

        Ok(Self(count))
    }
}
