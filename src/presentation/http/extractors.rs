//! Custom Extractors
//!
//! Axum extractors that reject malformed input with the service's own
//! error body instead of axum's plain-text rejections.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::shared::error::AppError;

/// Numeric todo ID taken from the `{id}` path segment
#[derive(Debug, Clone, Copy)]
pub struct TodoId(pub i64);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("id must be a number".into()))?;

        raw.parse::<i64>()
            .map(TodoId)
            .map_err(|_| AppError::BadRequest("id must be a number".into()))
    }
}

/// JSON body whose decoding failures become `400 invalid request body`
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection.body_text(), "Rejected request body");
            AppError::BadRequest("invalid request body".into())
        })?;

        Ok(JsonBody(value))
    }
}
