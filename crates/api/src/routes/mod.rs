//! HTTP handlers and the request/response envelopes they share.

pub mod dishes;
pub mod orders;
pub mod system;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::Uri;
use common::IdGenerator;
use domain::{DishService, OrderService, Payload};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<G: IdGenerator> {
    pub dishes: DishService<G>,
    pub orders: OrderService<G>,
}

/// Request body: the entity attributes live under `data`.
///
/// A missing or non-object `data` becomes an empty payload and fails the
/// first required-field rule.
#[derive(Debug, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub data: Payload,
}

/// Success envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Json<Self> {
        Json(Self { data })
    }
}

/// Unwraps a JSON body, turning extractor rejections into `{ error }` responses.
pub(crate) fn payload(
    body: Result<Json<RequestBody>, JsonRejection>,
) -> Result<Payload, ApiError> {
    let Json(body) = body?;
    Ok(body.data)
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Path not found: {}", uri.path()))
}
