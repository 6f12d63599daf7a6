//! Dish endpoints. Dishes have no delete route.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::{EntityId, IdGenerator};
use domain::Dish;

use super::{AppState, DataResponse, RequestBody, payload};
use crate::error::ApiError;

/// GET /dishes: list every dish in insertion order.
#[tracing::instrument(skip(state))]
pub async fn list<G: IdGenerator>(
    State(state): State<Arc<AppState<G>>>,
) -> Json<DataResponse<Vec<Dish>>> {
    DataResponse::new(state.dishes.list().await)
}

/// POST /dishes: create a dish.
#[tracing::instrument(skip(state, body))]
pub async fn create<G: IdGenerator>(
    State(state): State<Arc<AppState<G>>>,
    body: Result<Json<RequestBody>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<Dish>>), ApiError> {
    let payload = payload(body)?;
    let dish = state.dishes.create(&payload).await?;
    Ok((StatusCode::CREATED, DataResponse::new(dish)))
}

/// GET /dishes/{dish_id}: read one dish.
#[tracing::instrument(skip(state))]
pub async fn get<G: IdGenerator>(
    State(state): State<Arc<AppState<G>>>,
    Path(dish_id): Path<String>,
) -> Result<Json<DataResponse<Dish>>, ApiError> {
    let dish = state.dishes.get(&EntityId::from(dish_id)).await?;
    Ok(DataResponse::new(dish))
}

/// PUT /dishes/{dish_id}: replace a dish's fields.
#[tracing::instrument(skip(state, body))]
pub async fn update<G: IdGenerator>(
    State(state): State<Arc<AppState<G>>>,
    Path(dish_id): Path<String>,
    body: Result<Json<RequestBody>, JsonRejection>,
) -> Result<Json<DataResponse<Dish>>, ApiError> {
    let payload = payload(body)?;
    let dish = state
        .dishes
        .update(&EntityId::from(dish_id), &payload)
        .await?;
    Ok(DataResponse::new(dish))
}
