//! Order endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use common::{EntityId, IdGenerator};
use domain::{Order, OrderStatus};
use serde::Deserialize;

use super::{AppState, DataResponse, RequestBody, payload};
use crate::error::ApiError;

/// Query parameters accepted by `GET /orders`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
}

/// GET /orders: list orders in insertion order, optionally by status.
#[tracing::instrument(skip(state))]
pub async fn list<G: IdGenerator>(
    State(state): State<Arc<AppState<G>>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<DataResponse<Vec<Order>>>, ApiError> {
    let Query(params) = params?;
    let orders = match params.status {
        Some(status) => {
            let status: OrderStatus = status.parse()?;
            state.orders.list_by_status(status).await
        }
        None => state.orders.list().await,
    };
    Ok(DataResponse::new(orders))
}

/// POST /orders: create an order; status defaults to `pending`.
#[tracing::instrument(skip(state, body))]
pub async fn create<G: IdGenerator>(
    State(state): State<Arc<AppState<G>>>,
    body: Result<Json<RequestBody>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<Order>>), ApiError> {
    let payload = payload(body)?;
    let order = state.orders.create(&payload).await?;
    Ok((StatusCode::CREATED, DataResponse::new(order)))
}

/// GET /orders/{order_id}: read one order.
#[tracing::instrument(skip(state))]
pub async fn get<G: IdGenerator>(
    State(state): State<Arc<AppState<G>>>,
    Path(order_id): Path<String>,
) -> Result<Json<DataResponse<Order>>, ApiError> {
    let order = state.orders.get(&EntityId::from(order_id)).await?;
    Ok(DataResponse::new(order))
}

/// PUT /orders/{order_id}: replace an order's fields and status.
#[tracing::instrument(skip(state, body))]
pub async fn update<G: IdGenerator>(
    State(state): State<Arc<AppState<G>>>,
    Path(order_id): Path<String>,
    body: Result<Json<RequestBody>, JsonRejection>,
) -> Result<Json<DataResponse<Order>>, ApiError> {
    let payload = payload(body)?;
    let order = state
        .orders
        .update(&EntityId::from(order_id), &payload)
        .await?;
    Ok(DataResponse::new(order))
}

/// DELETE /orders/{order_id}: remove a pending order; no response body.
#[tracing::instrument(skip(state))]
pub async fn delete<G: IdGenerator>(
    State(state): State<Arc<AppState<G>>>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.orders.delete(&EntityId::from(order_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
