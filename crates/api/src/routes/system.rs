//! Health and Prometheus metrics endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use common::IdGenerator;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;

use super::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub dishes: usize,
    pub orders: usize,
}

/// GET /health: liveness plus current store sizes.
pub async fn health<G: IdGenerator>(
    State(state): State<Arc<AppState<G>>>,
) -> Json<HealthResponse> {
    let dishes = state.dishes.store().read().await.len();
    let orders = state.orders.store().read().await.len();
    Json(HealthResponse {
        status: "ok",
        dishes,
        orders,
    })
}

/// GET /metrics: Prometheus text exposition.
pub async fn metrics(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        handle.render(),
    )
}
