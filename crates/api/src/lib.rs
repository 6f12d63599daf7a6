//! HTTP API server for the restaurant's dishes and orders.
//!
//! Provides REST endpoints over the domain services, with structured
//! logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod seed;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use common::IdGenerator;
use domain::{DishService, OrderService};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::AppState;
use seed::Seed;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<G: IdGenerator>(
    state: Arc<AppState<G>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::system::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::system::health::<G>))
        .route(
            "/dishes",
            get(routes::dishes::list::<G>).post(routes::dishes::create::<G>),
        )
        .route(
            "/dishes/{dish_id}",
            get(routes::dishes::get::<G>).put(routes::dishes::update::<G>),
        )
        .route(
            "/orders",
            get(routes::orders::list::<G>).post(routes::orders::create::<G>),
        )
        .route(
            "/orders/{order_id}",
            get(routes::orders::get::<G>)
                .put(routes::orders::update::<G>)
                .delete(routes::orders::delete::<G>),
        )
        .with_state(state)
        .merge(metrics_router)
        .fallback(routes::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state: one store per entity type, pre-filled
/// from an already validated `seed`, sharing a single id generator.
pub fn create_default_state<G: IdGenerator>(ids: G, seed: Seed) -> Arc<AppState<G>> {
    let ids = Arc::new(ids);

    let dishes = DishService::new(
        entity_store::shared(seed.dishes),
        ids.clone(),
    );
    let orders = OrderService::new(
        entity_store::shared(seed.orders),
        ids,
    );

    Arc::new(AppState { dishes, orders })
}
