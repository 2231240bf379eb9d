pub mod config;
pub mod modules;
pub mod services;

use axum::{middleware, Router};
use std::sync::Arc;
use tokio::sync::watch;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use modules::metrics::metrics_routes;
use modules::status::status_routes;
use services::metrics::{metrics_middleware, MetricsRegistry};
use services::security::security_headers;
use services::status::StatusSnapshot;

/// Shared state of the status page. Read-only with respect to the monitor.
pub struct AppState {
    pub status: watch::Receiver<StatusSnapshot>,
    pub metrics: Arc<MetricsRegistry>,
}

pub fn create_app(status: watch::Receiver<StatusSnapshot>, metrics: Arc<MetricsRegistry>) -> Router {
    let state = Arc::new(AppState { status, metrics });

    Router::new()
        .merge(status_routes())
        .merge(metrics_routes())
        .layer(middleware::from_fn_with_state(state.clone(), metrics_middleware))
        .layer(middleware::from_fn(security_headers))
        .layer(RequestBodyLimitLayer::new(1024 * 16)) // 16KB max body
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
