use axum::{extract::State, response::Html, Json};
use std::sync::Arc;

use super::page::render_status_page;
use super::schema::{HealthResponse, StatusResponse};
use crate::AppState;

/// GET / - human-readable status page
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let snapshot = state.status.borrow().clone();
    Html(render_status_page(&snapshot))
}

/// GET /status - latest monitor snapshot as JSON
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let monitor = state.status.borrow().clone();
    Json(StatusResponse {
        status: "monitoring_active",
        monitor,
    })
}

/// GET /health - keep-alive probe target
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive",
        version: env!("CARGO_PKG_VERSION"),
    })
}
