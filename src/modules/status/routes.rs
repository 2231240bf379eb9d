use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller::{get_status, health_check, index};
use crate::AppState;

pub fn status_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/status", get(get_status))
        .route("/health", get(health_check))
}
