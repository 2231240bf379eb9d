use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;

use crate::AppState;

/// Routes served by the status page. Anything else is bucketed as "other".
const KNOWN_ENDPOINTS: [&str; 4] = ["/", "/status", "/health", "/metrics"];

/// Middleware to collect HTTP request metrics
pub async fn metrics_middleware(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let endpoint = endpoint_label(req.uri().path());

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    state
        .metrics
        .http_requests_total
        .with_label_values(&[method.as_str(), endpoint, status.as_str()])
        .inc();

    state
        .metrics
        .http_request_duration_seconds
        .with_label_values(&[method.as_str(), endpoint])
        .observe(duration);

    response
}

/// Keep label cardinality bounded for scanners hitting random paths.
fn endpoint_label(path: &str) -> &'static str {
    KNOWN_ENDPOINTS
        .iter()
        .find(|known| **known == path)
        .copied()
        .unwrap_or("other")
}
