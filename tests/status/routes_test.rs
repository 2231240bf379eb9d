use axum::http::StatusCode;
use axum_test::TestServer;
use std::sync::Arc;

use site_watch::services::metrics::{MetricsRegistry, MonitorMetricsCollector};
use site_watch::services::monitor::MonitorEngine;
use site_watch::services::status::{status_channel, StatusSnapshot};

use crate::common::{
    at_secs, down, t0, test_config, ManualClock, RecordingNotifier, ScriptedProber, TEST_RECEIVER,
    TEST_URL,
};

// =============================================================================
// INTEGRATION TESTS - STATUS PAGE
// =============================================================================

struct StatusContext {
    server: TestServer,
    engine: MonitorEngine,
    metrics: Arc<MetricsRegistry>,
}

impl StatusContext {
    fn new(prober: Arc<ScriptedProber>) -> Self {
        let config = test_config();
        let metrics = MetricsRegistry::new().unwrap();
        let (publisher, status_rx) = status_channel(StatusSnapshot::initial(&config));

        let engine = MonitorEngine::new(
            &config,
            prober,
            RecordingNotifier::new(),
            ManualClock::new(t0(), 0),
        )
        .with_metrics(MonitorMetricsCollector::new(metrics.clone()))
        .with_status(publisher);

        let app = site_watch::create_app(status_rx, metrics.clone());
        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            engine,
            metrics,
        }
    }
}

#[tokio::test]
async fn health_endpoint_answers_keep_alive() {
    let ctx = StatusContext::new(ScriptedProber::always(down()));

    let response = ctx.server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn status_before_first_tick_is_unchecked() {
    let ctx = StatusContext::new(ScriptedProber::always(down()));

    let response = ctx.server.get("/status").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "monitoring_active");
    assert_eq!(body["monitor"]["checked"], false);
    assert_eq!(body["monitor"]["state"], "up");
    assert_eq!(body["monitor"]["website_url"], TEST_URL);
    assert_eq!(body["monitor"]["ping_interval_secs"], 300);
    assert_eq!(body["monitor"]["ping_interval_minutes"], 5);
}

#[tokio::test]
async fn status_reflects_outage_published_by_loop() {
    let mut ctx = StatusContext::new(ScriptedProber::always(down()));
    ctx.engine.step(at_secs(0)).await;

    let body: serde_json::Value = ctx.server.get("/status").await.json();

    assert_eq!(body["monitor"]["checked"], true);
    assert_eq!(body["monitor"]["state"], "down");
    assert_eq!(body["monitor"]["alerts_sent"], 1);
    assert!(body["monitor"]["outage_id"].is_string());
}

#[tokio::test]
async fn index_page_shows_target_and_receiver() {
    let mut ctx = StatusContext::new(ScriptedProber::always(down()));
    ctx.engine.step(at_secs(0)).await;

    let response = ctx.server.get("/").await;

    response.assert_status(StatusCode::OK);
    let html = response.text();
    assert!(html.contains(TEST_URL));
    assert!(html.contains(TEST_RECEIVER));
    assert!(html.contains("DOWN"));
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let ctx = StatusContext::new(ScriptedProber::always(down()));

    let response = ctx.server.get("/").await;

    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");
    assert_eq!(response.header("cache-control"), "no-store");
}

#[tokio::test]
async fn metrics_endpoint_exports_monitor_counters() {
    let mut ctx = StatusContext::new(ScriptedProber::always(down()));
    ctx.engine.step(at_secs(0)).await;

    let response = ctx.server.get("/metrics").await;

    response.assert_status(StatusCode::OK);
    let text = response.text();
    assert!(text.contains("site_watch_probes_total{result=\"down\"} 1"));
    assert!(text.contains("site_watch_site_up 0"));
    assert!(ctx.metrics.export().unwrap().contains("site_watch_http_requests_total"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let ctx = StatusContext::new(ScriptedProber::always(down()));

    let response = ctx.server.get("/admin").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn every_response_passes_security_and_metrics_layers() {
    let ctx = StatusContext::new(ScriptedProber::always(down()));

    let health = ctx.server.get("/health").await;
    let missing = ctx.server.get("/admin").await;

    assert_eq!(health.header("x-content-type-options"), "nosniff");
    assert_eq!(missing.header("x-content-type-options"), "nosniff");

    let exported = ctx.metrics.export().unwrap();
    assert!(exported.contains(
        "site_watch_http_requests_total{endpoint=\"/health\",method=\"GET\",status=\"200\"} 1"
    ));
    assert!(exported.contains(
        "site_watch_http_requests_total{endpoint=\"other\",method=\"GET\",status=\"404\"} 1"
    ));
}
