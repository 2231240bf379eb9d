use std::sync::Arc;

use site_watch::config::Config;
use site_watch::services::metrics::{MetricsRegistry, MonitorMetricsCollector};
use site_watch::services::monitor::{MonitorEngine, SystemClock};
use site_watch::services::notify::SmtpNotifier;
use site_watch::services::probe::HttpProber;
use site_watch::services::status::{status_channel, StatusSnapshot};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const STATUS_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "site_watch=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("ERROR: {}", e);
            tracing::error!(
                "Set WEBSITE_URL, SENDER_EMAIL, SENDER_PASSWORD and RECEIVER_EMAIL in the environment or a .env file."
            );
            std::process::exit(1);
        }
    };

    let notifier = match SmtpNotifier::new(&config) {
        Ok(notifier) => notifier,
        Err(e) => {
            tracing::error!("Failed to set up SMTP transport: {}", e);
            std::process::exit(1);
        }
    };

    let metrics = MetricsRegistry::new().expect("Failed to initialize metrics registry");
    let (publisher, status_rx) = status_channel(StatusSnapshot::initial(&config));

    // The status page only ever sees snapshots; a bind failure leaves the monitor running.
    let app = site_watch::create_app(status_rx, metrics.clone());
    tokio::spawn(async move {
        match tokio::net::TcpListener::bind(STATUS_ADDR).await {
            Ok(listener) => {
                tracing::info!("Status page running on http://{}", STATUS_ADDR);
                if let Err(e) = axum::serve(listener, app).await {
                    tracing::error!("Status page stopped: {}", e);
                }
            }
            Err(e) => tracing::error!("Failed to bind status page on {}: {}", STATUS_ADDR, e),
        }
    });

    let mut engine = MonitorEngine::new(
        &config,
        Arc::new(HttpProber::new()),
        Arc::new(notifier),
        Arc::new(SystemClock),
    )
    .with_metrics(MonitorMetricsCollector::new(metrics))
    .with_status(publisher);

    engine.run().await;
}
