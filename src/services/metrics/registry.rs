use prometheus::{
    Encoder, Histogram, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;

const NAMESPACE: &str = "site_watch";

/// Process-local metrics for the monitor and its status page.
/// Nothing here is persisted; counters reset on restart.
pub struct MetricsRegistry {
    registry: Registry,

    // Monitor Metrics
    pub probes_total: IntCounterVec,
    pub probe_duration_seconds: Histogram,
    pub notifications_total: IntCounterVec,
    pub transitions_total: IntCounterVec,
    pub site_up: IntGauge,

    // HTTP Metrics
    pub http_requests_total: IntCounterVec,
    pub http_request_duration_seconds: HistogramVec,
}

impl MetricsRegistry {
    pub fn new() -> Result<Arc<Self>, Box<dyn std::error::Error>> {
        let registry = Registry::new();

        let probes_total = IntCounterVec::new(
            Opts::new("probes_total", "Total reachability probes by result").namespace(NAMESPACE),
            &["result"],
        )?;
        registry.register(Box::new(probes_total.clone()))?;

        let probe_duration_seconds = Histogram::with_opts(
            HistogramOpts::new("probe_duration_seconds", "Reachability probe duration")
                .namespace(NAMESPACE)
                .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        )?;
        registry.register(Box::new(probe_duration_seconds.clone()))?;

        let notifications_total = IntCounterVec::new(
            Opts::new("notifications_total", "Email notification attempts by kind and result")
                .namespace(NAMESPACE),
            &["kind", "result"],
        )?;
        registry.register(Box::new(notifications_total.clone()))?;

        let transitions_total = IntCounterVec::new(
            Opts::new("transitions_total", "Availability state transitions").namespace(NAMESPACE),
            &["to"],
        )?;
        registry.register(Box::new(transitions_total.clone()))?;

        let site_up = IntGauge::with_opts(
            Opts::new("site_up", "1 while the monitored site is considered up").namespace(NAMESPACE),
        )?;
        registry.register(Box::new(site_up.clone()))?;
        // Optimistic until the first probe says otherwise.
        site_up.set(1);

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Status page HTTP requests").namespace(NAMESPACE),
            &["method", "endpoint", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "Status page request duration")
                .namespace(NAMESPACE)
                .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
            &["method", "endpoint"],
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Arc::new(Self {
            registry,
            probes_total,
            probe_duration_seconds,
            notifications_total,
            transitions_total,
            site_up,
            http_requests_total,
            http_request_duration_seconds,
        }))
    }

    /// Export metrics in Prometheus text format
    pub fn export(&self) -> Result<String, Box<dyn std::error::Error>> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
