use std::sync::Arc;

use super::MetricsRegistry;

/// Records what the monitor loop does into the registry.
#[derive(Clone)]
pub struct MonitorMetricsCollector {
    metrics: Arc<MetricsRegistry>,
}

impl MonitorMetricsCollector {
    pub fn new(metrics: Arc<MetricsRegistry>) -> Self {
        Self { metrics }
    }

    pub fn record_probe(&self, result: &str, duration_secs: f64) {
        self.metrics.probes_total.with_label_values(&[result]).inc();
        self.metrics.probe_duration_seconds.observe(duration_secs);
    }

    pub fn record_notification(&self, kind: &str, result: &str) {
        self.metrics
            .notifications_total
            .with_label_values(&[kind, result])
            .inc();
    }

    pub fn record_transition(&self, to: &str) {
        self.metrics.transitions_total.with_label_values(&[to]).inc();
    }

    pub fn set_site_up(&self, up: bool) {
        self.metrics.site_up.set(if up { 1 } else { 0 });
    }
}
