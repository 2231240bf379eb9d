use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::config::{Config, MonitorIntervals};
use crate::services::metrics::MonitorMetricsCollector;
use crate::services::monitor::alerts::{self, Alert, AlertKind};
use crate::services::monitor::clock::Clock;
use crate::services::monitor::state::{MonitorState, Transition};
use crate::services::notify::{Notifier, SendOutcome};
use crate::services::probe::{ProbeResult, Prober};
use crate::services::status::{StatusPublisher, StatusSnapshot};

/// What is being watched and who hears about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorTarget {
    pub website_url: String,
    pub receiver_email: String,
}

impl From<&Config> for MonitorTarget {
    fn from(config: &Config) -> Self {
        Self {
            website_url: config.website_url.clone(),
            receiver_email: config.receiver_email.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationAttempt {
    pub kind: AlertKind,
    pub sent: bool,
}

/// Everything a single tick did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub probe: Option<ProbeResult>,
    pub transition: Option<Transition>,
    pub notifications: Vec<NotificationAttempt>,
}

/// The monitor loop.
///
/// Owns the only `MonitorState`. Each tick may probe (ping timer) and may
/// notify (email timer); the two timers are independent.
pub struct MonitorEngine {
    target: MonitorTarget,
    intervals: MonitorIntervals,
    state: MonitorState,
    prober: Arc<dyn Prober>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    metrics: Option<MonitorMetricsCollector>,
    status: Option<StatusPublisher>,
}

impl MonitorEngine {
    pub fn new(
        config: &Config,
        prober: Arc<dyn Prober>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            target: MonitorTarget::from(config),
            intervals: config.intervals,
            state: MonitorState::new(),
            prober,
            notifier,
            clock,
            metrics: None,
            status: None,
        }
    }

    pub fn with_intervals(mut self, intervals: MonitorIntervals) -> Self {
        self.intervals = intervals;
        self
    }

    pub fn with_metrics(mut self, metrics: MonitorMetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_status(mut self, status: StatusPublisher) -> Self {
        self.status = Some(status);
        self
    }

    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    pub fn intervals(&self) -> &MonitorIntervals {
        &self.intervals
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot::capture(&self.target, &self.intervals, &self.state)
    }

    /// Run forever: step, then sleep one tick.
    pub async fn run(&mut self) {
        tracing::info!("Website monitoring started");
        tracing::info!("Monitoring: {}", self.target.website_url);
        tracing::info!("Alerts to: {}", self.target.receiver_email);

        loop {
            let now = self.clock.now();
            self.step(now).await;
            self.clock.sleep(self.intervals.tick).await;
        }
    }

    /// Evaluate both timers at `now` and act on whichever is due.
    pub async fn step(&mut self, now: DateTime<Utc>) -> TickReport {
        let mut report = TickReport::default();

        if self.state.ping_due(now, self.intervals.ping_interval) {
            self.probe(now, &mut report).await;
        }

        if self.state.alert_due(now, self.intervals.email_interval) {
            let alert = alerts::down_alert(
                &self.target.website_url,
                now,
                &self.state,
                &self.intervals,
            );
            tracing::info!("Website is down. Sending alert email.");

            let sent = self.notify(&alert).await;
            if sent {
                // Failed sends leave the timer alone so the next tick retries.
                self.state.record_alert(now);
            }
            report.notifications.push(NotificationAttempt {
                kind: AlertKind::DownAlert,
                sent,
            });
        }

        if let Some(status) = &self.status {
            status.publish(self.snapshot());
        }

        report
    }

    async fn probe(&mut self, now: DateTime<Utc>, report: &mut TickReport) {
        let url = self.target.website_url.clone();
        tracing::info!("[{}] Pinging {}...", now, url);

        let started = Instant::now();
        let result = self.prober.probe(&url, self.intervals.probe_timeout).await;
        if let Some(metrics) = &self.metrics {
            metrics.record_probe(result.as_str(), started.elapsed().as_secs_f64());
        }

        self.state.record_ping(now);

        match &result {
            ProbeResult::Up if self.state.is_down => {
                tracing::info!("✅ Website {} is UP. Sending recovery email.", url);
                let alert = alerts::recovery_alert(&url, now, &self.state);
                let sent = self.notify(&alert).await;
                report.notifications.push(NotificationAttempt {
                    kind: AlertKind::Recovery,
                    sent,
                });

                // The site is up whether or not the recovery email went out.
                self.state.mark_up();
                report.transition = Some(Transition::Recovered);
                self.record_transition(true);
            }
            ProbeResult::Up => {
                tracing::info!("Website {} is UP.", url);
            }
            ProbeResult::Down(err) if !self.state.is_down => {
                tracing::warn!("Website check failed for {}: {}", url, err);
                let outage_id = self.state.mark_down(now);
                tracing::warn!(
                    outage_id = %outage_id,
                    "🚨 Website {} is DOWN. Initiating alerts.",
                    url
                );
                report.transition = Some(Transition::WentDown);
                self.record_transition(false);
            }
            ProbeResult::Down(err) => {
                tracing::warn!("Website check failed for {}: {}", url, err);
                tracing::warn!("Website {} is STILL DOWN.", url);
            }
        }

        report.probe = Some(result);
    }

    async fn notify(&self, alert: &Alert) -> bool {
        let outcome = self
            .notifier
            .send_email(&self.target.receiver_email, &alert.subject, &alert.body)
            .await;

        if let Some(metrics) = &self.metrics {
            metrics.record_notification(alert.kind.as_str(), outcome.as_str());
        }

        match &outcome {
            SendOutcome::Sent => {
                tracing::info!(
                    "Email sent successfully to {} with subject: {}",
                    self.target.receiver_email,
                    alert.subject
                );
            }
            SendOutcome::Failed(e) => {
                tracing::error!("❌ Failed to send {} email: {}", alert.kind.as_str(), e);
            }
        }

        outcome.is_sent()
    }

    fn record_transition(&self, up: bool) {
        if let Some(metrics) = &self.metrics {
            metrics.record_transition(if up { "up" } else { "down" });
            metrics.set_site_up(up);
        }
    }
}
