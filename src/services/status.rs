use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;
use uuid::Uuid;

use crate::config::{Config, MonitorIntervals};
use crate::services::monitor::{Availability, MonitorState, MonitorTarget};

/// Read-only view of the monitor, exported for the status page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSnapshot {
    pub website_url: String,
    pub receiver_email: String,
    pub state: Availability,
    /// False until the first probe has run
    pub checked: bool,
    pub last_ping_at: Option<DateTime<Utc>>,
    pub last_email_at: Option<DateTime<Utc>>,
    pub down_since: Option<DateTime<Utc>>,
    pub outage_id: Option<Uuid>,
    pub alerts_sent: u32,
    pub ping_interval_secs: u64,
    pub email_interval_secs: u64,
    pub ping_interval_minutes: u64,
    pub email_interval_minutes: u64,
}

impl StatusSnapshot {
    pub fn capture(
        target: &MonitorTarget,
        intervals: &MonitorIntervals,
        state: &MonitorState,
    ) -> Self {
        Self {
            website_url: target.website_url.clone(),
            receiver_email: target.receiver_email.clone(),
            state: state.availability(),
            checked: state.last_ping_at.is_some(),
            last_ping_at: state.last_ping_at,
            last_email_at: state.last_email_at,
            down_since: state.down_since,
            outage_id: state.outage_id,
            alerts_sent: state.alerts_sent,
            ping_interval_secs: intervals.ping_interval.as_secs(),
            email_interval_secs: intervals.email_interval.as_secs(),
            ping_interval_minutes: intervals.ping_interval_minutes(),
            email_interval_minutes: intervals.email_interval_minutes(),
        }
    }

    /// Snapshot of a monitor that has not ticked yet
    pub fn initial(config: &Config) -> Self {
        Self::capture(
            &MonitorTarget::from(config),
            &config.intervals,
            &MonitorState::new(),
        )
    }
}

/// Write side of the status channel. Only the monitor loop holds one.
pub struct StatusPublisher {
    tx: watch::Sender<StatusSnapshot>,
}

impl StatusPublisher {
    pub fn publish(&self, snapshot: StatusSnapshot) {
        // send_replace never fails, even with no page attached.
        self.tx.send_replace(snapshot);
    }
}

pub fn status_channel(
    initial: StatusSnapshot,
) -> (StatusPublisher, watch::Receiver<StatusSnapshot>) {
    let (tx, rx) = watch::channel(initial);
    (StatusPublisher { tx }, rx)
}
