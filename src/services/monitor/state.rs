use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Up,
    Down,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    WentDown,
    Recovered,
}

/// Availability state owned by the monitor loop.
///
/// `None` timestamps mean "never", which makes the corresponding timer due
/// immediately. `last_email_at` only moves after a confirmed send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorState {
    pub is_down: bool,
    pub last_ping_at: Option<DateTime<Utc>>,
    pub last_email_at: Option<DateTime<Utc>>,
    /// Start of the current outage
    pub down_since: Option<DateTime<Utc>>,
    /// Correlates every alert of one outage
    pub outage_id: Option<Uuid>,
    /// Down alerts delivered during the current outage
    pub alerts_sent: u32,
}

impl MonitorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn availability(&self) -> Availability {
        if self.is_down {
            Availability::Down
        } else {
            Availability::Up
        }
    }

    pub fn ping_due(&self, now: DateTime<Utc>, ping_interval: Duration) -> bool {
        is_due(self.last_ping_at, now, ping_interval)
    }

    pub fn alert_due(&self, now: DateTime<Utc>, email_interval: Duration) -> bool {
        self.is_down && is_due(self.last_email_at, now, email_interval)
    }

    pub fn record_ping(&mut self, now: DateTime<Utc>) {
        self.last_ping_at = Some(now);
    }

    /// Enter the down state and arm the email timer for an immediate alert.
    pub fn mark_down(&mut self, now: DateTime<Utc>) -> Uuid {
        let outage_id = Uuid::new_v4();
        self.is_down = true;
        self.last_email_at = None;
        self.down_since = Some(now);
        self.outage_id = Some(outage_id);
        self.alerts_sent = 0;
        outage_id
    }

    /// Leave the down state. The email timer goes back to "never" so the next
    /// outage alerts without delay.
    pub fn mark_up(&mut self) {
        self.is_down = false;
        self.last_email_at = None;
        self.down_since = None;
        self.outage_id = None;
        self.alerts_sent = 0;
    }

    pub fn record_alert(&mut self, now: DateTime<Utc>) {
        self.last_email_at = Some(now);
        self.alerts_sent += 1;
    }

    pub fn outage_duration(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        self.down_since.map(|since| now - since)
    }
}

fn is_due(last: Option<DateTime<Utc>>, now: DateTime<Utc>, interval: Duration) -> bool {
    match last {
        None => true,
        // A clock that stepped backwards makes the timer due instead of stalling it.
        Some(last) => (now - last).to_std().map_or(true, |elapsed| elapsed >= interval),
    }
}
