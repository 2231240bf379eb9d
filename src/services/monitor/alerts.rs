use chrono::{DateTime, TimeDelta, Utc};
use super::state::MonitorState;
use crate::config::MonitorIntervals;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    DownAlert,
    Recovery,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DownAlert => "down_alert",
            Self::Recovery => "recovery",
        }
    }
}

/// A composed email, ready for the notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub subject: String,
    pub body: String,
}

pub fn down_alert(
    url: &str,
    now: DateTime<Utc>,
    state: &MonitorState,
    intervals: &MonitorIntervals,
) -> Alert {
    let checked_at = state.last_ping_at.unwrap_or(now);
    let mut body = format!(
        "The website {} is currently down. Last checked at {}.\n\n",
        url,
        timestamp(checked_at)
    );

    if let (Some(since), Some(elapsed)) = (state.down_since, state.outage_duration(now)) {
        body.push_str(&format!(
            "Down since {} ({}).\n",
            timestamp(since),
            format_elapsed(elapsed)
        ));
    }
    if let Some(id) = state.outage_id {
        body.push_str(&format!("Outage id: {}\n", id));
    }

    body.push_str(&format!(
        "\nThis alert will repeat every {} minute(s) until the website is back up.",
        intervals.email_interval_minutes().max(1)
    ));

    Alert {
        kind: AlertKind::DownAlert,
        subject: format!("🚨 Website DOWN: {}", url),
        body,
    }
}

/// Built from the state as it was while down, before the transition clears it.
pub fn recovery_alert(url: &str, now: DateTime<Utc>, state: &MonitorState) -> Alert {
    let mut body = format!(
        "The website {} is now back online at {}.",
        url,
        timestamp(now)
    );

    if let Some(elapsed) = state.outage_duration(now) {
        body.push_str(&format!("\n\nThe outage lasted {}.", format_elapsed(elapsed)));
    }
    if let Some(id) = state.outage_id {
        body.push_str(&format!("\nOutage id: {}", id));
    }

    Alert {
        kind: AlertKind::Recovery,
        subject: format!("✅ Website UP: {}", url),
        body,
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Human-readable duration, e.g. `1h 5m`, `3m 20s`, `45s`
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    match (hours, minutes, seconds) {
        (0, 0, s) => format!("{}s", s),
        (0, m, 0) => format!("{}m", m),
        (0, m, s) => format!("{}m {}s", m, s),
        (h, m, _) => format!("{}h {}m", h, m),
    }
}
