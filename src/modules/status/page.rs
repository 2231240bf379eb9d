use askama::Template;
use chrono::{DateTime, Utc};

use crate::services::monitor::Availability;
use crate::services::status::StatusSnapshot;

#[derive(Template)]
#[template(path = "status.html")]
struct StatusPageTemplate<'a> {
    website_url: &'a str,
    receiver_email: &'a str,
    status_class: &'static str,
    status_label: &'static str,
    last_checked: String,
    down_since: Option<String>,
    alerts_sent: u32,
    ping_minutes: u64,
    email_minutes: u64,
}

impl<'a> StatusPageTemplate<'a> {
    fn from_snapshot(snapshot: &'a StatusSnapshot) -> Self {
        let (status_class, status_label) = match (snapshot.checked, snapshot.state) {
            (false, _) => ("pending", "Waiting for first check"),
            (true, Availability::Up) => ("up", "UP"),
            (true, Availability::Down) => ("down", "DOWN"),
        };

        Self {
            website_url: &snapshot.website_url,
            receiver_email: &snapshot.receiver_email,
            status_class,
            status_label,
            last_checked: format_time(snapshot.last_ping_at),
            down_since: snapshot.down_since.map(|since| format_time(Some(since))),
            alerts_sent: snapshot.alerts_sent,
            ping_minutes: snapshot.ping_interval_minutes,
            email_minutes: snapshot.email_interval_minutes,
        }
    }
}

/// Render the status page for the given snapshot
pub fn render_status_page(snapshot: &StatusSnapshot) -> String {
    StatusPageTemplate::from_snapshot(snapshot)
        .render()
        .unwrap_or_else(|e| {
            tracing::error!("Failed to render status page: {}", e);
            format!("<pre>Template error: {e}</pre>")
        })
}

fn format_time(at: Option<DateTime<Utc>>) -> String {
    at.map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string())
}
