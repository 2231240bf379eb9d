use serde::Serialize;
use std::time::Duration;

/// Timing knobs of the monitor loop.
///
/// These are fixed for the lifetime of the process and are not read from the
/// environment. The tick must stay well below both timers so that timer checks
/// remain responsive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonitorIntervals {
    /// Minimum spacing between two probes
    pub ping_interval: Duration,
    /// Minimum spacing between repeated down-alerts
    pub email_interval: Duration,
    /// Upper bound on a single probe
    pub probe_timeout: Duration,
    /// Wake-up granularity of the loop
    pub tick: Duration,
}

impl Default for MonitorIntervals {
    fn default() -> Self {
        Self {
            ping_interval: Duration::from_secs(5 * 60), // 5 minutes
            email_interval: Duration::from_secs(60),    // 1 minute
            probe_timeout: Duration::from_secs(10),
            tick: Duration::from_secs(10),
        }
    }
}

impl MonitorIntervals {
    pub fn ping_interval_minutes(&self) -> u64 {
        self.ping_interval.as_secs() / 60
    }

    pub fn email_interval_minutes(&self) -> u64 {
        self.email_interval.as_secs() / 60
    }
}

/// Mail submission endpoint. Implicit TLS on the submissions port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_string(),
            port: 465,
            timeout: Duration::from_secs(30),
        }
    }
}
