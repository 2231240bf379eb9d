use std::env;
use std::fmt;
use validator::Validate;

use super::intervals::{MonitorIntervals, SmtpSettings};

/// Environment variables that must be present before the monitor starts.
pub const REQUIRED_VARS: [&str; 4] = [
    "WEBSITE_URL",
    "SENDER_EMAIL",
    "SENDER_PASSWORD",
    "RECEIVER_EMAIL",
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("required environment variables are not set: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Environment configuration
/// Loads and validates environment variables
#[derive(Clone, Validate)]
pub struct Config {
    #[validate(url(message = "WEBSITE_URL must be a valid URL"))]
    pub website_url: String,
    #[validate(email(message = "SENDER_EMAIL must be a valid email address"))]
    pub sender_email: String,
    pub sender_password: String,
    #[validate(email(message = "RECEIVER_EMAIL must be a valid email address"))]
    pub receiver_email: String,
    pub intervals: MonitorIntervals,
    pub smtp: SmtpSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as missing. Every missing variable is reported at
    /// once so the operator can fix them in a single pass.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut values = Vec::with_capacity(REQUIRED_VARS.len());
        let mut missing = Vec::new();

        for key in REQUIRED_VARS {
            match lookup(key) {
                Some(value) if !value.trim().is_empty() => values.push(value),
                _ => missing.push(key),
            }
        }

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let mut values = values.into_iter();
        let config = Self {
            website_url: trimmed(values.next()),
            sender_email: trimmed(values.next()),
            // Credentials are passed to the mail server verbatim.
            sender_password: values.next().unwrap_or_default(),
            receiver_email: trimmed(values.next()),
            intervals: MonitorIntervals::default(),
            smtp: SmtpSettings::default(),
        };

        config.validate()?;
        Ok(config)
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("website_url", &self.website_url)
            .field("sender_email", &self.sender_email)
            .field("sender_password", &"<redacted>")
            .field("receiver_email", &self.receiver_email)
            .field("intervals", &self.intervals)
            .field("smtp", &self.smtp)
            .finish()
    }
}
