use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Invalid address {address}: {reason}")]
    Address { address: String, reason: String },
    #[error("Message error: {0}")]
    Message(String),
    #[error("SMTP transport error: {0}")]
    Transport(String),
}

/// Result of one send attempt
#[derive(Debug)]
pub enum SendOutcome {
    Sent,
    Failed(NotificationError),
}

impl SendOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Failed(_) => "failed",
        }
    }
}

/// Sends a single email. No retries happen here; the caller owns the retry
/// policy through its timers.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_email(&self, recipient: &str, subject: &str, body: &str) -> SendOutcome;
}
