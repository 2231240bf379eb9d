use async_trait::async_trait;
use std::time::Duration;

/// Why a probe classified the site as down.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Request(String),
}

/// Outcome of a single reachability check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    Up,
    Down(ProbeError),
}

impl ProbeResult {
    pub fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down(_) => "down",
        }
    }
}

/// Performs one reachability check against a URL.
///
/// Implementations must never fail: every error is folded into
/// [`ProbeResult::Down`].
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, url: &str, timeout: Duration) -> ProbeResult;
}
