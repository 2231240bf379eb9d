use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::types::{ProbeError, ProbeResult, Prober};

/// Reachability check over HTTP GET.
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(concat!("site-watch/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self { client }
    }

    fn classify(error: reqwest::Error, timeout: Duration) -> ProbeError {
        if error.is_timeout() {
            ProbeError::Timeout(timeout)
        } else if error.is_connect() {
            ProbeError::Connect(error.to_string())
        } else {
            ProbeError::Request(error.to_string())
        }
    }
}

impl Default for HttpProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str, timeout: Duration) -> ProbeResult {
        let response = match self.client.get(url).timeout(timeout).send().await {
            Ok(resp) => resp,
            Err(e) => return ProbeResult::Down(Self::classify(e, timeout)),
        };

        let status = response.status();
        if !status.is_success() {
            return ProbeResult::Down(ProbeError::Status(status.as_u16()));
        }

        // The timeout also bounds the body; a response that stalls mid-body is down.
        match response.bytes().await {
            Ok(_) => ProbeResult::Up,
            Err(e) => ProbeResult::Down(Self::classify(e, timeout)),
        }
    }
}
