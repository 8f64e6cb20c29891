//! HTTP client for the mail relay.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

/// A rendered message handed to the relay. No delivery confirmation is
/// consumed; a 2xx from the relay is the end of our responsibility.
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from mail relay: {0}")]
    UnexpectedResponse(String),
}

#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), RelayError>;
}

/// Configuration for connecting to the mail relay.
#[derive(Debug, Clone)]
pub struct MailRelayConfig {
    /// Relay address, e.g. `"https://mail.example.com"`.
    pub base_url: String,

    /// Bearer token for the sending account.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct HttpMailRelay {
    config: MailRelayConfig,
    http: Client,
}

impl HttpMailRelay {
    #[must_use]
    pub fn new(config: MailRelayConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl EmailRelay for HttpMailRelay {
    async fn send(&self, message: EmailMessage) -> Result<(), RelayError> {
        let url = format!("{}/messages", self.config.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.token)
            .json(&message)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(RelayError::UnexpectedResponse(format!(
                "send failed with status {status}: {text}"
            )));
        }

        Ok(())
    }
}
