//! HTTP client for the identity provider.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::auth::{AuthError, Identity, IdentityProvider};

/// Configuration for connecting to the identity provider.
#[derive(Debug, Clone)]
pub struct IdentityProviderConfig {
    /// Provider address, e.g. `"https://id.example.com"`.
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct HttpIdentityProvider {
    config: IdentityProviderConfig,
    http: Client,
}

impl HttpIdentityProvider {
    #[must_use]
    pub fn new(config: IdentityProviderConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn authenticate_bearer(&self, token: &str) -> Result<Identity, AuthError> {
        let url = format!("{}/sessions/me", self.config.base_url);

        let response = self.http.get(&url).bearer_auth(token).send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(AuthError::Unauthenticated);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(AuthError::UnexpectedResponse(format!(
                "session lookup failed with status {status}: {text}"
            )));
        }

        let session: SessionResponse = response.json().await?;

        Ok(Identity {
            user_id: session.user_id,
            email: session.email,
        })
    }
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    #[serde(rename = "userId")]
    user_id: String,
    email: String,
}
