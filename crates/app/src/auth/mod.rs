//! Identity and admin gating.
//!
//! Authentication itself is delegated to the external identity provider; the
//! only policy held here is the back-office allow-list.

pub mod provider;

pub use provider::{HttpIdentityProvider, IdentityProviderConfig};

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tracing::warn;

/// An authenticated user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("unknown or expired credentials")]
    Unauthenticated,

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from identity provider: {0}")]
    UnexpectedResponse(String),
}

#[automock]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve a bearer token to the identity it belongs to.
    async fn authenticate_bearer(&self, token: &str) -> Result<Identity, AuthError>;
}

/// Allow-list gate for back-office operations.
#[derive(Debug, Clone)]
pub struct AdminGate {
    allowed: Vec<String>,
}

impl AdminGate {
    /// Build from a comma-separated email list. Matching is
    /// case-insensitive; an empty list locks the back office.
    #[must_use]
    pub fn from_list(list: &str) -> Self {
        let allowed: Vec<String> = list
            .split(',')
            .map(|email| email.trim().to_ascii_lowercase())
            .filter(|email| !email.is_empty())
            .collect();

        if allowed.is_empty() {
            warn!("no admin emails configured; the back office is locked");
        }

        Self { allowed }
    }

    #[must_use]
    pub fn is_admin(&self, identity: &Identity) -> bool {
        let email = identity.email.to_ascii_lowercase();

        self.allowed.contains(&email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(email: &str) -> Identity {
        Identity {
            user_id: "user-1".to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn membership_is_case_insensitive_and_trimmed() {
        let gate = AdminGate::from_list(" Ana@shop.example , ben@shop.example ");

        assert!(gate.is_admin(&identity("ana@shop.example")));
        assert!(gate.is_admin(&identity("ANA@SHOP.EXAMPLE")));
        assert!(gate.is_admin(&identity("ben@shop.example")));
        assert!(!gate.is_admin(&identity("mallory@shop.example")));
    }

    #[test]
    fn empty_list_admits_nobody() {
        let gate = AdminGate::from_list("");

        assert!(!gate.is_admin(&identity("ana@shop.example")));
    }
}
