//! Customer feedback log.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use thiserror::Error;

use crate::store::{SheetStore, StoreError, row};

pub(crate) const FEEDBACK_SHEET: &str = "Feedback";

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("message must not be empty")]
    EmptyMessage,

    #[error("storage error")]
    Store(#[from] StoreError),
}

#[automock]
#[async_trait]
pub trait FeedbackService: Send + Sync {
    /// Append a free-form message, with an optional reply address.
    async fn submit(&self, message: &str, email: Option<&str>) -> Result<(), FeedbackError>;
}

#[derive(Clone)]
pub struct SheetFeedbackService {
    store: Arc<dyn SheetStore>,
}

impl SheetFeedbackService {
    #[must_use]
    pub fn new(store: Arc<dyn SheetStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FeedbackService for SheetFeedbackService {
    async fn submit(&self, message: &str, email: Option<&str>) -> Result<(), FeedbackError> {
        if message.trim().is_empty() {
            return Err(FeedbackError::EmptyMessage);
        }

        self.store
            .append_row(
                FEEDBACK_SHEET,
                row(&[
                    ("date", &Timestamp::now().to_string()),
                    ("message", message),
                    ("email", email.unwrap_or_default()),
                ]),
            )
            .await?;

        Ok(())
    }
}
