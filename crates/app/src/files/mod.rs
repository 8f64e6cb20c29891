//! Receipt file storage.

mod drive;

pub use drive::{DriveStorage, FileStorageConfig};

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

/// An uploaded proof-of-payment image.
#[derive(Clone, PartialEq, Eq)]
pub struct ReceiptUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ReceiptUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReceiptUpload")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// A stored, publicly viewable receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReceipt {
    pub file_id: String,
    pub url: String,
}

#[derive(Debug, Error)]
pub enum FileStorageError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from file storage: {0}")]
    UnexpectedResponse(String),
}

#[automock]
#[async_trait]
pub trait ReceiptStorage: Send + Sync {
    /// Store the image, grant public read access, and return its URL.
    async fn upload(&self, upload: ReceiptUpload) -> Result<StoredReceipt, FileStorageError>;
}
