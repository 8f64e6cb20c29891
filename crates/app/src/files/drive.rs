//! HTTP client for the hosted file-storage service.

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::Client;
use serde::Deserialize;

use crate::files::{FileStorageError, ReceiptStorage, ReceiptUpload, StoredReceipt};

/// Configuration for connecting to the file-storage service.
#[derive(Debug, Clone)]
pub struct FileStorageConfig {
    /// Service address, e.g. `"https://drive.example.com"`.
    pub base_url: String,

    /// Folder receiving receipt uploads.
    pub folder: String,

    /// Bearer token for the service account.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct DriveStorage {
    config: FileStorageConfig,
    http: Client,
}

impl DriveStorage {
    #[must_use]
    pub fn new(config: FileStorageConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl ReceiptStorage for DriveStorage {
    async fn upload(&self, upload: ReceiptUpload) -> Result<StoredReceipt, FileStorageError> {
        let url = format!("{}/files", self.config.base_url);

        let body = serde_json::json!({
            "name": upload.filename,
            "mimeType": upload.content_type,
            "folder": self.config.folder,
            "data": BASE64.encode(&upload.bytes),
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(FileStorageError::UnexpectedResponse(format!(
                "upload failed with status {status}: {text}"
            )));
        }

        let created: FileResponse = response.json().await?;

        // The receipt link lands in the order ledger and in emails, so the
        // file must be viewable without a service-account session.
        let permissions_url = format!("{}/files/{}/permissions", self.config.base_url, created.id);

        let response = self
            .http
            .post(&permissions_url)
            .bearer_auth(&self.config.token)
            .json(&serde_json::json!({ "role": "reader", "type": "anyone" }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(FileStorageError::UnexpectedResponse(format!(
                "permission grant failed with status {status}: {text}"
            )));
        }

        Ok(StoredReceipt {
            file_id: created.id,
            url: created.view_url,
        })
    }
}

#[derive(Debug, Deserialize)]
struct FileResponse {
    id: String,
    #[serde(rename = "viewUrl")]
    view_url: String,
}
