//! HTTP media storage client.
//!
//! Pushes uploaded files to the external media service as multipart form
//! data and returns the public URL the service assigns.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use se_core::errors::{DomainError, DomainResult};
use se_core::services::{FileUpload, MediaStorage};
use se_shared::config::media::MediaConfig;

const UPLOAD_TIMEOUT_SECS: u64 = 60;

/// Client for the binary-object upload service
pub struct HttpMediaStorage {
    client: reqwest::Client,
    config: MediaConfig,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

impl HttpMediaStorage {
    pub fn new(config: MediaConfig) -> DomainResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(UPLOAD_TIMEOUT_SECS))
            .build()
            .map_err(|e| DomainError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl MediaStorage for HttpMediaStorage {
    async fn upload(&self, file: FileUpload) -> DomainResult<String> {
        let mut part = reqwest::multipart::Part::bytes(file.bytes).file_name(file.filename);
        if let Some(content_type) = file.content_type {
            part = part
                .mime_str(&content_type)
                .map_err(|e| DomainError::validation(format!("Invalid content type: {e}")))?;
        }
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.config.upload_url)
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%e, "media upload request failed");
                DomainError::internal("Media service unreachable")
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "media upload rejected");
            return Err(DomainError::internal(format!(
                "Media service returned {status}"
            )));
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| DomainError::internal(format!("Malformed media service reply: {e}")))?;

        tracing::info!(url = %uploaded.url, "file uploaded");
        Ok(uploaded.url)
    }
}
