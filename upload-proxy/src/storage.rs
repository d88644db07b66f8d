//! Image Store
//!
//! Where uploaded bytes end up. Cloudinary is the production backend; tests
//! plug in an in-memory store.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ProxyConfig;
use crate::error::UploadError;

/// File received from the client, passed along unchanged
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// What the store reports back after accepting an upload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredImage {
    pub url: String,
    pub public_id: String,
    pub bytes: u64,
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(&self, upload: ImageUpload) -> Result<StoredImage, UploadError>;
}

/// Unsigned uploads through a Cloudinary upload preset
pub struct CloudinaryStore {
    client: reqwest::Client,
    endpoint: String,
    upload_preset: String,
    folder: Option<String>,
}

#[derive(Deserialize)]
struct CloudinaryResponse {
    secure_url: String,
    public_id: String,
    #[serde(default)]
    bytes: u64,
}

#[derive(Deserialize)]
struct CloudinaryErrorBody {
    error: CloudinaryErrorDetail,
}

#[derive(Deserialize)]
struct CloudinaryErrorDetail {
    message: String,
}

impl CloudinaryStore {
    pub fn new(config: &ProxyConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/{}/image/upload", config.storage_api_base, config.cloud_name),
            upload_preset: config.upload_preset.clone(),
            folder: config.folder.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ImageStore for CloudinaryStore {
    async fn store(&self, upload: ImageUpload) -> Result<StoredImage, UploadError> {
        let size = upload.bytes.len() as u64;
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)
            .map_err(|e| UploadError::UnsupportedMediaType(e.to_string()))?;

        let mut form = Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone());
        if let Some(folder) = &self.folder {
            form = form.text("folder", folder.clone());
        }

        debug!(endpoint = %self.endpoint, bytes = size, "forwarding upload");
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Storage(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<CloudinaryErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or_else(|_| format!("status {}", status.as_u16()));
            warn!(status = status.as_u16(), %message, "image store rejected upload");
            return Err(UploadError::Storage(message));
        }

        let stored: CloudinaryResponse = response
            .json()
            .await
            .map_err(|e| UploadError::Storage(format!("unreadable response: {e}")))?;

        Ok(StoredImage {
            url: stored.secure_url,
            public_id: stored.public_id,
            bytes: if stored.bytes > 0 { stored.bytes } else { size },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_targets_cloud_name() {
        let config = ProxyConfig::from_lookup(|key| match key {
            "CLOUDINARY_CLOUD_NAME" => Some("demo".to_string()),
            "CLOUDINARY_UPLOAD_PRESET" => Some("storefront".to_string()),
            _ => None,
        })
        .expect("config should parse");

        let store = CloudinaryStore::new(&config);
        assert_eq!(store.endpoint(), "https://api.cloudinary.com/v1_1/demo/image/upload");
    }
}
