use axum::{
    Json,
    extract::{Multipart, State},
};
use tracing::info;

use crate::{
    error::UploadError,
    state::AppState,
    storage::{ImageUpload, StoredImage},
};

/// Field names the admin forms use for the file part
const FILE_FIELDS: [&str; 2] = ["file", "image"];

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// `POST /api/upload`
///
/// Takes the first `file`/`image` part, checks it is a non-empty image within
/// the size limit, and hands it to the image store as-is.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<StoredImage>, UploadError> {
    let limit = state.max_upload_bytes;
    let upload = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| UploadError::from_multipart(e, limit))?
            .ok_or(UploadError::MissingFile)?;

        if !field.name().is_some_and(|name| FILE_FIELDS.contains(&name)) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !content_type.starts_with("image/") {
            return Err(UploadError::UnsupportedMediaType(content_type));
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| UploadError::from_multipart(e, limit))?;

        if bytes.is_empty() {
            return Err(UploadError::EmptyFile);
        }
        if bytes.len() > limit {
            return Err(UploadError::TooLarge { limit });
        }

        break ImageUpload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        };
    };

    let content_type = upload.content_type.clone();
    let stored = state.store.store(upload).await?;

    info!(
        public_id = %stored.public_id,
        bytes = stored.bytes,
        content_type = %content_type,
        "image uploaded"
    );
    Ok(Json(stored))
}
