use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("no file field in upload; expected a `file` or `image` part")]
    MissingFile,
    #[error("uploaded file is empty")]
    EmptyFile,
    #[error("unsupported content type {0:?}; only images are accepted")]
    UnsupportedMediaType(String),
    #[error("upload exceeds the {limit} byte limit")]
    TooLarge { limit: usize },
    #[error("malformed multipart body: {0}")]
    Multipart(String),
    #[error("image store rejected upload: {0}")]
    Storage(String),
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::MissingFile | UploadError::EmptyFile | UploadError::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            UploadError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            UploadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            UploadError::Storage(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl UploadError {
    /// The body limit layer surfaces through the multipart stream as a 413
    pub fn from_multipart(err: MultipartError, limit: usize) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return UploadError::TooLarge { limit };
        }
        UploadError::Multipart(err.body_text())
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
