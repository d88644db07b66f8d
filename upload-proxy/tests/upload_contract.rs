use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use upload_proxy::{
    build_router,
    error::UploadError,
    state::AppState,
    storage::{ImageStore, ImageUpload, StoredImage},
};

const BOUNDARY: &str = "storefront-test-boundary";

#[derive(Default)]
struct MemoryStore {
    received: Mutex<Vec<ImageUpload>>,
    fail: bool,
}

#[async_trait]
impl ImageStore for MemoryStore {
    async fn store(&self, upload: ImageUpload) -> Result<StoredImage, UploadError> {
        if self.fail {
            return Err(UploadError::Storage("quota exceeded".to_string()));
        }
        let bytes = upload.bytes.len() as u64;
        let public_id = format!("products/{}", upload.file_name);
        self.received.lock().expect("store mutex poisoned").push(upload);
        Ok(StoredImage {
            url: format!("https://cdn.example/{public_id}"),
            public_id,
            bytes,
        })
    }
}

fn app_with(store: Arc<MemoryStore>, limit: usize) -> Router {
    build_router(AppState::new(store, limit), None)
}

fn multipart_body(field: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("request should build")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be json")
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app_with(Arc::new(MemoryStore::default()), 1024);

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test]
async fn image_is_forwarded_unchanged() {
    let store = Arc::new(MemoryStore::default());
    let app = app_with(store.clone(), 1024);
    let png = b"\x89PNG\r\n\x1a\nfake-image-bytes";

    let response = app
        .oneshot(upload_request(multipart_body("file", "shoe.png", "image/png", png)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["url"], "https://cdn.example/products/shoe.png");
    assert_eq!(body["publicId"], "products/shoe.png");
    assert_eq!(body["bytes"], png.len() as u64);

    let received = store.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].bytes, png.to_vec());
    assert_eq!(received[0].content_type, "image/png");
}

#[tokio::test]
async fn image_field_name_is_accepted() {
    let store = Arc::new(MemoryStore::default());
    let app = app_with(store.clone(), 1024);

    let response = app
        .oneshot(upload_request(multipart_body("image", "a.jpg", "image/jpeg", b"jpeg")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_file_field_is_bad_request() {
    let app = app_with(Arc::new(MemoryStore::default()), 1024);

    let response = app
        .oneshot(upload_request(multipart_body("avatar", "a.png", "image/png", b"png")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["message"].as_str().unwrap().contains("no file field"));
}

#[tokio::test]
async fn non_image_is_rejected() {
    let store = Arc::new(MemoryStore::default());
    let app = app_with(store.clone(), 1024);

    let response = app
        .oneshot(upload_request(multipart_body("file", "notes.txt", "text/plain", b"hello")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(store.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_file_is_rejected() {
    let app = app_with(Arc::new(MemoryStore::default()), 1024);

    let response = app
        .oneshot(upload_request(multipart_body("file", "a.png", "image/png", b"")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_file_is_rejected() {
    let store = Arc::new(MemoryStore::default());
    let app = app_with(store.clone(), 16);

    let response = app
        .oneshot(upload_request(multipart_body("file", "big.png", "image/png", &[7u8; 64])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(store.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn body_over_request_limit_is_payload_too_large() {
    let store = Arc::new(MemoryStore::default());
    let app = app_with(store.clone(), 16);
    // well past the 16 byte file limit plus the multipart headroom
    let image = vec![7u8; 200 * 1024];

    let response = app
        .oneshot(upload_request(multipart_body("file", "huge.png", "image/png", &image)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = json_body(response).await;
    assert!(body["message"].as_str().unwrap().contains("16 byte limit"));
    assert!(store.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn storage_failure_is_bad_gateway() {
    let store = Arc::new(MemoryStore { fail: true, ..Default::default() });
    let app = app_with(store, 1024);

    let response = app
        .oneshot(upload_request(multipart_body("file", "a.png", "image/png", b"png")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert!(body["message"].as_str().unwrap().contains("quota exceeded"));
}
