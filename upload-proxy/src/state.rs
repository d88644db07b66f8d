use std::sync::Arc;

use crate::storage::ImageStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ImageStore>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn ImageStore>, max_upload_bytes: usize) -> Self {
        Self { store, max_upload_bytes }
    }
}
