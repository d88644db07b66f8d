//! Storefront Upload Proxy
//!
//! Accepts multipart image uploads from the admin pages and forwards the bytes
//! untouched to the configured image store.
//!
//! Layered architecture:
//! - config: environment-driven settings
//! - storage: `ImageStore` trait and the Cloudinary implementation
//! - upload: the multipart handler
//! - app: router, CORS, body limit and tracing layers

pub mod app;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;
pub mod upload;

pub use app::build_router;
