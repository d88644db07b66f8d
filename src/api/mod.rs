//! Storefront API Wrappers
//!
//! Frontend bindings to the remote storefront API over fetch, organized by domain.

mod cart;
mod products;

use cart_mirror::{CartError, CartResult};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Header carrying the anti-forgery token on mutating requests
pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// Where the API lives
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// `STOREFRONT_API_BASE` at build time, else the page's own origin
    pub fn from_env() -> Self {
        let base_url = option_env!("STOREFRONT_API_BASE")
            .map(str::to_string)
            .or_else(page_origin)
            .unwrap_or_default();
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// HTTP client for the cart and catalog endpoints
#[derive(Debug, Clone)]
pub struct StorefrontApi {
    client: reqwest::Client,
    base_url: String,
}

impl StorefrontApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn request(&self, method: Method, path: &str, csrf: Option<&str>) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .header("Accept", "application/json");
        let builder = match csrf {
            Some(token) => builder.header(CSRF_HEADER, token),
            None => builder,
        };
        with_credentials(builder)
    }
}

/// Send browser cookies along with the request
#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
}

/// Send and turn non-2xx answers into `CartError::Rejected`
async fn send(builder: RequestBuilder) -> CartResult<Response> {
    let response = builder
        .send()
        .await
        .map_err(|e| CartError::Transport(e.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(CartError::rejected(status.as_u16(), &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> CartResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| CartError::Decode(e.to_string()))
}
