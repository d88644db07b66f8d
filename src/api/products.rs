//! Catalog Endpoints

use cart_mirror::{CartResult, Product};
use reqwest::Method;

use super::{decode, send, StorefrontApi};

impl StorefrontApi {
    /// `GET /api/products`
    pub async fn list_products(&self) -> CartResult<Vec<Product>> {
        let response = send(self.request(Method::GET, "/api/products", None)).await?;
        decode(response).await
    }
}
