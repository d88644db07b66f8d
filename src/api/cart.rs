//! Cart Endpoints
//!
//! `CartApi` over `/api/cart*`.

use async_trait::async_trait;
use cart_mirror::wire::{AddItemRequest, CartResponse, RemoteCartItem, UpdateQuantityRequest};
use cart_mirror::{CartApi, CartItemId, CartResult};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Method;

use super::{decode, send, StorefrontApi};

fn item_path(action: &str, cart_item_id: &CartItemId) -> String {
    format!(
        "/api/cart/{}/{}",
        action,
        utf8_percent_encode(cart_item_id.as_str(), NON_ALPHANUMERIC)
    )
}

#[async_trait(?Send)]
impl CartApi for StorefrontApi {
    async fn fetch_cart(&self) -> CartResult<Vec<RemoteCartItem>> {
        let response = send(self.request(Method::GET, "/api/cart", None)).await?;
        Ok(decode::<CartResponse>(response).await?.items)
    }

    async fn add_item(&self, request: &AddItemRequest, csrf: Option<&str>) -> CartResult<Vec<RemoteCartItem>> {
        let builder = self.request(Method::POST, "/api/cart/add", csrf).json(request);
        let response = send(builder).await?;
        Ok(decode::<CartResponse>(response).await?.items)
    }

    async fn update_quantity(
        &self,
        cart_item_id: &CartItemId,
        request: &UpdateQuantityRequest,
        csrf: Option<&str>,
    ) -> CartResult<()> {
        let builder = self
            .request(Method::PUT, &item_path("update", cart_item_id), csrf)
            .json(request);
        send(builder).await.map(|_| ())
    }

    async fn remove_item(&self, cart_item_id: &CartItemId, csrf: Option<&str>) -> CartResult<()> {
        let builder = self.request(Method::DELETE, &item_path("remove", cart_item_id), csrf);
        send(builder).await.map(|_| ())
    }

    async fn clear_cart(&self, csrf: Option<&str>) -> CartResult<()> {
        send(self.request(Method::DELETE, "/api/cart/clear", csrf)).await.map(|_| ())
    }
}
