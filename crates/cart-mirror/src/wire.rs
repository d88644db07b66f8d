//! Remote Cart API Bodies
//!
//! Shapes of the JSON exchanged with `/api/cart*`.

use serde::{Deserialize, Serialize};

use crate::domain::{CartItemId, Price, ProductId};

/// Body of `GET /api/cart` and `POST /api/cart/add`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartResponse {
    #[serde(default)]
    pub items: Vec<RemoteCartItem>,
}

/// Cart entry as the server reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteCartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    #[serde(default)]
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub product_id: ProductId,
    pub quantity: u32,
    pub size: Option<String>,
}

impl AddItemRequest {
    pub fn single(product_id: ProductId) -> Self {
        Self { product_id, quantity: 1, size: None }
    }
}

/// Carries the absolute quantity, never a delta
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UpdateQuantityRequest {
    pub quantity: u32,
}

/// Error payload of a non-2xx response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
