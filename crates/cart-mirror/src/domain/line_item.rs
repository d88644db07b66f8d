//! Cart Line Item
//!
//! One product entry in the mirror. Display fields are copied from the
//! catalog when the item is added and never re-fetched.

use super::{CartItemId, Price, Product, ProductId};
use crate::wire::RemoteCartItem;

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    pub product_id: ProductId,
    /// Assigned by the cart API; `None` until the add call is acknowledged
    pub cart_item_id: Option<CartItemId>,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub unit_price: Price,
    /// Always >= 1
    pub quantity: u32,
}

impl CartLineItem {
    /// Fresh line item for a just-acknowledged add
    pub fn from_product(product: &Product, cart_item_id: Option<CartItemId>) -> Self {
        Self {
            product_id: product.product_id.clone(),
            cart_item_id,
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    /// Convert a server entry; entries with quantity 0 have no place in the mirror
    pub fn from_remote(item: RemoteCartItem) -> Option<Self> {
        if item.quantity == 0 {
            return None;
        }
        Some(Self {
            product_id: item.product_id,
            cart_item_id: Some(item.id),
            name: item.name,
            description: item.description.unwrap_or_default(),
            image_url: item.image_url.unwrap_or_default(),
            unit_price: item.price,
            quantity: item.quantity,
        })
    }

    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}
