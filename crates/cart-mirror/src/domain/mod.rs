//! Domain Layer
//!
//! Catalog and cart entities. Only serde is needed here.

mod id;
mod line_item;
mod price;
mod product;

pub use id::{CartItemId, ExternalId, ProductId};
pub use line_item::CartLineItem;
pub use price::{Price, PriceParseError};
pub use product::Product;
