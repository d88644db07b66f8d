//! Catalog Product
//!
//! Entry of `GET /api/products`. Older catalog rows carry `id`, newer ones
//! `product_id`; when both are present `product_id` wins.

use serde::{Deserialize, Serialize};

use super::{ExternalId, Price, ProductId};

/// Product as shown in the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image_url: String,
}

impl Product {
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            description: description.into(),
            price,
            image_url: image_url.into(),
        }
    }
}

#[derive(Deserialize)]
struct RawProduct {
    #[serde(default)]
    product_id: Option<ExternalId>,
    #[serde(default)]
    id: Option<ExternalId>,
    name: String,
    #[serde(default)]
    description: Option<String>,
    price: Price,
    #[serde(default)]
    image_url: Option<String>,
}

impl TryFrom<RawProduct> for Product {
    type Error = String;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        let id = raw
            .product_id
            .or(raw.id)
            .ok_or_else(|| format!("product {:?} has neither product_id nor id", raw.name))?;
        Ok(Self {
            product_id: ProductId(id),
            name: raw.name,
            description: raw.description.unwrap_or_default(),
            price: raw.price,
            image_url: raw.image_url.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_or_id() {
        let json = r#"[
            {"product_id": 3, "id": 99, "name": "Mug", "description": null, "price": "8.50", "image_url": "/m.png"},
            {"id": "sku-4", "name": "Cap", "price": 12}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products[0].product_id, ProductId::from(3i64));
        assert_eq!(products[0].description, "");
        assert_eq!(products[0].price.cents(), 850);
        assert_eq!(products[1].product_id, ProductId::from("sku-4"));
        assert_eq!(products[1].image_url, "");
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let json = r#"{"name": "Ghost", "price": "1.00"}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }
}
