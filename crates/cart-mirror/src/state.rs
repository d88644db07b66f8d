//! Cart State
//!
//! Contents of the mirror. Holds at most one line item per product id.

use log::warn;

use crate::domain::{CartLineItem, Price, ProductId};
use crate::wire::RemoteCartItem;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a server snapshot, keeping the first entry per product
    pub fn from_remote(remote: Vec<RemoteCartItem>) -> Self {
        remote.into_iter().filter_map(CartLineItem::from_remote).collect()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items, regardless of quantities
    pub fn badge_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.get(product_id).is_some()
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.product_id == product_id)
    }

    /// Append unless the product is already present
    pub(crate) fn insert(&mut self, item: CartLineItem) -> bool {
        if self.contains(&item.product_id) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub(crate) fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) -> bool {
        self.items
            .iter_mut()
            .find(|item| &item.product_id == product_id)
            .map(|item| item.quantity = quantity)
            .is_some()
    }

    pub(crate) fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.product_id != product_id);
        self.items.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

impl FromIterator<CartLineItem> for CartState {
    fn from_iter<I: IntoIterator<Item = CartLineItem>>(iter: I) -> Self {
        let mut state = CartState::new();
        for item in iter {
            let product_id = item.product_id.clone();
            if !state.insert(item) {
                warn!("dropping duplicate cart entry for product {}", product_id);
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CartItemId;

    fn remote(id: i64, product: &str, quantity: u32) -> RemoteCartItem {
        RemoteCartItem {
            id: CartItemId::from(id),
            product_id: ProductId::from(product),
            name: product.to_string(),
            price: Price::from_cents(250),
            image_url: None,
            description: None,
            quantity,
        }
    }

    #[test]
    fn test_from_remote_keeps_first_duplicate() {
        let state = CartState::from_remote(vec![remote(1, "A", 2), remote(2, "A", 9), remote(3, "B", 1)]);
        assert_eq!(state.len(), 2);
        assert_eq!(state.get(&ProductId::from("A")).unwrap().quantity, 2);
    }

    #[test]
    fn test_from_remote_drops_zero_quantity() {
        let state = CartState::from_remote(vec![remote(1, "A", 0), remote(2, "B", 1)]);
        assert!(!state.contains(&ProductId::from("A")));
        assert_eq!(state.badge_count(), 1);
    }

    #[test]
    fn test_totals() {
        let state = CartState::from_remote(vec![remote(1, "A", 3), remote(2, "B", 5)]);
        assert_eq!(state.badge_count(), 2);
        assert_eq!(state.total_units(), 8);
        assert_eq!(state.subtotal(), Price::from_cents(2000));
    }

    #[test]
    fn test_mutators() {
        let mut state = CartState::from_remote(vec![remote(1, "A", 1)]);
        let a = ProductId::from("A");
        assert!(state.set_quantity(&a, 4));
        assert_eq!(state.get(&a).unwrap().quantity, 4);
        assert!(!state.set_quantity(&ProductId::from("Z"), 4));
        assert!(state.remove(&a));
        assert!(!state.remove(&a));
        assert!(state.is_empty());
    }
}
