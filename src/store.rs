//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The cart field is
//! written only by the mirror's view; components never edit it directly.

use leptos::prelude::*;
use reactive_stores::Store;
use cart_mirror::{CartState, Toast};
use crate::models::{CartLineItem, Product, ToastEntry};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Catalog shown in the product grid
    pub products: Vec<Product>,
    /// Whether the catalog request has finished (successfully or not)
    pub catalog_loaded: bool,
    /// Cart line items as last rendered by the mirror
    pub cart: Vec<CartLineItem>,
    /// Toasts on screen, oldest first
    pub toasts: Vec<ToastEntry>,
    /// Next toast id
    pub next_toast_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the visible cart with the mirror's full state
pub fn store_render_cart(store: &AppStore, state: &CartState) {
    *store.cart().write() = state.items().to_vec();
}

pub fn store_set_products(store: &AppStore, products: Vec<Product>) {
    *store.products().write() = products;
    *store.catalog_loaded().write() = true;
}

/// Push a toast, returning its id
pub fn store_push_toast(store: &AppStore, toast: Toast) -> u32 {
    let id = store.next_toast_id().get_untracked();
    *store.next_toast_id().write() = id.wrapping_add(1);
    store.toasts().write().push(ToastEntry::new(id, toast));
    id
}

pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
