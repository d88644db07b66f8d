//! Storefront Frontend App
//!
//! Header with cart badge, product grid, cart drawer, toasts and the confirm modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};
use reactive_stores::Store;

use cart_mirror::{Notifier, Toast};
use crate::api::{ApiConfig, StorefrontApi};
use crate::bridge::{build_mirror, ToastNotifier};
use crate::components::{CartBadge, CartDrawer, ConfirmDialog, ProductGrid, ToastStack};
use crate::context::{AppContext, ConfirmContext};
use crate::store::{store_set_products, AppState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let confirm = ConfirmContext::new();
    let api = StorefrontApi::new(&ApiConfig::from_env());
    let mirror = build_mirror(api.clone(), store, confirm);
    let ctx = AppContext::new(signal(false), mirror);

    // Provide context to all children
    provide_context(store);
    provide_context(confirm);
    provide_context(ctx);

    // Rebuild the mirror from the server once per page load
    Effect::new(move |_| {
        let mirror = ctx.mirror();
        spawn_local(async move {
            let _ = mirror.load_cart().await;
        });
    });

    // Load the catalog
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.list_products().await {
                Ok(products) => {
                    info!("loaded {} products", products.len());
                    store_set_products(&store, products);
                }
                Err(e) => {
                    error!("failed to load products: {}", e);
                    store_set_products(&store, Vec::new());
                    ToastNotifier(store).notify(Toast::error("Could not load products. Please refresh."));
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="site-header">
                <h1 class="site-title">"Storefront"</h1>
                <CartBadge />
            </header>

            <main class="main-content">
                <ProductGrid />
            </main>

            <CartDrawer />
            <ToastStack />
            <ConfirmDialog />
        </div>
    }
}
