//! Cart Badge Component
//!
//! Header button showing how many distinct items are in the cart.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Badge count is the number of line items, not the sum of quantities
#[component]
pub fn CartBadge() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let count = move || store.cart().read().len();

    view! {
        <button
            class="cart-badge-btn"
            aria-label="Open cart"
            on:click=move |_| ctx.toggle_drawer()
        >
            "🛒"
            <Show when=move || { count() > 0 }>
                <span class="cart-badge">{count}</span>
            </Show>
        </button>
    }
}
