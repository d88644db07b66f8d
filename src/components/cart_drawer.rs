//! Cart Drawer Component
//!
//! Side drawer listing every line item. The list is rebuilt from the store on
//! each change rather than patched row by row.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::models::{CartLineItem, Price};
use crate::store::{use_app_store, AppStateStoreFields};

/// One line item with quantity stepper and remove button
#[component]
fn LineItemRow(item: CartLineItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (pending, set_pending) = signal(false);

    let product_id = StoredValue::new(item.product_id.clone());

    let change_quantity = move |delta: i32| {
        let mirror = ctx.mirror();
        let product_id = product_id.get_value();
        set_pending.set(true);
        spawn_local(async move {
            let _ = mirror.update_quantity(&product_id, delta).await;
            set_pending.set(false);
        });
    };

    let remove = move |_| {
        let mirror = ctx.mirror();
        let product_id = product_id.get_value();
        set_pending.set(true);
        spawn_local(async move {
            let _ = mirror.remove_from_cart(&product_id).await;
            set_pending.set(false);
        });
    };

    view! {
        <li class="cart-item">
            <img class="cart-item-image" src=item.image_url.clone() alt=item.name.clone() />
            <div class="cart-item-info">
                <span class="cart-item-name">{item.name.clone()}</span>
                <span class="cart-item-price">{format!("${}", item.unit_price)}</span>
            </div>
            <div class="quantity-stepper">
                <button
                    class="qty-btn"
                    disabled=move || pending.get()
                    on:click=move |_| change_quantity(-1)
                >
                    "−"
                </button>
                <span class="qty-value">{item.quantity}</span>
                <button
                    class="qty-btn"
                    disabled=move || pending.get()
                    on:click=move |_| change_quantity(1)
                >
                    "+"
                </button>
            </div>
            <span class="cart-item-total">{format!("${}", item.line_total())}</span>
            <button
                class="remove-btn"
                aria-label="Remove item"
                disabled=move || pending.get()
                on:click=remove
            >
                "×"
            </button>
        </li>
    }
}

/// Slide-in cart drawer
#[component]
pub fn CartDrawer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (clearing, set_clearing) = signal(false);

    let is_empty = move || store.cart().read().is_empty();
    let subtotal = move || {
        store.cart().read().iter().map(CartLineItem::line_total).sum::<Price>()
    };

    let clear = move |_| {
        let mirror = ctx.mirror();
        set_clearing.set(true);
        spawn_local(async move {
            let _ = mirror.clear_cart().await;
            set_clearing.set(false);
        });
    };

    view! {
        <aside class="cart-drawer" class:open=move || ctx.drawer_open.get()>
            <header class="cart-drawer-header">
                <h2>"Your cart"</h2>
                <button class="close-btn" aria-label="Close cart" on:click=move |_| ctx.close_drawer()>
                    "×"
                </button>
            </header>

            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="cart-empty">"Your cart is empty."</p> }
            >
                <ul class="cart-items">
                    {move || {
                        store.cart().get()
                            .into_iter()
                            .map(|item| view! { <LineItemRow item=item /> })
                            .collect_view()
                    }}
                </ul>
                <footer class="cart-drawer-footer">
                    <div class="cart-subtotal">
                        <span>"Subtotal"</span>
                        <span>{move || format!("${}", subtotal())}</span>
                    </div>
                    <button
                        class="clear-cart-btn"
                        disabled=move || clearing.get()
                        on:click=clear
                    >
                        "Clear cart"
                    </button>
                </footer>
            </Show>
        </aside>
    }
}
