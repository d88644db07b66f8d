//! Product Grid Component
//!
//! Catalog cards with an add-to-cart button each.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::models::Product;
use crate::store::{use_app_store, AppStateStoreFields};

/// Single product card
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (pending, set_pending) = signal(false);

    let product_id = product.product_id.clone();
    let in_cart = move || store.cart().read().iter().any(|item| item.product_id == product_id);

    let name = product.name.clone();
    let description = product.description.clone();
    let image_url = product.image_url.clone();
    let price = product.price;

    let add = move |_| {
        let mirror = ctx.mirror();
        let product = product.clone();
        set_pending.set(true);
        spawn_local(async move {
            let _ = mirror.add_to_cart(&product).await;
            set_pending.set(false);
        });
    };

    view! {
        <article class="product-card">
            <img class="product-image" src=image_url alt=name.clone() loading="lazy" />
            <div class="product-body">
                <h3 class="product-name">{name}</h3>
                <p class="product-description">{description}</p>
                <div class="product-footer">
                    <span class="product-price">{format!("${}", price)}</span>
                    <button
                        class="add-to-cart-btn"
                        class:in-cart=in_cart
                        disabled=move || pending.get()
                        on:click=add
                    >
                        {move || if pending.get() { "Adding..." } else { "Add to cart" }}
                    </button>
                </div>
            </div>
        </article>
    }
}

/// Grid of all catalog products
#[component]
pub fn ProductGrid() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="product-grid">
            <Show
                when=move || store.catalog_loaded().get()
                fallback=|| view! { <div class="loading">"Loading products..."</div> }
            >
                <Show
                    when=move || !store.products().read().is_empty()
                    fallback=|| view! { <p class="empty">"No products available."</p> }
                >
                    <For
                        each=move || store.products().get()
                        key=|product| product.product_id.clone()
                        children=move |product| view! { <ProductCard product=product /> }
                    />
                </Show>
            </Show>
        </section>
    }
}
