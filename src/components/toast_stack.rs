//! Toast Stack Component
//!
//! Notifications pushed by the cart mirror. Each one expires on a timer and
//! can be dismissed early by clicking it.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.css_class() on:click=move |_| store_dismiss_toast(&store, id)>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
