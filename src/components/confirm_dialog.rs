//! Confirm Dialog Component
//!
//! Modal used before destructive actions such as clearing the cart.

use leptos::prelude::*;

use crate::context::ConfirmContext;

/// Modal confirmation dialog
///
/// Renders whatever prompt is pending in `ConfirmContext`. Clicking the
/// backdrop or the cancel button answers `false`.
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let confirm = use_context::<ConfirmContext>().expect("ConfirmContext should be provided");

    view! {
        {move || confirm.prompt.get().map(|prompt| view! {
            <div class="modal-backdrop" on:click=move |_| confirm.answer(false)>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h3 class="modal-title">{prompt.title}</h3>
                    <p class="modal-message">{prompt.message}</p>
                    <div class="modal-actions">
                        <button
                            class="cancel-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                confirm.answer(false);
                            }
                        >
                            {prompt.cancel_label}
                        </button>
                        <button
                            class="confirm-btn danger"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                confirm.answer(true);
                            }
                        >
                            {prompt.confirm_label}
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}
