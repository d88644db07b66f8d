//! Cart Mirror Bridge
//!
//! Implements the mirror's collaborator traits on top of the Leptos store,
//! the toast stack, the confirm modal and the page's CSRF meta tag.

use std::rc::Rc;

use async_trait::async_trait;
use cart_mirror::{CartMirror, CartState, CartView, Confirm, ConfirmPrompt, CsrfTokenSource, Notifier, Toast};
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::StorefrontApi;
use crate::context::ConfirmContext;
use crate::store::{store_dismiss_toast, store_push_toast, store_render_cart, AppStore};

/// How long a toast stays on screen
const TOAST_TTL_MS: u32 = 3_500;

/// Name of the meta tag the server renders the CSRF token into
const CSRF_META_NAME: &str = "csrf-token";

/// Renders the mirror into the store; the drawer and badge read from there
pub struct StoreCartView(pub AppStore);

impl CartView for StoreCartView {
    fn render_cart(&self, state: &CartState) {
        store_render_cart(&self.0, state);
    }
}

/// Pushes toasts onto the stack and schedules their dismissal
pub struct ToastNotifier(pub AppStore);

impl Notifier for ToastNotifier {
    fn notify(&self, toast: Toast) {
        let store = self.0;
        let id = store_push_toast(&store, toast);
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            store_dismiss_toast(&store, id);
        });
    }
}

pub struct ModalConfirm(pub ConfirmContext);

#[async_trait(?Send)]
impl Confirm for ModalConfirm {
    async fn confirm(&self, prompt: ConfirmPrompt) -> bool {
        self.0.ask(prompt).await
    }
}

/// Reads `<meta name="csrf-token" content="...">` before each mutation
pub struct MetaCsrfToken;

impl CsrfTokenSource for MetaCsrfToken {
    fn current_token(&self) -> Option<String> {
        let document = web_sys::window()?.document()?;
        let element = document
            .query_selector(&format!("meta[name=\"{}\"]", CSRF_META_NAME))
            .ok()
            .flatten()?;
        let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
        Some(meta.content()).filter(|token| !token.is_empty())
    }
}

/// Wire the page's cart mirror
pub fn build_mirror(api: StorefrontApi, store: AppStore, confirm: ConfirmContext) -> Rc<CartMirror> {
    Rc::new(CartMirror::new(
        api,
        MetaCsrfToken,
        StoreCartView(store),
        ToastNotifier(store),
        ModalConfirm(confirm),
    ))
}
