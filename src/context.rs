//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use cart_mirror::{CartMirror, ConfirmPrompt};
use futures::channel::oneshot;
use leptos::prelude::*;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Whether the cart drawer is open - read
    pub drawer_open: ReadSignal<bool>,
    /// Whether the cart drawer is open - write
    set_drawer_open: WriteSignal<bool>,
    /// The page's single cart mirror (main-thread only)
    mirror: StoredValue<Rc<CartMirror>, LocalStorage>,
}

impl AppContext {
    pub fn new(drawer_open: (ReadSignal<bool>, WriteSignal<bool>), mirror: Rc<CartMirror>) -> Self {
        Self {
            drawer_open: drawer_open.0,
            set_drawer_open: drawer_open.1,
            mirror: StoredValue::new_local(mirror),
        }
    }

    pub fn mirror(&self) -> Rc<CartMirror> {
        self.mirror.get_value()
    }

    pub fn toggle_drawer(&self) {
        self.set_drawer_open.update(|open| *open = !*open);
    }

    pub fn close_drawer(&self) {
        self.set_drawer_open.set(false);
    }
}

/// Pending confirmation modal
///
/// One prompt at a time; asking again cancels the previous prompt.
#[derive(Clone, Copy)]
pub struct ConfirmContext {
    /// Prompt on screen, if any
    pub prompt: RwSignal<Option<ConfirmPrompt>>,
    responder: StoredValue<Option<oneshot::Sender<bool>>, LocalStorage>,
}

impl ConfirmContext {
    pub fn new() -> Self {
        Self {
            prompt: RwSignal::new(None),
            responder: StoredValue::new_local(None),
        }
    }

    /// Show `prompt` and wait for the answer; a dismissed modal counts as cancel
    pub async fn ask(self, prompt: ConfirmPrompt) -> bool {
        let (tx, rx) = oneshot::channel();
        if let Some(previous) = self.responder.try_update_value(|slot| slot.replace(tx)).flatten() {
            let _ = previous.send(false);
        }
        self.prompt.set(Some(prompt));
        rx.await.unwrap_or(false)
    }

    pub fn answer(&self, confirmed: bool) {
        self.prompt.set(None);
        if let Some(tx) = self.responder.try_update_value(|slot| slot.take()).flatten() {
            let _ = tx.send(confirmed);
        }
    }
}
