//! Collaborator Traits
//!
//! The mirror talks to the outside world only through these seams. The UI
//! crate implements them over fetch and the DOM; tests use in-memory doubles.
//!
//! Futures are `?Send`: everything runs on the browser main thread.

use async_trait::async_trait;

use crate::domain::CartItemId;
use crate::error::CartResult;
use crate::state::CartState;
use crate::wire::{AddItemRequest, RemoteCartItem, UpdateQuantityRequest};

/// Remote, authoritative cart store
///
/// Mutating calls receive the CSRF token obtained just before the request.
#[async_trait(?Send)]
pub trait CartApi {
    /// `GET /api/cart`
    async fn fetch_cart(&self) -> CartResult<Vec<RemoteCartItem>>;

    /// `POST /api/cart/add`, answering with the whole cart
    async fn add_item(&self, request: &AddItemRequest, csrf: Option<&str>) -> CartResult<Vec<RemoteCartItem>>;

    /// `PUT /api/cart/update/:cartItemId`
    async fn update_quantity(
        &self,
        cart_item_id: &CartItemId,
        request: &UpdateQuantityRequest,
        csrf: Option<&str>,
    ) -> CartResult<()>;

    /// `DELETE /api/cart/remove/:cartItemId`
    async fn remove_item(&self, cart_item_id: &CartItemId, csrf: Option<&str>) -> CartResult<()>;

    /// `DELETE /api/cart/clear`
    async fn clear_cart(&self, csrf: Option<&str>) -> CartResult<()>;
}

/// Accessor for the session's anti-forgery token
pub trait CsrfTokenSource {
    fn current_token(&self) -> Option<String>;
}

/// Draws the badge and drawer from the full mirror state
pub trait CartView {
    fn render_cart(&self, state: &CartState);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastLevel::Success => "success",
            ToastLevel::Info => "info",
            ToastLevel::Warning => "warning",
            ToastLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }
}

/// Transient user notifications
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

/// Text of a confirmation modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmPrompt {
    pub fn clear_cart() -> Self {
        Self {
            title: "Clear cart".to_string(),
            message: "Remove every item from your cart? This cannot be undone.".to_string(),
            confirm_label: "Clear cart".to_string(),
            cancel_label: "Keep items".to_string(),
        }
    }
}

/// Asks the user before destructive actions
#[async_trait(?Send)]
pub trait Confirm {
    /// Resolves to `true` only on explicit confirmation
    async fn confirm(&self, prompt: ConfirmPrompt) -> bool;
}
