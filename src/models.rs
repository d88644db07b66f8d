//! Frontend Models
//!
//! Catalog and cart types come from `cart-mirror`; only view-side data lives here.

use cart_mirror::{Toast, ToastLevel};

pub use cart_mirror::{CartLineItem, Price, Product};

/// Toast currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

impl ToastEntry {
    pub fn new(id: u32, toast: Toast) -> Self {
        Self { id, level: toast.level, message: toast.message }
    }

    pub fn css_class(&self) -> String {
        format!("toast toast-{}", self.level.as_str())
    }
}
