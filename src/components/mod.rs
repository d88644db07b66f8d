//! UI Components
//!
//! Reusable Leptos components.

mod cart_badge;
mod cart_drawer;
mod confirm_dialog;
mod product_grid;
mod toast_stack;

pub use cart_badge::CartBadge;
pub use cart_drawer::CartDrawer;
pub use confirm_dialog::ConfirmDialog;
pub use product_grid::ProductGrid;
pub use toast_stack::ToastStack;
