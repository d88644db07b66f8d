//! Cart Mirror
//!
//! Local, non-authoritative copy of a shopper's server-held cart.
//!
//! Layered like the rest of the storefront:
//! - domain: identifiers, prices, catalog products and cart line items
//! - wire: request/response bodies of the remote cart API
//! - traits: seams to the remote API, the renderer, toasts and confirmation
//! - mirror: the controller that routes every mutation through the API
//!
//! Nothing in here touches the DOM; the UI crate plugs in through the traits.

mod domain;
mod error;
mod mirror;
mod state;
mod traits;
pub mod wire;


pub use domain::{CartItemId, CartLineItem, ExternalId, Price, PriceParseError, Product, ProductId};
pub use error::{CartError, CartResult};
pub use mirror::{CartMirror, QuantityChange};
pub use state::CartState;
pub use traits::{CartApi, CartView, Confirm, ConfirmPrompt, CsrfTokenSource, Notifier, Toast, ToastLevel};
