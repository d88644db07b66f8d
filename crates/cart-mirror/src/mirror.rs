//! Cart Mirror Controller
//!
//! Owns the local cart state and routes every mutation through the remote
//! API. Local state changes strictly after the server acknowledges a call, so
//! a failed request never leaves the mirror ahead of the server.
//!
//! Overlapping calls are not sequenced: two quick quantity clicks each compute
//! their target from the quantity seen at click time and the last response to
//! land wins.

use std::cell::RefCell;

use log::{debug, error, info, warn};

use crate::domain::{CartLineItem, Product, ProductId};
use crate::error::{CartError, CartResult};
use crate::state::CartState;
use crate::traits::{CartApi, CartView, Confirm, ConfirmPrompt, CsrfTokenSource, Notifier, Toast};
use crate::wire::{AddItemRequest, UpdateQuantityRequest};

/// Result of a quantity change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// Server accepted this absolute quantity
    Updated(u32),
    /// Quantity would have dropped to zero, so the item was removed instead
    Removed,
}

pub struct CartMirror {
    api: Box<dyn CartApi>,
    csrf: Box<dyn CsrfTokenSource>,
    view: Box<dyn CartView>,
    notifier: Box<dyn Notifier>,
    confirm: Box<dyn Confirm>,
    state: RefCell<CartState>,
}

impl CartMirror {
    pub fn new(
        api: impl CartApi + 'static,
        csrf: impl CsrfTokenSource + 'static,
        view: impl CartView + 'static,
        notifier: impl Notifier + 'static,
        confirm: impl Confirm + 'static,
    ) -> Self {
        Self {
            api: Box::new(api),
            csrf: Box::new(csrf),
            view: Box::new(view),
            notifier: Box::new(notifier),
            confirm: Box::new(confirm),
            state: RefCell::new(CartState::new()),
        }
    }

    pub fn snapshot(&self) -> CartState {
        self.state.borrow().clone()
    }

    pub fn badge_count(&self) -> usize {
        self.state.borrow().badge_count()
    }

    pub fn quantity_of(&self, product_id: &ProductId) -> Option<u32> {
        self.state.borrow().get(product_id).map(|item| item.quantity)
    }

    /// Replace the mirror with the server's cart
    ///
    /// Failure is logged only; the mirror keeps whatever it had.
    pub async fn load_cart(&self) -> CartResult<usize> {
        match self.api.fetch_cart().await {
            Ok(remote) => {
                let state = CartState::from_remote(remote);
                let count = state.len();
                *self.state.borrow_mut() = state;
                self.render();
                info!("loaded cart with {} line items", count);
                Ok(count)
            }
            Err(err) => {
                error!("failed to load cart: {}", err);
                Err(err)
            }
        }
    }

    pub async fn add_to_cart(&self, product: &Product) -> CartResult<()> {
        if self.state.borrow().contains(&product.product_id) {
            self.notifier
                .notify(Toast::warning(format!("{} is already in your cart", product.name)));
            return Err(CartError::AlreadyInCart(product.product_id.clone()));
        }

        let request = AddItemRequest::single(product.product_id.clone());
        let token = self.csrf.current_token();
        debug!("adding product {} to cart", product.product_id);

        match self.api.add_item(&request, token.as_deref()).await {
            Ok(items) => {
                let cart_item_id = items
                    .into_iter()
                    .find(|item| item.product_id == product.product_id)
                    .map(|item| item.id);
                if cart_item_id.is_none() {
                    warn!("add response did not list product {}", product.product_id);
                }
                let inserted = self
                    .state
                    .borrow_mut()
                    .insert(CartLineItem::from_product(product, cart_item_id));
                if !inserted {
                    debug!("product {} was added concurrently", product.product_id);
                    return Ok(());
                }
                self.render();
                self.notifier
                    .notify(Toast::success(format!("{} added to cart", product.name)));
                Ok(())
            }
            Err(err) => {
                error!("failed to add product {}: {}", product.product_id, err);
                self.report_failure("Could not add item to cart", &err);
                Err(err)
            }
        }
    }

    /// Apply `delta` to a line item's quantity
    ///
    /// The server receives the absolute target. A target of zero or below
    /// turns into a removal.
    pub async fn update_quantity(&self, product_id: &ProductId, delta: i32) -> CartResult<QuantityChange> {
        let (current, cart_item_id) = match self.state.borrow().get(product_id) {
            Some(item) => (item.quantity, item.cart_item_id.clone()),
            None => {
                warn!("quantity change for product {} which is not in the cart", product_id);
                return Err(CartError::NotInCart(product_id.clone()));
            }
        };

        let target = i64::from(current) + i64::from(delta);
        if target <= 0 {
            self.remove_from_cart(product_id).await?;
            return Ok(QuantityChange::Removed);
        }
        let Ok(quantity) = u32::try_from(target) else {
            warn!("quantity {} for product {} is out of range", target, product_id);
            self.notifier.notify(Toast::warning("That quantity is not available"));
            return Err(CartError::QuantityOutOfRange { product_id: product_id.clone(), requested: target });
        };

        let Some(cart_item_id) = cart_item_id else {
            return Err(self.unacknowledged(product_id));
        };

        let token = self.csrf.current_token();
        debug!("setting product {} quantity to {}", product_id, quantity);
        match self
            .api
            .update_quantity(&cart_item_id, &UpdateQuantityRequest { quantity }, token.as_deref())
            .await
        {
            Ok(()) => {
                self.state.borrow_mut().set_quantity(product_id, quantity);
                self.render();
                Ok(QuantityChange::Updated(quantity))
            }
            Err(err) => {
                error!("failed to update product {}: {}", product_id, err);
                self.report_failure("Could not update quantity", &err);
                Err(err)
            }
        }
    }

    pub async fn remove_from_cart(&self, product_id: &ProductId) -> CartResult<()> {
        let (cart_item_id, name) = match self.state.borrow().get(product_id) {
            Some(item) => (item.cart_item_id.clone(), item.name.clone()),
            None => return Err(CartError::NotInCart(product_id.clone())),
        };
        let Some(cart_item_id) = cart_item_id else {
            return Err(self.unacknowledged(product_id));
        };

        let token = self.csrf.current_token();
        debug!("removing product {} (cart item {})", product_id, cart_item_id);
        match self.api.remove_item(&cart_item_id, token.as_deref()).await {
            Ok(()) => {
                self.state.borrow_mut().remove(product_id);
                self.render();
                self.notifier.notify(Toast::info(format!("{} removed from cart", name)));
                Ok(())
            }
            Err(err) => {
                error!("failed to remove product {}: {}", product_id, err);
                self.report_failure("Could not remove item", &err);
                Err(err)
            }
        }
    }

    /// Empty the cart after explicit confirmation
    ///
    /// Returns `Ok(false)` when the user backs out; no request is sent then.
    pub async fn clear_cart(&self) -> CartResult<bool> {
        if !self.confirm.confirm(ConfirmPrompt::clear_cart()).await {
            debug!("clear cart cancelled");
            return Ok(false);
        }

        let token = self.csrf.current_token();
        match self.api.clear_cart(token.as_deref()).await {
            Ok(()) => {
                self.state.borrow_mut().clear();
                self.render();
                self.notifier.notify(Toast::success("Cart cleared"));
                Ok(true)
            }
            Err(err) => {
                error!("failed to clear cart: {}", err);
                self.report_failure("Could not clear cart", &err);
                Err(err)
            }
        }
    }

    fn render(&self) {
        let state = self.state.borrow();
        self.view.render_cart(&state);
    }

    fn report_failure(&self, action: &str, err: &CartError) {
        let toast = if err.is_out_of_stock() {
            Toast::warning(err.server_message().unwrap_or("Not enough stock available"))
        } else {
            Toast::error(format!("{}. Please try again.", action))
        };
        self.notifier.notify(toast);
    }

    fn unacknowledged(&self, product_id: &ProductId) -> CartError {
        warn!("product {} has no cart item id; reload the cart", product_id);
        self.notifier
            .notify(Toast::error("This item is out of sync with your cart. Please refresh the page."));
        CartError::Unacknowledged(product_id.clone())
    }
}
