//! Cart Errors
//!
//! Transport failures and non-2xx answers are kept apart here for logging,
//! but users only ever see a toast for either.

use thiserror::Error;

use crate::domain::ProductId;
use crate::wire::ErrorBody;

pub type CartResult<T> = Result<T, CartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("server rejected request ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Rejected { status: u16, message: Option<String> },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("product {0} is already in the cart")]
    AlreadyInCart(ProductId),

    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    #[error("product {0} has no server-side cart entry")]
    Unacknowledged(ProductId),

    #[error("quantity {requested} for product {product_id} is out of range")]
    QuantityOutOfRange { product_id: ProductId, requested: i64 },
}

impl CartError {
    /// Build from a non-2xx status and its raw body
    ///
    /// Prefers the `message` of a JSON error body, falling back to the raw
    /// text when the body is not JSON.
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.message,
            Err(_) => Some(body.trim().to_string()).filter(|s| !s.is_empty()),
        };
        CartError::Rejected { status, message }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            CartError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Inventory exhaustion is signalled only through the wording of the message
    pub fn is_out_of_stock(&self) -> bool {
        self.server_message()
            .map(|m| m.to_lowercase().contains("stock"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_reads_json_message() {
        let err = CartError::rejected(409, r#"{"message": "Only 2 left in stock"}"#);
        assert_eq!(err.server_message(), Some("Only 2 left in stock"));
        assert!(err.is_out_of_stock());
    }

    #[test]
    fn test_rejected_falls_back_to_text() {
        let err = CartError::rejected(500, "Internal Server Error\n");
        assert_eq!(err.server_message(), Some("Internal Server Error"));
        assert!(!err.is_out_of_stock());

        let empty = CartError::rejected(502, "  ");
        assert_eq!(empty.server_message(), None);
    }

    #[test]
    fn test_stock_match_ignores_case() {
        let err = CartError::Rejected { status: 400, message: Some("Out of Stock".into()) };
        assert!(err.is_out_of_stock());
        assert!(!CartError::Transport("stock".into()).is_out_of_stock());
    }
}
