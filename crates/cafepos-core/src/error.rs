//! # Error Types
//!
//! Domain-specific error types for cafepos-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CatalogError   - Fatal at startup. The engine cannot operate without  │
//! │                   a catalog, so the caller should abort.               │
//! │                                                                         │
//! │  CoreError      - Recoverable caller-input failures. The cart and      │
//! │                   order history are never left partially mutated.      │
//! │                                                                         │
//! │  Flow: CoreError → UI alert dialog → cashier corrects the input        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, index, amount)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Catalog Error
// =============================================================================

/// Catalog loading errors.
///
/// These are fatal at startup: without a catalog there is nothing to sell.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog source is not valid JSON or not an array of records.
    #[error("Failed to load products: {0}")]
    Parse(#[from] serde_json::Error),

    /// The source parsed but no well-formed product record remained.
    ///
    /// ## When This Occurs
    /// - The source is an empty array
    /// - Every record was skipped (empty name or negative price)
    #[error("Product catalog contains no well-formed products")]
    Empty,
}

// =============================================================================
// Core Error
// =============================================================================

/// Cart and billing validation errors.
///
/// These errors represent rejected caller input. They are reported
/// synchronously and never leave the cart in a partially-mutated state.
///
/// Messages are stable: the UI layer surfaces them verbatim in dialogs.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested product name does not exist in the catalog.
    #[error("Item not found in product database: {0}")]
    UnknownProduct(String),

    /// Quantity was zero or negative.
    #[error("Quantity must be greater than 0")]
    InvalidQuantity { requested: i64 },

    /// A cart line index outside `[0, len)`.
    #[error("Invalid item index: {index}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A bill was requested for an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Discount percentage outside `[0, 100]`.
    #[error("Discount percentage must be between 0 and 100")]
    InvalidDiscount { requested: f64 },

    /// Tendered payment below the discounted total.
    ///
    /// The message states the required minimum rounded to two decimals,
    /// e.g. `Payment must be at least $9.90`.
    #[error("Payment must be at least {required}")]
    InsufficientPayment { required: Money, tendered: Money },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownProduct("Flat White".to_string());
        assert_eq!(
            err.to_string(),
            "Item not found in product database: Flat White"
        );

        let err = CoreError::InvalidQuantity { requested: -3 };
        assert_eq!(err.to_string(), "Quantity must be greater than 0");

        let err = CoreError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(err.to_string(), "Invalid item index: 5");

        assert_eq!(CoreError::EmptyCart.to_string(), "Cart is empty");

        let err = CoreError::InvalidDiscount { requested: 120.0 };
        assert_eq!(
            err.to_string(),
            "Discount percentage must be between 0 and 100"
        );
    }

    #[test]
    fn test_insufficient_payment_states_required_minimum() {
        let err = CoreError::InsufficientPayment {
            required: Money::new(9.9),
            tendered: Money::new(9.89),
        };
        assert_eq!(err.to_string(), "Payment must be at least $9.90");
    }

    #[test]
    fn test_catalog_empty_message() {
        assert_eq!(
            CatalogError::Empty.to_string(),
            "Product catalog contains no well-formed products"
        );
    }
}
