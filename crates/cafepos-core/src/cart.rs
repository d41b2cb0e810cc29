//! # Cart
//!
//! The ordered, mutable list of line items for the sale in progress.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  Cashier Action           Engine Call              Cart Change          │
//! │  ──────────────           ───────────              ───────────          │
//! │                                                                         │
//! │  Click Add ──────────────► add_item() ────────────► lines.push(line)   │
//! │                                                                         │
//! │  Edit Quantity ──────────► set_quantity() ────────► lines[i].qty = n   │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ─────────► lines.remove(i)    │
//! │                                                                         │
//! │  Click Clear ────────────► clear() ───────────────► lines.clear()      │
//! │                                                                         │
//! │  View Cart ──────────────► items(), subtotal() ───► (read only)        │
//! │                                                                         │
//! │  NOTE: add_item always APPENDS. Adding the same product twice yields   │
//! │        two independent lines; each carries its own price snapshot and  │
//! │        the bill prints them in add order.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failing operation leaves the cart exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::catalog::ProductCatalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Cart Line
// =============================================================================

/// One added product-quantity entry.
///
/// ## Price Freezing
/// `unit_price` and `image` are captured from the catalog at add time.
/// If the catalog ever changed afterwards, existing lines would keep the
/// price the customer was quoted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Product name at time of adding; existed in the catalog at that moment.
    pub name: String,

    /// Quantity; always greater than zero.
    pub quantity: i64,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Image reference at time of adding (frozen).
    pub image: String,
}

impl CartLine {
    /// The line total: `quantity × unit_price`, at full precision.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The in-progress sale: an ordered sequence of [`CartLine`].
///
/// ## Invariants
/// - Insertion order is significant: the rendered bill lists lines in add
///   order, modulo removals
/// - Every line's quantity is > 0
/// - No duplicate merging (see module docs)
///
/// The catalog is injected per call rather than stored, so one catalog can
/// back any number of carts and the cart itself stays a plain value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Appends a line for `name`, snapshotting price and image from the
    /// catalog at this instant.
    ///
    /// ## Errors
    /// - [`CoreError::UnknownProduct`] if `name` is not in the catalog
    /// - [`CoreError::InvalidQuantity`] if `quantity <= 0` (no upper bound)
    pub fn add_item(
        &mut self,
        catalog: &ProductCatalog,
        name: &str,
        quantity: i64,
    ) -> CoreResult<()> {
        let product = catalog
            .get(name)
            .ok_or_else(|| CoreError::UnknownProduct(name.to_string()))?;

        if quantity <= 0 {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
            });
        }

        self.lines.push(CartLine {
            name: product.name.clone(),
            quantity,
            unit_price: product.price,
            image: product.image.clone(),
        });
        debug!(name, quantity, lines = self.lines.len(), "cart line added");
        Ok(())
    }

    /// Removes the line at `index` and returns it; later lines shift down
    /// by one.
    ///
    /// ## Errors
    /// - [`CoreError::IndexOutOfRange`] unless `index < len`
    pub fn remove_item(&mut self, index: usize) -> CoreResult<CartLine> {
        if index >= self.lines.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        let removed = self.lines.remove(index);
        debug!(index, name = %removed.name, "cart line removed");
        Ok(removed)
    }

    /// Re-sets the quantity of the line at `index`.
    ///
    /// Same validation as the mutating operations above: the index must be
    /// in range and the quantity must stay greater than zero.
    pub fn set_quantity(&mut self, index: usize, quantity: i64) -> CoreResult<()> {
        if index >= self.lines.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        if quantity <= 0 {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
            });
        }
        self.lines[index].quantity = quantity;
        Ok(())
    }

    /// Empties the cart unconditionally. Idempotent.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns a cloned snapshot of the lines, in order.
    ///
    /// Defensive copy: mutating the returned vector does not touch the cart.
    pub fn items(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    /// Number of lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line totals; zero for an empty cart.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Read-only view of the lines for rendering.
    pub(crate) fn lines(&self) -> &[CartLine] {
        &self.lines
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
