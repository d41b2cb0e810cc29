//! # cafepos-core: Pure Business Logic for Cafe POS
//!
//! This crate is the **heart** of Cafe POS: the cart and billing engine
//! behind the register UI. It holds a mutable order-in-progress against an
//! immutable product catalog, enforces input validity, computes totals under
//! a discount, validates tendered payment, and renders the final itemized
//! bill.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cafe POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (register UI)                       │   │
//! │  │   Product Grid ──► Cart Table ──► Tender ──► Bill Dialog        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cafepos-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │  billing  │  │  history  │  │   │
//! │  │   │  Product  │  │   Cart    │  │   Bill    │  │  Order    │  │   │
//! │  │   │  loader   │  │ CartLine  │  │ receipts  │  │  History  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   SYNCHRONOUS • DETERMINISTIC • NO NETWORK • NO DATABASE        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Catalog loader and the read-only [`ProductCatalog`]
//! - [`cart`] - The mutable [`Cart`] of price-snapshotted [`CartLine`]s
//! - [`billing`] - [`generate_bill`] and the immutable [`Bill`]
//! - [`history`] - Append-only [`OrderHistory`] of rendered bills
//! - [`money`] - [`Money`] value type (full precision, two-decimal Display)
//! - [`error`] - Typed domain errors
//!
//! ## Design Principles
//!
//! 1. **Dependency injection**: the catalog is an explicit value passed to
//!    cart operations, never hidden global state
//! 2. **Snapshots at the seams**: cart lines freeze price/image at add time;
//!    accessors return defensive copies
//! 3. **Explicit errors**: every validation failure is a typed enum variant
//!    with a stable, user-facing message
//! 4. **Single writer**: one POS session at a time; every call returns or
//!    fails synchronously, so there is no locking discipline to get wrong
//!
//! ## Example Usage
//!
//! ```rust
//! use cafepos_core::{generate_bill, Cart, Money, OrderHistory, ProductCatalog};
//!
//! let catalog = ProductCatalog::bundled().unwrap();
//! let mut cart = Cart::new();
//! let mut history = OrderHistory::new();
//!
//! cart.add_item(&catalog, "Espresso", 2).unwrap();
//! cart.add_item(&catalog, "Latte", 1).unwrap();
//! assert_eq!(cart.subtotal().to_string(), "$11.00");
//!
//! let bill = generate_bill(&mut cart, Money::new(20.0), 10.0).unwrap();
//! assert_eq!(bill.change.to_string(), "$10.10");
//! assert!(cart.is_empty());
//!
//! // Logging the bill is the caller's call, not the engine's.
//! history.append(bill.text);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod history;
pub mod money;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cafepos_core::Cart` instead of
// `use cafepos_core::cart::Cart`

pub use billing::{generate_bill, parse_discount_percentage, Bill};
pub use cart::{Cart, CartLine};
pub use catalog::{Product, ProductCatalog};
pub use error::{CatalogError, CoreError, CoreResult};
pub use history::OrderHistory;
pub use money::Money;
