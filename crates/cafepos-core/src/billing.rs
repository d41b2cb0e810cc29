//! # Billing Engine
//!
//! Turns the in-progress cart into a finalized [`Bill`].
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      generate_bill()                                    │
//! │                                                                         │
//! │  1. cart non-empty?            ── no ──► EmptyCart                     │
//! │  2. discount in [0, 100]?      ── no ──► InvalidDiscount               │
//! │  3. subtotal, discount amount, final total (full precision)            │
//! │  4. payment ≥ final total?     ── no ──► InsufficientPayment           │
//! │  5. render receipt text (two-decimal rounding happens HERE)            │
//! │  6. clear the cart                                                      │
//! │  7. return Bill (caller may append bill.text to OrderHistory)          │
//! │                                                                         │
//! │  Checks run in this exact order so error messages are deterministic.   │
//! │  A failing check leaves the cart untouched.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::info;
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{Cart, CartLine};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Horizontal rule between receipt sections.
const RULE: &str = "------------------------------------------------";

/// Closing rule at the bottom of the receipt.
const CLOSING_RULE: &str = "================================================";

// =============================================================================
// Bill
// =============================================================================

/// The computed, immutable result of finalizing a cart.
///
/// Carries both the figures (for the UI to display or a caller to inspect)
/// and the rendered `text` (for dialogs, printing, and the order history).
/// The id/timestamp identify the transaction; they do not appear in `text`,
/// which keeps the receipt layout byte-compatible for callers that parse it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Bill {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// When the bill was generated.
    #[ts(as = "String")]
    pub generated_at: DateTime<Utc>,

    /// The cart lines at generation time, in add order.
    pub lines: Vec<CartLine>,

    /// Sum of line totals.
    pub subtotal: Money,

    /// Discount applied, in percent (0-100).
    pub discount_percentage: f64,

    /// `subtotal × discount_percentage / 100`.
    pub discount_amount: Money,

    /// `subtotal − discount_amount`.
    pub final_total: Money,

    /// Amount tendered by the customer.
    pub payment: Money,

    /// `payment − final_total`. Never negative: payment was validated.
    pub change: Money,

    /// The rendered receipt.
    pub text: String,
}

// =============================================================================
// Bill Generation
// =============================================================================

/// Finalizes the cart into a [`Bill`], clearing the cart on success.
///
/// ## Preconditions (checked in order; first failure wins)
/// 1. Cart is non-empty, else [`CoreError::EmptyCart`]
/// 2. `discount_percentage` in `[0, 100]`, else [`CoreError::InvalidDiscount`]
/// 3. `payment` covers the discounted total, else
///    [`CoreError::InsufficientPayment`] stating the required minimum
///
/// ## Side Effects
/// On success the cart is cleared; appending `bill.text` to the order
/// history is the caller's decision. On failure nothing is mutated.
///
/// ## Example
/// ```rust
/// use cafepos_core::{generate_bill, Cart, Money, ProductCatalog};
///
/// let catalog = ProductCatalog::bundled().unwrap();
/// let mut cart = Cart::new();
/// cart.add_item(&catalog, "Espresso", 2).unwrap();
///
/// let bill = generate_bill(&mut cart, Money::new(10.0), 0.0).unwrap();
/// assert!(cart.is_empty());
/// assert_eq!(bill.change, bill.payment - bill.final_total);
/// ```
pub fn generate_bill(
    cart: &mut Cart,
    payment: Money,
    discount_percentage: f64,
) -> CoreResult<Bill> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }
    if !(0.0..=100.0).contains(&discount_percentage) {
        return Err(CoreError::InvalidDiscount {
            requested: discount_percentage,
        });
    }

    let subtotal = cart.subtotal();
    let discount_amount = subtotal.fraction(discount_percentage / 100.0);
    let final_total = subtotal - discount_amount;

    if payment < final_total {
        return Err(CoreError::InsufficientPayment {
            required: final_total,
            tendered: payment,
        });
    }

    let change = payment - final_total;
    let lines = cart.items();
    let text = render_receipt(
        cart.lines(),
        subtotal,
        discount_percentage,
        discount_amount,
        final_total,
        payment,
        change,
    );

    cart.clear();

    info!(
        lines = lines.len(),
        subtotal = %subtotal,
        final_total = %final_total,
        "bill generated"
    );

    Ok(Bill {
        id: Uuid::new_v4().to_string(),
        generated_at: Utc::now(),
        lines,
        subtotal,
        discount_percentage,
        discount_amount,
        final_total,
        payment,
        change,
        text,
    })
}

/// Renders the receipt text.
///
/// Layout is byte-for-byte stable: header, column row, rule, one row per
/// line in cart order, rule, subtotal, discount rows only when the discount
/// is non-zero, final total, payment, change, closing rule (no trailing
/// newline). Column widths follow the original register tape.
fn render_receipt(
    lines: &[CartLine],
    subtotal: Money,
    discount_percentage: f64,
    discount_amount: Money,
    final_total: Money,
    payment: Money,
    change: Money,
) -> String {
    let mut bill = String::new();
    bill.push_str("               ===== Cafe POS Bill =====\n");
    let _ = writeln!(bill, "{:<20} {:<10} {:<10} {:<10}", "Item", "Qty", "Price", "Total");
    bill.push_str(RULE);
    bill.push('\n');
    for line in lines {
        let _ = writeln!(
            bill,
            "{:<20} {:<10} ${:<9.2} ${:<9.2}",
            line.name,
            line.quantity,
            line.unit_price.amount(),
            line.line_total().amount()
        );
    }
    bill.push_str(RULE);
    bill.push('\n');
    let _ = writeln!(bill, "{:<20} ${:<9.2}", "Subtotal:", subtotal.amount());
    if discount_percentage > 0.0 {
        let _ = writeln!(bill, "{:<20} {:<9.2}%", "Discount:", discount_percentage);
        let _ = writeln!(
            bill,
            "{:<20} ${:<9.2}",
            "Discount Amount:",
            discount_amount.amount()
        );
    }
    let _ = writeln!(bill, "{:<20} ${:<9.2}", "Final Total:", final_total.amount());
    let _ = writeln!(bill, "{:<20} ${:<9.2}", "Payment:", payment.amount());
    let _ = writeln!(bill, "{:<20} ${:<9.2}", "Change:", change.amount());
    bill.push_str(CLOSING_RULE);
    bill
}

// =============================================================================
// Discount Input Parsing
// =============================================================================

/// Parses a discount percentage typed by the cashier.
///
/// Permissive on purpose: a blank or unparseable field means "no discount"
/// (0%), not an error. This mirrors the register's observed behavior and is
/// a documented default, not a parsing quirk. The result is NOT range
/// checked here; [`generate_bill`] still rejects values outside `[0, 100]`.
pub fn parse_discount_percentage(input: &str) -> f64 {
    let input = input.trim();
    if input.is_empty() {
        return 0.0;
    }
    input.parse::<f64>().unwrap_or(0.0)
}

// =============================================================================
// Unit Tests
// =============================================================================
