//! # Money Module
//!
//! Provides the `Money` type for handling monetary values.
//!
//! ## Rounding Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FULL PRECISION INSIDE, TWO DECIMALS OUTSIDE                            │
//! │                                                                         │
//! │  Internal arithmetic keeps full f64 precision:                          │
//! │    subtotal ──► discount amount ──► final total ──► change              │
//! │                                                                         │
//! │  Rounding to two decimal places happens exactly once, at Display        │
//! │  time. Rounding intermediate figures would let a one-cent error         │
//! │  compound across the discount-then-change chain.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cafepos_core::money::Money;
//!
//! let price = Money::new(3.50);
//! let line_total = price * 2;
//! assert_eq!(line_total.to_string(), "$7.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in major currency units (dollars).
///
/// ## Design Decisions
/// - **f64 inside**: the billing contract specifies full-precision decimal
///   arithmetic with rounding only at display time
/// - **Single field tuple struct**: zero-cost abstraction over f64
/// - **`#[serde(transparent)]`**: serializes as a bare JSON number, so the
///   catalog source writes `"price": 3.5` rather than a nested object
///
/// `Eq`/`Ord`/`Hash` are deliberately absent (f64 inside); comparisons go
/// through `PartialOrd`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(f64);

impl Money {
    /// Creates a Money value from an amount in major units.
    ///
    /// ## Example
    /// ```rust
    /// use cafepos_core::money::Money;
    ///
    /// let price = Money::new(10.99);
    /// assert_eq!(price.amount(), 10.99);
    /// ```
    #[inline]
    pub const fn new(amount: f64) -> Self {
        Money(amount)
    }

    /// Returns the raw, unrounded amount.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Checks if the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Returns the given fraction of this amount, at full precision.
    ///
    /// Used for discount math: `subtotal.fraction(10.0 / 100.0)` is the
    /// discount amount for a 10% discount.
    ///
    /// ## Example
    /// ```rust
    /// use cafepos_core::money::Money;
    ///
    /// let subtotal = Money::new(11.0);
    /// let discount = subtotal.fraction(0.10);
    /// assert_eq!(discount.to_string(), "$1.10");
    /// ```
    #[inline]
    pub fn fraction(&self, factor: f64) -> Money {
        Money(self.0 * factor)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display rounds to exactly two decimal places: `$3.50`, `-$0.25`.
///
/// This is the ONLY place monetary rounding happens; receipts and error
/// messages both format through it.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0.0 { "-" } else { "" };
        write!(f, "{}${:.2}", sign, self.0.abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by quantity (for line totals).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty as f64)
    }
}

/// Summing an iterator of Money values (for cart subtotals).
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_amount() {
        let money = Money::new(10.99);
        assert_eq!(money.amount(), 10.99);
    }

    #[test]
    fn test_display_rounds_to_two_decimals() {
        assert_eq!(Money::new(10.99).to_string(), "$10.99");
        assert_eq!(Money::new(5.0).to_string(), "$5.00");
        assert_eq!(Money::new(-5.5).to_string(), "-$5.50");
        assert_eq!(Money::new(0.0).to_string(), "$0.00");
        assert_eq!(Money::new(3.456).to_string(), "$3.46");
    }

    #[test]
    fn test_display_absorbs_float_noise() {
        // 11.0 - 1.1000000000000001 = 9.899999999999999 must still render
        // as the cashier-facing "$9.90".
        let final_total = Money::new(11.0) - Money::new(11.0).fraction(0.10);
        assert_eq!(final_total.to_string(), "$9.90");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(10.0);
        let b = Money::new(5.0);

        assert_eq!((a + b).amount(), 15.0);
        assert_eq!((a - b).amount(), 5.0);
        assert_eq!((a * 3).amount(), 30.0);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.amount(), 15.0);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::new(6.0), Money::new(5.0)].into_iter().sum();
        assert_eq!(total.amount(), 11.0);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_fraction() {
        let subtotal = Money::new(11.0);
        let discount = subtotal.fraction(10.0 / 100.0);
        assert_eq!(discount.to_string(), "$1.10");
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::new(-0.01).is_negative());
        assert!(!Money::new(0.01).is_negative());
    }
}
