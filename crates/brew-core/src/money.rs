//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A latte priced with floats:                                            │
//! │    4.50 + 0.75 surcharge, ×0.85 discount = 4.462499999...               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    450 + 75 = 525 cents, discount computed in integer math,             │
//! │    rounded half up exactly once → 446 cents ($4.46)                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use brew_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(450); // $4.50
//!
//! // Arithmetic operations
//! let with_surcharge = price + Money::from_cents(75); // $5.25
//!
//! // NEVER do this:
//! // let bad = Money::from_float(4.50); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Room for future refunds/adjustments without a type change
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Catalog base price ──► + size surcharge ──► + option surcharges       │
/// │                                │                                        │
/// │                                ▼                                        │
/// │                      happy-hour discount (×0.85, rounded)              │
/// │                                │                                        │
/// │                                ▼                                        │
/// │              CompletedOrder.price ──► ShopState.daily_sales            │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use brew_core::money::Money;
    ///
    /// let price = Money::from_cents(350); // Represents $3.50
    /// assert_eq!(price.cents(), 350);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The catalog, the processor, and the receipts all use cents.
    /// Only display formatting converts to dollars.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use brew_core::money::Money;
    ///
    /// let price = Money::from_cents(630);
    /// assert_eq!(price.dollars(), 6);
    /// ```
    ///
    /// For non-negative amounts this is the floor, which is exactly the
    /// loyalty-point rule: one point per whole dollar spent.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Rounding Convention: Round Half Up
    /// The discount amount is computed in integer math and rounded **half
    /// up** to the nearest cent: `(amount × bps + 5000) / 10000`. This is
    /// the single place in the system where rounding happens — list prices
    /// and surcharges are exact cents, and daily sales accumulate already-
    /// rounded prices.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1500 = 15%)
    ///
    /// ## Example
    /// ```rust
    /// use brew_core::money::Money;
    ///
    /// // Happy hour: $5.25 minus 15% = $4.4625 → rounds to $4.46
    /// let subtotal = Money::from_cents(525);
    /// let discounted = subtotal.apply_percentage_discount(1500);
    /// assert_eq!(discounted.cents(), 446);
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        // Use i128 to prevent overflow on large amounts
        // The +5000 term rounds the discount half up (5000/10000 = 0.5 cents)
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount_amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for receipts and debugging. No localization is attempted.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(630);
        assert_eq!(money.cents(), 630);
        assert_eq!(money.dollars(), 6);
        assert_eq!(money.cents_part(), 30);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(446)), "$4.46");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(450);
        let b = Money::from_cents(75);

        assert_eq!((a + b).cents(), 525);
        assert_eq!((a - b).cents(), 375);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 525);
    }

    #[test]
    fn test_happy_hour_discount() {
        // $5.25 minus 15% = $4.4625 → $4.46 (discount 78.75¢ rounds up to 79¢)
        let subtotal = Money::from_cents(525);
        let discounted = subtotal.apply_percentage_discount(1500);
        assert_eq!(discounted.cents(), 446);
    }

    /// Pins the rounding convention: a discount of exactly half a cent
    /// rounds UP, so the customer pays one cent less.
    #[test]
    fn test_discount_rounds_half_up() {
        // 30¢ × 15% = 4.5¢ discount → 5¢, price 25¢
        let amount = Money::from_cents(30);
        let discounted = amount.apply_percentage_discount(1500);
        assert_eq!(discounted.cents(), 25);
    }

    #[test]
    fn test_zero_discount_is_identity() {
        let amount = Money::from_cents(525);
        assert_eq!(amount.apply_percentage_discount(0), amount);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert_eq!(zero, Money::default());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
    }
}
