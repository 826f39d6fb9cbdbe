//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The payment breakdown is never rounded internally:                    │
//! │    tax = subtotal × 0.08                                               │
//! │    $10.99 × 0.08 = $0.8792 (kept exactly, shown as $0.88)              │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                            │
//! │    Base-10 arithmetic, so 20.00 × 0.08 is exactly 1.60                 │
//! │    and total == subtotal + fee + tax holds with `==`                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bistro_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                 // $21.98
//! let total = price + Money::from_cents(500); // $15.99
//! assert_eq!(doubled.to_string(), "$21.98");
//! assert_eq!(total.to_string(), "$15.99");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8% (the storefront's sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate as a fraction (800 bps → 0.08).
    #[inline]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in dollars, held as an exact decimal.
///
/// ## Design Decisions
/// - **Decimal, not cents**: tax on a subtotal produces sub-cent amounts
///   that must survive untouched until display
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
/// - **Serialized as a string** (`"25.59"`) so no precision is lost on the wire
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Food.price ──┬──► CartItem.price × quantity ──► Payment.subtotal       │
/// │               │                                                         │
/// │               └──► SavedItem.price (display only)                       │
/// │                                                                         │
/// │  Payment.subtotal ──► tax (× 8%) ──► Payment.total (+ $3.99 fee)       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.to_string(), "$10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Wraps an existing decimal amount (in dollars).
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact amount in dollars.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Calculates tax at the given rate, without rounding.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::{Money, TaxRate};
    ///
    /// let subtotal = Money::from_cents(1099); // $10.99
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(800));
    ///
    /// // $10.99 × 8% = $0.8792, kept exactly
    /// assert_eq!(tax.amount().to_string(), "0.879200");
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        Money(self.0 * rate.as_decimal())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total, Money::from_cents(897)); // $8.97
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Rounds to whole cents, half away from zero (how prices are shown).
    pub fn round_to_cents(&self) -> Self {
        Money(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Lossy conversion for tolerance checks and charting.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Displays money rounded to cents, e.g. `$25.59`.
///
/// ## Note
/// Rounding happens here and nowhere else.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_to_cents().0;
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{}${:.2}", sign, rounded.abs())
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

/// Multiplication by a quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
