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
//! │  In a quoting tool that compounds a profit margin on top of a          │
//! │  difficulty multiplier, float drift shows up on real invoices:         │
//! │    R$ 25.00 × 2 × 1.3 × 1.2 can land on ...00000000004                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    2500 × 2 = 5000, ×13/10 = 6500, margin in basis points              │
//! │    Every intermediate value is an exact integer                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use orca_core::money::Money;
//!
//! // Create from cents (preferred)
//! let labor = Money::from_cents(2500); // R$ 25,00
//!
//! // Arithmetic operations
//! let doubled = labor * 2;                      // R$ 50,00
//! let total = labor + Money::from_cents(500);   // R$ 30,00
//!
//! // NEVER do this:
//! // let bad = Money::from_float(25.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::{Difficulty, MarginRate};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections and credits
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  ServiceCatalogEntry.labor_cents ──► LineItem.labor_line ──┐            │
/// │                                                            ▼            │
/// │  RateSettings.global_profit ──────────────► QuoteBreakdown totals       │
/// │  RateSettings.min_visit_fee_cents ─────────┘                            │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use orca_core::money::Money;
    ///
    /// let price = Money::from_cents(2500); // Represents R$ 25,00
    /// assert_eq!(price.cents(), 2500);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The store, calculations, and bindings all use cents.
    /// Only the UI converts to reais for display.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (reais and centavos).
    ///
    /// ## Example
    /// ```rust
    /// use orca_core::money::Money;
    ///
    /// let price = Money::from_reais(25, 50); // R$ 25,50
    /// assert_eq!(price.cents(), 2550);
    ///
    /// let credit = Money::from_reais(-5, 50); // -R$ 5,50
    /// assert_eq!(credit.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_reais(-5, 50)` = -R$ 5,50, not -R$ 4,50
    #[inline]
    pub const fn from_reais(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (reais) portion.
    ///
    /// ## Example
    /// ```rust
    /// use orca_core::money::Money;
    ///
    /// let price = Money::from_cents(2550);
    /// assert_eq!(price.reais(), 25);
    ///
    /// let credit = Money::from_cents(-550);
    /// assert_eq!(credit.reais(), -5);
    /// ```
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (centavos) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use orca_core::money::Money;
    ///
    /// let price = Money::from_cents(2550);
    /// assert_eq!(price.cents_part(), 50);
    ///
    /// let credit = Money::from_cents(-550);
    /// assert_eq!(credit.cents_part(), 50); // Absolute value
    /// ```
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Calculates the margin amount for a basis-point rate, rounded half-up.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`
    /// The +5000 provides rounding (5000/10000 = 0.5), so exact halves
    /// round away from zero for positive amounts.
    ///
    /// ## Example
    /// ```rust
    /// use orca_core::money::Money;
    /// use orca_core::types::MarginRate;
    ///
    /// let labor = Money::from_cents(6500);      // R$ 65,00
    /// let profit = MarginRate::from_bps(2000);  // 20%
    ///
    /// let margin = labor.margin(profit);
    /// // R$ 65,00 × 20% = R$ 13,00
    /// assert_eq!(margin.cents(), 1300);
    /// ```
    ///
    /// ## Quote Workflow
    /// ```text
    /// Labor subtotal: R$ 65,00
    ///      │
    ///      ▼
    /// margin(20%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Added to the materials figure: R$ 13,00
    /// ```
    pub fn margin(&self, rate: MarginRate) -> Money {
        // Use i128 to prevent overflow on large amounts
        // rate.bps() is basis points: 2000 = 20%
        // Formula: amount_cents * bps / 10000
        // With rounding: (amount_cents * bps + 5000) / 10000
        let margin_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(margin_cents as i64)
    }

    /// Scales money by a difficulty multiplier, rounded half-up.
    ///
    /// The four difficulty levels are exact tenths (×1.0, ×1.3, ×1.6, ×2.0),
    /// so the math stays in integers: `(amount * tenths + 5) / 10`.
    ///
    /// ## Example
    /// ```rust
    /// use orca_core::money::Money;
    /// use orca_core::types::Difficulty;
    ///
    /// let subtotal = Money::from_cents(5000); // R$ 50,00
    /// let scaled = subtotal.scale_by(Difficulty::Medium); // ×1.3
    /// assert_eq!(scaled.cents(), 6500); // R$ 65,00
    /// ```
    pub fn scale_by(&self, difficulty: Difficulty) -> Money {
        let scaled = (self.0 as i128 * difficulty.multiplier_tenths() as i128 + 5) / 10;
        Money::from_cents(scaled as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use orca_core::money::Money;
    ///
    /// let unit_labor = Money::from_cents(2500); // R$ 25,00
    /// let line_total = unit_labor.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 5000); // R$ 50,00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and log output. Use frontend formatting for actual
/// UI display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}R$ {},{:02}",
            sign,
            self.reais().abs(),
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

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
