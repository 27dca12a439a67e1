//! # Money Module
//!
//! Provides the `Money` type for handling prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Averaging three prices:                                                │
//! │    100.00 / 3 = 33.33 (×3 = 99.99)  → Lost 0.01!                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Kopecks                                          │
//! │    10000 kopecks / 3 = 3333 kopecks (×3 = 9999 kopecks)                │
//! │    We KNOW we lost 1 kopeck, and handle it explicitly                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lavka_core::money::Money;
//!
//! // Create from kopecks (preferred)
//! let price = Money::from_kopecks(8_000_000); // 80000.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;
//! let total = price + Money::from_kopecks(150_000);
//!
//! // Catalog documents carry floats; convert through the checked path
//! let parsed = Money::try_from_rubles(80000.0).unwrap();
//! assert_eq!(parsed, price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a price in the smallest currency unit (kopecks).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for adjustments and deltas
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──┬──► Order.unit_price ──► Order.total                  │
/// │                  │                                                      │
/// │                  └──► Category.average_price / listings ("руб.")       │
/// │                                                                         │
/// │  EVERY price in the catalog flows through this type                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from kopecks (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use lavka_core::money::Money;
    ///
    /// let price = Money::from_kopecks(1099); // 10.99
    /// assert_eq!(price.kopecks(), 1099);
    /// ```
    #[inline]
    pub const fn from_kopecks(kopecks: i64) -> Self {
        Money(kopecks)
    }

    /// Creates a Money value from major and minor units (rubles and kopecks).
    ///
    /// ## Example
    /// ```rust
    /// use lavka_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // 10.99
    /// assert_eq!(price.kopecks(), 1099);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -5.50
    /// assert_eq!(negative.kopecks(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Converts a fractional ruble amount (as found in catalog documents)
    /// into Money, rounding to the nearest kopeck.
    ///
    /// This is the ONLY place floats enter the price domain. Everything past
    /// this boundary is integer kopecks.
    ///
    /// ## Example
    /// ```rust
    /// use lavka_core::money::Money;
    ///
    /// let price = Money::try_from_rubles(80000.0).unwrap();
    /// assert_eq!(price.kopecks(), 8_000_000);
    ///
    /// let precise = Money::try_from_rubles(10.995).unwrap();
    /// assert_eq!(precise.kopecks(), 1100);
    ///
    /// assert!(Money::try_from_rubles(f64::NAN).is_err());
    /// ```
    pub fn try_from_rubles(amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: "must be a finite number".to_string(),
            });
        }

        let kopecks = (amount * 100.0).round();
        if kopecks < i64::MIN as f64 || kopecks > i64::MAX as f64 {
            return Err(ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: "out of representable range".to_string(),
            });
        }

        Ok(Money(kopecks as i64))
    }

    /// Returns the value in kopecks (smallest currency unit).
    #[inline]
    pub const fn kopecks(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rubles) portion.
    ///
    /// ## Example
    /// ```rust
    /// use lavka_core::money::Money;
    ///
    /// let price = Money::from_kopecks(1099);
    /// assert_eq!(price.rubles(), 10);
    ///
    /// let negative = Money::from_kopecks(-550);
    /// assert_eq!(negative.rubles(), -5);
    /// ```
    #[inline]
    pub const fn rubles(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (kopecks) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use lavka_core::money::Money;
    ///
    /// let price = Money::from_kopecks(1099);
    /// assert_eq!(price.kopecks_part(), 99);
    ///
    /// let negative = Money::from_kopecks(-550);
    /// assert_eq!(negative.kopecks_part(), 50); // Absolute value
    /// ```
    #[inline]
    pub const fn kopecks_part(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
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

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use lavka_core::money::Money;
    ///
    /// let unit_price = Money::from_kopecks(8_000_000); // 80000.00
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.kopecks(), 24_000_000);    // 240000.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the bare decimal amount ("80000.00").
///
/// ## Note
/// Currency labels are applied by the rendering layer (`SummaryStyle`), so
/// the same value can read "80000.00 руб." in a listing and "80000.00" in a
/// plain field.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.rubles().abs(),
            self.kopecks_part()
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
