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
//! │  Summing order subtotals all day long accumulates that drift, and the  │
//! │  net profit figure ends the day a few cents off.                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    $7.50 is 750 cents. Addition and multiplication by a quantity are   │
//! │    exact. Only display converts back to dollars.                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rpm_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(750); // $7.50
//!
//! // Arithmetic operations
//! let line_total = price * 2;                    // $15.00
//! let with_side = line_total + Money::from_cents(300); // $18.00
//!
//! // Parse user input ("7", "7.5", "7.50" all work)
//! let parsed: Money = "7.50".parse().unwrap();
//! assert_eq!(parsed, price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative values are representable; the catalog
///   deliberately accepts negative prices/costs as entered (a documented gap
///   carried over from the original behavior)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; serializes as a bare integer
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  MenuItem.price_cents ──► OrderLine (frozen) ──► Order.subtotal_cents   │
/// │  MenuItem.cost_cents  ──► OrderLine (frozen) ──► Order.cogs_cents       │
/// │  Expense.amount_cents ──────────────────────────► net profit            │
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
    /// use rpm_core::money::Money;
    ///
    /// let price = Money::from_cents(750); // Represents $7.50
    /// assert_eq!(price.cents(), 750);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
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

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99, absolute value).
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

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use rpm_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(300); // $3.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 600); // $6.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Renders the value as a plain two-decimal string, without a currency
    /// symbol: `750` → `"7.50"`, `-225` → `"-2.25"`.
    ///
    /// Used for CSV export, where figures must parse back as numbers.
    pub fn decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error parsing a money amount from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    /// Input is empty or contains non-numeric characters.
    #[error("invalid amount: '{0}'")]
    Invalid(String),

    /// More than two decimal places were supplied.
    #[error("amounts use at most two decimal places: '{0}'")]
    TooPrecise(String),
}

/// Parses amounts the way they are typed at the prompt.
///
/// Accepted forms: `7`, `7.5`, `7.50`, `-2.25`, `$1.50`.
/// Rejected: empty input, stray characters, three or more decimal places.
///
/// A leading minus is accepted on purpose: the catalog does not validate
/// price/cost signs, matching the permissive input handling this tool has
/// always had.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (major, minor) = match rest.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (rest, ""),
        };

        if major.is_empty() && minor.is_empty() {
            return Err(ParseMoneyError::Invalid(s.to_string()));
        }
        if !major.bytes().all(|b| b.is_ascii_digit()) || !minor.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ParseMoneyError::Invalid(s.to_string()));
        }
        if minor.len() > 2 {
            return Err(ParseMoneyError::TooPrecise(s.to_string()));
        }

        let dollars: i64 = if major.is_empty() {
            0
        } else {
            major
                .parse()
                .map_err(|_| ParseMoneyError::Invalid(s.to_string()))?
        };
        let cents: i64 = match minor.len() {
            0 => 0,
            // "7.5" means 50 cents, not 5
            1 => {
                minor
                    .parse::<i64>()
                    .map_err(|_| ParseMoneyError::Invalid(s.to_string()))?
                    * 10
            }
            _ => minor
                .parse()
                .map_err(|_| ParseMoneyError::Invalid(s.to_string()))?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(|| ParseMoneyError::Invalid(s.to_string()))?;

        Ok(if negative {
            Money(-total)
        } else {
            Money(total)
        })
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format ("$7.50").
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

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over iterators of Money (ledger reductions).
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
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(7, 50);
        assert_eq!(money.cents(), 750);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(750).decimal_string(), "7.50");
        assert_eq!(Money::from_cents(60).decimal_string(), "0.60");
        assert_eq!(Money::from_cents(-225).decimal_string(), "-2.25");
        assert_eq!(Money::zero().decimal_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!(a.multiply_quantity(2).cents(), 2000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [750, 300, 150]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 1200);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!("7".parse::<Money>().unwrap().cents(), 700);
        assert_eq!("7.5".parse::<Money>().unwrap().cents(), 750);
        assert_eq!("7.50".parse::<Money>().unwrap().cents(), 750);
        assert_eq!("0.60".parse::<Money>().unwrap().cents(), 60);
        assert_eq!(".75".parse::<Money>().unwrap().cents(), 75);
        assert_eq!("$1.50".parse::<Money>().unwrap().cents(), 150);
    }

    #[test]
    fn test_parse_negative() {
        // Negative amounts stay parseable: the catalog accepts them as-is.
        assert_eq!("-2.25".parse::<Money>().unwrap().cents(), -225);
        assert_eq!("-3".parse::<Money>().unwrap().cents(), -300);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "abc".parse::<Money>(),
            Err(ParseMoneyError::Invalid(_))
        ));
        assert!(matches!(
            "".parse::<Money>(),
            Err(ParseMoneyError::Invalid(_))
        ));
        assert!(matches!(
            "1.2.3".parse::<Money>(),
            Err(ParseMoneyError::Invalid(_))
        ));
        assert!(matches!(
            "7.505".parse::<Money>(),
            Err(ParseMoneyError::TooPrecise(_))
        ));
    }

    #[test]
    fn test_serde_is_transparent() {
        // Newtype structs serialize as the bare inner integer.
        let json = serde_json::to_string(&Money::from_cents(750)).unwrap();
        assert_eq!(json, "750");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cents(), 750);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().cents(), 100);
    }
}
