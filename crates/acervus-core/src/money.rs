//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A sales report sums price × quantity over every invoice, so float     │
//! │  drift would show up in the grand total.                                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "45.00" is parsed straight into 4500 cents, never through f64       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Text Form
//! `Money` displays as plain decimal text with two fractional digits
//! (`4500` cents → `45.00`). The catalog file stores prices in exactly this
//! form, and [`FromStr`] accepts it back, so the codec round-trips prices.
//!
//! ## Usage
//! ```rust
//! use acervus_core::money::Money;
//!
//! let price: Money = "45".parse().unwrap();
//! assert_eq!(price.cents(), 4500);
//!
//! let total = price.checked_multiply_quantity(20).unwrap();
//! assert_eq!(total.to_string(), "900.00");
//! assert_eq!(total.display_with("PESOS"), "900.00 PESOS");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseMoneyError;

/// Number of fractional digits stored.
const FRACTION_DIGITS: usize = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values exist only transiently; validation
///   rejects them as prices
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// CatalogEntry.price ──┬──► sell() total = price × quantity
///                      │
///                      └──► sales_report() line totals ──► report total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use acervus_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
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

    /// Multiplies money by a quantity, returning `None` on overflow.
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Rice 45.00
    /// Quantity: 20
    ///      │
    ///      ▼
    /// checked_multiply_quantity(20) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Sale total: 900.00
    /// ```
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Adds two values, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Formats the amount followed by a currency label, e.g. `900.00 PESOS`.
    ///
    /// An empty label yields the bare amount.
    pub fn display_with(&self, currency: &str) -> String {
        if currency.is_empty() {
            self.to_string()
        } else {
            format!("{} {}", self, currency)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal text with two fractional digits; also the file form.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
    }
}

/// Parses decimal text such as `45`, `45.5`, `45.00`, `.75` or `-3.20`.
///
/// ## Rules
/// - Optional leading `-`, then ASCII digits with at most one `.`
/// - At most two fractional digits (no rounding is ever applied)
/// - No exponent, no grouping separators, no surrounding whitespace
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(ParseMoneyError::InvalidDigit);
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError::InvalidDigit);
        }
        if fraction.len() > FRACTION_DIGITS {
            return Err(ParseMoneyError::TooPrecise);
        }

        let mut cents: i128 = 0;
        for digit in whole.bytes() {
            cents = cents * 10 + i128::from(digit - b'0');
            if cents > i128::from(i64::MAX) + 1 {
                return Err(ParseMoneyError::OutOfRange);
            }
        }
        // Pad the fraction to exactly two digits: "5" is fifty cents.
        let mut fraction_digits = fraction.bytes();
        for _ in 0..FRACTION_DIGITS {
            let digit = fraction_digits.next().map_or(0, |d| d - b'0');
            cents = cents * 10 + i128::from(digit);
        }

        let signed = if negative { -cents } else { cents };
        i64::try_from(signed)
            .map(Money)
            .map_err(|_| ParseMoneyError::OutOfRange)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(7).to_string(), "0.07");
    }

    #[test]
    fn test_display_with_currency() {
        let total = Money::from_cents(90000);
        assert_eq!(total.display_with("PESOS"), "900.00 PESOS");
        assert_eq!(total.display_with(""), "900.00");
    }

    #[test]
    fn test_parse_accepted_forms() {
        assert_eq!("45".parse::<Money>().unwrap().cents(), 4500);
        assert_eq!("45.00".parse::<Money>().unwrap().cents(), 4500);
        assert_eq!("45.5".parse::<Money>().unwrap().cents(), 4550);
        assert_eq!("45.".parse::<Money>().unwrap().cents(), 4500);
        assert_eq!(".75".parse::<Money>().unwrap().cents(), 75);
        assert_eq!("-3.20".parse::<Money>().unwrap().cents(), -320);
        assert_eq!("0".parse::<Money>().unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_rejected_forms() {
        assert_eq!("".parse::<Money>(), Err(ParseMoneyError::Empty));
        assert_eq!("abc".parse::<Money>(), Err(ParseMoneyError::InvalidDigit));
        assert_eq!("1e3".parse::<Money>(), Err(ParseMoneyError::InvalidDigit));
        assert_eq!(" 45".parse::<Money>(), Err(ParseMoneyError::InvalidDigit));
        assert_eq!("1.2.3".parse::<Money>(), Err(ParseMoneyError::InvalidDigit));
        assert_eq!(".".parse::<Money>(), Err(ParseMoneyError::InvalidDigit));
        assert_eq!("-".parse::<Money>(), Err(ParseMoneyError::InvalidDigit));
        assert_eq!("+5".parse::<Money>(), Err(ParseMoneyError::InvalidDigit));
        assert_eq!("1.005".parse::<Money>(), Err(ParseMoneyError::TooPrecise));
        assert_eq!(
            "99999999999999999999".parse::<Money>(),
            Err(ParseMoneyError::OutOfRange)
        );
    }

    #[test]
    fn test_display_parses_back() {
        for cents in [0, 1, 99, 100, 4500, -550, i64::MAX, i64::MIN] {
            let money = Money::from_cents(cents);
            assert_eq!(money.to_string().parse::<Money>().unwrap(), money);
        }
    }

    #[test]
    fn test_checked_arithmetic() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.checked_multiply_quantity(3).unwrap().cents(), 897);
        assert!(Money::from_cents(i64::MAX).checked_multiply_quantity(2).is_none());
        assert!(Money::from_cents(i64::MAX)
            .checked_add(Money::from_cents(1))
            .is_none());
    }

    #[test]
    fn test_checked_add_accumulates() {
        let total = [100, 250, 50]
            .into_iter()
            .map(Money::from_cents)
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m));
        assert_eq!(total, Some(Money::from_cents(400)));

        let overflow = [i64::MAX, 1]
            .into_iter()
            .map(Money::from_cents)
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m));
        assert_eq!(overflow, None);
    }
}
