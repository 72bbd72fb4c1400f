//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, plus the
//! lenient price sanitiser used at the catalog boundary.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing 0.1 + 0.2 in floating point = 0.30000000000000004             │
//! │                                                                         │
//! │  A basket of 40 items at £0.10 accumulated as floats drifts away       │
//! │  from £4.00 one ULP at a time.                                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (pence)                             │
//! │    Catalog price "1.20" ──► 120 pence, exactly once, at the boundary   │
//! │    Every sum after that is exact integer arithmetic                    │
//! │    Two decimal places appear only when the amount is displayed         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocery_core::money::{parse_price, Money};
//!
//! let price = Money::from_minor(250);       // £2.50
//! let line = price.multiply_quantity(3);    // £7.50
//! assert_eq!(line.minor(), 750);
//!
//! // Currency-formatted catalog strings are sanitised, never trusted
//! assert_eq!(parse_price("£1.20").minor(), 120);
//! assert_eq!(parse_price("n/a").minor(), 0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Number of minor units in one major unit (pence per pound).
pub const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (pence).
///
/// ## Design Decisions
/// - **i64 (signed)**: totals are computed as `subtotal - discount`, so the
///   type must be closed under subtraction
/// - **Single field tuple struct**: zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Product.price ──┬──► CartLine.line_total ──► Checkout.subtotal         │
/// │                  │                                     │                │
/// │  FreeItem.price ─┴──────────────────────────► Checkout.discount         │
/// │                                                        │                │
/// │                                          Checkout.total = sub - disc    │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (pence).
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::money::Money;
    ///
    /// let price = Money::from_minor(1099); // £10.99
    /// assert_eq!(price.minor(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -£5.50, not -£4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * MINOR_PER_MAJOR - minor)
        } else {
            Money(major * MINOR_PER_MAJOR + minor)
        }
    }

    /// Converts a decimal amount (as delivered by a JSON catalog) to Money.
    ///
    /// This is the single place where a fractional amount is quantised to
    /// minor units; halves round away from zero. Non-finite input is zero.
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(2.5).minor(), 250);
    /// assert_eq!(Money::from_decimal(0.335).minor(), 34);
    /// assert_eq!(Money::from_decimal(f64::NAN).minor(), 0);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money::zero();
        }
        // Going through the shortest decimal representation avoids
        // 0.335 * 100 = 33.4999... style artefacts.
        parse_decimal(&amount.abs().to_string())
            .map(|m| if amount < 0.0 { Money(-m.0) } else { m })
            .unwrap_or_default()
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (pounds) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
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

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(299);
    /// assert_eq!(unit_price.multiply_quantity(3).minor(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

// =============================================================================
// Price Sanitising
// =============================================================================

/// Extracts a price from a currency-formatted string.
///
/// ## Rules
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  "£1,299.50"                                                            │
/// │       │  drop everything that is not a digit or '.'                     │
/// │       ▼                                                                 │
/// │  "1299.50"                                                              │
/// │       │  parse the longest leading decimal ("1.2.3" → "1.2")            │
/// │       ▼                                                                 │
/// │  129950 pence          nothing parseable → 0                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Never fails: a malformed price degrades to zero.
pub fn parse_price(raw: &str) -> Money {
    let numeric: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    parse_decimal(&numeric).unwrap_or_default()
}

/// Parses the longest leading `digits[.digits]` prefix into minor units.
///
/// Returns `None` when no digit is present at all.
fn parse_decimal(s: &str) -> Option<Money> {
    let mut parts = s.splitn(3, '.');
    let whole = parts.next().unwrap_or_default();
    let frac = parts.next().unwrap_or_default();

    let whole: String = whole.chars().take_while(|c| c.is_ascii_digit()).collect();
    let frac: String = frac.chars().take_while(|c| c.is_ascii_digit()).collect();

    if whole.is_empty() && frac.is_empty() {
        return None;
    }

    let major: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().ok()?
    };

    let mut digits = frac.bytes().map(|b| i64::from(b - b'0'));
    let tenths = digits.next().unwrap_or(0);
    let hundredths = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|d| d >= 5);

    let minor = major
        .checked_mul(MINOR_PER_MAJOR)?
        .checked_add(tenths * 10 + hundredths + i64::from(round_up))?;

    Some(Money(minor))
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money with two decimals and no currency symbol.
///
/// ## Note
/// The storefront adds its configured currency symbol on top of this.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// Operators saturate at the i64 bounds; catalog prices are unbounded.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(1099);
        assert_eq!(money.minor(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).minor(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).minor(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(1099).to_string(), "10.99");
        assert_eq!(Money::from_minor(500).to_string(), "5.00");
        assert_eq!(Money::from_minor(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((a * 3u32).minor(), 3000);

        let total: Money = [a, b, b].iter().sum();
        assert_eq!(total.minor(), 2000);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = parse_price("£90000000000000000");
        assert_eq!(huge.minor(), 9_000_000_000_000_000_000);

        assert_eq!(huge.multiply_quantity(2).minor(), i64::MAX);
        assert_eq!((huge + huge).minor(), i64::MAX);
        assert_eq!((Money::from_minor(i64::MIN) - huge).minor(), i64::MIN);

        let mut total = huge;
        total += huge;
        assert_eq!(total.minor(), i64::MAX);

        let sum: Money = [huge, huge, huge].iter().sum();
        assert_eq!(sum.minor(), i64::MAX);
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(Money::from_decimal(1.0).minor(), 100);
        assert_eq!(Money::from_decimal(2.5).minor(), 250);
        assert_eq!(Money::from_decimal(0.1).minor(), 10);
        assert_eq!(Money::from_decimal(0.335).minor(), 34);
        assert_eq!(Money::from_decimal(-1.25).minor(), -125);
        assert_eq!(Money::from_decimal(f64::INFINITY).minor(), 0);
    }

    #[test]
    fn test_parse_price_plain_and_formatted() {
        assert_eq!(parse_price("1.20").minor(), 120);
        assert_eq!(parse_price("£1.20").minor(), 120);
        assert_eq!(parse_price("£1,299.50").minor(), 129950);
        assert_eq!(parse_price("  3 GBP").minor(), 300);
        assert_eq!(parse_price(".5").minor(), 50);
    }

    #[test]
    fn test_parse_price_malformed_defaults_to_zero() {
        assert_eq!(parse_price("").minor(), 0);
        assert_eq!(parse_price("abc").minor(), 0);
        assert_eq!(parse_price("£.").minor(), 0);
    }

    #[test]
    fn test_parse_price_takes_leading_decimal() {
        // Everything after a second decimal point is ignored.
        assert_eq!(parse_price("1.2.3").minor(), 120);
        assert_eq!(parse_price("0.999").minor(), 100);
    }

    /// Forty items at £0.10 must add up to exactly £4.00.
    #[test]
    fn test_accumulation_is_exact() {
        let ten_pence = Money::from_decimal(0.1);
        let total: Money = std::iter::repeat(ten_pence).take(40).sum();
        assert_eq!(total.minor(), 400);
    }
}
