//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units (cents, kobo, ...)                   │
//! │    Every amount is a whole number of the smallest currency unit.       │
//! │    Where a percentage produces a fraction, a RoundingMode decides      │
//! │    explicitly which whole unit we land on.                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::{Money, RoundingMode};
//!
//! let subtotal = Money::from_minor(50_000);
//! let discount = subtotal.percentage(10, RoundingMode::Floor).unwrap();
//! assert_eq!(discount.minor(), 5_000);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: negative inputs stay representable so validation can
///   reject them instead of wrapping
/// - **Single field tuple struct**: zero-cost abstraction over i64, serialized
///   as the bare integer
/// - **Checked arithmetic only**: no `Add`/`Sub`/`Sum` impls, every
///   combination of amounts reports overflow as `None`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Zero.
    pub const ZERO: Money = Money(0);

    /// Creates a Money value from minor units.
    ///
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_minor(1099);
    /// assert_eq!(price.minor(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (e.g. whole dollars, naira).
    #[inline]
    pub const fn major_part(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checked addition. `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let line_total = Money::from_minor(5000).checked_mul_quantity(2);
    /// assert_eq!(line_total, Some(Money::from_minor(10000)));
    /// ```
    #[inline]
    pub fn checked_mul_quantity(self, qty: i64) -> Option<Money> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Clamps negative values to zero.
    #[inline]
    pub fn clamp_non_negative(self) -> Money {
        Money(self.0.max(0))
    }

    /// Takes `percent`% of this amount, rounding the fractional minor unit
    /// with `mode`.
    ///
    /// Uses i128 intermediates, so only the final result can overflow.
    ///
    /// ```rust
    /// use checkout_core::money::{Money, RoundingMode};
    ///
    /// let amount = Money::from_minor(999);
    /// // 999 × 15% = 149.85
    /// assert_eq!(amount.percentage(15, RoundingMode::Floor).unwrap().minor(), 149);
    /// assert_eq!(amount.percentage(15, RoundingMode::HalfUp).unwrap().minor(), 150);
    /// ```
    pub fn percentage(&self, percent: i64, mode: RoundingMode) -> Option<Money> {
        let numerator = self.0 as i128 * percent as i128;
        let rounded = mode.divide(numerator, 100);
        i64::try_from(rounded).ok().map(Money)
    }
}

// =============================================================================
// Rounding Mode
// =============================================================================

/// How a fractional minor unit is resolved to a whole one.
///
/// ## Examples (dividing by 100)
/// ```text
/// ┌──────────────┬─────────┬─────────┬─────────┬─────────┐
/// │  numerator   │  Floor  │ HalfUp  │HalfEven │ Ceiling │
/// ├──────────────┼─────────┼─────────┼─────────┼─────────┤
/// │  14_985      │   149   │   150   │   150   │   150   │
/// │  14_950      │   149   │   150   │   150   │   150   │
/// │  15_050      │   150   │   151   │   150   │   151   │
/// │  15_000      │   150   │   150   │   150   │   150   │
/// └──────────────┴─────────┴─────────┴─────────┴─────────┘
/// ```
///
/// Floor rounds toward negative infinity. For the non-negative amounts the
/// calculator accepts this is the same as truncation, so a customer is never
/// granted a fractional unit of discount that the rules did not award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round down (default).
    #[default]
    Floor,
    /// Round half away from zero: x.5 → x+1.
    HalfUp,
    /// Bankers rounding: x.5 → nearest even.
    HalfEven,
    /// Round up.
    Ceiling,
}

impl RoundingMode {
    /// All supported modes, in declaration order.
    pub const ALL: [RoundingMode; 4] = [
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfEven,
        RoundingMode::Ceiling,
    ];

    /// Divides `numerator` by a positive `denominator`, rounding the quotient.
    pub fn divide(self, numerator: i128, denominator: i128) -> i128 {
        debug_assert!(denominator > 0);

        let quotient = numerator.div_euclid(denominator);
        let remainder = numerator.rem_euclid(denominator);
        if remainder == 0 {
            return quotient;
        }

        // quotient is the floor, remainder in (0, denominator)
        match self {
            RoundingMode::Floor => quotient,
            RoundingMode::Ceiling => quotient + 1,
            RoundingMode::HalfUp => {
                let twice = remainder * 2;
                if twice > denominator || (twice == denominator && numerator >= 0) {
                    quotient + 1
                } else {
                    quotient
                }
            }
            RoundingMode::HalfEven => match (remainder * 2).cmp(&denominator) {
                std::cmp::Ordering::Greater => quotient + 1,
                std::cmp::Ordering::Less => quotient,
                std::cmp::Ordering::Equal if quotient % 2 == 0 => quotient,
                std::cmp::Ordering::Equal => quotient + 1,
            },
        }
    }

    /// The configuration name of this mode (`floor`, `half_up`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            RoundingMode::Floor => "floor",
            RoundingMode::HalfUp => "half_up",
            RoundingMode::HalfEven => "half_even",
            RoundingMode::Ceiling => "ceiling",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        RoundingMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownRoundingMode {
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Currency-agnostic display: `12345` → `123.45`.
///
/// ## Note
/// For logs and debugging. Symbols and localisation belong to the frontend.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.major_part().abs(),
            self.minor_part()
        )
    }
}

impl From<Money> for i64 {
    fn from(money: Money) -> Self {
        money.0
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
        assert_eq!(money.major_part(), 10);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(42500).to_string(), "425.00");
        assert_eq!(Money::from_minor(1099).to_string(), "10.99");
        assert_eq!(Money::from_minor(-550).to_string(), "-5.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!(a.checked_add(b), Some(Money::from_minor(1500)));
        assert_eq!(a.checked_mul_quantity(3), Some(Money::from_minor(3000)));

        assert_eq!(Money::from_minor(i64::MAX).checked_add(b), None);
        assert_eq!(Money::from_minor(i64::MAX).checked_mul_quantity(2), None);
    }

    #[test]
    fn test_percentage_exact() {
        let subtotal = Money::from_minor(50_000);
        for mode in RoundingMode::ALL {
            assert_eq!(subtotal.percentage(10, mode), Some(Money::from_minor(5_000)));
        }
    }

    #[test]
    fn test_percentage_does_not_overflow_in_intermediate() {
        // i64::MAX × 100 overflows i64 but not i128
        let amount = Money::from_minor(i64::MAX);
        assert_eq!(amount.percentage(100, RoundingMode::Floor), Some(amount));
    }

    #[test]
    fn test_rounding_modes() {
        // 14_985 / 100 = 149.85
        assert_eq!(RoundingMode::Floor.divide(14_985, 100), 149);
        assert_eq!(RoundingMode::HalfUp.divide(14_985, 100), 150);
        assert_eq!(RoundingMode::HalfEven.divide(14_985, 100), 150);
        assert_eq!(RoundingMode::Ceiling.divide(14_985, 100), 150);

        // 14_920 / 100 = 149.20
        assert_eq!(RoundingMode::HalfUp.divide(14_920, 100), 149);
        assert_eq!(RoundingMode::Ceiling.divide(14_920, 100), 150);
    }

    #[test]
    fn test_half_even_ties() {
        assert_eq!(RoundingMode::HalfEven.divide(250, 100), 2);
        assert_eq!(RoundingMode::HalfEven.divide(350, 100), 4);
        assert_eq!(RoundingMode::HalfUp.divide(250, 100), 3);
    }

    #[test]
    fn test_rounding_mode_parse() {
        assert_eq!("floor".parse::<RoundingMode>(), Ok(RoundingMode::Floor));
        assert_eq!("HALF-EVEN".parse::<RoundingMode>(), Ok(RoundingMode::HalfEven));
        assert_eq!(" ceiling ".parse::<RoundingMode>(), Ok(RoundingMode::Ceiling));

        let err = "banker".parse::<RoundingMode>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownRoundingMode {
                value: "banker".to_string()
            }
        );
        assert_eq!(err.field(), "rounding");
        assert_eq!(
            err.to_string(),
            "unknown rounding mode 'banker', expected one of: floor, half_up, half_even, ceiling"
        );
    }

    #[test]
    fn test_rounding_mode_serde_names_match_display() {
        for mode in RoundingMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{mode}\""));
        }
    }

    #[test]
    fn test_checked_add_reports_overflow_at_bounds() {
        let line_totals = [Money::from_minor(i64::MAX), Money::from_minor(1)];
        let total = line_totals.into_iter().try_fold(Money::ZERO, Money::checked_add);
        assert_eq!(total, None);

        assert_eq!(
            Money::from_minor(i64::MIN).checked_add(Money::from_minor(-1)),
            None
        );
        assert_eq!(Money::from_minor(i64::MIN).checked_mul_quantity(-1), None);
    }
}
