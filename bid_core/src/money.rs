//! # Money Arithmetic
//!
//! All costs and prices are carried as an integer count of cents. Dollar
//! amounts only exist transiently, as the product of a quantity and a rate,
//! and are converted to cents immediately with [`to_minor_units`].
//!
//! ## Rounding
//!
//! Both conversions round half away from zero. Before that final rounding the
//! scaled value is snapped to a millionth of a cent, so a product that is a
//! half cent in exact arithmetic (e.g. `1.005 * 100`, stored as `100.4999…`)
//! lands on the half cent and rounds the same way every time.
//!
//! ## Range
//!
//! Converted amounts are limited to [`MAX_CENTS`] in magnitude. Anything larger
//! is rejected as invalid input, which keeps the sums of a bid's line items
//! well inside `i64`.
//!
//! ## Example
//!
//! ```rust
//! use bid_core::money::{apply_factor, to_minor_units, Money};
//!
//! let cost = to_minor_units(1545.0).unwrap();
//! assert_eq!(cost, Money::from_cents(154_500));
//!
//! let price = apply_factor(cost, 1.43).unwrap();
//! assert_eq!(price.cents(), 220_935);
//! ```

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Cents per dollar
pub const CENTS_PER_DOLLAR: f64 = 100.0;

/// Largest magnitude a converted amount may have, in cents ($10 trillion)
pub const MAX_CENTS: f64 = 1e15;

/// Resolution the scaled value is snapped to before rounding to whole cents
const SNAP_RESOLUTION: f64 = 1_000_000.0;

/// An amount of money in integer minor units (cents).
///
/// Serializes as a bare integer: `154500` is $1,545.00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero cents
    pub const ZERO: Money = Money(0);

    /// Create from a count of cents
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Count of cents
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Value in dollars, for display only. Never feed this back into arithmetic.
    pub fn dollars(self) -> f64 {
        self.0 as f64 / CENTS_PER_DOLLAR
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Round a dollar amount to the nearest cent (half away from zero).
///
/// Fails with [`CalcError::InvalidInput`] on NaN or infinity, or when the
/// result would exceed [`MAX_CENTS`].
pub fn to_minor_units(amount: f64) -> CalcResult<Money> {
    if !amount.is_finite() {
        return Err(CalcError::invalid_input(
            "amount",
            amount.to_string(),
            "Currency amount must be finite",
        ));
    }
    round_cents("amount", amount * CENTS_PER_DOLLAR).map(Money)
}

/// Multiply an amount of cents by `factor`, rounding to the nearest cent
/// with the same rule as [`to_minor_units`].
///
/// ```rust
/// use bid_core::money::{apply_factor, Money};
///
/// // 151.5 cents rounds up
/// assert_eq!(apply_factor(Money::from_cents(101), 1.5).unwrap().cents(), 152);
/// ```
pub fn apply_factor(amount: Money, factor: f64) -> CalcResult<Money> {
    if !factor.is_finite() {
        return Err(CalcError::invalid_input(
            "factor",
            factor.to_string(),
            "Multiplier must be finite",
        ));
    }
    round_cents("factor", amount.0 as f64 * factor).map(Money)
}

fn round_cents(field: &str, scaled: f64) -> CalcResult<i64> {
    if scaled.abs() > MAX_CENTS {
        return Err(CalcError::invalid_input(
            field,
            format!("{} cents", scaled),
            "Amount is outside the supported range",
        ));
    }
    let snapped = (scaled * SNAP_RESOLUTION).round() / SNAP_RESOLUTION;
    Ok(snapped.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_dollars() {
        assert_eq!(to_minor_units(750.0).unwrap(), Money::from_cents(75_000));
        assert_eq!(to_minor_units(0.0).unwrap(), Money::ZERO);
    }

    #[test]
    fn test_rounds_to_nearest_cent() {
        assert_eq!(to_minor_units(177.777_777_777_777_77).unwrap().cents(), 17_778);
        assert_eq!(to_minor_units(259.259_259_259_259_24).unwrap().cents(), 25_926);
        assert_eq!(to_minor_units(12.344).unwrap().cents(), 1_234);
    }

    #[test]
    fn test_half_cent_rounds_away_from_zero() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(to_minor_units(1.005).unwrap().cents(), 101);
        assert_eq!(to_minor_units(2.675).unwrap().cents(), 268);
        assert_eq!(to_minor_units(-1.005).unwrap().cents(), -101);
    }

    #[test]
    fn test_apply_factor_half_cent_boundary() {
        // 150 * 1.43 = 214.5 exactly in decimal, 214.49999999999997 in binary
        assert_eq!(apply_factor(Money::from_cents(150), 1.43).unwrap().cents(), 215);
        assert_eq!(apply_factor(Money::from_cents(50), 1.43).unwrap().cents(), 72);
        assert_eq!(apply_factor(Money::from_cents(101), 1.5).unwrap().cents(), 152);
    }

    #[test]
    fn test_apply_factor_markup() {
        assert_eq!(apply_factor(Money::from_cents(154_500), 1.43).unwrap().cents(), 220_935);
        assert_eq!(apply_factor(Money::from_cents(17_778), 1.43).unwrap().cents(), 25_423);
    }

    #[test]
    fn test_repeated_conversion_is_stable() {
        let first = to_minor_units(0.1 + 0.2).unwrap();
        for _ in 0..10 {
            assert_eq!(to_minor_units(0.1 + 0.2).unwrap(), first);
        }
        assert_eq!(first.cents(), 30);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(to_minor_units(f64::NAN).is_err());
        assert!(to_minor_units(f64::INFINITY).is_err());
        assert!(apply_factor(Money::from_cents(100), f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        // $10 trillion is the largest convertible amount
        assert_eq!(to_minor_units(1e13).unwrap().cents(), 1_000_000_000_000_000);
        assert_eq!(to_minor_units(-1e13).unwrap().cents(), -1_000_000_000_000_000);

        assert_eq!(to_minor_units(1e14).unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(to_minor_units(1e300).unwrap_err().error_code(), "INVALID_INPUT");
        assert!(apply_factor(Money::from_cents(1_000_000_000_000_000), 1.43).is_err());
        assert!(apply_factor(Money::from_cents(i64::MAX), 1.0).is_err());
    }

    #[test]
    fn test_sum_and_add() {
        let parts = [Money::from_cents(75_000), Money::from_cents(7_500), Money::from_cents(72_000)];
        let total: Money = parts.iter().copied().sum();
        assert_eq!(total, Money::from_cents(154_500));

        let mut running = Money::ZERO;
        running += Money::from_cents(5);
        assert_eq!(running + Money::from_cents(5), Money::from_cents(10));
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Money::from_cents(220_935)).unwrap();
        assert_eq!(json, "220935");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cents(), 220_935);
        assert!((back.dollars() - 2209.35).abs() < 1e-9);
    }
}
