use crate::utils::error::{OrderError, Result};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative amount held as whole cents.
///
/// Display drops trailing fractional zeros, so `899` cents prints as `8.99`,
/// `250` as `2.5` and `0` as `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    /// Converts a configured decimal price, rounding to the nearest cent.
    pub fn from_decimal(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(OrderError::InvalidPriceError {
                value: value.to_string(),
                reason: "not a finite number".to_string(),
            });
        }
        if value < 0.0 {
            return Err(OrderError::InvalidPriceError {
                value: value.to_string(),
                reason: "prices cannot be negative".to_string(),
            });
        }

        let cents = (value * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(OrderError::InvalidPriceError {
                value: value.to_string(),
                reason: "too large".to_string(),
            });
        }

        Ok(Money(cents as u64))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}", whole, frac)
        }
    }
}
