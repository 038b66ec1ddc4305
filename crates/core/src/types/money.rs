//! Non-negative monetary amounts using decimal arithmetic.

use core::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing [`Money`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The amount is below zero.
    #[error("amount cannot be negative: {0}")]
    Negative(Decimal),
}

/// A monetary amount in the store currency.
///
/// Prices, costs, and order totals are all `Money`. The amount is never
/// negative; this is checked on construction and on deserialization.
///
/// ```
/// use rust_decimal::Decimal;
/// use stock_alchemist_core::Money;
///
/// let price = Money::new(Decimal::new(2999, 2)).unwrap();
/// assert_eq!(price.to_string(), "$29.99");
/// assert!(Money::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest representable amount. `+` and `*` saturate here.
    pub const MAX: Self = Self(Decimal::MAX);

    /// Create a new amount.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create an amount from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// Get the decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Sum of two amounts, or `None` if it cannot be represented.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Amount times a unit count, or `None` if it cannot be represented.
    #[must_use]
    pub fn checked_mul(self, rhs: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(rhs)).map(Self)
    }

    /// Amount rounded half-away-from-zero to two decimal places.
    #[must_use]
    pub fn round_cents(self) -> Self {
        Self(self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Scale by a non-negative factor, e.g. a discount multiplier.
    ///
    /// Negative factors clamp to zero and results past the largest
    /// representable amount saturate.
    #[must_use]
    pub fn scale(self, factor: Decimal) -> Self {
        match self.0.checked_mul(factor) {
            Some(amount) => Self(amount.max(Decimal::ZERO)),
            None if factor.is_sign_negative() => Self::ZERO,
            None => Self::MAX,
        }
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).unwrap_or(Self::MAX)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        self.checked_mul(rhs).unwrap_or(Self::MAX)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
