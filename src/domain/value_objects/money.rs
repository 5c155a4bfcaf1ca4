//! # Money Value Object
//!
//! Non-negative currency amount with checked arithmetic.
//!
//! [`Money`] wraps a [`Decimal`] and enforces the ledger invariant that
//! no currency amount in this core is ever negative: construction rejects
//! negative values and subtraction fails with
//! [`ArithmeticError::Underflow`] instead of going below zero.
//!
//! # Examples
//!
//! ```
//! use brokerage_core::domain::value_objects::money::Money;
//!
//! let balance = Money::from_units(1_000_000);
//! let cost = Money::from_units(500_000);
//!
//! let remaining = balance.checked_sub(cost).unwrap();
//! assert_eq!(remaining, Money::from_units(500_000));
//!
//! // Going below zero is an error, not a negative amount.
//! assert!(cost.checked_sub(balance).is_err());
//! ```

use crate::domain::value_objects::arithmetic::{ArithmeticError, ArithmeticResult};
use crate::domain::value_objects::quantity::Quantity;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative currency amount.
///
/// Amounts are held at currency-scale precision using [`Decimal`].
///
/// # Invariants
///
/// - Never negative. Enforced on every path into the type, including
///   deserialization: a negative decimal fails to deserialize.
/// - All arithmetic is checked; failures surface as [`ArithmeticError`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates an amount from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::InvalidValue`] if `amount` is negative.
    pub fn new(amount: Decimal) -> ArithmeticResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ArithmeticError::InvalidValue("amount must not be negative"));
        }
        Ok(Self(amount))
    }

    /// Creates an amount from whole currency units (e.g., KRW).
    #[must_use]
    pub fn from_units(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Adds two amounts.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the sum exceeds the
    /// decimal range.
    pub fn checked_add(self, other: Self) -> ArithmeticResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(ArithmeticError::Overflow)
    }

    /// Subtracts `other` from this amount.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Underflow`] if the result would be
    /// negative.
    pub fn checked_sub(self, other: Self) -> ArithmeticResult<Self> {
        if self.0 < other.0 {
            return Err(ArithmeticError::Underflow);
        }
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(ArithmeticError::Underflow)
    }

    /// Multiplies this amount by a share quantity.
    ///
    /// Used for order notionals (`quantity * unit_price`) and cost-basis
    /// totals.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the product exceeds the
    /// decimal range.
    pub fn checked_mul_qty(self, qty: Quantity) -> ArithmeticResult<Self> {
        self.0
            .checked_mul(Decimal::from(qty.value()))
            .map(Self)
            .ok_or(ArithmeticError::Overflow)
    }

    /// Divides this amount by a share quantity.
    ///
    /// Used for the weighted-average-cost recomputation.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `qty` is zero.
    pub fn checked_div_qty(self, qty: Quantity) -> ArithmeticResult<Self> {
        if qty.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.0
            .checked_div(Decimal::from(qty.value()))
            .map(Self)
            .ok_or(ArithmeticError::Overflow)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = ArithmeticError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_negative() {
        let err = Money::new(Decimal::NEGATIVE_ONE).unwrap_err();
        assert_eq!(err, ArithmeticError::InvalidValue("amount must not be negative"));
    }

    #[test]
    fn new_accepts_zero_and_positive() {
        assert!(Money::new(Decimal::ZERO).unwrap().is_zero());
        assert!(Money::new(Decimal::ONE).unwrap().is_positive());
    }

    #[test]
    fn add_and_sub() {
        let a = Money::from_units(700);
        let b = Money::from_units(300);

        assert_eq!(a.checked_add(b).unwrap(), Money::from_units(1_000));
        assert_eq!(a.checked_sub(b).unwrap(), Money::from_units(400));
    }

    #[test]
    fn sub_below_zero_is_underflow() {
        let a = Money::from_units(100);
        let b = Money::from_units(101);
        assert_eq!(a.checked_sub(b).unwrap_err(), ArithmeticError::Underflow);
    }

    #[test]
    fn sub_to_exactly_zero_is_ok() {
        let a = Money::from_units(100);
        assert!(a.checked_sub(a).unwrap().is_zero());
    }

    #[test]
    fn mul_by_quantity() {
        let price = Money::from_units(50_000);
        let total = price.checked_mul_qty(Quantity::new(10)).unwrap();
        assert_eq!(total, Money::from_units(500_000));
    }

    #[test]
    fn div_by_zero_quantity_fails() {
        let err = Money::from_units(100)
            .checked_div_qty(Quantity::ZERO)
            .unwrap_err();
        assert_eq!(err, ArithmeticError::DivisionByZero);
    }

    #[test]
    fn div_keeps_fractional_precision() {
        let total = Money::from_units(100);
        let per_share = total.checked_div_qty(Quantity::new(8)).unwrap();
        assert_eq!(per_share.amount(), Decimal::new(125, 1)); // 12.5
    }

    #[test]
    fn ordering_follows_amount() {
        assert!(Money::from_units(1) < Money::from_units(2));
        assert!(Money::ZERO <= Money::from_units(0));
    }

    #[test]
    fn negative_amounts_fail_to_deserialize() {
        assert!(serde_json::from_str::<Money>("-1").is_err());
        assert!(serde_json::from_str::<Money>("-100").is_err());
        assert!(serde_json::from_str::<Money>("\"-0.01\"").is_err());
    }

    #[test]
    fn serde_round_trip_preserves_amount() {
        let amount = Money::from_units(500_000);
        let json = serde_json::to_string(&amount).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }

    #[test]
    fn zero_is_not_positive() {
        assert!(!Money::ZERO.is_positive());
        assert!(Money::from_units(1).is_positive());
    }
}
