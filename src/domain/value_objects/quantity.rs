//! # Quantity Value Object
//!
//! Whole-share quantity with checked arithmetic.
//!
//! Positions and orders deal in whole shares, so [`Quantity`] wraps a
//! `u64`. Zero is representable (an empty position holds zero shares);
//! operations that require a strictly positive quantity validate that at
//! the service boundary.

use crate::domain::value_objects::arithmetic::{ArithmeticError, ArithmeticResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole-share quantity.
///
/// # Invariants
///
/// - Never negative (unsigned by construction).
/// - All arithmetic is checked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// The zero quantity.
    pub const ZERO: Self = Self(0);

    /// Creates a quantity.
    #[must_use]
    pub const fn new(shares: u64) -> Self {
        Self(shares)
    }

    /// Returns the number of shares.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns true if the quantity is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Adds two quantities.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] on `u64` overflow.
    pub fn checked_add(self, other: Self) -> ArithmeticResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(ArithmeticError::Overflow)
    }

    /// Subtracts `other` from this quantity.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Underflow`] if `other` is larger.
    pub fn checked_sub(self, other: Self) -> ArithmeticResult<Self> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(ArithmeticError::Underflow)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Quantity {
    fn from(shares: u64) -> Self {
        Self(shares)
    }
}
