//! # Domain Errors
//!
//! Business-rule violations raised by the ledger and position entities.
//!
//! These are expected outcomes of order processing, not system faults:
//! a buyer without funds or a seller without holdings receives a specific
//! rejection and no state is mutated.

use crate::domain::value_objects::{ArithmeticError, Money, Quantity};
use thiserror::Error;

/// Error type for business-rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Order quantity is not strictly positive.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Order unit price is not strictly positive.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Ledger mutation amount is not strictly positive.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Cash balance cannot cover the requested debit.
    #[error("insufficient funds: available {available}, required {required}")]
    InsufficientFunds {
        /// Cash available on the account.
        available: Money,
        /// Amount the operation required.
        required: Money,
    },

    /// Held quantity cannot cover the requested sale.
    #[error("insufficient holdings: held {held}, requested {requested}")]
    InsufficientHoldings {
        /// Shares currently held.
        held: Quantity,
        /// Shares the operation required.
        requested: Quantity,
    },

    /// Numeric failure during a ledger or cost-basis computation.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates an invalid quantity error.
    #[must_use]
    pub fn invalid_quantity(message: impl Into<String>) -> Self {
        Self::InvalidQuantity(message.into())
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(message: impl Into<String>) -> Self {
        Self::InvalidPrice(message.into())
    }

    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount(message.into())
    }

    /// Returns true if this is a business-rule rejection (insufficient
    /// funds or holdings) rather than a malformed request.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InsufficientFunds { .. } | Self::InsufficientHoldings { .. }
        )
    }

    /// Returns true if this is an input validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuantity(_) | Self::InvalidPrice(_) | Self::InvalidAmount(_)
        )
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
