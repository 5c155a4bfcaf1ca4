//! # Application Errors
//!
//! Error types for order execution.
//!
//! [`ExecutionError`] is the complete failure taxonomy a caller of the
//! execution service can observe. Business-rule rejections (insufficient
//! funds or holdings, missing holdings) are expected outcomes; repository
//! failures are opaque infrastructure faults. Every variant is raised
//! before any durable mutation, so a failed call leaves all three books
//! untouched.

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{AccountId, InstrumentCode};
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Error type for buy/sell execution.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// Business-rule violation from the ledger or position book.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Opaque storage fault.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// No account exists with the given id.
    #[error("account not found: {0}")]
    AccountNotFound(AccountId),

    /// The account exists but belongs to a different owner.
    #[error("owner mismatch for account {0}")]
    OwnerMismatch(AccountId),

    /// Sell requested against an instrument the account never held.
    #[error("no holding of {instrument} in account {account}")]
    NoSuchHolding {
        /// Account the sell targeted.
        account: AccountId,
        /// Instrument that is not held.
        instrument: InstrumentCode,
    },
}

impl ExecutionError {
    /// Creates an account not found error.
    #[must_use]
    pub fn account_not_found(account: AccountId) -> Self {
        Self::AccountNotFound(account)
    }

    /// Creates an owner mismatch error.
    #[must_use]
    pub fn owner_mismatch(account: AccountId) -> Self {
        Self::OwnerMismatch(account)
    }

    /// Creates a no such holding error.
    #[must_use]
    pub fn no_such_holding(account: AccountId, instrument: InstrumentCode) -> Self {
        Self::NoSuchHolding {
            account,
            instrument,
        }
    }

    /// Returns true if this is an expected business-rule rejection
    /// (insufficient funds/holdings or a missing holding), as opposed to
    /// a malformed request, an identity failure, or a system fault.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_rejection(),
            Self::NoSuchHolding { .. } => true,
            _ => false,
        }
    }

    /// Returns true if this is an input validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_validation())
    }

    /// Returns true if this is an identity/authorization failure.
    #[must_use]
    pub fn is_identity_failure(&self) -> bool {
        matches!(self, Self::AccountNotFound(_) | Self::OwnerMismatch(_))
    }

    /// Returns true if this is an opaque infrastructure fault.
    #[must_use]
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Repository(_))
    }
}

/// Result type for execution operations.
pub type ExecutionResult<T> = Result<T, ExecutionError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Money, Quantity};

    #[test]
    fn account_not_found_is_identity_failure() {
        let err = ExecutionError::account_not_found(AccountId::new("46809777"));
        assert!(err.is_identity_failure());
        assert!(!err.is_rejection());
        assert!(err.to_string().contains("46809777"));
    }

    #[test]
    fn owner_mismatch_is_identity_failure() {
        let err = ExecutionError::owner_mismatch(AccountId::new("46809777"));
        assert!(err.is_identity_failure());
        assert!(!err.is_infrastructure());
    }

    #[test]
    fn no_such_holding_is_rejection() {
        let err = ExecutionError::no_such_holding(
            AccountId::new("46809777"),
            InstrumentCode::new("005930"),
        );
        assert!(err.is_rejection());
        assert!(err.to_string().contains("005930"));
    }

    #[test]
    fn insufficient_funds_propagates_as_rejection() {
        let err: ExecutionError = DomainError::InsufficientFunds {
            available: Money::from_units(100),
            required: Money::from_units(500),
        }
        .into();
        assert!(err.is_rejection());
        assert!(!err.is_validation());
    }

    #[test]
    fn insufficient_holdings_propagates_as_rejection() {
        let err: ExecutionError = DomainError::InsufficientHoldings {
            held: Quantity::new(10),
            requested: Quantity::new(15),
        }
        .into();
        assert!(err.is_rejection());
    }

    #[test]
    fn validation_propagates() {
        let err: ExecutionError = DomainError::invalid_quantity("must be positive").into();
        assert!(err.is_validation());
        assert!(!err.is_rejection());
    }

    #[test]
    fn repository_error_is_infrastructure() {
        let err: ExecutionError = RepositoryError::connection("timeout").into();
        assert!(err.is_infrastructure());
        assert!(!err.is_rejection());
    }
}
