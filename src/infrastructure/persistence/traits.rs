//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! This module defines the repository traits (ports) that abstract
//! persistence of the three books. Implementations can use different
//! backends; in-memory implementations ship with the crate.
//!
//! # Available Repositories
//!
//! - [`AccountRepository`]: the cash ledger
//! - [`PositionRepository`]: the position book
//! - [`OrderRepository`]: the append-only order log
//!
//! The order log is strictly append-only: there is no update and no
//! delete. Positions are likewise never deleted; a liquidated holding is
//! kept at quantity zero.

use crate::domain::entities::{Account, Order, Position};
use crate::domain::value_objects::{AccountId, InstrumentCode, OrderId};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
///
/// Storage faults are opaque infrastructure errors to callers; the
/// execution service guarantees no partial mutation is left behind when
/// one surfaces.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    ///
    /// The shipped repositories report absence as `Ok(None)` on reads;
    /// this variant is reserved for backends that can only surface
    /// absence as a fault, such as a conditional write that matched no
    /// row.
    #[error("entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Duplicate entity.
    #[error("duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a duplicate error.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for [`Account`] ledger entries.
#[async_trait]
pub trait AccountRepository: Send + Sync + fmt::Debug {
    /// Saves an account, replacing any existing entry with the same id.
    async fn save(&self, account: &Account) -> RepositoryResult<()>;

    /// Gets an account by id.
    ///
    /// Returns `None` if no such account exists.
    async fn get(&self, id: &AccountId) -> RepositoryResult<Option<Account>>;

    /// Counts all accounts.
    async fn count(&self) -> RepositoryResult<u64>;
}

/// Repository for [`Position`] book entries.
///
/// Positions are keyed by (`account_id`, `instrument_code`). There is no
/// delete operation; a fully liquidated position remains at quantity zero.
#[async_trait]
pub trait PositionRepository: Send + Sync + fmt::Debug {
    /// Saves a position, replacing any existing entry with the same key.
    async fn save(&self, position: &Position) -> RepositoryResult<()>;

    /// Finds the position for an (account, instrument) pair.
    ///
    /// Absence is not an error by itself; it only becomes one in the
    /// sell path.
    async fn find(
        &self,
        account_id: &AccountId,
        instrument_code: &InstrumentCode,
    ) -> RepositoryResult<Option<Position>>;

    /// Finds all positions held by an account.
    async fn find_by_account(&self, account_id: &AccountId) -> RepositoryResult<Vec<Position>>;

    /// Counts all positions.
    async fn count(&self) -> RepositoryResult<u64>;
}

/// Repository for the append-only [`Order`] log.
///
/// No update or delete operation exists: an appended entry is immutable.
#[async_trait]
pub trait OrderRepository: Send + Sync + fmt::Debug {
    /// Appends an order to the log.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if an order with the same id
    /// was already appended.
    async fn append(&self, order: &Order) -> RepositoryResult<()>;

    /// Gets an order by id.
    ///
    /// Returns `None` if no such order exists.
    async fn get(&self, id: &OrderId) -> RepositoryResult<Option<Order>>;

    /// Finds all orders for an account, oldest first.
    async fn find_by_account(&self, account_id: &AccountId) -> RepositoryResult<Vec<Order>>;

    /// Counts all orders.
    async fn count(&self) -> RepositoryResult<u64>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error() {
        let err = RepositoryError::not_found("Account", "46809777");
        assert!(err.is_not_found());
        assert!(!err.is_duplicate());
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("46809777"));
    }

    #[test]
    fn duplicate_error() {
        let err = RepositoryError::duplicate("Order", "abc");
        assert!(err.is_duplicate());
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn connection_error() {
        let err = RepositoryError::connection("connection refused");
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn internal_error() {
        let err = RepositoryError::internal("unexpected state");
        assert!(err.to_string().contains("internal"));
    }
}
