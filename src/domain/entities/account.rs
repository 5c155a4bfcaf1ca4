//! # Account Entity
//!
//! The authoritative cash ledger entry for one brokerage account.
//!
//! Holds the deposit balance available for buying, the externally revalued
//! securities leg, and the derived total. The cash balance is never allowed
//! to go negative: debits that would overdraw fail with
//! `DomainError::InsufficientFunds` and leave the account untouched.
//!
//! # Examples
//!
//! ```
//! use brokerage_core::domain::entities::account::Account;
//! use brokerage_core::domain::value_objects::{AccountId, Money, OwnerId};
//!
//! let mut account = Account::new(
//!     AccountId::new("46809777"),
//!     OwnerId::new(1),
//!     Money::from_units(1_000_000),
//! );
//!
//! account.debit(Money::from_units(500_000)).unwrap();
//! assert_eq!(account.cash_balance(), Money::from_units(500_000));
//!
//! // Overdrawing is rejected, balance unchanged.
//! assert!(account.debit(Money::from_units(600_000)).is_err());
//! assert_eq!(account.cash_balance(), Money::from_units(500_000));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{AccountId, Money, OwnerId};
use serde::{Deserialize, Serialize};

/// Cash ledger entry for one brokerage account.
///
/// # Invariants
///
/// - `cash_balance >= 0` after every operation.
/// - `total_value == cash_balance + securities_value` after every mutation.
/// - `account_id` and `owner_id` are immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque account number, unique per account.
    account_id: AccountId,
    /// Owning party; checked before any mutation.
    owner_id: OwnerId,
    /// Deposit balance available for buying.
    cash_balance: Money,
    /// Securities leg, revalued by an external valuation job.
    securities_value: Money,
    /// Derived: cash plus securities, recomputed on every mutation.
    total_value: Money,
}

impl Account {
    /// Creates an account with an opening cash balance and no securities.
    #[must_use]
    pub fn new(account_id: AccountId, owner_id: OwnerId, opening_cash: Money) -> Self {
        Self {
            account_id,
            owner_id,
            cash_balance: opening_cash,
            securities_value: Money::ZERO,
            total_value: opening_cash,
        }
    }

    /// Returns the account number.
    #[must_use]
    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// Returns the owning party.
    #[must_use]
    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the cash balance.
    #[must_use]
    pub fn cash_balance(&self) -> Money {
        self.cash_balance
    }

    /// Returns the securities leg value.
    #[must_use]
    pub fn securities_value(&self) -> Money {
        self.securities_value
    }

    /// Returns the derived total value.
    #[must_use]
    pub fn total_value(&self) -> Money {
        self.total_value
    }

    /// Returns true if the account belongs to `owner`.
    #[must_use]
    pub fn is_owned_by(&self, owner: OwnerId) -> bool {
        self.owner_id == owner
    }

    /// Increases the cash balance by `amount`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if `amount` is not strictly
    /// positive, or an arithmetic error on numeric-range overflow.
    pub fn credit(&mut self, amount: Money) -> DomainResult<()> {
        if !amount.is_positive() {
            return Err(DomainError::invalid_amount(
                "credit amount must be positive",
            ));
        }
        self.cash_balance = self.cash_balance.checked_add(amount)?;
        self.recompute_total()
    }

    /// Decreases the cash balance by `amount`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if `amount` is not strictly
    /// positive, or `DomainError::InsufficientFunds` if the balance cannot
    /// cover it. The balance is never left negative.
    pub fn debit(&mut self, amount: Money) -> DomainResult<()> {
        if !amount.is_positive() {
            return Err(DomainError::invalid_amount("debit amount must be positive"));
        }
        if self.cash_balance < amount {
            return Err(DomainError::InsufficientFunds {
                available: self.cash_balance,
                required: amount,
            });
        }
        self.cash_balance = self.cash_balance.checked_sub(amount)?;
        self.recompute_total()
    }

    /// Replaces the securities leg with a fresh external valuation.
    ///
    /// The securities value is derived from the position book by an
    /// external valuation job; this entity only keeps the total consistent.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on numeric-range overflow.
    pub fn revalue_securities(&mut self, value: Money) -> DomainResult<()> {
        self.securities_value = value;
        self.recompute_total()
    }

    fn recompute_total(&mut self) -> DomainResult<()> {
        self.total_value = self.cash_balance.checked_add(self.securities_value)?;
        Ok(())
    }
}
