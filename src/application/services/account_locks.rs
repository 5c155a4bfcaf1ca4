//! # Per-Account Lock Registry
//!
//! Mutual-exclusion boundary giving each account its own critical section.
//!
//! Every `buy`/`sell` serializes with every other operation on the *same*
//! account, while operations on different accounts proceed fully in
//! parallel. There is no global lock.
//!
//! Lock entries are created on first use and never removed; accounts are
//! never deleted in this core, so the registry only grows with the set of
//! accounts actually traded.

use crate::domain::value_objects::AccountId;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-account mutexes.
///
/// Cloning is cheap and shares the underlying registry.
///
/// # Examples
///
/// ```
/// use brokerage_core::application::services::account_locks::AccountLockRegistry;
/// use brokerage_core::domain::value_objects::AccountId;
///
/// # tokio_test::block_on(async {
/// let locks = AccountLockRegistry::new();
/// let guard = locks.acquire(&AccountId::new("46809777")).await;
/// // ... critical section for this account ...
/// drop(guard);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct AccountLockRegistry {
    locks: Arc<DashMap<AccountId, Arc<Mutex<()>>>>,
}

impl AccountLockRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the critical section for `account_id`, waiting if another
    /// operation on the same account holds it.
    ///
    /// The returned guard releases the section when dropped, on every
    /// exit path.
    pub async fn acquire(&self, account_id: &AccountId) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(account_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    /// Returns the number of accounts that have ever been locked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Returns true if no account has been locked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
