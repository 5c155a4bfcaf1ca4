//! # In-Memory Account Repository
//!
//! In-memory implementation of [`AccountRepository`].
//!
//! Uses a thread-safe `HashMap` for storage. Suitable for unit tests and
//! for deployments where the ledger is not externally shared.

use crate::domain::entities::Account;
use crate::domain::value_objects::AccountId;
use crate::infrastructure::persistence::traits::{AccountRepository, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`AccountRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    storage: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl InMemoryAccountRepository {
    /// Creates a new empty in-memory account repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all accounts from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn save(&self, account: &Account) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.insert(account.account_id().clone(), account.clone());
        Ok(())
    }

    async fn get(&self, id: &AccountId) -> RepositoryResult<Option<Account>> {
        let storage = self.storage.read().await;
        Ok(storage.get(id).cloned())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Money, OwnerId};

    fn account(id: &str) -> Account {
        Account::new(AccountId::new(id), OwnerId::new(1), Money::from_units(1_000))
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryAccountRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn save_and_get() {
        let repo = InMemoryAccountRepository::new();
        let acc = account("46809777");

        repo.save(&acc).await.unwrap();

        let retrieved = repo.get(acc.account_id()).await.unwrap();
        assert_eq!(retrieved, Some(acc));
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let repo = InMemoryAccountRepository::new();
        let result = repo.get(&AccountId::new("missing")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn save_replaces_existing_entry() {
        let repo = InMemoryAccountRepository::new();
        let mut acc = account("46809777");
        repo.save(&acc).await.unwrap();

        acc.credit(Money::from_units(500)).unwrap();
        repo.save(&acc).await.unwrap();

        let retrieved = repo.get(acc.account_id()).await.unwrap().unwrap();
        assert_eq!(retrieved.cash_balance(), Money::from_units(1_500));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn clear() {
        let repo = InMemoryAccountRepository::new();
        repo.save(&account("a")).await.unwrap();
        repo.save(&account("b")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);

        repo.clear().await;
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
