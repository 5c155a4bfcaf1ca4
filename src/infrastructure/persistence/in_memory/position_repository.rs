//! # In-Memory Position Repository
//!
//! In-memory implementation of [`PositionRepository`].
//!
//! Positions are keyed by (`account_id`, `instrument_code`). No delete
//! operation is offered; liquidated positions stay at quantity zero.

use crate::domain::entities::Position;
use crate::domain::value_objects::{AccountId, InstrumentCode};
use crate::infrastructure::persistence::traits::{PositionRepository, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type PositionKey = (AccountId, InstrumentCode);

/// In-memory implementation of [`PositionRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryPositionRepository {
    storage: Arc<RwLock<HashMap<PositionKey, Position>>>,
}

impl InMemoryPositionRepository {
    /// Creates a new empty in-memory position repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all positions from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

#[async_trait]
impl PositionRepository for InMemoryPositionRepository {
    async fn save(&self, position: &Position) -> RepositoryResult<()> {
        let key = (
            position.account_id().clone(),
            position.instrument_code().clone(),
        );
        let mut storage = self.storage.write().await;
        storage.insert(key, position.clone());
        Ok(())
    }

    async fn find(
        &self,
        account_id: &AccountId,
        instrument_code: &InstrumentCode,
    ) -> RepositoryResult<Option<Position>> {
        let key = (account_id.clone(), instrument_code.clone());
        let storage = self.storage.read().await;
        Ok(storage.get(&key).cloned())
    }

    async fn find_by_account(&self, account_id: &AccountId) -> RepositoryResult<Vec<Position>> {
        let storage = self.storage.read().await;
        let mut positions: Vec<Position> = storage
            .values()
            .filter(|p| p.account_id() == account_id)
            .cloned()
            .collect();
        positions.sort_by(|a, b| a.instrument_code().cmp(b.instrument_code()));
        Ok(positions)
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
    use crate::domain::value_objects::{Money, Quantity};

    fn position(account: &str, code: &str) -> Position {
        let mut pos = Position::open(
            AccountId::new(account),
            InstrumentCode::new(code),
            "Test Instrument",
        );
        pos.increase(Quantity::new(10), Money::from_units(50_000))
            .unwrap();
        pos
    }

    #[tokio::test]
    async fn save_and_find() {
        let repo = InMemoryPositionRepository::new();
        let pos = position("46809777", "005930");

        repo.save(&pos).await.unwrap();

        let found = repo
            .find(&AccountId::new("46809777"), &InstrumentCode::new("005930"))
            .await
            .unwrap();
        assert_eq!(found, Some(pos));
    }

    #[tokio::test]
    async fn find_absent_returns_none() {
        let repo = InMemoryPositionRepository::new();
        let found = repo
            .find(&AccountId::new("46809777"), &InstrumentCode::new("000660"))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn same_instrument_in_two_accounts_is_two_positions() {
        let repo = InMemoryPositionRepository::new();
        repo.save(&position("acct-a", "005930")).await.unwrap();
        repo.save(&position("acct-b", "005930")).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn find_by_account_is_sorted_by_instrument() {
        let repo = InMemoryPositionRepository::new();
        repo.save(&position("acct-a", "035420")).await.unwrap();
        repo.save(&position("acct-a", "005930")).await.unwrap();
        repo.save(&position("acct-b", "005930")).await.unwrap();

        let positions = repo
            .find_by_account(&AccountId::new("acct-a"))
            .await
            .unwrap();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].instrument_code().as_str(), "005930");
        assert_eq!(positions[1].instrument_code().as_str(), "035420");
    }

    #[tokio::test]
    async fn save_replaces_existing_key() {
        let repo = InMemoryPositionRepository::new();
        let mut pos = position("46809777", "005930");
        repo.save(&pos).await.unwrap();

        pos.decrease(Quantity::new(10)).unwrap();
        repo.save(&pos).await.unwrap();

        let found = repo
            .find(&AccountId::new("46809777"), &InstrumentCode::new("005930"))
            .await
            .unwrap()
            .unwrap();
        assert!(found.is_empty());
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
