//! # In-Memory Order Repository
//!
//! In-memory implementation of the append-only [`OrderRepository`].
//!
//! Entries are immutable once appended; appending an id twice is a
//! duplicate error.

use crate::domain::entities::Order;
use crate::domain::value_objects::{AccountId, OrderId};
use crate::infrastructure::persistence::traits::{
    OrderRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`OrderRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    storage: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderRepository {
    /// Creates a new empty in-memory order repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all orders from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn append(&self, order: &Order) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        if storage.contains_key(&order.order_id()) {
            return Err(RepositoryError::duplicate(
                "Order",
                order.order_id().to_string(),
            ));
        }
        storage.insert(order.order_id(), order.clone());
        Ok(())
    }

    async fn get(&self, id: &OrderId) -> RepositoryResult<Option<Order>> {
        let storage = self.storage.read().await;
        Ok(storage.get(id).cloned())
    }

    async fn find_by_account(&self, account_id: &AccountId) -> RepositoryResult<Vec<Order>> {
        let storage = self.storage.read().await;
        let mut orders: Vec<Order> = storage
            .values()
            .filter(|o| o.account_id() == account_id)
            .cloned()
            .collect();
        orders.sort_by_key(Order::placed_at);
        Ok(orders)
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}
