//! # Persistence
//!
//! Repository ports for the three books and the in-memory implementations
//! shipped with the crate.

pub mod in_memory;
pub mod traits;

pub use in_memory::{InMemoryAccountRepository, InMemoryOrderRepository, InMemoryPositionRepository};
pub use traits::{
    AccountRepository, OrderRepository, PositionRepository, RepositoryError, RepositoryResult,
};
