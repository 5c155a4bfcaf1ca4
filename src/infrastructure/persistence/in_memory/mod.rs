//! # In-Memory Repositories
//!
//! Thread-safe `HashMap`-backed implementations of the repository ports.
//! Used by the test suite and by deployments where the ledger is not
//! externally shared; per-account serializability is then provided by the
//! execution service's lock registry.

pub mod account_repository;
pub mod order_repository;
pub mod position_repository;

pub use account_repository::InMemoryAccountRepository;
pub use order_repository::InMemoryOrderRepository;
pub use position_repository::InMemoryPositionRepository;
