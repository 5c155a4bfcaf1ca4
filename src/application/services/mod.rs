//! # Application Services
//!
//! - [`OrderExecutionService`]: atomic buy/sell orchestration
//! - [`AccountLockRegistry`]: per-account critical sections

pub mod account_locks;
pub mod order_execution;

pub use account_locks::AccountLockRegistry;
pub use order_execution::{OrderExecutionService, TradeRequest};
