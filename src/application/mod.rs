//! # Application Layer
//!
//! Use-case orchestration for the execution core: the buy/sell service,
//! its per-account locking, and the error taxonomy callers observe.

pub mod error;
pub mod services;

pub use error::{ExecutionError, ExecutionResult};
pub use services::{AccountLockRegistry, OrderExecutionService, TradeRequest};
