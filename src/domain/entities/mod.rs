//! # Domain Entities
//!
//! The three book-keeping entities of the execution core:
//!
//! - [`Account`]: authoritative cash ledger entry
//! - [`Position`]: per-instrument holding with weighted-average cost
//! - [`Order`]: immutable record of one accepted order
//!
//! Accounts and positions are mutated exclusively by the order execution
//! service inside its per-account critical section; orders are created
//! exactly once per accepted request.

pub mod account;
pub mod order;
pub mod position;

pub use account::Account;
pub use order::{Order, OrderBuilder};
pub use position::Position;
