//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`AccountId`], [`OwnerId`]: ledger ownership keys
//! - [`InstrumentCode`]: instrument listing code
//! - [`OrderId`]: UUID-based order identifier
//! - [`ExchangeHint`]: opaque routing/venue tag
//!
//! ## Numeric Types
//!
//! - [`Money`]: non-negative decimal amount with checked arithmetic
//! - [`Quantity`]: whole-share count with checked arithmetic
//!
//! ## Domain Enums
//!
//! - `OrderSide`: Buy or Sell
//! - `OrderStatus`: order lifecycle states (`Requested` plus reserved
//!   terminal states)

pub mod arithmetic;
pub mod enums;
pub mod ids;
pub mod money;
pub mod quantity;
pub mod timestamp;

pub use arithmetic::{ArithmeticError, ArithmeticResult};
pub use enums::{OrderSide, OrderStatus, ParseEnumError};
pub use ids::{AccountId, ExchangeHint, InstrumentCode, OrderId, OwnerId};
pub use money::Money;
pub use quantity::Quantity;
pub use timestamp::Timestamp;
