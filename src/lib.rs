//! # brokerage-core
//!
//! Trade order execution core for a brokerage back office.
//!
//! Given a buy or sell request, the core atomically validates funds or
//! holdings, mutates the cash ledger and the position book, and appends
//! one immutable record to the order log — consistently, even under
//! concurrent requests against the same account.
//!
//! ## Components
//!
//! - [`domain::entities::Account`]: authoritative cash balance per account
//! - [`domain::entities::Position`]: per-instrument holding with running
//!   weighted-average cost
//! - [`domain::entities::Order`]: immutable record of one accepted order
//! - [`application::OrderExecutionService`]: orchestrates validation and
//!   mutation as one all-or-nothing unit per request
//!
//! ## Guarantees
//!
//! - Cash balances and holdings never go negative.
//! - Every validation failure leaves all three books untouched.
//! - Operations on one account are serialized; operations on different
//!   accounts proceed fully in parallel.
//! - Every order is booked immediately and fully against cash and
//!   positions; no pending or partial-fill state is modeled.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use brokerage_core::{OrderExecutionService, TradeRequest};
//! use brokerage_core::domain::entities::Account;
//! use brokerage_core::domain::value_objects::{
//!     AccountId, InstrumentCode, Money, OwnerId, Quantity,
//! };
//! use brokerage_core::infrastructure::persistence::{
//!     AccountRepository, InMemoryAccountRepository, InMemoryOrderRepository,
//!     InMemoryPositionRepository,
//! };
//!
//! # tokio_test::block_on(async {
//! let accounts = Arc::new(InMemoryAccountRepository::new());
//! accounts
//!     .save(&Account::new(
//!         AccountId::new("46809777"),
//!         OwnerId::new(1),
//!         Money::from_units(1_000_000),
//!     ))
//!     .await
//!     .unwrap();
//!
//! let service = OrderExecutionService::new(
//!     accounts,
//!     Arc::new(InMemoryPositionRepository::new()),
//!     Arc::new(InMemoryOrderRepository::new()),
//! );
//!
//! let order = service
//!     .buy(TradeRequest {
//!         account_id: AccountId::new("46809777"),
//!         owner_id: OwnerId::new(1),
//!         instrument_code: InstrumentCode::new("005930"),
//!         instrument_name: "Samsung Electronics".into(),
//!         quantity: Quantity::new(10),
//!         unit_price: Money::from_units(50_000),
//!     })
//!     .await
//!     .unwrap();
//!
//! assert!(order.side().is_buy());
//! # });
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use application::{ExecutionError, ExecutionResult, OrderExecutionService, TradeRequest};
pub use domain::entities::{Account, Order, Position};
pub use infrastructure::EngineConfig;
