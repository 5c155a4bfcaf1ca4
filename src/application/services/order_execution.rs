//! # Order Execution Service
//!
//! Orchestrates buy and sell orders across the cash ledger, the position
//! book, and the append-only order log.
//!
//! Each operation is all-or-nothing: validation always precedes mutation,
//! entity mutators run on loaded snapshots, and both books are saved only
//! after every check has passed, while the account's critical section is
//! held. The cash ledger is written first; if the position book then
//! faults, the pre-trade cash snapshot is restored within the same
//! critical section. A failed call of any kind leaves all three books
//! exactly as they were.
//!
//! The order-log append happens after the critical section is released,
//! causally after the mutation succeeded, so no rolled-back order is ever
//! logged.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use brokerage_core::application::services::order_execution::{
//!     OrderExecutionService, TradeRequest,
//! };
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
//! assert_eq!(order.gross_amount().unwrap(), Money::from_units(500_000));
//! # });
//! ```

use crate::application::error::{ExecutionError, ExecutionResult};
use crate::application::services::account_locks::AccountLockRegistry;
use crate::domain::entities::{Account, Order, OrderBuilder, Position};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{
    AccountId, ExchangeHint, InstrumentCode, Money, OrderSide, OwnerId, Quantity,
};
use crate::infrastructure::persistence::{
    AccountRepository, OrderRepository, PositionRepository,
};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// One inbound buy or sell request.
///
/// The instrument display name may come from the caller or from a
/// market-data lookup; this core carries it through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRequest {
    /// Account to execute against.
    pub account_id: AccountId,
    /// Claimed owner; must match the account's recorded owner.
    pub owner_id: OwnerId,
    /// Instrument listing code.
    pub instrument_code: InstrumentCode,
    /// Instrument display name.
    pub instrument_name: String,
    /// Ordered share count; must be strictly positive.
    pub quantity: Quantity,
    /// Price per share; must be strictly positive.
    pub unit_price: Money,
}

/// Executes buy and sell orders atomically per account.
///
/// Cloning is cheap and shares the repositories and the lock registry.
#[derive(Debug, Clone)]
pub struct OrderExecutionService {
    accounts: Arc<dyn AccountRepository>,
    positions: Arc<dyn PositionRepository>,
    orders: Arc<dyn OrderRepository>,
    locks: AccountLockRegistry,
    default_exchange: ExchangeHint,
}

impl OrderExecutionService {
    /// Creates a service over the given repositories with the default
    /// exchange routing tag.
    #[must_use]
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        positions: Arc<dyn PositionRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            accounts,
            positions,
            orders,
            locks: AccountLockRegistry::new(),
            default_exchange: ExchangeHint::default(),
        }
    }

    /// Replaces the exchange routing tag stamped on accepted orders.
    #[must_use]
    pub fn with_default_exchange(mut self, exchange: ExchangeHint) -> Self {
        self.default_exchange = exchange;
        self
    }

    /// Executes a buy order.
    ///
    /// Validates ownership and funds, adds to the position (creating it
    /// lazily on the first buy of the instrument), debits the cash
    /// ledger, and appends one `REQUESTED` order to the log.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` / `OwnerMismatch` on identity failure
    /// - `Domain(InvalidQuantity | InvalidPrice)` on non-positive inputs
    /// - `Domain(InsufficientFunds)` when cash cannot cover the order
    /// - `Repository` on storage faults
    ///
    /// On any error no mutation remains: a fault on the position write
    /// restores the cash ledger from the pre-trade snapshot before
    /// returning.
    #[instrument(skip(self, request), fields(account = %request.account_id, instrument = %request.instrument_code))]
    pub async fn buy(&self, request: TradeRequest) -> ExecutionResult<Order> {
        validate_request(&request)?;
        let total_cost = request
            .unit_price
            .checked_mul_qty(request.quantity)
            .map_err(DomainError::from)?;

        {
            let _guard = self.locks.acquire(&request.account_id).await;

            let mut account = self
                .load_account(&request.account_id, request.owner_id)
                .await?;

            // Created lazily on the first buy of this instrument.
            let mut position = self
                .positions
                .find(&request.account_id, &request.instrument_code)
                .await?
                .unwrap_or_else(|| {
                    Position::open(
                        request.account_id.clone(),
                        request.instrument_code.clone(),
                        request.instrument_name.clone(),
                    )
                });

            let cash_snapshot = account.clone();
            if let Err(err) = account.debit(total_cost) {
                warn!(%err, "buy rejected");
                return Err(err.into());
            }
            position.increase(request.quantity, request.unit_price)?;

            self.accounts.save(&account).await?;
            self.save_position_or_restore_cash(&position, &cash_snapshot)
                .await?;
        }

        let order = self.build_order(OrderSide::Buy, &request);
        self.orders.append(&order).await?;
        info!(order_id = %order.order_id(), notional = %total_cost, "buy order accepted");
        Ok(order)
    }

    /// Executes a sell order.
    ///
    /// Validates ownership and holdings, removes from the position
    /// (leaving the average cost frozen), credits the proceeds to the
    /// cash ledger, and appends one `REQUESTED` order to the log.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` / `OwnerMismatch` on identity failure
    /// - `Domain(InvalidQuantity | InvalidPrice)` on non-positive inputs
    /// - `NoSuchHolding` when the instrument was never held
    /// - `Domain(InsufficientHoldings)` when fewer shares are held
    /// - `Repository` on storage faults
    ///
    /// On any error no mutation remains: a fault on the position write
    /// restores the cash ledger from the pre-trade snapshot before
    /// returning.
    #[instrument(skip(self, request), fields(account = %request.account_id, instrument = %request.instrument_code))]
    pub async fn sell(&self, request: TradeRequest) -> ExecutionResult<Order> {
        validate_request(&request)?;
        let proceeds = request
            .unit_price
            .checked_mul_qty(request.quantity)
            .map_err(DomainError::from)?;

        {
            let _guard = self.locks.acquire(&request.account_id).await;

            let mut account = self
                .load_account(&request.account_id, request.owner_id)
                .await?;

            let mut position = self
                .positions
                .find(&request.account_id, &request.instrument_code)
                .await?
                .ok_or_else(|| {
                    ExecutionError::no_such_holding(
                        request.account_id.clone(),
                        request.instrument_code.clone(),
                    )
                })?;

            if let Err(err) = position.decrease(request.quantity) {
                warn!(%err, "sell rejected");
                return Err(err.into());
            }
            let cash_snapshot = account.clone();
            account.credit(proceeds)?;

            self.accounts.save(&account).await?;
            self.save_position_or_restore_cash(&position, &cash_snapshot)
                .await?;
        }

        let order = self.build_order(OrderSide::Sell, &request);
        self.orders.append(&order).await?;
        info!(order_id = %order.order_id(), notional = %proceeds, "sell order accepted");
        Ok(order)
    }

    /// Writes the mutated position after the cash write has already
    /// landed. On a position-book fault the pre-trade cash snapshot is
    /// written back so neither leg of the trade remains.
    ///
    /// Must be called with the account's critical section held: the
    /// restore races with nothing on the same account.
    async fn save_position_or_restore_cash(
        &self,
        position: &Position,
        cash_snapshot: &Account,
    ) -> ExecutionResult<()> {
        if let Err(err) = self.positions.save(position).await {
            if let Err(restore_err) = self.accounts.save(cash_snapshot).await {
                error!(
                    account = %cash_snapshot.account_id(),
                    %restore_err,
                    "cash restore failed after position book fault; ledger holds a trade leg without its position"
                );
            }
            return Err(err.into());
        }
        Ok(())
    }

    /// Resolves the account and verifies ownership. Mandatory before any
    /// mutation.
    async fn load_account(
        &self,
        account_id: &AccountId,
        owner_id: OwnerId,
    ) -> ExecutionResult<Account> {
        let account = self
            .accounts
            .get(account_id)
            .await?
            .ok_or_else(|| ExecutionError::account_not_found(account_id.clone()))?;

        if !account.is_owned_by(owner_id) {
            return Err(ExecutionError::owner_mismatch(account_id.clone()));
        }
        Ok(account)
    }

    fn build_order(&self, side: OrderSide, request: &TradeRequest) -> Order {
        OrderBuilder::new(
            request.account_id.clone(),
            request.owner_id,
            side,
            request.instrument_code.clone(),
            request.instrument_name.clone(),
            request.quantity,
            request.unit_price,
        )
        .exchange(self.default_exchange.clone())
        .build()
    }
}

/// Rejects non-positive quantity or price before anything is loaded.
fn validate_request(request: &TradeRequest) -> ExecutionResult<()> {
    if request.quantity.is_zero() {
        return Err(DomainError::invalid_quantity("order quantity must be positive").into());
    }
    if !request.unit_price.is_positive() {
        return Err(DomainError::invalid_price("order unit price must be positive").into());
    }
    Ok(())
}
