//! # Order Entity
//!
//! An immutable record of one accepted buy or sell request.
//!
//! Orders are built once, appended to the order log, and never mutated
//! afterwards. [`OrderBuilder`] assigns the order id and acceptance
//! timestamp when the caller does not supply them.
//!
//! # Examples
//!
//! ```
//! use brokerage_core::domain::entities::order::OrderBuilder;
//! use brokerage_core::domain::value_objects::{
//!     AccountId, InstrumentCode, Money, OrderSide, OrderStatus, OwnerId, Quantity,
//! };
//!
//! let order = OrderBuilder::new(
//!     AccountId::new("46809777"),
//!     OwnerId::new(1),
//!     OrderSide::Buy,
//!     InstrumentCode::new("005930"),
//!     "Samsung Electronics",
//!     Quantity::new(10),
//!     Money::from_units(50_000),
//! )
//! .build();
//!
//! assert_eq!(order.status(), OrderStatus::Requested);
//! assert_eq!(order.gross_amount().unwrap(), Money::from_units(500_000));
//! ```

use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{
    AccountId, ExchangeHint, InstrumentCode, Money, OrderId, OrderSide, OrderStatus, OwnerId,
    Quantity, Timestamp,
};
use serde::{Deserialize, Serialize};

/// An accepted buy or sell order.
///
/// # Invariants
///
/// - Immutable once built; the log never updates or deletes entries.
/// - `account_id`/`owner_id` match the account validated at execution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// System-assigned, immutable identifier.
    order_id: OrderId,
    /// Account the order executed against.
    account_id: AccountId,
    /// Owner validated at execution time.
    owner_id: OwnerId,
    /// Buy or sell.
    side: OrderSide,
    /// Instrument listing code.
    instrument_code: InstrumentCode,
    /// Instrument display name.
    instrument_name: String,
    /// Ordered share count.
    quantity: Quantity,
    /// Price per share.
    unit_price: Money,
    /// Lifecycle status; `Requested` for every order this core produces.
    status: OrderStatus,
    /// Opaque routing/venue tag.
    exchange: ExchangeHint,
    /// Assigned at acceptance, never mutated.
    placed_at: Timestamp,
}

impl Order {
    /// Returns the order id.
    #[must_use]
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// Returns the account id.
    #[must_use]
    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// Returns the owner id.
    #[must_use]
    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the order side.
    #[must_use]
    pub fn side(&self) -> OrderSide {
        self.side
    }

    /// Returns the instrument code.
    #[must_use]
    pub fn instrument_code(&self) -> &InstrumentCode {
        &self.instrument_code
    }

    /// Returns the instrument display name.
    #[must_use]
    pub fn instrument_name(&self) -> &str {
        &self.instrument_name
    }

    /// Returns the ordered quantity.
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the price per share.
    #[must_use]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the routing/venue tag.
    #[must_use]
    pub fn exchange(&self) -> &ExchangeHint {
        &self.exchange
    }

    /// Returns the acceptance timestamp.
    #[must_use]
    pub fn placed_at(&self) -> Timestamp {
        self.placed_at
    }

    /// Returns the gross order amount (`quantity * unit_price`).
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on numeric-range overflow.
    pub fn gross_amount(&self) -> DomainResult<Money> {
        Ok(self.unit_price.checked_mul_qty(self.quantity)?)
    }
}

/// Builder for [`Order`].
///
/// Assigns a fresh order id, the current timestamp, `Requested` status,
/// and the default exchange tag unless overridden before `build`.
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    account_id: AccountId,
    owner_id: OwnerId,
    side: OrderSide,
    instrument_code: InstrumentCode,
    instrument_name: String,
    quantity: Quantity,
    unit_price: Money,
    order_id: Option<OrderId>,
    status: OrderStatus,
    exchange: Option<ExchangeHint>,
    placed_at: Option<Timestamp>,
}

impl OrderBuilder {
    /// Starts a builder from the required order fields.
    #[must_use]
    pub fn new(
        account_id: AccountId,
        owner_id: OwnerId,
        side: OrderSide,
        instrument_code: InstrumentCode,
        instrument_name: impl Into<String>,
        quantity: Quantity,
        unit_price: Money,
    ) -> Self {
        Self {
            account_id,
            owner_id,
            side,
            instrument_code,
            instrument_name: instrument_name.into(),
            quantity,
            unit_price,
            order_id: None,
            status: OrderStatus::Requested,
            exchange: None,
            placed_at: None,
        }
    }

    /// Supplies an explicit order id instead of a generated one.
    #[must_use]
    pub fn order_id(mut self, order_id: OrderId) -> Self {
        self.order_id = Some(order_id);
        self
    }

    /// Overrides the `Requested` status.
    #[must_use]
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Supplies a routing/venue tag.
    #[must_use]
    pub fn exchange(mut self, exchange: ExchangeHint) -> Self {
        self.exchange = Some(exchange);
        self
    }

    /// Supplies an explicit acceptance timestamp.
    #[must_use]
    pub fn placed_at(mut self, placed_at: Timestamp) -> Self {
        self.placed_at = Some(placed_at);
        self
    }

    /// Builds the order, assigning id, timestamp, and exchange tag where
    /// not already set.
    #[must_use]
    pub fn build(self) -> Order {
        Order {
            order_id: self.order_id.unwrap_or_else(OrderId::new_v4),
            account_id: self.account_id,
            owner_id: self.owner_id,
            side: self.side,
            instrument_code: self.instrument_code,
            instrument_name: self.instrument_name,
            quantity: self.quantity,
            unit_price: self.unit_price,
            status: self.status,
            exchange: self.exchange.unwrap_or_default(),
            placed_at: self.placed_at.unwrap_or_else(Timestamp::now),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn builder() -> OrderBuilder {
        OrderBuilder::new(
            AccountId::new("46809777"),
            OwnerId::new(1),
            OrderSide::Buy,
            InstrumentCode::new("005930"),
            "Samsung Electronics",
            Quantity::new(10),
            Money::from_units(50_000),
        )
    }

    #[test]
    fn build_assigns_id_timestamp_and_defaults() {
        let order = builder().build();

        assert_eq!(order.status(), OrderStatus::Requested);
        assert_eq!(order.exchange().as_str(), "KRX");
        assert_eq!(order.account_id(), &AccountId::new("46809777"));
        assert!(order.side().is_buy());
    }

    #[test]
    fn build_keeps_supplied_id_and_timestamp() {
        let id = OrderId::new_v4();
        let ts = Timestamp::from_millis(1_700_000_000_000).unwrap();

        let order = builder().order_id(id).placed_at(ts).build();
        assert_eq!(order.order_id(), id);
        assert_eq!(order.placed_at(), ts);
    }

    #[test]
    fn gross_amount_is_quantity_times_price() {
        let order = builder().build();
        assert_eq!(order.gross_amount().unwrap(), Money::from_units(500_000));
    }

    #[test]
    fn exchange_override() {
        let order = builder().exchange(ExchangeHint::new("NXT")).build();
        assert_eq!(order.exchange().as_str(), "NXT");
    }

    #[test]
    fn generated_ids_differ_between_orders() {
        let a = builder().build();
        let b = builder().build();
        assert_ne!(a.order_id(), b.order_id());
    }

    #[test]
    fn serializes_with_uppercase_enums() {
        let order = builder().build();
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"side\":\"BUY\""));
        assert!(json.contains("\"status\":\"REQUESTED\""));
    }
}
