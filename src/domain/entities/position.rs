//! # Position Entity
//!
//! Holding of one instrument within one account.
//!
//! Tracks the held quantity and a running weighted-average cost basis.
//! This is an average-cost model, not FIFO/LIFO lot tracking: individual
//! purchase lots are not preserved.
//!
//! Positions are created lazily on the first buy and are never deleted;
//! a fully liquidated position stays at quantity zero with its average
//! cost frozen (see [`Position::decrease`]).
//!
//! # Examples
//!
//! ```
//! use brokerage_core::domain::entities::position::Position;
//! use brokerage_core::domain::value_objects::{AccountId, InstrumentCode, Money, Quantity};
//!
//! let mut position = Position::open(
//!     AccountId::new("46809777"),
//!     InstrumentCode::new("005930"),
//!     "Samsung Electronics",
//! );
//!
//! position.increase(Quantity::new(10), Money::from_units(50_000)).unwrap();
//! position.increase(Quantity::new(10), Money::from_units(70_000)).unwrap();
//!
//! assert_eq!(position.quantity(), Quantity::new(20));
//! assert_eq!(position.avg_cost(), Money::from_units(60_000));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{AccountId, InstrumentCode, Money, Quantity};
use serde::{Deserialize, Serialize};

/// Holding of one instrument within one account.
///
/// Keyed by (`account_id`, `instrument_code`).
///
/// # Invariants
///
/// - `quantity >= 0` after every operation.
/// - `avg_cost >= 0`; recomputed only on [`Position::increase`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Account this holding belongs to.
    account_id: AccountId,
    /// Instrument listing code.
    instrument_code: InstrumentCode,
    /// Instrument display name.
    instrument_name: String,
    /// Shares currently held.
    quantity: Quantity,
    /// Weighted-average entry price of the current holding.
    avg_cost: Money,
}

impl Position {
    /// Opens an empty position (quantity zero, average cost zero).
    ///
    /// Called lazily on the first buy for an (account, instrument) pair,
    /// before the holding is populated.
    #[must_use]
    pub fn open(
        account_id: AccountId,
        instrument_code: InstrumentCode,
        instrument_name: impl Into<String>,
    ) -> Self {
        Self {
            account_id,
            instrument_code,
            instrument_name: instrument_name.into(),
            quantity: Quantity::ZERO,
            avg_cost: Money::ZERO,
        }
    }

    /// Returns the owning account id.
    #[must_use]
    pub fn account_id(&self) -> &AccountId {
        &self.account_id
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

    /// Returns the held quantity.
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the weighted-average entry price.
    #[must_use]
    pub fn avg_cost(&self) -> Money {
        self.avg_cost
    }

    /// Returns true if no shares are currently held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantity.is_zero()
    }

    /// Returns the cost value of the holding (`quantity * avg_cost`).
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on numeric-range overflow.
    pub fn cost_value(&self) -> DomainResult<Money> {
        Ok(self.avg_cost.checked_mul_qty(self.quantity)?)
    }

    /// Adds `qty` shares bought at `unit_price`, recomputing the
    /// weighted-average cost:
    ///
    /// `avg' = (quantity * avg + qty * unit_price) / (quantity + qty)`
    ///
    /// For an empty position this reduces to `avg' = unit_price`, so a
    /// buy after full liquidation replaces the frozen cost basis.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` / `InvalidPrice` if `qty`
    /// or `unit_price` is not strictly positive, or an arithmetic error
    /// on overflow.
    pub fn increase(&mut self, qty: Quantity, unit_price: Money) -> DomainResult<()> {
        if qty.is_zero() {
            return Err(DomainError::invalid_quantity(
                "buy quantity must be positive",
            ));
        }
        if !unit_price.is_positive() {
            return Err(DomainError::invalid_price("unit price must be positive"));
        }

        let new_quantity = self.quantity.checked_add(qty)?;
        let held_cost = self.avg_cost.checked_mul_qty(self.quantity)?;
        let added_cost = unit_price.checked_mul_qty(qty)?;
        let total_cost = held_cost.checked_add(added_cost)?;

        self.avg_cost = total_cost.checked_div_qty(new_quantity)?;
        self.quantity = new_quantity;
        Ok(())
    }

    /// Removes `qty` shares from the holding.
    ///
    /// The average cost is left unchanged even when the holding reaches
    /// zero: the cost basis is frozen, not reset, on full liquidation.
    /// A caller wanting lot-closing semantics must do so explicitly.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if `qty` is not strictly
    /// positive, or `DomainError::InsufficientHoldings` if fewer shares
    /// are held than requested. The holding is never left negative.
    pub fn decrease(&mut self, qty: Quantity) -> DomainResult<()> {
        if qty.is_zero() {
            return Err(DomainError::invalid_quantity(
                "sell quantity must be positive",
            ));
        }
        if self.quantity < qty {
            return Err(DomainError::InsufficientHoldings {
                held: self.quantity,
                requested: qty,
            });
        }
        self.quantity = self.quantity.checked_sub(qty)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn position() -> Position {
        Position::open(
            AccountId::new("46809777"),
            InstrumentCode::new("005930"),
            "Samsung Electronics",
        )
    }

    #[test]
    fn open_position_is_empty() {
        let pos = position();
        assert!(pos.is_empty());
        assert_eq!(pos.quantity(), Quantity::ZERO);
        assert_eq!(pos.avg_cost(), Money::ZERO);
    }

    #[test]
    fn first_buy_sets_avg_cost_to_unit_price() {
        let mut pos = position();
        pos.increase(Quantity::new(10), Money::from_units(50_000))
            .unwrap();

        assert_eq!(pos.quantity(), Quantity::new(10));
        assert_eq!(pos.avg_cost(), Money::from_units(50_000));
    }

    #[test]
    fn second_buy_recomputes_weighted_average() {
        let mut pos = position();
        pos.increase(Quantity::new(10), Money::from_units(50_000))
            .unwrap();
        pos.increase(Quantity::new(30), Money::from_units(70_000))
            .unwrap();

        // (10*50000 + 30*70000) / 40 = 65000
        assert_eq!(pos.quantity(), Quantity::new(40));
        assert_eq!(pos.avg_cost(), Money::from_units(65_000));
    }

    #[test]
    fn weighted_average_keeps_fractional_precision() {
        let mut pos = position();
        pos.increase(Quantity::new(1), Money::from_units(100)).unwrap();
        pos.increase(Quantity::new(2), Money::from_units(200)).unwrap();

        // (100 + 400) / 3 = 166.66...
        let avg = pos.avg_cost().amount();
        assert!(avg > Decimal::from(166));
        assert!(avg < Decimal::from(167));
    }

    #[test]
    fn decrease_leaves_avg_cost_unchanged() {
        let mut pos = position();
        pos.increase(Quantity::new(10), Money::from_units(50_000))
            .unwrap();
        pos.decrease(Quantity::new(4)).unwrap();

        assert_eq!(pos.quantity(), Quantity::new(6));
        assert_eq!(pos.avg_cost(), Money::from_units(50_000));
    }

    #[test]
    fn full_liquidation_freezes_avg_cost() {
        let mut pos = position();
        pos.increase(Quantity::new(10), Money::from_units(50_000))
            .unwrap();
        pos.decrease(Quantity::new(10)).unwrap();

        assert!(pos.is_empty());
        assert_eq!(pos.avg_cost(), Money::from_units(50_000));
    }

    #[test]
    fn buy_after_full_liquidation_replaces_cost_basis() {
        let mut pos = position();
        pos.increase(Quantity::new(10), Money::from_units(50_000))
            .unwrap();
        pos.decrease(Quantity::new(10)).unwrap();
        pos.increase(Quantity::new(5), Money::from_units(80_000))
            .unwrap();

        assert_eq!(pos.quantity(), Quantity::new(5));
        assert_eq!(pos.avg_cost(), Money::from_units(80_000));
    }

    #[test]
    fn oversell_is_rejected_and_state_unchanged() {
        let mut pos = position();
        pos.increase(Quantity::new(10), Money::from_units(50_000))
            .unwrap();
        let before = pos.clone();

        let err = pos.decrease(Quantity::new(15)).unwrap_err();
        assert!(matches!(err, DomainError::InsufficientHoldings { .. }));
        assert_eq!(pos, before);
    }

    #[test]
    fn zero_quantity_operations_are_invalid() {
        let mut pos = position();
        assert!(pos
            .increase(Quantity::ZERO, Money::from_units(100))
            .is_err());
        assert!(pos.decrease(Quantity::ZERO).is_err());
    }

    #[test]
    fn zero_price_buy_is_invalid() {
        let mut pos = position();
        let err = pos.increase(Quantity::new(1), Money::ZERO).unwrap_err();
        assert!(matches!(err, DomainError::InvalidPrice(_)));
    }

    #[test]
    fn cost_value_is_quantity_times_avg() {
        let mut pos = position();
        pos.increase(Quantity::new(10), Money::from_units(50_000))
            .unwrap();
        assert_eq!(pos.cost_value().unwrap(), Money::from_units(500_000));
    }
}
