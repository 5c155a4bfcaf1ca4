//! Property tests for the ledger and position-book invariants.
//!
//! For any sequence of credits, debits, buys, and sells, the cash balance
//! and held quantity stay non-negative and every rejected operation
//! leaves state untouched.

#![allow(clippy::unwrap_used)]

use brokerage_core::domain::entities::{Account, Position};
use brokerage_core::domain::value_objects::{
    AccountId, InstrumentCode, Money, OwnerId, Quantity,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum LedgerOp {
    Credit(u64),
    Debit(u64),
}

fn ledger_ops() -> impl Strategy<Value = Vec<LedgerOp>> {
    prop::collection::vec(
        prop_oneof![
            (1u64..1_000_000).prop_map(LedgerOp::Credit),
            (1u64..1_000_000).prop_map(LedgerOp::Debit),
        ],
        0..64,
    )
}

#[derive(Debug, Clone)]
enum BookOp {
    Buy { qty: u64, price: u64 },
    Sell { qty: u64 },
}

fn book_ops() -> impl Strategy<Value = Vec<BookOp>> {
    prop::collection::vec(
        prop_oneof![
            (1u64..1_000, 1u64..100_000).prop_map(|(qty, price)| BookOp::Buy { qty, price }),
            (1u64..1_000).prop_map(|qty| BookOp::Sell { qty }),
        ],
        0..64,
    )
}

proptest! {
    #[test]
    fn cash_balance_never_goes_negative(opening in 0u64..1_000_000, ops in ledger_ops()) {
        let mut account = Account::new(
            AccountId::new("46809777"),
            OwnerId::new(1),
            Money::from_units(opening),
        );

        for op in ops {
            let before = account.clone();
            let result = match op {
                LedgerOp::Credit(amount) => account.credit(Money::from_units(amount)),
                LedgerOp::Debit(amount) => account.debit(Money::from_units(amount)),
            };

            // Rejected operations leave the ledger untouched.
            if result.is_err() {
                prop_assert_eq!(&account, &before);
            }
            prop_assert!(account.cash_balance() >= Money::ZERO);
            prop_assert_eq!(
                account.total_value(),
                account.cash_balance().checked_add(account.securities_value()).unwrap()
            );
        }
    }

    #[test]
    fn holdings_never_go_negative(ops in book_ops()) {
        let mut position = Position::open(
            AccountId::new("46809777"),
            InstrumentCode::new("005930"),
            "Samsung Electronics",
        );

        for op in ops {
            let before = position.clone();
            let result = match op {
                BookOp::Buy { qty, price } => {
                    position.increase(Quantity::new(qty), Money::from_units(price))
                }
                BookOp::Sell { qty } => position.decrease(Quantity::new(qty)),
            };

            if result.is_err() {
                prop_assert_eq!(&position, &before);
            }
            prop_assert!(position.quantity() >= Quantity::ZERO);
            prop_assert!(position.avg_cost() >= Money::ZERO);
        }
    }

    // Buying q at p then selling q at p restores both cash and quantity.
    #[test]
    fn round_trip_is_neutral(qty in 1u64..1_000, price in 1u64..100_000) {
        let opening = qty * price;
        let mut account = Account::new(
            AccountId::new("46809777"),
            OwnerId::new(1),
            Money::from_units(opening),
        );
        let mut position = Position::open(
            AccountId::new("46809777"),
            InstrumentCode::new("005930"),
            "Samsung Electronics",
        );

        let notional = Money::from_units(price).checked_mul_qty(Quantity::new(qty)).unwrap();
        account.debit(notional).unwrap();
        position.increase(Quantity::new(qty), Money::from_units(price)).unwrap();

        position.decrease(Quantity::new(qty)).unwrap();
        account.credit(notional).unwrap();

        prop_assert_eq!(account.cash_balance(), Money::from_units(opening));
        prop_assert!(position.is_empty());
    }
}
