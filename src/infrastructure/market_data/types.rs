//! # Market Data Types
//!
//! Quote DTO and the tolerant numeric parsing applied to raw feed records.
//!
//! Quote feeds deliver figures as strings, often comma-grouped and
//! sometimes blank; [`RawQuoteRecord::into_quote`] converts them without
//! failing the whole batch over one unparsable field.

use crate::domain::value_objects::{InstrumentCode, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One instrument quote in internal form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentQuote {
    /// Instrument listing code.
    pub code: InstrumentCode,
    /// Instrument display name.
    pub name: String,
    /// Last traded price.
    pub last_price: Money,
    /// Change versus the previous close, in currency units (signed).
    pub day_change: i64,
    /// Change rate versus the previous close, in percent.
    pub day_change_rate: Decimal,
    /// Accumulated traded volume.
    pub volume: u64,
}

/// One quote record as delivered by the external feed, all fields raw
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuoteRecord {
    /// Instrument listing code.
    pub code: String,
    /// Instrument display name.
    pub name: String,
    /// Last traded price, e.g. `"50,000"`.
    pub price: String,
    /// Signed change versus previous close, e.g. `"-1,200"`.
    pub change: String,
    /// Change rate in percent, e.g. `"-2.34"`.
    pub change_rate: String,
    /// Accumulated volume, e.g. `"12,345,678"`.
    pub volume: String,
}

impl RawQuoteRecord {
    /// Converts the raw record into an [`InstrumentQuote`].
    ///
    /// Blank or unparsable figures become zero; negative prices and
    /// volumes are clamped to zero. The feed occasionally omits fields
    /// for halted instruments, and one bad record must not fail a batch.
    #[must_use]
    pub fn into_quote(self) -> InstrumentQuote {
        InstrumentQuote {
            code: InstrumentCode::new(self.code),
            name: self.name,
            last_price: Money::from_units(parse_unsigned(&self.price)),
            day_change: parse_signed(&self.change),
            day_change_rate: parse_rate(&self.change_rate),
            volume: parse_unsigned(&self.volume),
        }
    }
}

/// Parses a comma-grouped unsigned figure; blank or unparsable input
/// (including negative values) yields zero.
#[must_use]
pub fn parse_unsigned(value: &str) -> u64 {
    let cleaned = value.replace(',', "");
    if cleaned.trim().is_empty() {
        return 0;
    }
    cleaned.trim().parse().unwrap_or(0)
}

/// Parses a comma-grouped signed figure; blank or unparsable input
/// yields zero.
#[must_use]
pub fn parse_signed(value: &str) -> i64 {
    let cleaned = value.replace(',', "");
    if cleaned.trim().is_empty() {
        return 0;
    }
    cleaned.trim().parse().unwrap_or(0)
}

/// Parses a percent rate; blank or unparsable input yields zero.
#[must_use]
pub fn parse_rate(value: &str) -> Decimal {
    let cleaned = value.replace(',', "");
    if cleaned.trim().is_empty() {
        return Decimal::ZERO;
    }
    cleaned.trim().parse().unwrap_or(Decimal::ZERO)
}
