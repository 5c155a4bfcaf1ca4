//! # Market Data Port
//!
//! Port definition for the external stock-quote source.
//!
//! The concrete client (HTTP transport, authentication, token refresh)
//! lives outside this core; the execution service itself never needs
//! quotes, but callers use this port to resolve instrument display names
//! and current prices before submitting orders.

use crate::domain::value_objects::InstrumentCode;
use crate::infrastructure::market_data::error::MarketDataResult;
use crate::infrastructure::market_data::types::InstrumentQuote;
use async_trait::async_trait;
use std::fmt;

/// Port for an external quote source.
///
/// # Examples
///
/// ```ignore
/// use brokerage_core::infrastructure::market_data::MarketDataClient;
///
/// async fn print_prices(client: &impl MarketDataClient) {
///     let quotes = client
///         .quotes(&["005930".into(), "000660".into()])
///         .await
///         .unwrap();
///     for quote in quotes {
///         println!("{}: {}", quote.name, quote.last_price);
///     }
/// }
/// ```
#[async_trait]
pub trait MarketDataClient: Send + Sync + fmt::Debug {
    /// Fetches current quotes for the given instrument codes.
    ///
    /// Implementations should preserve the input order and may omit
    /// codes the source does not know.
    ///
    /// # Errors
    ///
    /// Returns a [`MarketDataError`](super::MarketDataError) when the
    /// source is unreachable or answers with an unusable payload.
    async fn quotes(&self, codes: &[InstrumentCode]) -> MarketDataResult<Vec<InstrumentQuote>>;
}
