//! # Market Data
//!
//! Interface to the external stock-quote source: the [`MarketDataClient`]
//! port, the [`InstrumentQuote`] DTO, and tolerant parsing for raw feed
//! records. The concrete transport is an external collaborator and is not
//! implemented here.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{MarketDataError, MarketDataResult};
pub use traits::MarketDataClient;
pub use types::{InstrumentQuote, RawQuoteRecord};
