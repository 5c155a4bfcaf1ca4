//! # Infrastructure Layer
//!
//! Persistence ports and in-memory implementations, the external
//! market-data port, and engine configuration.

pub mod config;
pub mod market_data;
pub mod persistence;

pub use config::EngineConfig;
