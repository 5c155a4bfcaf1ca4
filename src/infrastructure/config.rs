//! # Engine Configuration
//!
//! Settings for the execution core, loaded through the `config` crate
//! with environment overrides (`BROKERAGE_*`).

use crate::domain::value_objects::ExchangeHint;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Settings for the execution core.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Routing/venue tag stamped on orders when the caller supplies none.
    pub default_exchange: String,
}

impl EngineConfig {
    /// Loads configuration from defaults overridden by `BROKERAGE_*`
    /// environment variables (e.g. `BROKERAGE_DEFAULT_EXCHANGE=NXT`).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if an override cannot be deserialized.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("default_exchange", "KRX")?
            .add_source(Environment::with_prefix("BROKERAGE"))
            .build()?
            .try_deserialize()
    }

    /// Returns the default exchange tag as a domain value.
    #[must_use]
    pub fn default_exchange_hint(&self) -> ExchangeHint {
        ExchangeHint::new(self.default_exchange.clone())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_exchange: "KRX".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_route_to_krx() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.default_exchange, "KRX");
        assert_eq!(cfg.default_exchange_hint().as_str(), "KRX");
    }

    #[test]
    fn load_without_overrides_matches_defaults() {
        let cfg = EngineConfig::load().unwrap();
        assert_eq!(cfg, EngineConfig::default());
    }
}
