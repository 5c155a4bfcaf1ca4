//! # Market Data Errors
//!
//! Error type for the external quote-source port.

use thiserror::Error;

/// Error type for market-data operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketDataError {
    /// Connection to the quote source failed.
    #[error("connection error: {0}")]
    Connection(String),

    /// The quote source did not answer in time.
    #[error("timeout: {0}")]
    Timeout(String),

    /// The quote source answered with an unusable payload.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The quote source reported an upstream failure.
    #[error("upstream error: {service} - {message}")]
    Upstream {
        /// Upstream service name.
        service: String,
        /// Upstream error message.
        message: String,
    },
}

impl MarketDataError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    /// Creates an invalid response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Creates an upstream error.
    #[must_use]
    pub fn upstream(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Upstream {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Returns true if retrying the request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Timeout(_))
    }
}

/// Result type for market-data operations.
pub type MarketDataResult<T> = Result<T, MarketDataError>;
