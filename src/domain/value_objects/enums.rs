//! # Domain Enums
//!
//! Enumeration types for order semantics.
//!
//! - [`OrderSide`] - Buy or Sell direction
//! - [`OrderStatus`] - Order lifecycle states
//!
//! Both implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseEnumError {
    /// The input did not match any variant of the named enum.
    #[error("invalid {0} value: {1}")]
    InvalidValue(&'static str, String),
}

/// Order side indicating buy or sell direction.
///
/// # Examples
///
/// ```
/// use brokerage_core::domain::value_objects::enums::OrderSide;
///
/// assert_eq!(OrderSide::Buy.to_string(), "BUY");
/// assert_eq!(OrderSide::Buy.opposite(), OrderSide::Sell);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum OrderSide {
    /// Buy order - acquiring the instrument.
    Buy = 0,
    /// Sell order - disposing of the instrument.
    Sell = 1,
}

impl OrderSide {
    /// Returns the opposite side.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    /// Returns true if this is a buy order.
    #[inline]
    #[must_use]
    pub const fn is_buy(self) -> bool {
        matches!(self, Self::Buy)
    }

    /// Returns true if this is a sell order.
    #[inline]
    #[must_use]
    pub const fn is_sell(self) -> bool {
        matches!(self, Self::Sell)
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            _ => Err(ParseEnumError::InvalidValue("OrderSide", s.to_string())),
        }
    }
}

/// Lifecycle status of an order.
///
/// `Requested` is the only status this core ever produces: every accepted
/// order is booked immediately against cash and positions, and no exchange
/// round-trip is modeled. The remaining variants are reserved terminal
/// states for a future execution-confirmation collaborator and are never
/// reachable here.
///
/// # Examples
///
/// ```
/// use brokerage_core::domain::value_objects::enums::OrderStatus;
///
/// assert!(OrderStatus::Requested.is_requested());
/// assert!(!OrderStatus::Requested.is_terminal());
/// assert!(OrderStatus::Filled.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Order accepted and booked; awaiting any downstream confirmation.
    Requested,
    /// Reserved: order confirmed fully executed by an external venue.
    Filled,
    /// Reserved: order rejected by an external venue.
    Rejected,
    /// Reserved: order cancelled before execution.
    Cancelled,
}

impl OrderStatus {
    /// Returns true if this is the initial `Requested` status.
    #[inline]
    #[must_use]
    pub const fn is_requested(self) -> bool {
        matches!(self, Self::Requested)
    }

    /// Returns true if this is a terminal status.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Filled | Self::Rejected | Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Requested => write!(f, "REQUESTED"),
            Self::Filled => write!(f, "FILLED"),
            Self::Rejected => write!(f, "REJECTED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "REQUESTED" => Ok(Self::Requested),
            "FILLED" => Ok(Self::Filled),
            "REJECTED" => Ok(Self::Rejected),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(ParseEnumError::InvalidValue("OrderStatus", s.to_string())),
        }
    }
}
