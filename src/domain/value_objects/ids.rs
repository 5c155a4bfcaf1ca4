//! # Identifier Value Objects
//!
//! Newtype identifiers for the ledger, position book, and order log.
//!
//! - [`AccountId`]: opaque brokerage account number
//! - [`OwnerId`]: reference to the owning party
//! - [`InstrumentCode`]: exchange listing code of a tradable instrument
//! - [`OrderId`]: UUID-based order identifier
//! - [`ExchangeHint`]: opaque routing/venue tag carried through on orders
//!
//! # Examples
//!
//! ```
//! use brokerage_core::domain::value_objects::ids::{AccountId, InstrumentCode};
//!
//! let account = AccountId::new("46809777");
//! let code = InstrumentCode::new("005930");
//!
//! assert_eq!(account.as_str(), "46809777");
//! assert_eq!(code.to_string(), "005930");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque brokerage account number.
///
/// Unique and immutable after account creation. The format is owned by
/// the account-opening system; this core treats it as an opaque key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Creates an account id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Reference to the party that owns an account.
///
/// Immutable after account creation. Ownership is verified against this
/// value before any mutation of the account.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OwnerId(i64);

impl OwnerId {
    /// Creates an owner id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exchange listing code of a tradable instrument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentCode(String);

impl InstrumentCode {
    /// Creates an instrument code from any string-like value.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstrumentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for InstrumentCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// System-assigned order identifier.
///
/// Unique and immutable once assigned. Backed by a v4 UUID.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generates a fresh random order id.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque routing/venue tag stamped on every order.
///
/// Passed through to downstream routing unchanged. Defaults to the KRX
/// venue tag when the caller does not supply one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeHint(String);

impl ExchangeHint {
    /// Creates an exchange hint from any string-like value.
    #[must_use]
    pub fn new(hint: impl Into<String>) -> Self {
        Self(hint.into())
    }

    /// Returns the hint as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ExchangeHint {
    fn default() -> Self {
        Self::new("KRX")
    }
}

impl fmt::Display for ExchangeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
