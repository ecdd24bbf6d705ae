//! Order fulfillment statuses.
//!
//! The fetch wire format carries the status by name; the status-update
//! endpoint carries a numeric code. Transitions are unconstrained: any status
//! may be replaced by any other in a single submission, together with the
//! orthogonal paid flag.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A numeric status code outside the known range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid order status code: {0} (expected 1..=6)")]
pub struct InvalidStatusCode(pub u8);

/// Order fulfillment status.
///
/// `Shipped` is the terminal, archival state: it only partitions the order
/// list into active and archived views and never blocks further edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    CreatedOnly,
    Completed,
    Reserved,
    PartlyReserved,
    Deferred,
    Shipped,
}

impl OrderStatus {
    /// All statuses in wire-code order.
    pub const ALL: [Self; 6] = [
        Self::CreatedOnly,
        Self::Completed,
        Self::Reserved,
        Self::PartlyReserved,
        Self::Deferred,
        Self::Shipped,
    ];

    /// The numeric code the status-update endpoint expects.
    #[must_use]
    pub const fn wire_code(self) -> u8 {
        match self {
            Self::CreatedOnly => 1,
            Self::Completed => 2,
            Self::Reserved => 3,
            Self::PartlyReserved => 4,
            Self::Deferred => 5,
            Self::Shipped => 6,
        }
    }

    /// Decode a numeric wire code.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStatusCode`] for anything outside `1..=6`.
    pub const fn from_wire_code(code: u8) -> Result<Self, InvalidStatusCode> {
        match code {
            1 => Ok(Self::CreatedOnly),
            2 => Ok(Self::Completed),
            3 => Ok(Self::Reserved),
            4 => Ok(Self::PartlyReserved),
            5 => Ok(Self::Deferred),
            6 => Ok(Self::Shipped),
            other => Err(InvalidStatusCode(other)),
        }
    }

    /// Human label shown in lists and cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreatedOnly => "New",
            Self::Completed => "Ready to ship",
            Self::Reserved => "Reserved",
            Self::PartlyReserved => "Partly reserved",
            Self::Deferred => "Deferred",
            Self::Shipped => "Shipped",
        }
    }

    /// Whether an order with this status belongs to the archived view.
    #[must_use]
    pub const fn is_archived(self) -> bool {
        matches!(self, Self::Shipped)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
