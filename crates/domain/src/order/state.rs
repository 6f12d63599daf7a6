//! Order lifecycle.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;

/// The status of an order in its lifecycle.
///
/// Intended progression:
/// ```text
/// pending ──► preparing ──► out-for-delivery ──► delivered
/// ```
/// Only two rules are enforced: a delivered order never changes again, and
/// only a pending order may be deleted. Any status may otherwise be written
/// over any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Order received, nothing started yet.
    #[default]
    Pending,

    /// Kitchen is working on the order.
    Preparing,

    /// Order has left the restaurant.
    OutForDelivery,

    /// Order reached the customer (terminal state).
    Delivered,
}

impl OrderStatus {
    /// Status value clients use to flag a rejected order; never accepted.
    pub const INVALID_SENTINEL: &'static str = "invalid";

    /// Returns true if this is the terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    /// Returns true if the order's fields may still be replaced.
    pub fn can_modify(&self) -> bool {
        !self.is_terminal()
    }

    /// Returns true if the order may be deleted in this state.
    pub fn can_delete(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    /// Returns the status name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Parses a requested status from a payload value.
    ///
    /// Fails with `InvalidStatus` on a missing, non-string, unknown or
    /// sentinel value.
    pub fn parse(value: Option<&Value>) -> Result<Self, DomainError> {
        value
            .and_then(Value::as_str)
            .ok_or(DomainError::InvalidStatus)?
            .parse()
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "out-for-delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(DomainError::InvalidStatus),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
