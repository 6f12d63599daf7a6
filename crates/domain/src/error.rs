//! Domain error types.

use common::EntityId;
use thiserror::Error;

/// Reasons a create, read, update or delete is rejected.
///
/// Every variant is raised before the store is touched, and a request only
/// ever reports the first one it hits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// No entity with this id exists.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: EntityId },

    /// A required field is missing, empty, of the wrong type or out of bounds.
    #[error("{message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    /// The status is missing, unknown or the rejected sentinel.
    #[error("Order must have a status of pending, preparing, out-for-delivery, delivered")]
    InvalidStatus,

    /// The payload id conflicts with the route id.
    #[error("{entity} id does not match route id. {entity}: {payload_id}, Route: {route_id}")]
    IdMismatch {
        entity: &'static str,
        payload_id: String,
        route_id: EntityId,
    },

    /// The order is delivered and can no longer change.
    #[error("A delivered order cannot be changed")]
    Terminal,

    /// The order left `pending` and can no longer be deleted.
    #[error("An order cannot be deleted unless it is pending")]
    NotPending,
}

impl DomainError {
    /// Builds an `InvalidField` error.
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        DomainError::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// Returns the failure kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => "NotFound",
            DomainError::InvalidField { .. } => "InvalidField",
            DomainError::InvalidStatus => "InvalidStatus",
            DomainError::IdMismatch { .. } => "IdMismatch",
            DomainError::Terminal => "Terminal",
            DomainError::NotPending => "NotPending",
        }
    }

    /// Returns true for the `NotFound` kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

/// Counts and logs a rejected operation.
pub(crate) fn record_rejection(err: &DomainError) {
    metrics::counter!("rule_violations_total", "kind" => err.kind()).increment(1);
    tracing::debug!(kind = err.kind(), error = %err, "operation rejected");
}
