//! Customer orders and their lifecycle.

pub mod rules;
mod service;
mod state;
mod value_objects;

pub use service::OrderService;
pub use state::OrderStatus;
pub use value_objects::OrderLine;

use common::EntityId;
use entity_store::Entity;
use serde::Serialize;

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: EntityId,
    deliver_to: String,
    mobile_number: String,
    status: OrderStatus,
    dishes: Vec<OrderLine>,
}

/// Validated order attributes, produced by the order rule chains.
///
/// `dishes` is always non-empty and replaces the stored lines wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderLine>,
}

impl Order {
    /// Builds an order from an id and validated fields.
    pub fn new(id: EntityId, fields: OrderFields) -> Self {
        Self {
            id,
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status: fields.status,
            dishes: fields.dishes,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn deliver_to(&self) -> &str {
        &self.deliver_to
    }

    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn dishes(&self) -> &[OrderLine] {
        &self.dishes
    }
}

impl Entity for Order {
    type Changes = OrderFields;
    const KIND: &'static str = "Order";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn apply(&mut self, changes: OrderFields) {
        self.deliver_to = changes.deliver_to;
        self.mobile_number = changes.mobile_number;
        self.status = changes.status;
        self.dishes = changes.dishes;
    }
}
