//! Value objects for the order domain.

use common::EntityId;
use serde::Serialize;
use serde_json::Value;

use crate::error::DomainError;
use crate::validation;

/// One dish within an order.
///
/// `dish_id` is a denormalized reference; it is not checked against the dish
/// store and is omitted when the client did not send one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<EntityId>,
    pub quantity: u32,
}

impl OrderLine {
    /// Creates a line referencing a dish.
    pub fn new(dish_id: impl Into<EntityId>, quantity: u32) -> Self {
        Self {
            dish_id: Some(dish_id.into()),
            quantity,
        }
    }

    /// Validates the line at `index` of a payload's `dishes` list.
    ///
    /// The quantity must be a whole number greater than zero; the failure
    /// message carries the 0-based index.
    pub fn from_payload(index: usize, value: &Value) -> Result<Self, DomainError> {
        let quantity = validation::positive_integer(
            value.get("quantity"),
            "quantity",
            &format!("Dish {index} must have a quantity that is an integer greater than 0"),
        )?;
        let dish_id = value
            .get("dishId")
            .and_then(Value::as_str)
            .map(EntityId::from);

        Ok(Self { dish_id, quantity })
    }
}
