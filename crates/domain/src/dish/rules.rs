//! Dish rule chains.

use common::EntityId;
use entity_store::EntityStore;

use super::{Dish, DishFields};
use crate::error::DomainError;
use crate::validation::{self, Payload};

/// Validates a dish creation payload.
///
/// Checks name, description, price and image_url in that order; the first
/// failure is returned. A payload id is ignored.
pub fn validate_create(payload: &Payload) -> Result<DishFields, DomainError> {
    let name = validation::text(payload.get("name"), "name", "Dish must include a name")?;
    let description = validation::text(
        payload.get("description"),
        "description",
        "Dish must include a description",
    )?;
    let price = validation::positive_number(
        payload.get("price"),
        "price",
        "Dish must have a price that is a number greater than 0",
    )?;
    let image_url = validation::text(
        payload.get("image_url"),
        "image_url",
        "Dish must include an image_url",
    )?;

    Ok(DishFields {
        name,
        description,
        price,
        image_url,
    })
}

/// Validates an update of the dish stored under `dish_id`.
///
/// The dish must exist; the payload then goes through the creation rules.
/// Dishes do not compare a payload id against the route id.
pub fn validate_update(
    store: &EntityStore<Dish>,
    dish_id: &EntityId,
    payload: &Payload,
) -> Result<DishFields, DomainError> {
    find(store, dish_id)?;
    validate_create(payload)
}

/// Looks up a dish, failing with `NotFound`.
pub fn find<'a>(
    store: &'a EntityStore<Dish>,
    dish_id: &EntityId,
) -> Result<&'a Dish, DomainError> {
    store.find_by_id(dish_id).ok_or_else(|| DomainError::NotFound {
        entity: "Dish",
        id: dish_id.clone(),
    })
}
