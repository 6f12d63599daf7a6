//! Order rule chains.
//!
//! Each chain runs its checks in a fixed order and returns the first
//! failure. Field checks always run deliverTo, mobileNumber, dishes, then
//! every line's quantity.

use common::EntityId;
use entity_store::EntityStore;

use super::{Order, OrderFields, OrderLine, OrderStatus};
use crate::error::DomainError;
use crate::validation::{self, Payload};

/// Validates an order creation payload.
///
/// A missing status defaults to `pending`. A payload id is ignored.
pub fn validate_create(payload: &Payload) -> Result<OrderFields, DomainError> {
    let (deliver_to, mobile_number, dishes) = validate_fields(payload)?;
    let status = match payload.get("status") {
        None => OrderStatus::default(),
        Some(value) => OrderStatus::parse(Some(value))?,
    };

    Ok(OrderFields {
        deliver_to,
        mobile_number,
        status,
        dishes,
    })
}

/// Validates an update of the order stored under `order_id`.
///
/// A delivered order is rejected with `Terminal` before the payload is
/// looked at. An absent payload id adopts the route id; a different one is
/// an `IdMismatch`. The status is required on update.
pub fn validate_update(
    store: &EntityStore<Order>,
    order_id: &EntityId,
    payload: &Payload,
) -> Result<OrderFields, DomainError> {
    let existing = find(store, order_id)?;
    if !existing.status().can_modify() {
        return Err(DomainError::Terminal);
    }

    let (deliver_to, mobile_number, dishes) = validate_fields(payload)?;

    if let Some(payload_id) = payload.id()
        && payload_id != order_id.as_str()
    {
        return Err(DomainError::IdMismatch {
            entity: "Order",
            payload_id,
            route_id: order_id.clone(),
        });
    }

    let status = OrderStatus::parse(payload.get("status"))?;

    Ok(OrderFields {
        deliver_to,
        mobile_number,
        status,
        dishes,
    })
}

/// Checks that the order stored under `order_id` may be deleted.
pub fn validate_delete(
    store: &EntityStore<Order>,
    order_id: &EntityId,
) -> Result<(), DomainError> {
    let existing = find(store, order_id)?;
    if !existing.status().can_delete() {
        return Err(DomainError::NotPending);
    }
    Ok(())
}

/// Looks up an order, failing with `NotFound`.
pub fn find<'a>(
    store: &'a EntityStore<Order>,
    order_id: &EntityId,
) -> Result<&'a Order, DomainError> {
    store.find_by_id(order_id).ok_or_else(|| DomainError::NotFound {
        entity: "Order",
        id: order_id.clone(),
    })
}

fn validate_fields(payload: &Payload) -> Result<(String, String, Vec<OrderLine>), DomainError> {
    let deliver_to = validation::text(
        payload.get("deliverTo"),
        "deliverTo",
        "Order must include a deliverTo",
    )?;
    let mobile_number = validation::text(
        payload.get("mobileNumber"),
        "mobileNumber",
        "Order must include a mobileNumber",
    )?;
    let lines = validation::non_empty_list(
        payload.get("dishes"),
        "dishes",
        "Order must include at least one dish",
    )?;
    let dishes = lines
        .iter()
        .enumerate()
        .map(|(index, line)| OrderLine::from_payload(index, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((deliver_to, mobile_number, dishes))
}
