//! Order service providing the create/read/update/delete/list operations.

use std::sync::Arc;

use common::{EntityId, IdGenerator};
use entity_store::SharedStore;

use super::{Order, OrderStatus, rules};
use crate::error::{DomainError, record_rejection};
use crate::validation::Payload;

/// Service for managing orders.
///
/// Validation and mutation of one request happen under a single store write
/// guard, so the state a rule sees is the state the mutation applies to.
pub struct OrderService<G: IdGenerator> {
    store: SharedStore<Order>,
    ids: Arc<G>,
}

impl<G: IdGenerator> OrderService<G> {
    /// Creates a new order service over a shared store.
    pub fn new(store: SharedStore<Order>, ids: Arc<G>) -> Self {
        Self { store, ids }
    }

    /// Returns the underlying store handle.
    pub fn store(&self) -> &SharedStore<Order> {
        &self.store
    }

    /// Validates the payload and stores an order under a fresh id.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create(&self, payload: &Payload) -> Result<Order, DomainError> {
        let fields = rules::validate_create(payload).inspect_err(record_rejection)?;
        let order = Order::new(self.ids.next_id(), fields);

        let mut store = self.store.write().await;
        let order = store.append(order).clone();

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %order.id(), status = %order.status(), "order created");
        Ok(order)
    }

    /// Returns the order with this id.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, order_id: &EntityId) -> Result<Order, DomainError> {
        let store = self.store.read().await;
        rules::find(&store, order_id)
            .cloned()
            .inspect_err(record_rejection)
    }

    /// Validates the payload and replaces the stored order's fields.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update(
        &self,
        order_id: &EntityId,
        payload: &Payload,
    ) -> Result<Order, DomainError> {
        let mut store = self.store.write().await;
        let fields =
            rules::validate_update(&store, order_id, payload).inspect_err(record_rejection)?;

        let order = store
            .replace_fields(order_id, fields)
            .cloned()
            .ok_or_else(|| DomainError::NotFound {
                entity: "Order",
                id: order_id.clone(),
            })?;

        metrics::counter!("orders_updated_total").increment(1);
        tracing::info!(%order_id, status = %order.status(), "order updated");
        Ok(order)
    }

    /// Removes a pending order.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, order_id: &EntityId) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        rules::validate_delete(&store, order_id).inspect_err(record_rejection)?;
        store.remove(order_id);

        metrics::counter!("orders_deleted_total").increment(1);
        tracing::info!(%order_id, "order deleted");
        Ok(())
    }

    /// Returns every order in insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Vec<Order> {
        self.store.read().await.list().to_vec()
    }

    /// Returns the orders currently in `status`, in insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn list_by_status(&self, status: OrderStatus) -> Vec<Order> {
        self.store
            .read()
            .await
            .list()
            .iter()
            .filter(|order| order.status() == status)
            .cloned()
            .collect()
    }
}
