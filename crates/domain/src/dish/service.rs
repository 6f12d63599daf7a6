//! Dish service providing the create/read/update/list operations.

use std::sync::Arc;

use common::{EntityId, IdGenerator};
use entity_store::SharedStore;

use super::{Dish, rules};
use crate::error::{DomainError, record_rejection};
use crate::validation::Payload;

/// Service for managing the menu.
///
/// Owns the lookup, rule chain and store mutation for every dish operation.
/// Dishes cannot be deleted.
pub struct DishService<G: IdGenerator> {
    store: SharedStore<Dish>,
    ids: Arc<G>,
}

impl<G: IdGenerator> DishService<G> {
    /// Creates a new dish service over a shared store.
    pub fn new(store: SharedStore<Dish>, ids: Arc<G>) -> Self {
        Self { store, ids }
    }

    /// Returns the underlying store handle.
    pub fn store(&self) -> &SharedStore<Dish> {
        &self.store
    }

    /// Validates the payload and stores a dish under a fresh id.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create(&self, payload: &Payload) -> Result<Dish, DomainError> {
        let fields = rules::validate_create(payload).inspect_err(record_rejection)?;
        let dish = Dish::new(self.ids.next_id(), fields);

        let mut store = self.store.write().await;
        let dish = store.append(dish).clone();

        metrics::counter!("dishes_created_total").increment(1);
        tracing::info!(dish_id = %dish.id(), "dish created");
        Ok(dish)
    }

    /// Returns the dish with this id.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, dish_id: &EntityId) -> Result<Dish, DomainError> {
        let store = self.store.read().await;
        rules::find(&store, dish_id)
            .cloned()
            .inspect_err(record_rejection)
    }

    /// Validates the payload and replaces the stored dish's fields.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update(
        &self,
        dish_id: &EntityId,
        payload: &Payload,
    ) -> Result<Dish, DomainError> {
        let mut store = self.store.write().await;
        let fields =
            rules::validate_update(&store, dish_id, payload).inspect_err(record_rejection)?;

        let dish = store
            .replace_fields(dish_id, fields)
            .cloned()
            .ok_or_else(|| DomainError::NotFound {
                entity: "Dish",
                id: dish_id.clone(),
            })?;

        metrics::counter!("dishes_updated_total").increment(1);
        tracing::info!(%dish_id, "dish updated");
        Ok(dish)
    }

    /// Returns every dish in insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Vec<Dish> {
        self.store.read().await.list().to_vec()
    }
}
