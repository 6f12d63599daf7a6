//! In-memory storage for dishes and orders.
//!
//! An [`EntityStore`] is a plain ordered collection; concurrent access goes
//! through a [`SharedStore`] handle owned by the application's composition
//! root.

pub mod store;

use std::sync::Arc;

use tokio::sync::RwLock;

pub use common::EntityId;
pub use store::{Entity, EntityStore};

/// Lock-guarded handle to an entity store shared between request handlers.
///
/// Callers that validate against the stored state and then mutate it must do
/// both under one write guard.
pub type SharedStore<T> = Arc<RwLock<EntityStore<T>>>;

/// Wraps a store into a [`SharedStore`] handle.
pub fn shared<T: Entity>(store: EntityStore<T>) -> SharedStore<T> {
    Arc::new(RwLock::new(store))
}
