//! Startup fixtures loaded into the stores.

use std::path::{Path, PathBuf};

use common::EntityId;
use domain::{Dish, DomainError, Order, Payload, dish, order};
use entity_store::{Entity, EntityStore};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record failed the same rules a create request goes through.
    #[error("invalid seed {entity} at index {index}: {source}")]
    Invalid {
        entity: &'static str,
        index: usize,
        #[source]
        source: DomainError,
    },

    #[error("duplicate seed {entity} id: {id}")]
    DuplicateId { entity: &'static str, id: EntityId },
}

/// Raw fixture records, e.g. `{ "dishes": [...], "orders": [...] }`.
#[derive(Debug, Default, Deserialize)]
pub struct SeedRecords {
    #[serde(default)]
    pub dishes: Vec<Payload>,
    #[serde(default)]
    pub orders: Vec<Payload>,
}

/// Validated initial store contents.
#[derive(Debug, Default)]
pub struct Seed {
    pub dishes: EntityStore<Dish>,
    pub orders: EntityStore<Order>,
}

impl Seed {
    /// Reads and validates a seed from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records: SeedRecords =
            serde_json::from_str(&raw).map_err(|source| SeedError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Self::try_from(records)
    }
}

impl TryFrom<SeedRecords> for Seed {
    type Error = SeedError;

    /// Runs every record through its create rule chain, keeping the record's
    /// own id (required) and status (optional, defaults to `pending`).
    fn try_from(records: SeedRecords) -> Result<Self, Self::Error> {
        let mut seed = Seed::default();

        for (index, payload) in records.dishes.iter().enumerate() {
            let record = seed_id(payload)
                .and_then(|id| Ok(Dish::new(id, dish::rules::validate_create(payload)?)))
                .map_err(|source| invalid::<Dish>(index, source))?;
            insert(&mut seed.dishes, record)?;
        }

        for (index, payload) in records.orders.iter().enumerate() {
            let record = seed_id(payload)
                .and_then(|id| Ok(Order::new(id, order::rules::validate_create(payload)?)))
                .map_err(|source| invalid::<Order>(index, source))?;
            insert(&mut seed.orders, record)?;
        }

        Ok(seed)
    }
}

fn seed_id(payload: &Payload) -> Result<EntityId, DomainError> {
    payload
        .id()
        .map(EntityId::from)
        .ok_or_else(|| DomainError::invalid_field("id", "Seed record must include an id"))
}

fn invalid<T: Entity>(index: usize, source: DomainError) -> SeedError {
    SeedError::Invalid {
        entity: T::KIND,
        index,
        source,
    }
}

fn insert<T: Entity>(store: &mut EntityStore<T>, entity: T) -> Result<(), SeedError> {
    if store.contains(entity.id()) {
        return Err(SeedError::DuplicateId {
            entity: T::KIND,
            id: entity.id().clone(),
        });
    }
    store.append(entity);
    Ok(())
}
