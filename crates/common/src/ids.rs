//! Id-generation collaborator.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::EntityId;

/// Produces unique identifiers for newly created entities.
///
/// Stores never check for duplicate ids; uniqueness is this trait's contract.
pub trait IdGenerator: Send + Sync + 'static {
    /// Returns an identifier that has not been handed out before.
    fn next_id(&self) -> EntityId;
}

/// Generates random v4 UUIDs rendered as 32 hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> EntityId {
        EntityId::new(Uuid::new_v4().simple().to_string())
    }
}

/// Generates `<prefix>-1`, `<prefix>-2`, ... in order.
///
/// Deterministic, which makes it convenient in tests and fixtures.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose ids start at `<prefix>-1`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> EntityId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        EntityId::new(format!("{}-{n}", self.prefix))
    }
}
