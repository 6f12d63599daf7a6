//! Shared identifier types and the id-generation collaborator.

mod ids;
mod types;

pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use types::EntityId;
