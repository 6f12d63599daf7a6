use crate::EntityId;

/// An entity that can live in an [`EntityStore`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Replaceable fields of the entity. Never carries the id.
    type Changes;

    /// Human-readable entity name, e.g. `"Dish"`.
    const KIND: &'static str;

    /// Returns the entity's immutable identifier.
    fn id(&self) -> &EntityId;

    /// Overwrites every field carried by `changes`.
    fn apply(&mut self, changes: Self::Changes);
}

/// Ordered collection of entities of one type, keyed by id.
///
/// Listing follows insertion order. Ids are not checked for uniqueness on
/// append; that is the id generator's job.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    entities: Vec<T>,
}

impl<T: Entity> EntityStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Creates a store pre-populated with `entities`, in the given order.
    pub fn with_entities(entities: Vec<T>) -> Self {
        Self { entities }
    }

    /// Appends an entity and returns a reference to the stored value.
    pub fn append(&mut self, entity: T) -> &T {
        tracing::debug!(kind = T::KIND, id = %entity.id(), "appending entity");
        self.entities.push(entity);
        let last = self.entities.len() - 1;
        &self.entities[last]
    }

    /// Looks up an entity by id.
    pub fn find_by_id(&self, id: &EntityId) -> Option<&T> {
        self.entities.iter().find(|e| e.id() == id)
    }

    /// Returns true if an entity with this id is stored.
    pub fn contains(&self, id: &EntityId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Applies `changes` to the stored entity in place.
    ///
    /// The entity keeps its slot and its id. Returns `None` when no entity
    /// has this id.
    pub fn replace_fields(&mut self, id: &EntityId, changes: T::Changes) -> Option<&T> {
        let entity = self.entities.iter_mut().find(|e| e.id() == id)?;
        entity.apply(changes);
        tracing::debug!(kind = T::KIND, %id, "replaced entity fields");
        Some(&*entity)
    }

    /// Removes the entity with this id, returning it.
    pub fn remove(&mut self, id: &EntityId) -> Option<T> {
        let index = self.entities.iter().position(|e| e.id() == id)?;
        tracing::debug!(kind = T::KIND, %id, "removing entity");
        Some(self.entities.remove(index))
    }

    /// Returns all entities in insertion order.
    pub fn list(&self) -> &[T] {
        &self.entities
    }

    /// Returns the number of stored entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the store holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
