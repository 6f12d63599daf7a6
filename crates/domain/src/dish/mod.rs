//! Menu items.

pub mod rules;
mod service;

pub use service::DishService;

use common::EntityId;
use entity_store::Entity;
use serde::Serialize;

/// A menu item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dish {
    id: EntityId,
    name: String,
    description: String,
    price: f64,
    image_url: String,
}

/// Validated dish attributes, produced by the dish rule chain.
#[derive(Debug, Clone, PartialEq)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl Dish {
    /// Builds a dish from an id and validated fields.
    pub fn new(id: EntityId, fields: DishFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

impl Entity for Dish {
    type Changes = DishFields;
    const KIND: &'static str = "Dish";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn apply(&mut self, changes: DishFields) {
        self.name = changes.name;
        self.description = changes.description;
        self.price = changes.price;
        self.image_url = changes.image_url;
    }
}
