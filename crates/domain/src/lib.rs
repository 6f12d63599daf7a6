//! Domain layer for the restaurant orders system.
//!
//! This crate provides:
//! - field validators over raw request payloads
//! - the dish and order rule chains
//! - the order lifecycle (`OrderStatus`)
//! - services that run a rule chain and apply the result to a store

pub mod dish;
pub mod error;
pub mod order;
pub mod validation;

pub use dish::{Dish, DishFields, DishService};
pub use error::DomainError;
pub use order::{Order, OrderFields, OrderLine, OrderService, OrderStatus};
pub use validation::Payload;
