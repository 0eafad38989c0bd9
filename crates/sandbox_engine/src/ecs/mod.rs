//! Entity pool and its components
//!
//! A deliberately small entity system: one component set per entity
//! (kinematics plus a model/shader pair), stored densely and updated by a
//! single per-frame `tick`.

pub mod entity;
pub mod components;
pub mod pool;

#[cfg(test)]
mod tests;

pub use entity::{Entity, EntityId};
pub use components::Kinematics;
pub use pool::{EcsError, EntityPool, SlotView, TickStats};
