//! Debug visualization helpers
//!
//! Collision tinting for bounding boxes and a plain-text entity table that
//! stands in for an on-screen diagnostics panel.

pub mod collision_debug;
pub mod entity_table;

pub use collision_debug::CollisionColor;
pub use entity_table::EntityTable;
