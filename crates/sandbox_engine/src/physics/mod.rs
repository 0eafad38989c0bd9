//! Physics module for collision detection
//!
//! Only axis-aligned bounding boxes are supported. There is no broad phase;
//! callers test pairs directly.

pub mod aabb;

pub use aabb::Aabb;
