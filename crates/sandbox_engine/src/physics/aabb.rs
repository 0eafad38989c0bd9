//! Axis-aligned bounding boxes
//!
//! Boxes are computed once per model in object space and moved into world
//! space by translating their two corners.

use crate::foundation::math::{utils, Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

impl Aabb {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The empty box: `min = +inf`, `max = -inf` on every axis
    ///
    /// Growing it by any point yields a box around that point. Tested
    /// against anything, it never overlaps.
    pub fn empty() -> Self {
        Self {
            min: Vec3::repeat(f32::INFINITY),
            max: Vec3::repeat(f32::NEG_INFINITY),
        }
    }

    /// Smallest box containing every point; empty for an empty iterator
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vec3>,
    {
        points.into_iter().fold(Self::empty(), |bounds, p| bounds.grown(p))
    }

    /// Whether no point has been accumulated into this box
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Whether both corners have finite coordinates
    pub fn is_finite(&self) -> bool {
        self.min.iter().chain(self.max.iter()).all(|v| v.is_finite())
    }

    /// Extend the box to contain `point`
    pub fn grown(&self, point: Vec3) -> Self {
        Self {
            min: utils::component_min(self.min, point),
            max: utils::component_max(self.max, point),
        }
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: utils::component_min(self.min, other.min),
            max: utils::component_max(self.max, other.max),
        }
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the extents (half-size) of the AABB
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Check if this AABB contains a point (boundary inclusive)
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Check if this AABB intersects another AABB
    ///
    /// Touching faces count as an overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Apply a homogeneous transform to the `min` and `max` corners
    ///
    /// Only the two stored corners are transformed, not all eight, and the
    /// results are not re-sorted. This is exact for translation-only
    /// transforms. A rotation leaves the box misaligned with the axes and a
    /// negative scale can swap which corner is the minimum; neither case is
    /// detected. A box with infinite corners (such as [`Aabb::empty`]) is
    /// returned unchanged.
    pub fn transformed(&self, transform: &Mat4) -> Self {
        if !self.is_finite() {
            return *self;
        }
        Self {
            min: utils::transform_point(transform, self.min),
            max: utils::transform_point(transform, self.max),
        }
    }

    /// Move the box by `offset`
    pub fn translated(&self, offset: Vec3) -> Self {
        self.transformed(&utils::translation(offset))
    }
}
