//! Math utilities and types
//!
//! Thin aliases over `nalgebra` so the rest of the engine speaks in `Vec3`
//! and `Mat4` the way shader code does.

pub use nalgebra::{Matrix4, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math utility functions
pub mod utils {
    use super::{Mat4, Point3, Vec3};

    /// Build a translation-only world transform
    pub fn translation(offset: Vec3) -> Mat4 {
        Mat4::new_translation(&offset)
    }

    /// Apply a homogeneous transform to a single point
    pub fn transform_point(transform: &Mat4, point: Vec3) -> Vec3 {
        transform.transform_point(&Point3::from(point)).coords
    }

    /// Component-wise minimum of two vectors
    pub fn component_min(a: Vec3, b: Vec3) -> Vec3 {
        a.zip_map(&b, f32::min)
    }

    /// Component-wise maximum of two vectors
    pub fn component_max(a: Vec3, b: Vec3) -> Vec3 {
        a.zip_map(&b, f32::max)
    }
}
