//! Mesh representation for 3D models
//!
//! Pure vertex/index data. Uploading it to a GPU is the renderer's job; the
//! only thing the simulation reads from a mesh is its bounding box.

use crate::foundation::math::Vec3;
use crate::physics::Aabb;
use bytemuck::{Pod, Zeroable};

/// Vertex data structure with position, normal, and texture coordinates
///
/// `#[repr(C)]` keeps the layout stable for GPU buffer uploads.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Object-space position
    pub position: [f32; 3],
    /// Surface normal
    pub normal: [f32; 3],
    /// Texture coordinate
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Create a vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self { position, normal, tex_coord }
    }

    /// Position as a vector
    pub fn position_vec(&self) -> Vec3 {
        Vec3::from(self.position)
    }
}

/// Indexed triangle mesh
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex buffer contents
    pub vertices: Vec<Vertex>,
    /// Triangle list indices into `vertices`
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a mesh from vertices and indices
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Object-space bounds over every vertex
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(Vertex::position_vec))
    }

    /// Number of triangles described by the index buffer
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw bytes of the vertex buffer, ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes of the index buffer, ready for upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Axis-aligned cube centered on the origin, four vertices per face
    pub fn cube(half_extent: f32) -> Self {
        let h = half_extent;
        // (normal, u axis, v axis) for each face
        let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
            ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
            ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
            ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (normal, u_axis, v_axis) in faces {
            let n = Vec3::from(normal);
            let u = Vec3::from(u_axis);
            let v = Vec3::from(v_axis);
            let base = vertices.len() as u32;

            for (su, sv, tex_coord) in [
                (-1.0, -1.0, [0.0, 0.0]),
                (1.0, -1.0, [1.0, 0.0]),
                (1.0, 1.0, [1.0, 1.0]),
                (-1.0, 1.0, [0.0, 1.0]),
            ] {
                let p = (n + u * su + v * sv) * h;
                vertices.push(Vertex::new([p.x, p.y, p.z], normal, tex_coord));
            }

            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self { vertices, indices }
    }
}
