//! Models: named mesh collections with one precomputed bounding box

use super::mesh::Mesh;
use crate::physics::Aabb;
use crate::render::{DrawCommand, Renderer};

/// Immutable collection of meshes plus its object-space bounds
///
/// Shared by handle between every entity that uses it.
#[derive(Debug, Clone)]
pub struct Model {
    name: String,
    meshes: Vec<Mesh>,
    bounds: Aabb,
}

impl Model {
    /// Build a model and compute its bounds across all meshes
    ///
    /// A model without vertices gets [`Aabb::empty`] and never collides.
    pub fn new(name: impl Into<String>, meshes: Vec<Mesh>) -> Self {
        let bounds = meshes
            .iter()
            .fold(Aabb::empty(), |acc, mesh| acc.union(&mesh.bounds()));
        Self {
            name: name.into(),
            meshes,
            bounds,
        }
    }

    /// Model name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Meshes making up the model
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Object-space bounding box
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Total vertices across all meshes
    pub fn vertex_count(&self) -> usize {
        self.meshes.iter().map(|m| m.vertices.len()).sum()
    }

    /// Total indices across all meshes
    pub fn index_count(&self) -> usize {
        self.meshes.iter().map(|m| m.indices.len()).sum()
    }

    /// Submit this model to a renderer
    ///
    /// Fills in the world-space bounds and index count from the model before
    /// handing the command over.
    pub fn draw(&self, renderer: &mut dyn Renderer, command: DrawCommand) {
        let world_bounds = self.bounds.transformed(&command.transform);
        renderer.submit(
            command
                .with_world_bounds(world_bounds)
                .with_index_count(self.index_count()),
        );
    }
}
