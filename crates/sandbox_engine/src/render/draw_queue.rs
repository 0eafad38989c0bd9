//! Draw commands and a recording queue

use crate::context::{ModelHandle, ShaderHandle};
use crate::ecs::EntityId;
use crate::foundation::math::{Mat4, Vec3};
use crate::physics::Aabb;

use super::Renderer;

/// One model draw at a world transform, tinted by its collision state
#[derive(Debug, Clone)]
pub struct DrawCommand {
    /// Entity that requested the draw
    pub entity: EntityId,
    /// Model to draw
    pub model: ModelHandle,
    /// Shader program to draw with
    pub shader: ShaderHandle,
    /// Object-to-world transform
    pub transform: Mat4,
    /// Bounding box debug colour (rgb)
    pub debug_color: Vec3,
    /// Model bounds moved into world space
    pub world_bounds: Aabb,
    /// Total indices across the model's meshes
    pub index_count: usize,
    /// Rasterize as lines instead of filled triangles
    pub wireframe: bool,
}

impl DrawCommand {
    /// Create a draw command with a black debug colour
    pub fn new(entity: EntityId, model: ModelHandle, shader: ShaderHandle, transform: Mat4) -> Self {
        Self {
            entity,
            model,
            shader,
            transform,
            debug_color: Vec3::zeros(),
            world_bounds: Aabb::empty(),
            index_count: 0,
            wireframe: false,
        }
    }

    /// Set the debug colour
    pub fn with_debug_color(mut self, color: Vec3) -> Self {
        self.debug_color = color;
        self
    }

    /// Set the world-space bounds
    pub fn with_world_bounds(mut self, bounds: Aabb) -> Self {
        self.world_bounds = bounds;
        self
    }

    /// Set the index count
    pub fn with_index_count(mut self, index_count: usize) -> Self {
        self.index_count = index_count;
        self
    }

    /// Set the polygon mode
    pub fn with_wireframe(mut self, wireframe: bool) -> Self {
        self.wireframe = wireframe;
        self
    }
}

/// Renderer that records commands in submission order
#[derive(Debug, Default)]
pub struct DrawQueue {
    commands: Vec<DrawCommand>,
}

impl DrawQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every recorded command
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded commands, in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands submitted for one entity
    pub fn commands_for(&self, entity: EntityId) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.entity == entity)
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Take the recorded commands, leaving the queue empty
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Renderer for DrawQueue {
    fn submit(&mut self, command: DrawCommand) {
        log::trace!(
            "draw entity {} color ({}, {}, {})",
            command.entity,
            command.debug_color.x,
            command.debug_color.y,
            command.debug_color.z
        );
        self.commands.push(command);
    }
}
