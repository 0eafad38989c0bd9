//! Application context
//!
//! Everything the simulation reads from "the outside" per frame: the clock,
//! the pause and wireframe flags, and the model and shader registries.
//! Constructed by the host and passed by reference wherever it is needed.

use crate::foundation::collections::HandleMap;
use crate::foundation::time::FrameClock;
use crate::render::ShaderProgram;
use crate::scene::Model;

pub use crate::foundation::collections::{ModelHandle, ShaderHandle};

/// Per-application state shared by the simulation and the renderer
#[derive(Debug, Default)]
pub struct AppContext {
    clock: FrameClock,
    paused: bool,
    wireframe: bool,
    models: HandleMap<ModelHandle, Model>,
    shaders: HandleMap<ShaderHandle, ShaderProgram>,
}

impl AppContext {
    /// Create a context driven by the given clock
    pub fn new(clock: FrameClock) -> Self {
        Self {
            clock,
            ..Default::default()
        }
    }

    /// Advance the clock; call once at the start of every frame
    pub fn begin_frame(&mut self) {
        self.clock.update();
    }

    /// Seconds elapsed since the previous frame
    pub fn delta_time(&self) -> f32 {
        self.clock.delta_time()
    }

    /// The frame clock
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Whether entity updates are suspended
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Suspend or resume entity updates
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            log::info!("Simulation {}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    /// Flip the pause flag and return the new value
    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    /// Whether the renderer should draw wireframes
    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// Flip wireframe mode and return the new value
    pub fn toggle_wireframe(&mut self) -> bool {
        self.wireframe = !self.wireframe;
        log::info!("Wireframe mode: {}", self.wireframe);
        self.wireframe
    }

    /// Register a model; models live as long as the context
    pub fn register_model(&mut self, model: Model) -> ModelHandle {
        log::debug!(
            "Registered model '{}' ({} meshes, {} vertices)",
            model.name(),
            model.meshes().len(),
            model.vertex_count()
        );
        self.models.insert(model)
    }

    /// Look up a model
    pub fn model(&self, handle: ModelHandle) -> Option<&Model> {
        self.models.get(handle)
    }

    /// Find a model handle by name
    pub fn find_model(&self, name: &str) -> Option<ModelHandle> {
        self.models
            .iter()
            .find_map(|(handle, model)| (model.name() == name).then_some(handle))
    }

    /// Number of registered models
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Register a shader program
    pub fn register_shader(&mut self, shader: ShaderProgram) -> ShaderHandle {
        log::debug!("Registered shader program '{}'", shader.name());
        self.shaders.insert(shader)
    }

    /// Look up a shader program
    pub fn shader(&self, handle: ShaderHandle) -> Option<&ShaderProgram> {
        self.shaders.get(handle)
    }

    /// Find a shader handle by name
    pub fn find_shader(&self, name: &str) -> Option<ShaderHandle> {
        self.shaders
            .iter()
            .find_map(|(handle, shader)| (shader.name() == name).then_some(handle))
    }

    /// Number of registered shader programs
    pub fn shader_count(&self) -> usize {
        self.shaders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ShaderProgramBuilder;
    use crate::scene::Mesh;

    #[test]
    fn test_registries() {
        let mut context = AppContext::default();
        let cube = context.register_model(Model::new("cube", vec![Mesh::cube(1.0)]));
        let basic = context.register_shader(
            ShaderProgramBuilder::new("basic")
                .vertex_shader("basic.vert")
                .fragment_shader("basic.frag")
                .build()
                .unwrap(),
        );

        assert_eq!(context.model(cube).map(Model::name), Some("cube"));
        assert_eq!(context.shader(basic).map(ShaderProgram::name), Some("basic"));
        assert_eq!(context.find_model("cube"), Some(cube));
        assert_eq!(context.find_shader("basic"), Some(basic));
        assert_eq!(context.find_model("missing"), None);
        assert_eq!(context.model_count(), 1);
        assert_eq!(context.shader_count(), 1);
    }

    #[test]
    fn test_handles_from_another_context_are_rejected() {
        let mut other = AppContext::default();
        other.register_model(Model::new("a", Vec::new()));
        let foreign = other.register_model(Model::new("b", Vec::new()));

        let mut context = AppContext::default();
        context.register_model(Model::new("only", Vec::new()));

        assert!(context.model(foreign).is_none());
    }

    #[test]
    fn test_flags() {
        let mut context = AppContext::new(FrameClock::fixed(0.1));
        assert!(!context.is_paused());
        assert!(context.toggle_pause());
        assert!(!context.toggle_pause());
        assert!(context.toggle_wireframe());

        context.begin_frame();
        assert_eq!(context.delta_time(), 0.1);
    }
}
