//! Rendering seam
//!
//! The simulation never talks to a graphics API. It builds [`DrawCommand`]s
//! and hands them to a [`Renderer`]; a real backend implements the trait, and
//! [`DrawQueue`] records them for headless runs and tests.

pub mod draw_queue;
pub mod shader;

pub use draw_queue::{DrawCommand, DrawQueue};
pub use shader::{ShaderError, ShaderProgram, ShaderProgramBuilder, ShaderStage};

/// Receiver of per-entity draw requests
pub trait Renderer {
    /// Queue or immediately execute a draw
    fn submit(&mut self, command: DrawCommand);
}
