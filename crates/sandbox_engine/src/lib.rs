//! # Sandbox Engine
//!
//! Simulation core for a small 3D rendering sandbox: a pool of kinematic
//! entities, integrated once per frame and tested pairwise for
//! axis-aligned bounding box overlap before being handed to a renderer.
//!
//! ## Features
//!
//! - **Entity Pool**: dense slot storage with LIFO free-list recycling and
//!   generation-checked ids
//! - **AABB Collision**: per-model object-space boxes, translated per entity
//! - **Model Loading**: Wavefront OBJ and procedural primitives
//! - **Render Seam**: draw commands recorded through a `Renderer` trait
//! - **Scene Config**: TOML/RON scene descriptions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sandbox_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut context = AppContext::new(FrameClock::fixed(1.0 / 60.0));
//!     let shader = context.register_shader(
//!         ShaderProgramBuilder::new("basic")
//!             .vertex_shader("shaders/basic.vert")
//!             .fragment_shader("shaders/basic.frag")
//!             .build()?,
//!     );
//!     let cube = context.register_model(Model::new("cube", vec![Mesh::cube(0.5)]));
//!
//!     let mut pool = EntityPool::new();
//!     pool.create(
//!         &context,
//!         Vec3::zeros(),
//!         Vec3::zeros(),
//!         Vec3::new(0.0, -9.8, 0.0),
//!         shader,
//!         cube,
//!     )?;
//!
//!     let mut queue = DrawQueue::new();
//!     context.begin_frame();
//!     pool.tick(&context, &mut queue)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod foundation;
pub mod config;
pub mod physics;
pub mod assets;
pub mod scene;
pub mod render;
pub mod ecs;
pub mod debug;

mod context;

pub use context::{AppContext, ModelHandle, ShaderHandle};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        AppContext, ModelHandle, ShaderHandle,
        foundation::{
            math::{Vec3, Mat4, Point3},
            time::FrameClock,
        },
        physics::Aabb,
        ecs::{EntityPool, EntityId, Entity, Kinematics, EcsError, TickStats},
        scene::{Mesh, Model, Vertex},
        render::{Renderer, DrawCommand, DrawQueue, ShaderProgram, ShaderProgramBuilder},
        debug::{CollisionColor, EntityTable},
        core::config::{SandboxConfig, SimulationConfig, SceneConfig},
        config::Config,
    };
}
