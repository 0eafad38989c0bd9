//! Scene setup from configuration
//!
//! Registers the configured shaders and models with an [`AppContext`] and
//! spawns the configured entities into an [`EntityPool`].

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::assets::{ObjError, ObjLoader};
use crate::config::ConfigError;
use crate::context::{AppContext, ModelHandle, ShaderHandle};
use crate::core::config::{ModelSource, SandboxConfig};
use crate::ecs::{EcsError, EntityId, EntityPool};
use crate::render::{ShaderError, ShaderProgramBuilder};
use crate::scene::{Mesh, Model};

/// Scene setup errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// The configuration is inconsistent
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A model file failed to load
    #[error("Failed to load model '{name}': {source}")]
    Model {
        /// Model name from the configuration
        name: String,
        /// Loader error
        source: ObjError,
    },

    /// A shader program could not be built
    #[error("Shader error: {0}")]
    Shader(#[from] ShaderError),

    /// An entity could not be spawned
    #[error("ECS error: {0}")]
    Ecs(#[from] EcsError),
}

/// What [`populate`] registered and spawned
#[derive(Debug, Clone, Default)]
pub struct SceneSummary {
    /// Shader handles by configured name
    pub shaders: HashMap<String, ShaderHandle>,
    /// Model handles by configured name
    pub models: HashMap<String, ModelHandle>,
    /// Spawned entities in configuration order
    pub entities: Vec<EntityId>,
}

/// Register everything in `config.scene` and spawn its entities
///
/// Relative shader and model paths are resolved against `base_dir`,
/// normally the directory holding the configuration file.
pub fn populate(
    config: &SandboxConfig,
    base_dir: &Path,
    context: &mut AppContext,
    pool: &mut EntityPool,
) -> Result<SceneSummary, SceneError> {
    config.validate()?;
    let scene = &config.scene;
    let mut summary = SceneSummary::default();

    for entry in &scene.shaders {
        let program = ShaderProgramBuilder::new(entry.name.as_str())
            .vertex_shader(base_dir.join(&entry.vertex))
            .fragment_shader(base_dir.join(&entry.fragment))
            .build()?;
        summary
            .shaders
            .insert(entry.name.clone(), context.register_shader(program));
    }

    for entry in &scene.models {
        let meshes = match &entry.source {
            ModelSource::Obj { path } => {
                ObjLoader::load_meshes(base_dir.join(path)).map_err(|source| SceneError::Model {
                    name: entry.name.clone(),
                    source,
                })?
            }
            ModelSource::Cube { half_extent } => vec![Mesh::cube(*half_extent)],
        };
        let handle = context.register_model(Model::new(entry.name.as_str(), meshes));
        summary.models.insert(entry.name.clone(), handle);
    }

    for spawn in &scene.entities {
        // Names were checked by validate()
        let (Some(&model), Some(&shader)) =
            (summary.models.get(&spawn.model), summary.shaders.get(&spawn.shader))
        else {
            continue;
        };

        let id = pool.create(
            context,
            spawn.position.into(),
            spawn.velocity.into(),
            spawn.acceleration.into(),
            shader,
            model,
        )?;
        summary.entities.push(id);
    }

    log::info!(
        "Scene populated: {} shaders, {} models, {} entities",
        summary.shaders.len(),
        summary.models.len(),
        summary.entities.len()
    );
    Ok(summary)
}
