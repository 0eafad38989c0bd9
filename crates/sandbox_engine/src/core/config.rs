//! # Sandbox Configuration
//!
//! Scene and simulation settings loaded from TOML or RON.
//!
//! ## Configuration Categories
//!
//! - **Simulation**: clock mode, pause state, run length, logging cadence
//! - **Scene**: shader programs, models and the entities to spawn

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::foundation::time::FrameClock;

pub use crate::config::{Config, ConfigError};

/// Top-level sandbox configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Simulation loop settings
    pub simulation: SimulationConfig,
    /// Scene contents
    pub scene: SceneConfig,
}

impl Config for SandboxConfig {}

impl SandboxConfig {
    /// Load a configuration file and validate it
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;
        self.scene.validate()
    }
}

/// # Simulation Configuration
///
/// `fixed_delta_time` selects a deterministic fixed-step clock; leave it out
/// to run on wall-clock time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seconds per frame for a fixed-step clock
    pub fixed_delta_time: Option<f32>,
    /// Start with entity updates suspended
    pub start_paused: bool,
    /// Number of frames the headless loop runs
    pub frames: u64,
    /// Slots to reserve in the entity pool up front
    pub initial_capacity: usize,
    /// Log the entity table every this many frames (0 disables it)
    pub log_every: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fixed_delta_time: Some(1.0 / 60.0),
            start_paused: false,
            frames: 600,
            initial_capacity: 16,
            log_every: 60,
        }
    }
}

impl SimulationConfig {
    /// Build the frame clock these settings describe
    pub fn clock(&self) -> FrameClock {
        self.fixed_delta_time.map_or_else(FrameClock::new, FrameClock::fixed)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.fixed_delta_time {
            Some(step) if !(step.is_finite() && step > 0.0) => Err(ConfigError::Invalid(format!(
                "fixed_delta_time must be positive, got {step}"
            ))),
            _ => Ok(()),
        }
    }
}

/// Named shader program with its two stage paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderEntry {
    /// Name entities refer to
    pub name: String,
    /// Vertex shader path
    pub vertex: String,
    /// Fragment shader path
    pub fragment: String,
}

/// Where a model's geometry comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModelSource {
    /// Wavefront OBJ file, relative to the config file
    Obj {
        /// File path
        path: String,
    },
    /// Procedural axis-aligned cube centred on the origin
    Cube {
        /// Half the edge length
        half_extent: f32,
    },
}

/// Named model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Name entities refer to
    pub name: String,
    /// Geometry source
    pub source: ModelSource,
}

/// One entity to create when the scene is populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpawn {
    /// Model name
    pub model: String,
    /// Shader name
    pub shader: String,
    /// Initial position
    #[serde(default)]
    pub position: [f32; 3],
    /// Initial velocity
    #[serde(default)]
    pub velocity: [f32; 3],
    /// Constant acceleration
    #[serde(default)]
    pub acceleration: [f32; 3],
}

/// Scene contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Shader programs to register
    pub shaders: Vec<ShaderEntry>,
    /// Models to load or generate
    pub models: Vec<ModelEntry>,
    /// Entities to spawn, in order
    pub entities: Vec<EntitySpawn>,
}

impl SceneConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let shaders = unique_names("shader", self.shaders.iter().map(|s| s.name.as_str()))?;
        let models = unique_names("model", self.models.iter().map(|m| m.name.as_str()))?;

        for model in &self.models {
            if let ModelSource::Cube { half_extent } = model.source {
                if !(half_extent.is_finite() && half_extent > 0.0) {
                    return Err(ConfigError::Invalid(format!(
                        "model '{}' has non-positive half_extent {half_extent}",
                        model.name
                    )));
                }
            }
        }

        for (index, spawn) in self.entities.iter().enumerate() {
            if !models.contains(spawn.model.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "entity {index} refers to unknown model '{}'",
                    spawn.model
                )));
            }
            if !shaders.contains(spawn.shader.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "entity {index} refers to unknown shader '{}'",
                    spawn.shader
                )));
            }
        }

        Ok(())
    }
}

fn unique_names<'a>(
    kind: &str,
    names: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>, ConfigError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ConfigError::Invalid(format!("duplicate {kind} name '{name}'")));
        }
    }
    Ok(seen)
}
