//! Scene data: meshes, models and scene setup from configuration

pub mod mesh;
pub mod model;
pub mod setup;

pub use mesh::{Mesh, Vertex};
pub use model::Model;
pub use setup::{populate, SceneError, SceneSummary};
