//! Shader program descriptors
//!
//! A shader program here is only the pair of stage paths a backend will
//! compile. Reading and compiling the sources belongs to the backend.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Programmable pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex stage
    Vertex,
    /// Fragment stage
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

/// Shader program errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// A stage was never given a source path
    #[error("shader program '{program}' is missing a {stage} shader")]
    MissingStage {
        /// Program name
        program: String,
        /// Stage without a path
        stage: ShaderStage,
    },
}

/// Vertex + fragment shader pair, identified by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderProgram {
    name: String,
    vertex_path: PathBuf,
    fragment_path: PathBuf,
}

impl ShaderProgram {
    /// Program name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vertex stage source path
    pub fn vertex_path(&self) -> &Path {
        &self.vertex_path
    }

    /// Fragment stage source path
    pub fn fragment_path(&self) -> &Path {
        &self.fragment_path
    }
}

/// Builder for [`ShaderProgram`]
#[derive(Debug, Clone, Default)]
pub struct ShaderProgramBuilder {
    name: String,
    vertex_path: Option<PathBuf>,
    fragment_path: Option<PathBuf>,
}

impl ShaderProgramBuilder {
    /// Start a program with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the vertex stage source
    #[must_use]
    pub fn vertex_shader(mut self, path: impl Into<PathBuf>) -> Self {
        self.vertex_path = Some(path.into());
        self
    }

    /// Set the fragment stage source
    #[must_use]
    pub fn fragment_shader(mut self, path: impl Into<PathBuf>) -> Self {
        self.fragment_path = Some(path.into());
        self
    }

    /// Finish the program; both stages are required
    pub fn build(self) -> Result<ShaderProgram, ShaderError> {
        let vertex_path = self.vertex_path.ok_or_else(|| ShaderError::MissingStage {
            program: self.name.clone(),
            stage: ShaderStage::Vertex,
        })?;
        let fragment_path = self.fragment_path.ok_or_else(|| ShaderError::MissingStage {
            program: self.name.clone(),
            stage: ShaderStage::Fragment,
        })?;

        Ok(ShaderProgram {
            name: self.name,
            vertex_path,
            fragment_path,
        })
    }
}
