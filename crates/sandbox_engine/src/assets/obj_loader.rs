//! OBJ file loader for 3D models
//!
//! Reads positions, normals, texture coordinates and faces. Every `o` or `g`
//! statement starts a new mesh, so a multi-part file becomes a multi-mesh
//! model. Polygons are fan-triangulated. Materials and smoothing groups are
//! ignored.

use crate::scene::{Mesh, Model, Vertex};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// OBJ loading errors
#[derive(Error, Debug)]
pub enum ObjError {
    /// The file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A statement could not be parsed
    #[error("Parse error on line {line}: {message}")]
    ParseError {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },
    /// The file parsed but does not describe usable geometry
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Wavefront OBJ loader
pub struct ObjLoader;

#[derive(Default)]
struct ObjState {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    tex_coords: Vec<[f32; 2]>,
    meshes: Vec<Mesh>,
    current: Mesh,
}

impl ObjState {
    fn finish_mesh(&mut self) {
        if !self.current.vertices.is_empty() {
            self.meshes.push(std::mem::take(&mut self.current));
        }
    }
}

impl ObjLoader {
    /// Load an OBJ file into a model named after the file stem
    pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Model, ObjError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("model")
            .to_string();

        let meshes = Self::load_meshes(path)?;
        let model = Model::new(name, meshes);
        log::info!(
            "Loaded '{}': {} meshes, {} vertices",
            path.display(),
            model.meshes().len(),
            model.vertex_count()
        );
        Ok(model)
    }

    /// Load an OBJ file and return its meshes
    pub fn load_meshes<P: AsRef<Path>>(path: P) -> Result<Vec<Mesh>, ObjError> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    /// Parse OBJ text from any reader
    pub fn parse<R: BufRead>(reader: R) -> Result<Vec<Mesh>, ObjError> {
        let mut state = ObjState::default();

        for (line_index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = line_index + 1;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();

            match parts[0] {
                "v" => {
                    let [x, y, z] = parse_floats::<3>(&parts, line_number, "vertex")?;
                    state.positions.push([x, y, z]);
                }
                "vn" => {
                    let [x, y, z] = parse_floats::<3>(&parts, line_number, "normal")?;
                    state.normals.push([x, y, z]);
                }
                "vt" => {
                    let [u, v] = parse_floats::<2>(&parts, line_number, "tex coord")?;
                    state.tex_coords.push([u, v]);
                }
                "o" | "g" => state.finish_mesh(),
                "f" => parse_face(&mut state, &parts, line_number)?,
                _ => {
                    // Ignore other commands
                }
            }
        }

        state.finish_mesh();

        if state.meshes.is_empty() {
            return Err(ObjError::InvalidFormat("no faces found in OBJ file".to_string()));
        }

        Ok(state.meshes)
    }
}

fn parse_floats<const N: usize>(
    parts: &[&str],
    line: usize,
    what: &str,
) -> Result<[f32; N], ObjError> {
    if parts.len() < N + 1 {
        return Err(ObjError::ParseError {
            line,
            message: format!("{what} needs {N} components"),
        });
    }

    let mut values = [0.0; N];
    for (value, raw) in values.iter_mut().zip(&parts[1..=N]) {
        *value = raw.parse().map_err(|_| ObjError::ParseError {
            line,
            message: format!("invalid {what} component '{raw}'"),
        })?;
    }
    Ok(values)
}

/// Resolve a 1-based (or negative, relative) OBJ index against `len` items
fn resolve_index(raw: &str, len: usize, line: usize) -> Result<usize, ObjError> {
    let index: i64 = raw.parse().map_err(|_| ObjError::ParseError {
        line,
        message: format!("invalid index '{raw}'"),
    })?;

    let resolved = match index {
        i if i > 0 => i - 1,
        i if i < 0 => len as i64 + i,
        _ => -1,
    };

    usize::try_from(resolved)
        .ok()
        .filter(|&i| i < len)
        .ok_or_else(|| ObjError::InvalidFormat(format!("index {index} out of bounds on line {line}")))
}

fn parse_face(state: &mut ObjState, parts: &[&str], line: usize) -> Result<(), ObjError> {
    if parts.len() < 4 {
        return Err(ObjError::ParseError {
            line,
            message: "face needs at least 3 vertices".to_string(),
        });
    }

    let mut face_indices = Vec::with_capacity(parts.len() - 1);

    for vertex_data in &parts[1..] {
        let mut fields = vertex_data.split('/');

        let position_raw = fields.next().unwrap_or_default();
        let position = state.positions[resolve_index(position_raw, state.positions.len(), line)?];

        let tex_coord = match fields.next() {
            Some(raw) if !raw.is_empty() => {
                state.tex_coords[resolve_index(raw, state.tex_coords.len(), line)?]
            }
            _ => [0.0, 0.0],
        };

        let normal = match fields.next() {
            Some(raw) if !raw.is_empty() => state.normals[resolve_index(raw, state.normals.len(), line)?],
            _ => [0.0, 1.0, 0.0],
        };

        let mesh = &mut state.current;
        let index = u32::try_from(mesh.vertices.len())
            .map_err(|_| ObjError::InvalidFormat("mesh has too many vertices".to_string()))?;
        mesh.vertices.push(Vertex::new(position, normal, tex_coord));
        face_indices.push(index);
    }

    // Triangulate face (simple fan triangulation)
    for i in 1..(face_indices.len() - 1) {
        state.current.indices.extend_from_slice(&[
            face_indices[0],
            face_indices[i],
            face_indices[i + 1],
        ]);
    }

    Ok(())
}
