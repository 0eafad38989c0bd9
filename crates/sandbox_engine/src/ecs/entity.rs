//! Entity implementation

use std::fmt;

use crate::context::{ModelHandle, ShaderHandle};

/// Entity identifier: a storage slot index plus that slot's generation
///
/// The index is reused once the entity is destroyed. The generation is bumped
/// on every destroy, so an id kept past its entity's death no longer matches
/// the slot's new occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId {
    index: u32,
    generation: u32,
}

impl EntityId {
    /// Create an id from its parts
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Storage slot index
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Slot generation at creation time
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub(crate) fn slot(&self) -> usize {
        self.index as usize
    }

    pub(crate) fn next_generation(self) -> Self {
        Self {
            index: self.index,
            generation: self.generation.wrapping_add(1),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// Entity record: identity, render references and liveness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    /// Identity of the current occupant of this slot
    pub id: EntityId,
    /// Model drawn for this entity
    pub model: ModelHandle,
    /// Shader the model is drawn with
    pub shader: ShaderHandle,
    /// False once destroyed, until the slot is recycled
    pub alive: bool,
}
