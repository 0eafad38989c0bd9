//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Handle to a model registered in an [`AppContext`](crate::AppContext)
    pub struct ModelHandle;

    /// Handle to a shader program registered in an [`AppContext`](crate::AppContext)
    pub struct ShaderHandle;
}

/// Handle-keyed registry with stable, generation-checked references
pub type HandleMap<K, T> = SlotMap<K, T>;
