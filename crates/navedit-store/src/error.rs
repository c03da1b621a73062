//! Error types for the mapping store

use navedit_ids::MappingError;

/// Main store error type
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A transition was refused by the mapping layer
    #[error("mapping rejected: {0}")]
    Mapping(#[from] MappingError),
}
