/// Error types for graph store operations

use thiserror::Error;

/// Graph store errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Name does not resolve to a registered city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Index outside `[0, num_cities)`
    #[error("Invalid city index {index}: graph has {num_cities} cities")]
    InvalidCityIndex { index: usize, num_cities: usize },

    /// Name already bound to another index (strict mode only)
    #[error("City name {name:?} is already registered at index {index}")]
    DuplicateCity { name: String, index: usize },

    /// Negative or non-finite flight attribute
    #[error("Invalid {attribute} for flight {from} -> {to}: {value}")]
    InvalidEdgeWeight {
        from: String,
        to: String,
        attribute: &'static str,
        value: f64,
    },
}

/// Result type for graph store operations
pub type StorageResult<T> = Result<T, StorageError>;
