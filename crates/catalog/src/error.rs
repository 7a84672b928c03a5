//! Catalog error types

use thiserror::Error;

/// Errors raised while loading the catalog or resolving a system
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Blank or whitespace-only system name
    #[error("unknown system: name is empty")]
    EmptyName,

    /// A catalog record lacks a required field
    #[error("catalog entry '{system}' is missing required field '{field}'")]
    MissingField {
        system: String,
        field: &'static str,
    },

    /// A catalog record has a field with an unusable value
    #[error("catalog entry '{system}' has invalid {field}: {reason}")]
    InvalidField {
        system: String,
        field: &'static str,
        reason: String,
    },

    /// The map key does not match the record's lowercased name
    #[error("catalog key '{key}' does not match system name '{name}'")]
    KeyMismatch { key: String, name: String },

    /// Two records normalize to the same key
    #[error("duplicate catalog entry '{0}'")]
    DuplicateSystem(String),

    /// Invalid catalog configuration value
    #[error("invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Malformed catalog JSON
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
