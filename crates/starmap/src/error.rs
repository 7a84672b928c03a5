//! Session and configuration error types

use catalog::CatalogError;
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not read the configuration file
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Malformed TOML
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Could not render the configuration as TOML
    #[error("failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value out of its allowed range
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors surfaced by [`crate::StarmapSession`]
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Malformed snapshot JSON
    #[error("failed to parse snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Snapshot parsed but holds unusable values
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type SessionResult<T> = Result<T, SessionError>;
