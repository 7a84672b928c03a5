use std::path::Path;

use catalog::CatalogConfig;
use navigation::NavigationConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Complete star map configuration
///
/// Every field has a default, so an empty document is a valid config:
///
/// ```toml
/// [catalog]
/// bubble_radius_ly = 50.0
/// cache_capacity = 100
///
/// [navigation]
/// transition_duration_ms = 1000.0
/// target_scale = 4.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarmapConfig {
    pub catalog: CatalogConfig,
    pub navigation: NavigationConfig,
}

impl StarmapConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.catalog
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.navigation.validate().map_err(ConfigError::Invalid)
    }
}
