use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Catalog manager settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Radius of the local bubble in light-years
    pub bubble_radius_ly: f64,
    /// Maximum number of generated systems kept in the cache
    pub cache_capacity: usize,
    /// Depth of the shell outside the bubble where generated systems are placed
    pub generated_shell_depth_ly: f64,
}

impl CatalogConfig {
    pub const DEFAULT_BUBBLE_RADIUS_LY: f64 = 50.0;
    pub const DEFAULT_CACHE_CAPACITY: usize = 100;
    pub const DEFAULT_SHELL_DEPTH_LY: f64 = 50.0;

    pub fn validate(&self) -> CatalogResult<()> {
        if !(self.bubble_radius_ly.is_finite() && self.bubble_radius_ly > 0.0) {
            return Err(CatalogError::InvalidConfig(format!(
                "bubble_radius_ly must be positive, got {}",
                self.bubble_radius_ly
            )));
        }
        if self.cache_capacity == 0 {
            return Err(CatalogError::InvalidConfig(
                "cache_capacity must be at least 1".to_string(),
            ));
        }
        if !(self.generated_shell_depth_ly.is_finite() && self.generated_shell_depth_ly >= 0.0) {
            return Err(CatalogError::InvalidConfig(format!(
                "generated_shell_depth_ly must be non-negative, got {}",
                self.generated_shell_depth_ly
            )));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            bubble_radius_ly: Self::DEFAULT_BUBBLE_RADIUS_LY,
            cache_capacity: Self::DEFAULT_CACHE_CAPACITY,
            generated_shell_depth_ly: Self::DEFAULT_SHELL_DEPTH_LY,
        }
    }
}
