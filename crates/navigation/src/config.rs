use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Viewport, transition and orrery settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Length of a system-to-system transition
    pub transition_duration_ms: f64,
    /// Time advanced by one fixed `step`
    pub frame_quantum_ms: f64,
    /// Viewport scale reached at the end of a transition
    pub target_scale: f64,
    /// World units per light-year on the star map plane
    pub world_units_per_ly: f64,
    pub screen_width: f64,
    pub screen_height: f64,
    /// Screen units per AU when drawing the orrery
    pub orrery_display_scale: f64,
}

impl NavigationConfig {
    pub const DEFAULT_TRANSITION_DURATION_MS: f64 = 1000.0;
    pub const DEFAULT_FRAME_QUANTUM_MS: f64 = 16.0;
    pub const DEFAULT_TARGET_SCALE: f64 = 4.0;

    /// Centre of the screen in screen units
    pub fn screen_center(&self) -> Vector2<f64> {
        Vector2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Check every value is usable, naming the first offending field
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("transition_duration_ms", self.transition_duration_ms),
            ("frame_quantum_ms", self.frame_quantum_ms),
            ("target_scale", self.target_scale),
            ("world_units_per_ly", self.world_units_per_ly),
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("orrery_display_scale", self.orrery_display_scale),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{} must be positive, got {}", field, value));
            }
        }
        Ok(())
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            transition_duration_ms: Self::DEFAULT_TRANSITION_DURATION_MS,
            frame_quantum_ms: Self::DEFAULT_FRAME_QUANTUM_MS,
            target_scale: Self::DEFAULT_TARGET_SCALE,
            world_units_per_ly: 10.0,
            screen_width: 1280.0,
            screen_height: 720.0,
            orrery_display_scale: 40.0,
        }
    }
}
