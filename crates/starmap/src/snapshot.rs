//! Persisted session state
//!
//! Serialized as `{ visitedSystems, currentSystemName, viewportState:
//! { pan: { x, y }, scale } }` for the host's save system.

use nalgebra::Vector2;
use navigation::ViewportState;
use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanSnapshot {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub pan: PanSnapshot,
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Lowercase keys, sorted
    #[serde(default)]
    pub visited_systems: Vec<String>,
    /// System whose orrery was showing, if any
    #[serde(default)]
    pub current_system_name: Option<String>,
    pub viewport_state: ViewportSnapshot,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> SessionResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> SessionResult<()> {
        let ViewportSnapshot { pan, scale } = self.viewport_state;
        if !(scale.is_finite() && scale > 0.0) {
            return Err(SessionError::InvalidSnapshot(format!(
                "viewport scale must be positive, got {}",
                scale
            )));
        }
        if !(pan.x.is_finite() && pan.y.is_finite()) {
            return Err(SessionError::InvalidSnapshot(
                "viewport pan must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<ViewportState> for ViewportSnapshot {
    fn from(viewport: ViewportState) -> Self {
        Self {
            pan: PanSnapshot {
                x: viewport.pan.x,
                y: viewport.pan.y,
            },
            scale: viewport.scale,
        }
    }
}

impl From<ViewportSnapshot> for ViewportState {
    fn from(snapshot: ViewportSnapshot) -> Self {
        ViewportState::new(Vector2::new(snapshot.pan.x, snapshot.pan.y), snapshot.scale)
    }
}
