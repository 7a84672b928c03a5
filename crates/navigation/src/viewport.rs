//! Viewport state and the system-to-system transition controller
//!
//! Screen coordinates are `world * scale + pan`. A transition interpolates
//! pan and scale from wherever the viewport is to a view centred on the
//! target system at the configured zoom, over a fixed duration with
//! ease-in-out. At most one transition is in flight; further requests are
//! rejected until it arrives.

use std::sync::Arc;

use nalgebra::Vector2;
use star_system::StarSystem;
use tracing::{info, warn};

use crate::config::NavigationConfig;
use crate::easing::{ease_in_out, lerp};
use crate::lod::LodTier;

/// Pan (screen units) and zoom of the star map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub pan: Vector2<f64>,
    pub scale: f64,
}

impl ViewportState {
    pub fn new(pan: Vector2<f64>, scale: f64) -> Self {
        Self { pan, scale }
    }

    /// Viewport that puts a world-space point at the screen centre
    pub fn centered_on(world: Vector2<f64>, scale: f64, config: &NavigationConfig) -> Self {
        Self {
            pan: config.screen_center() - world * scale,
            scale,
        }
    }

    pub fn world_to_screen(&self, world: Vector2<f64>) -> Vector2<f64> {
        world * self.scale + self.pan
    }

    pub fn screen_to_world(&self, screen: Vector2<f64>) -> Vector2<f64> {
        (screen - self.pan) / self.scale
    }

    /// Component-wise interpolation towards `other`
    pub fn lerp(&self, other: &ViewportState, t: f64) -> Self {
        Self {
            pan: Vector2::new(
                lerp(self.pan.x, other.pan.x, t),
                lerp(self.pan.y, other.pan.y, t),
            ),
            scale: lerp(self.scale, other.scale, t),
        }
    }

    pub fn lod_tier(&self) -> LodTier {
        LodTier::for_scale(self.scale)
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            pan: Vector2::zeros(),
            scale: 1.0,
        }
    }
}

/// World-space position of a system on the star map plane
pub fn world_position(system: &StarSystem, config: &NavigationConfig) -> Vector2<f64> {
    system.position().plane() * config.world_units_per_ly
}

/// Outcome of asking for a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionRequest {
    Started,
    /// Another transition is in flight; the request was dropped
    Busy,
}

/// One in-flight transition
#[derive(Debug, Clone)]
pub struct Transition {
    target: Arc<StarSystem>,
    start: ViewportState,
    end: ViewportState,
    elapsed_ms: f64,
    duration_ms: f64,
}

impl Transition {
    pub fn target(&self) -> &Arc<StarSystem> {
        &self.target
    }

    pub fn start(&self) -> ViewportState {
        self.start
    }

    pub fn end(&self) -> ViewportState {
        self.end
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Linear progress, clamped to `[0, 1]`
    pub fn progress(&self) -> f64 {
        (self.elapsed_ms / self.duration_ms).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Interpolated viewport at the current progress
    pub fn current(&self) -> ViewportState {
        if self.is_complete() {
            self.end
        } else {
            self.start.lerp(&self.end, ease_in_out(self.progress()))
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum TransitionState {
    #[default]
    Idle,
    Transitioning(Transition),
}

#[derive(Debug, Clone, Default)]
pub struct TransitionController {
    state: TransitionState,
}

impl TransitionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, TransitionState::Transitioning(_))
    }

    pub fn transition(&self) -> Option<&Transition> {
        match &self.state {
            TransitionState::Transitioning(transition) => Some(transition),
            TransitionState::Idle => None,
        }
    }

    /// Start moving from `from` towards `target`
    ///
    /// Rejected with `Busy` while another transition is in flight; the
    /// in-flight target is left untouched.
    pub fn begin(
        &mut self,
        target: Arc<StarSystem>,
        from: ViewportState,
        config: &NavigationConfig,
    ) -> TransitionRequest {
        if let TransitionState::Transitioning(current) = &self.state {
            warn!(
                requested = %target.name,
                in_flight = %current.target.name,
                "Transition busy, request dropped"
            );
            return TransitionRequest::Busy;
        }

        let end = ViewportState::centered_on(
            world_position(&target, config),
            config.target_scale,
            config,
        );
        info!(
            system = %target.name,
            duration_ms = config.transition_duration_ms,
            "Transition started"
        );

        self.state = TransitionState::Transitioning(Transition {
            target,
            start: from,
            end,
            elapsed_ms: 0.0,
            duration_ms: config.transition_duration_ms,
        });
        TransitionRequest::Started
    }

    /// Advance the in-flight transition by `dt_ms` and write the
    /// interpolated view into `viewport`
    ///
    /// Returns the target system on the frame the transition completes.
    pub fn advance(&mut self, dt_ms: f64, viewport: &mut ViewportState) -> Option<Arc<StarSystem>> {
        let TransitionState::Transitioning(transition) = &mut self.state else {
            return None;
        };

        transition.elapsed_ms += dt_ms;
        *viewport = transition.current();
        if !transition.is_complete() {
            return None;
        }

        let target = Arc::clone(&transition.target);
        self.state = TransitionState::Idle;
        info!(system = %target.name, "Transition arrived");
        Some(target)
    }

    /// Drop any in-flight transition without arriving
    pub fn reset(&mut self) {
        self.state = TransitionState::Idle;
    }
}
