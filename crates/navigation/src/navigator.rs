//! Per-frame driver tying the viewport, transitions, LOD and orrery together

use std::sync::Arc;

use nalgebra::Vector2;
use star_system::StarSystem;
use tracing::{debug, info};

use crate::config::NavigationConfig;
use crate::lod::LodTier;
use crate::orrery::{Orrery, OrreryPlanet};
use crate::viewport::{TransitionController, TransitionRequest, ViewportState};

/// What changed during one frame
#[derive(Debug, Clone)]
pub struct FrameReport {
    pub tier: LodTier,
    /// The tier differs from the previous frame
    pub tier_changed: bool,
    /// Set on the frame a transition reaches its target
    pub arrived: Option<Arc<StarSystem>>,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    config: NavigationConfig,
    viewport: ViewportState,
    transitions: TransitionController,
    orrery: Option<Orrery>,
    tier: LodTier,
}

impl Navigator {
    /// Start centred on the origin at unit scale, with no current system
    pub fn new(config: NavigationConfig) -> Self {
        let viewport = ViewportState::centered_on(Vector2::zeros(), 1.0, &config);
        Self {
            tier: viewport.lod_tier(),
            config,
            viewport,
            transitions: TransitionController::new(),
            orrery: None,
        }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Jump the view without animating, e.g. when restoring a save
    pub fn set_viewport(&mut self, viewport: ViewportState) {
        self.viewport = viewport;
        self.tier = viewport.lod_tier();
    }

    pub fn tier(&self) -> LodTier {
        self.tier
    }

    pub fn begin_transition(&mut self, target: Arc<StarSystem>) -> TransitionRequest {
        self.transitions.begin(target, self.viewport, &self.config)
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitions.is_transitioning()
    }

    pub fn transitions(&self) -> &TransitionController {
        &self.transitions
    }

    /// Advance everything by `dt_ms` of host frame time
    pub fn update(&mut self, dt_ms: f64) -> FrameReport {
        let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };

        if let Some(orrery) = self.orrery.as_mut() {
            orrery.advance(dt_ms);
        }

        let arrived = self.transitions.advance(dt_ms, &mut self.viewport);
        if let Some(system) = &arrived {
            self.attach(Arc::clone(system));
        }

        let tier = self.viewport.lod_tier();
        let tier_changed = tier != self.tier;
        if tier_changed {
            debug!(
                from = %self.tier,
                to = %tier,
                scale = self.viewport.scale,
                "LOD tier changed"
            );
            self.tier = tier;
        }

        FrameReport {
            tier,
            tier_changed,
            arrived,
        }
    }

    /// Advance by one fixed frame quantum
    pub fn step(&mut self) -> FrameReport {
        self.update(self.config.frame_quantum_ms)
    }

    /// Make `system` current and start its orrery from its initial angles
    pub fn attach(&mut self, system: Arc<StarSystem>) {
        info!(system = %system.name, planets = system.planets.len(), "Orrery attached");
        self.orrery = Some(Orrery::new(system));
    }

    pub fn current_system(&self) -> Option<&Arc<StarSystem>> {
        self.orrery.as_ref().map(Orrery::system)
    }

    pub fn orrery(&self) -> Option<&Orrery> {
        self.orrery.as_ref()
    }

    /// Planet positions for drawing, or `None` while the orrery is parked
    /// (no current system, or zoomed out past MEDIUM)
    pub fn orrery_positions(&self) -> Option<Vec<OrreryPlanet>> {
        if !self.tier.shows_orrery() {
            return None;
        }
        self.orrery
            .as_ref()
            .map(|orrery| orrery.positions(self.config.orrery_display_scale))
    }

    /// Back to the initial view with no current system
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }
}
