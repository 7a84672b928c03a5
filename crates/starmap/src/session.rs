//! The star map session
//!
//! Owns every piece of mutable star map state: the catalog manager (known
//! systems, generation cache, visited set) and the navigator (viewport,
//! transition, orrery). Creating a session is a new game; dropping it is
//! scene exit. Nothing is process-global.

use std::sync::Arc;

use catalog::{Catalog, CatalogManager};
use navigation::{FrameReport, LodTier, Navigator, TransitionRequest, classify};
use star_system::{StarSystem, normalize_key};
use tracing::{debug, info, warn};

use crate::config::StarmapConfig;
use crate::error::SessionResult;
use crate::snapshot::SessionSnapshot;

#[derive(Debug, Clone)]
pub struct StarmapSession {
    config: StarmapConfig,
    catalog: CatalogManager,
    navigator: Navigator,
}

impl StarmapSession {
    pub fn new(catalog: Catalog, config: StarmapConfig) -> SessionResult<Self> {
        config.validate()?;
        let manager = CatalogManager::new(catalog, config.catalog.clone())?;
        let navigator = Navigator::new(config.navigation.clone());
        info!(known = manager.known_systems().len(), "Star map session started");

        Ok(Self {
            config,
            catalog: manager,
            navigator,
        })
    }

    /// Session over the bundled nearby-stars catalog
    pub fn with_nearby_stars(config: StarmapConfig) -> SessionResult<Self> {
        Self::new(Catalog::nearby_stars()?, config)
    }

    pub fn config(&self) -> &StarmapConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogManager {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogManager {
        &mut self.catalog
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn resolve(&mut self, name: &str) -> SessionResult<Arc<StarSystem>> {
        Ok(self.catalog.resolve(name)?)
    }

    /// Resolve `name` and start flying to it
    ///
    /// While another transition is in flight this returns `Busy` without
    /// resolving anything.
    pub fn begin_transition(&mut self, name: &str) -> SessionResult<TransitionRequest> {
        if self.navigator.is_transitioning() {
            warn!(requested = %name.trim(), "Transition busy, request dropped");
            return Ok(TransitionRequest::Busy);
        }
        let target = self.catalog.resolve(name)?;
        Ok(self.navigator.begin_transition(target))
    }

    /// Advance by `dt_ms` of host frame time; arriving marks the target visited
    pub fn update(&mut self, dt_ms: f64) -> FrameReport {
        let report = self.navigator.update(dt_ms);
        self.record_arrival(&report);
        report
    }

    /// Advance by one fixed frame quantum
    pub fn step(&mut self) -> FrameReport {
        let report = self.navigator.step();
        self.record_arrival(&report);
        report
    }

    fn record_arrival(&mut self, report: &FrameReport) {
        if let Some(system) = &report.arrived {
            self.catalog.mark_visited(&system.name);
        }
    }

    pub fn classify(&self, distance: f64) -> LodTier {
        classify(distance)
    }

    pub fn mark_visited(&mut self, name: &str) -> bool {
        self.catalog.mark_visited(name)
    }

    pub fn is_visited(&self, name: &str) -> bool {
        self.catalog.is_visited(name)
    }

    pub fn current_system(&self) -> Option<&Arc<StarSystem>> {
        self.navigator.current_system()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            visited_systems: self.catalog.visited().iter().map(str::to_string).collect(),
            current_system_name: self.current_system().map(|system| system.name.clone()),
            viewport_state: self.navigator.viewport().into(),
        }
    }

    /// Replace visited set, viewport and current system from a save
    ///
    /// Any in-flight transition is dropped. A blank current system name is
    /// skipped with a warning; any other name is resolved, regenerating it
    /// if needed, and its orrery restarts from the initial angles.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) -> SessionResult<()> {
        snapshot.validate()?;

        self.navigator.reset();
        self.catalog.restore_visited(&snapshot.visited_systems);
        self.navigator.set_viewport(snapshot.viewport_state.into());

        match snapshot.current_system_name.as_deref() {
            Some(name) if normalize_key(name).is_some() => {
                let system = self.catalog.resolve(name)?;
                if !system.is_known() {
                    debug!(system = %system.name, "Restored current system is generated");
                }
                self.navigator.attach(system);
            }
            Some(_) => warn!("Snapshot names a blank current system, orrery not attached"),
            None => {}
        }

        info!(
            visited = snapshot.visited_systems.len(),
            current = snapshot.current_system_name.as_deref().unwrap_or("-"),
            "Session restored"
        );
        Ok(())
    }

    /// Forget visits, generated systems and the current view
    pub fn new_game(&mut self) {
        self.catalog.reset();
        self.navigator.reset();
        info!("New game");
    }
}
