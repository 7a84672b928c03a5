//! Planet positions along their orbits over time
//!
//! The time accumulator advances on every frame whether or not the orrery
//! is drawn, so hiding it and showing it again never makes planets jump.
//! Angles follow `initial + t / period` with `t` in seconds.

use std::sync::Arc;

use nalgebra::Vector2;
use star_system::StarSystem;

/// Screen-space placement of one planet
#[derive(Debug, Clone, PartialEq)]
pub struct OrreryPlanet {
    pub name: String,
    /// Radians
    pub angle: f64,
    /// Offset from the star in screen units
    pub position: Vector2<f64>,
}

/// Offset of a body at `angle` on a circular orbit
pub fn orbit_position(angle: f64, orbit_radius: f64, display_scale: f64) -> Vector2<f64> {
    Vector2::new(angle.cos(), angle.sin()) * (orbit_radius * display_scale)
}

#[derive(Debug, Clone)]
pub struct Orrery {
    system: Arc<StarSystem>,
    elapsed_s: f64,
}

impl Orrery {
    pub fn new(system: Arc<StarSystem>) -> Self {
        Self {
            system,
            elapsed_s: 0.0,
        }
    }

    pub fn system(&self) -> &Arc<StarSystem> {
        &self.system
    }

    /// Accumulated animation time in seconds
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_s
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.elapsed_s += dt_ms / 1000.0;
    }

    /// Current angle of every planet, in planet order
    pub fn angles(&self) -> impl Iterator<Item = f64> + '_ {
        self.system
            .planets
            .iter()
            .map(|planet| planet.angle_at(self.elapsed_s))
    }

    pub fn positions(&self, display_scale: f64) -> Vec<OrreryPlanet> {
        self.system
            .planets
            .iter()
            .map(|planet| {
                let angle = planet.angle_at(self.elapsed_s);
                OrreryPlanet {
                    name: planet.name.clone(),
                    angle,
                    position: orbit_position(angle, planet.orbit_radius, display_scale),
                }
            })
            .collect()
    }
}
