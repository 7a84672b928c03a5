//! Star map navigation
//!
//! Level-of-detail classification, animated transitions between systems
//! and the orrery that moves planets along their orbits. Everything is
//! driven synchronously by the host's per-frame delta time.

pub mod config;
pub mod easing;
pub mod lod;
pub mod navigator;
pub mod orrery;
pub mod viewport;

pub use config::NavigationConfig;
pub use easing::{ease_in_out, lerp};
pub use lod::{
    LOD_REFERENCE_DISTANCE, LOD_TIERS, LodTier, LodTierInfo, classify, distance_for_scale,
};
pub use navigator::{FrameReport, Navigator};
pub use orrery::{Orrery, OrreryPlanet, orbit_position};
pub use viewport::{
    Transition, TransitionController, TransitionRequest, TransitionState, ViewportState,
    world_position,
};

#[cfg(test)]
mod navigator_test;
