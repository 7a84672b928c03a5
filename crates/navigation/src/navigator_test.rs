use std::sync::Arc;

use approx::assert_relative_eq;
use nalgebra::Vector2;
use star_system::{HostStar, Planet, PlanetType, Position, StarSystem, StarType, SystemOrigin};

use crate::config::NavigationConfig;
use crate::lod::LodTier;
use crate::navigator::Navigator;
use crate::viewport::{TransitionRequest, ViewportState};

fn tau_ceti() -> Arc<StarSystem> {
    let host = HostStar::new(0.78, 5344.0);
    let planets = vec![
        Planet::new("Tau Ceti e", PlanetType::Desert, 0.538, 3.9, 0.0, true, host),
        Planet::new("Tau Ceti f", PlanetType::Ice, 1.334, 3.9, 1.0, false, host),
    ];
    Arc::new(StarSystem::new(
        "Tau Ceti",
        StarType::G,
        0.78,
        0.79,
        5344.0,
        Position::new(10.286, 5.017, -3.26),
        planets,
        SystemOrigin::Known,
    ))
}

fn arrive(navigator: &mut Navigator) -> Arc<StarSystem> {
    for _ in 0..1000 {
        if let Some(system) = navigator.step().arrived {
            return system;
        }
    }
    panic!("transition never arrived");
}

#[test]
fn test_initial_state() {
    let config = NavigationConfig::default();
    let navigator = Navigator::new(config.clone());

    assert_eq!(navigator.tier(), LodTier::Medium);
    assert_relative_eq!(navigator.viewport().pan, config.screen_center());
    assert!(navigator.current_system().is_none());
    assert!(navigator.orrery_positions().is_none());
}

#[test]
fn test_arrival_attaches_orrery() {
    let mut navigator = Navigator::new(NavigationConfig::default());
    let target = tau_ceti();

    assert_eq!(
        navigator.begin_transition(Arc::clone(&target)),
        TransitionRequest::Started
    );
    let arrived = arrive(&mut navigator);

    assert!(Arc::ptr_eq(&arrived, &target));
    assert!(!navigator.is_transitioning());
    assert!(Arc::ptr_eq(navigator.current_system().unwrap(), &target));
    assert_eq!(navigator.tier(), LodTier::Close);
    assert_relative_eq!(navigator.orrery().unwrap().elapsed_seconds(), 0.0);

    let positions = navigator.orrery_positions().unwrap();
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0].name, "Tau Ceti e");
}

#[test]
fn test_tier_change_reported_once() {
    let mut navigator = Navigator::new(NavigationConfig::default());
    navigator.begin_transition(tau_ceti());

    let mut changes = Vec::new();
    for _ in 0..100 {
        let report = navigator.step();
        if report.tier_changed {
            changes.push(report.tier);
        }
    }
    assert_eq!(changes, vec![LodTier::Close]);
}

#[test]
fn test_busy_request_is_dropped() {
    let mut navigator = Navigator::new(NavigationConfig::default());
    let target = tau_ceti();
    navigator.begin_transition(Arc::clone(&target));
    navigator.step();

    let other = Arc::new(StarSystem::new(
        "Vega",
        StarType::A,
        2.1,
        2.4,
        9600.0,
        Position::new(-20.0, 10.0, 10.0),
        Vec::new(),
        SystemOrigin::Known,
    ));
    assert_eq!(navigator.begin_transition(other), TransitionRequest::Busy);
    assert!(Arc::ptr_eq(&arrive(&mut navigator), &target));
}

#[test]
fn test_orrery_time_runs_while_hidden() {
    let mut navigator = Navigator::new(NavigationConfig::default());
    navigator.attach(tau_ceti());

    navigator.set_viewport(ViewportState::new(Vector2::zeros(), 0.05));
    assert_eq!(navigator.tier(), LodTier::VeryFar);
    assert!(navigator.orrery_positions().is_none());

    navigator.update(3000.0);
    assert_relative_eq!(navigator.orrery().unwrap().elapsed_seconds(), 3.0);

    navigator.set_viewport(ViewportState::new(Vector2::zeros(), 4.0));
    let positions = navigator.orrery_positions().unwrap();
    let system = navigator.current_system().unwrap();
    let planet = &system.planets[1];
    assert_relative_eq!(positions[1].angle, planet.angle + 3.0 / planet.period);
}

#[test]
fn test_bad_frame_times_are_ignored() {
    let mut navigator = Navigator::new(NavigationConfig::default());
    navigator.attach(tau_ceti());
    navigator.update(f64::NAN);
    navigator.update(-16.0);
    navigator.update(f64::INFINITY);
    assert_relative_eq!(navigator.orrery().unwrap().elapsed_seconds(), 0.0);
}

#[test]
fn test_reset() {
    let mut navigator = Navigator::new(NavigationConfig::default());
    navigator.attach(tau_ceti());
    navigator.begin_transition(tau_ceti());
    navigator.reset();

    assert!(navigator.current_system().is_none());
    assert!(!navigator.is_transitioning());
    assert_eq!(navigator.tier(), LodTier::Medium);
}
