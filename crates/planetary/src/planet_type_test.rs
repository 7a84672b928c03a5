use std::cell::Cell;

use crate::planet_type::{PLANET_TYPES, PlanetType};

/// Archetype selection with a fixed roll, counting how often it was drawn
fn classify(orbit: f64, temp: f64, roll: f64) -> (PlanetType, u32) {
    let draws = Cell::new(0);
    let planet_type = PlanetType::from_orbit(orbit, temp, || {
        draws.set(draws.get() + 1);
        roll
    });
    (planet_type, draws.get())
}

#[test]
fn test_lava_close_and_hot() {
    assert_eq!(classify(0.4, 900.0, 0.0), (PlanetType::Lava, 0));
    // Close but too cool for lava falls through to later rules
    assert_ne!(classify(0.4, 500.0, 0.0).0, PlanetType::Lava);
}

#[test]
fn test_temperate_inner_orbit_rolls_for_ocean() {
    assert_eq!(classify(1.0, 300.0, 0.1), (PlanetType::Ocean, 1));
    assert_eq!(classify(1.0, 300.0, 0.9), (PlanetType::Rocky, 1));
    // Band is exclusive
    assert_ne!(classify(1.0, 350.0, 0.1).0, PlanetType::Ocean);
}

#[test]
fn test_warm_inner_orbit_rolls_rocky_or_desert() {
    assert_eq!(classify(1.8, 400.0, 0.2), (PlanetType::Rocky, 1));
    assert_eq!(classify(1.8, 400.0, 0.7), (PlanetType::Desert, 1));
}

#[test]
fn test_outer_belts() {
    assert_eq!(classify(5.0, 150.0, 0.0), (PlanetType::GasGiant, 0));
    assert_eq!(classify(12.0, 80.0, 0.0), (PlanetType::IceGiant, 0));
    // Cold planet between the inner zone and the gas giant belt
    assert_eq!(classify(2.5, 150.0, 0.0), (PlanetType::Ice, 0));
    // Warm planet in the same gap defaults to rocky
    assert_eq!(classify(2.5, 900.0, 0.0), (PlanetType::Rocky, 0));
}

#[test]
fn test_belt_edges_are_exclusive() {
    assert_eq!(classify(3.0, 150.0, 0.0).0, PlanetType::Ice);
    assert_eq!(classify(10.0, 150.0, 0.0).0, PlanetType::Ice);
}

#[test]
fn test_table_is_indexed_by_type() {
    for planet_type in PlanetType::ALL {
        let info = planet_type.info();
        assert_eq!(info.planet_type, planet_type);
        assert!(info.min_mass > 0.0 && info.min_mass < info.max_mass);
        assert!(!info.description.is_empty());
    }
    assert_eq!(PLANET_TYPES.len(), PlanetType::ALL.len());
}

#[test]
fn test_habitability_and_atmospheres() {
    assert!(PlanetType::Earthlike.potentially_habitable());
    assert!(PlanetType::Ocean.potentially_habitable());
    assert!(!PlanetType::Lava.potentially_habitable());
    assert_eq!(PlanetType::Lava.atmosphere_chance(), 0.0);
    assert_eq!(PlanetType::GasGiant.atmosphere_chance(), 1.0);
    assert!(PlanetType::IceGiant.is_giant());
}

#[test]
fn test_serde_names() {
    let json = serde_json::to_string(&PlanetType::GasGiant).unwrap();
    assert_eq!(json, "\"gas_giant\"");
    let parsed: PlanetType = serde_json::from_str("\"ice_giant\"").unwrap();
    assert_eq!(parsed, PlanetType::IceGiant);
}
