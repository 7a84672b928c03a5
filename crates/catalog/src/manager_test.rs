use std::sync::Arc;

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use star_system::{Position, SystemOrigin};
use stellar::StarType;
use system_generator::{MAX_PLANETS, generate_star_system_named};

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::manager::{CacheStats, CatalogManager};

fn manager_with(config: CatalogConfig) -> CatalogManager {
    CatalogManager::new(Catalog::nearby_stars().unwrap(), config).unwrap()
}

fn manager() -> CatalogManager {
    manager_with(CatalogConfig::default())
}

#[test]
fn test_sol_scenario() {
    let config = CatalogConfig {
        bubble_radius_ly: 5.0,
        ..CatalogConfig::default()
    };
    let mut manager = manager_with(config);

    let sol = manager.resolve("Sol").unwrap();
    assert_eq!(sol.star_type, StarType::G);
    assert_eq!(sol.origin, SystemOrigin::Known);
    assert_relative_eq!(sol.mass(), 1.0);

    let generated = manager.resolve("Alpha Centauri Z").unwrap();
    assert_eq!(generated.origin, SystemOrigin::Generated);
    assert!(generated.planets.len() <= MAX_PLANETS + 1);
    for planet in &generated.planets {
        assert!(planet.temperature.is_finite());
        assert!(planet.temperature > 0.0);
    }
}

#[test]
fn test_known_systems_are_never_cached() {
    let mut manager = manager();

    let first = manager.resolve("Sol").unwrap();
    let second = manager.resolve("SOL").unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    assert_eq!(manager.cache_len(), 0);
    assert!(!manager.is_cached("sol"));
    assert_eq!(
        manager.cache_stats(),
        CacheStats {
            known_hits: 2,
            ..CacheStats::default()
        }
    );
}

#[test]
fn test_systems_outside_bubble_are_generated() {
    let mut manager = manager();
    assert!(!manager.is_known("Rigel"));

    let rigel = manager.resolve("Rigel").unwrap();
    assert_eq!(rigel.origin, SystemOrigin::Generated);
    assert!(manager.is_cached("rigel"));
}

#[test]
fn test_generated_names_are_case_insensitive() {
    let mut manager = manager();

    let first = manager.resolve("Kepler 442").unwrap();
    let second = manager.resolve("  kepler   442 ").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.name, "Kepler 442");

    let stats = manager.cache_stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 1);
}

#[test]
fn test_generated_position_is_outside_bubble() {
    let mut manager = manager();
    let config = manager.config().clone();

    for name in ["Nowhere", "Kepler 442", "Trappist 1", "Zeta Reticuli"] {
        let system = manager.resolve(name).unwrap();
        let distance = system.distance_from_origin();
        assert!(distance >= config.bubble_radius_ly - 1e-9, "{} at {}", name, distance);
        assert!(distance <= config.bubble_radius_ly + config.generated_shell_depth_ly + 1e-9);
    }
}

#[test]
fn test_eviction_then_regeneration_is_identical() {
    let config = CatalogConfig {
        cache_capacity: 2,
        ..CatalogConfig::default()
    };
    let mut manager = manager_with(config);

    let original = manager.resolve("Kepler 442").unwrap();
    manager.resolve("Trappist 1").unwrap();
    manager.resolve("Gliese 581").unwrap();
    assert!(!manager.is_cached("kepler 442"));
    assert_eq!(manager.cache_stats().evictions, 1);

    let regenerated = manager.resolve("Kepler 442").unwrap();
    assert!(!Arc::ptr_eq(&original, &regenerated));
    assert_eq!(*original, *regenerated);
}

#[test]
fn test_cache_matches_direct_generation() {
    let mut manager = manager();
    let system = manager.resolve("Barnard Prime").unwrap();
    let direct = generate_star_system_named("barnard prime", system.position()).unwrap();
    assert_eq!(*system, direct);
}

#[test]
fn test_hundred_and_one_insertions() {
    let mut manager = manager();
    for i in 0..101 {
        manager.resolve(&format!("Generated {}", i)).unwrap();
    }

    assert_eq!(manager.cache_len(), 100);
    assert!(!manager.is_cached("generated 0"));
    assert!(manager.is_cached("generated 1"));
    assert!(manager.is_cached("generated 100"));
    assert_eq!(manager.cached_keys().next(), Some("generated 1"));
    assert_eq!(manager.cache_stats().evictions, 1);
}

#[test]
fn test_blank_name_is_rejected() {
    let mut manager = manager();
    assert!(matches!(manager.resolve(""), Err(CatalogError::EmptyName)));
    assert!(matches!(manager.resolve(" \t "), Err(CatalogError::EmptyName)));
    assert_eq!(manager.cache_len(), 0);
    assert_eq!(manager.cache_stats(), CacheStats::default());
}

#[test]
fn test_bubble_change_reloads_and_clears_cache() {
    let mut manager = manager();
    manager.resolve("Kepler 442").unwrap();
    assert_eq!(manager.known_systems().len(), 15);

    manager.load_known_systems(1000.0).unwrap();
    assert_eq!(manager.known_systems().len(), 18);
    assert_eq!(manager.cache_len(), 0);
    assert!(manager.is_known("Rigel"));
    assert_relative_eq!(manager.bubble_radius(), 1000.0);

    assert!(matches!(
        manager.load_known_systems(-1.0),
        Err(CatalogError::InvalidConfig(_))
    ));
    assert_relative_eq!(manager.bubble_radius(), 1000.0);
}

#[test]
fn test_invalid_config() {
    let config = CatalogConfig {
        cache_capacity: 0,
        ..CatalogConfig::default()
    };
    assert!(matches!(
        CatalogManager::new(Catalog::nearby_stars().unwrap(), config),
        Err(CatalogError::InvalidConfig(_))
    ));
}

#[test]
fn test_known_systems_sorted_by_distance() {
    let manager = manager();
    let systems = manager.known_systems();
    assert_eq!(systems[0].name, "Sol");
    for pair in systems.windows(2) {
        assert!(pair[0].distance_from_origin() <= pair[1].distance_from_origin());
    }
}

#[test]
fn test_systems_within() {
    let manager = manager();
    let names: Vec<_> = manager
        .systems_within(Position::origin(), 5.0)
        .iter()
        .map(|s| s.name.clone())
        .collect();
    assert_eq!(names, vec!["Sol", "Proxima Centauri", "Alpha Centauri"]);

    let around_proxima = manager.systems_within(Position::new(-1.545, -1.181, -3.768), 0.5);
    let names: Vec<_> = around_proxima.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Proxima Centauri", "Alpha Centauri"]);
}

#[test]
fn test_random_known() {
    let manager = manager();
    let mut rng = ChaChaRng::seed_from_u64(3);
    for _ in 0..50 {
        let system = manager.random_known(&mut rng).unwrap();
        assert!(manager.is_known(&system.name));
    }
}

#[test]
fn test_visited_tracking() {
    let mut manager = manager();
    assert!(manager.mark_visited("Sol"));
    assert!(!manager.mark_visited("sol"));
    assert!(manager.is_visited("SOL"));
    assert!(!manager.is_visited("Vega"));

    manager.restore_visited(["Vega", "Altair"]);
    assert!(!manager.is_visited("Sol"));
    assert!(manager.is_visited("vega"));

    manager.resolve("Kepler 442").unwrap();
    manager.reset();
    assert!(manager.visited().is_empty());
    assert_eq!(manager.cache_len(), 0);
}
