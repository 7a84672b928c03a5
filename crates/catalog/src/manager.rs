//! Name resolution over the known catalog and the generation cache
//!
//! Lookup order is fixed: the known subset first, then the cache, then
//! generation. Known systems are never cached or regenerated, and a cached
//! system is always identical to what generation would produce for its key.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use star_system::{Position, StarSystem, normalize_key};
use system_generator::{generate_star_system_named, scatter_position};
use tracing::{debug, info, warn};

use crate::cache::GenerationCache;
use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::visited::VisitedSet;

/// Cache counters since the manager was created or last cleared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the known subset
    pub known_hits: u64,
    pub hits: u64,
    /// Lookups that ran the generator
    pub misses: u64,
    pub evictions: u64,
}

/// Owns the known catalog, the generation cache and the visited set
#[derive(Debug, Clone)]
pub struct CatalogManager {
    catalog: Catalog,
    config: CatalogConfig,
    known: HashMap<String, Arc<StarSystem>>,
    cache: GenerationCache,
    visited: VisitedSet,
    stats: CacheStats,
}

impl CatalogManager {
    /// Create a manager and filter the catalog to the configured bubble
    pub fn new(catalog: Catalog, config: CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;

        let mut manager = Self {
            catalog,
            cache: GenerationCache::new(config.cache_capacity),
            config,
            known: HashMap::new(),
            visited: VisitedSet::new(),
            stats: CacheStats::default(),
        };
        manager.load_known_systems(manager.config.bubble_radius_ly)?;
        Ok(manager)
    }

    /// Re-filter the catalog to systems within `bubble_radius` light-years
    ///
    /// Generated positions depend on the radius, so the cache is cleared.
    pub fn load_known_systems(&mut self, bubble_radius: f64) -> CatalogResult<()> {
        let config = CatalogConfig {
            bubble_radius_ly: bubble_radius,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;

        self.known = self
            .catalog
            .within_radius(bubble_radius)
            .map(|system| (system.key(), Arc::new(system.clone())))
            .collect();
        self.cache.clear();

        info!(
            known = self.known.len(),
            catalog = self.catalog.len(),
            bubble_radius,
            "Loaded known systems"
        );
        Ok(())
    }

    /// Resolve a name to a known or generated system
    ///
    /// Names are matched case-insensitively. Blank names are rejected.
    pub fn resolve(&mut self, name: &str) -> CatalogResult<Arc<StarSystem>> {
        let Some(key) = normalize_key(name) else {
            warn!("Rejected resolve for blank system name");
            return Err(CatalogError::EmptyName);
        };

        if let Some(system) = self.known.get(&key) {
            self.stats.known_hits += 1;
            return Ok(Arc::clone(system));
        }

        if let Some(system) = self.cache.get(&key) {
            self.stats.hits += 1;
            debug!(system = %key, "Generation cache hit");
            return Ok(system);
        }

        self.stats.misses += 1;
        let position = self.generated_position(&key);
        let system = Arc::new(
            generate_star_system_named(&key, position).ok_or(CatalogError::EmptyName)?,
        );
        debug!(
            system = %key,
            star_type = %system.star_type,
            planets = system.planets.len(),
            "Generated system"
        );

        for evicted in self.cache.insert(key, Arc::clone(&system)) {
            self.stats.evictions += 1;
            debug!(system = %evicted, "Evicted generated system");
        }
        Ok(system)
    }

    /// Known system by name, without touching the cache or the generator
    pub fn known(&self, name: &str) -> Option<Arc<StarSystem>> {
        normalize_key(name).and_then(|key| self.known.get(&key).cloned())
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.known(name).is_some()
    }

    pub fn is_cached(&self, name: &str) -> bool {
        normalize_key(name).is_some_and(|key| self.cache.contains(&key))
    }

    /// Where a generated system with this key is placed
    fn generated_position(&self, key: &str) -> Position {
        scatter_position(
            key,
            self.config.bubble_radius_ly,
            self.config.generated_shell_depth_ly,
        )
    }

    /// Known systems sorted by distance from the origin, nearest first
    pub fn known_systems(&self) -> Vec<Arc<StarSystem>> {
        let mut systems: Vec<_> = self.known.values().cloned().collect();
        systems.sort_by(|a, b| {
            a.distance_from_origin()
                .total_cmp(&b.distance_from_origin())
                .then_with(|| a.name.cmp(&b.name))
        });
        systems
    }

    /// Known systems within `radius` light-years of `center`, nearest first
    pub fn systems_within(&self, center: Position, radius: f64) -> Vec<Arc<StarSystem>> {
        let mut systems: Vec<_> = self
            .known
            .values()
            .filter(|system| system.position().distance_to(&center) <= radius)
            .cloned()
            .collect();
        systems.sort_by(|a, b| {
            a.position()
                .distance_to(&center)
                .total_cmp(&b.position().distance_to(&center))
                .then_with(|| a.name.cmp(&b.name))
        });
        systems
    }

    /// Pick a random known system, e.g. for a "jump anywhere" destination
    pub fn random_known(&self, rng: &mut impl Rng) -> Option<Arc<StarSystem>> {
        let systems = self.known_systems();
        if systems.is_empty() {
            return None;
        }
        let index = rng.random_range(0..systems.len());
        systems.get(index).cloned()
    }

    pub fn mark_visited(&mut self, name: &str) -> bool {
        let newly_visited = self.visited.mark(name);
        if newly_visited {
            debug!(system = %name.trim(), "Marked system visited");
        }
        newly_visited
    }

    pub fn is_visited(&self, name: &str) -> bool {
        self.visited.contains(name)
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Replace the visited set, e.g. when restoring a save
    pub fn restore_visited<S: AsRef<str>>(&mut self, names: impl IntoIterator<Item = S>) {
        self.visited = names.into_iter().collect();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.stats
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Generated keys from oldest to newest
    pub fn cached_keys(&self) -> impl Iterator<Item = &str> {
        self.cache.keys()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.stats = CacheStats::default();
    }

    /// Forget visits and generated systems for a fresh game
    pub fn reset(&mut self) {
        self.clear_cache();
        self.visited.clear();
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn bubble_radius(&self) -> f64 {
        self.config.bubble_radius_ly
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
