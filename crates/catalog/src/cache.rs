//! Bounded cache of generated systems
//!
//! Eviction is by insertion order, not access order: reading an entry does
//! not refresh it. Entries are reproducible by regeneration, so eviction
//! only costs time.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use star_system::StarSystem;

#[derive(Debug, Clone)]
pub struct GenerationCache {
    capacity: usize,
    entries: HashMap<String, Arc<StarSystem>>,
    /// Keys from oldest to newest insertion
    order: VecDeque<String>,
}

impl GenerationCache {
    /// Create an empty cache; a zero capacity is raised to one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity + 1),
            order: VecDeque::with_capacity(capacity + 1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<Arc<StarSystem>> {
        self.entries.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a generated system and return the keys evicted to stay within
    /// capacity, oldest first
    ///
    /// Re-inserting an existing key replaces the value and keeps its
    /// original insertion slot.
    pub fn insert(&mut self, key: String, system: Arc<StarSystem>) -> Vec<String> {
        if self.entries.insert(key.clone(), system).is_none() {
            self.order.push_back(key);
        }

        let mut evicted = Vec::new();
        while self.entries.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            evicted.push(oldest);
        }
        evicted
    }

    /// Keys from oldest to newest insertion
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

impl Default for GenerationCache {
    fn default() -> Self {
        Self::new(crate::config::CatalogConfig::DEFAULT_CACHE_CAPACITY)
    }
}
