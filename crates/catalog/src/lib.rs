//! Known-system catalog and name resolution
//!
//! [`CatalogManager`] answers "what is at this name": a hand-authored system
//! from the local bubble, or a procedurally generated one kept in a bounded
//! cache. It also tracks which systems the player has visited.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod manager;
pub mod visited;

pub use cache::GenerationCache;
pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use manager::{CacheStats, CatalogManager};
pub use visited::VisitedSet;

#[cfg(test)]
mod manager_test;
#[cfg(test)]
mod visited_test;
