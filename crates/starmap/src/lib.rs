//! Star map core
//!
//! A [`StarmapSession`] resolves system names to known or procedurally
//! generated systems, flies the viewport between them, animates the orrery
//! of the current system and saves/restores that state.
//!
//! ```
//! use starmap::{StarmapConfig, StarmapSession};
//!
//! let mut session = StarmapSession::with_nearby_stars(StarmapConfig::default()).unwrap();
//! let sol = session.resolve("Sol").unwrap();
//! assert_eq!(sol.planets.len(), 8);
//!
//! session.begin_transition("Tau Ceti").unwrap();
//! while session.step().arrived.is_none() {}
//! assert!(session.is_visited("tau ceti"));
//! ```

pub mod config;
pub mod error;
pub mod session;
pub mod snapshot;

pub use config::StarmapConfig;
pub use error::{ConfigError, ConfigResult, SessionError, SessionResult};
pub use session::StarmapSession;
pub use snapshot::{PanSnapshot, SessionSnapshot, ViewportSnapshot};

pub use catalog::{CacheStats, Catalog, CatalogConfig, CatalogError, CatalogManager};
pub use navigation::{FrameReport, LodTier, NavigationConfig, TransitionRequest, ViewportState};
pub use star_system::{Planet, PlanetType, Position, StarSystem, StarType, SystemOrigin};

#[cfg(test)]
mod config_test;
