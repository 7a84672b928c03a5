//! Star system record shared by the catalog, the generator and navigation.

pub mod metadata;
pub mod position;
pub mod system;

pub use metadata::{SystemOrigin, display_name, normalize_key, system_id};
pub use position::Position;
pub use system::StarSystem;

// Re-export planetary and stellar types for convenience
pub use planetary::{HostStar, Planet, PlanetType};
pub use stellar::{StarType, StellarColor};
