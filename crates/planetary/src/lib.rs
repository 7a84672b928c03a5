//! Planet archetypes, the planet record and the orbital relations used to
//! derive planet period and temperature from the host star.

pub mod planet;
pub mod planet_type;
pub mod temperature;

pub use planet::{HostStar, Planet, planet_letter, planet_name};
pub use planet_type::{PLANET_TYPES, PlanetType, PlanetTypeInfo};
pub use temperature::{orbital_period, planet_temperature};

#[cfg(test)]
mod planet_type_test;
