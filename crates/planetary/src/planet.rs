//! Planet record owned by a star system

use serde::{Deserialize, Serialize};
use stellar::StellarColor;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::planet_type::PlanetType;
use crate::temperature::{orbital_period, planet_temperature};

/// Host star properties needed to derive planet properties
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostStar {
    /// Stellar mass in solar masses (M☉)
    pub mass: f64,
    /// Effective temperature in Kelvin
    pub temperature: f64,
}

impl HostStar {
    pub fn new(mass: f64, temperature: f64) -> Self {
        Self { mass, temperature }
    }

    /// Sun-like host (1 M☉, 5778 K)
    pub fn solar() -> Self {
        Self {
            mass: 1.0,
            temperature: 5778.0,
        }
    }
}

/// A planet in a star system
///
/// `period` and `temperature` are derived from the orbit and the host star
/// when the planet is built, so they always agree with `orbit_radius`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Planet {
    /// Display name, `{system}-{letter}`
    pub name: String,
    #[serde(rename = "type")]
    pub planet_type: PlanetType,
    /// Semi-major axis in AU
    pub orbit_radius: f64,
    /// Mass in Earth masses (M⊕)
    pub mass: f64,
    /// Orbital period in years
    pub period: f64,
    /// Initial orbital phase in radians
    pub angle: f64,
    /// Temperature in Kelvin
    pub temperature: f64,
    pub atmosphere: bool,
}

impl Planet {
    /// Build a planet, deriving period and temperature from the host star
    pub fn new(
        name: impl Into<String>,
        planet_type: PlanetType,
        orbit_radius: f64,
        mass: f64,
        angle: f64,
        atmosphere: bool,
        host: HostStar,
    ) -> Self {
        Self {
            name: name.into(),
            planet_type,
            orbit_radius,
            mass,
            period: orbital_period(orbit_radius, host.mass),
            angle,
            temperature: planet_temperature(host.temperature, orbit_radius),
            atmosphere,
        }
    }

    /// Override the derived temperature (builder pattern)
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Orbital phase in radians after `time` seconds of orrery time
    pub fn angle_at(&self, time: f64) -> f64 {
        self.angle + time / self.period
    }

    pub fn color(&self) -> StellarColor {
        self.planet_type.info().display_color()
    }

    pub fn is_habitable(&self) -> bool {
        self.planet_type.potentially_habitable()
    }
}

/// Display name for the planet at `index` (0-based): "Sol-b", "Sol-c", ...
pub fn planet_name(system_name: &str, index: usize) -> String {
    format!("{}-{}", system_name, planet_letter(index))
}

/// Planet designation letter, starting at 'b' and wrapping within a-z
pub fn planet_letter(index: usize) -> char {
    (b'a' + ((index + 1) % 26) as u8) as char
}
