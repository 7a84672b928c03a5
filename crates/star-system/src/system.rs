//! Star system record

use planetary::{HostStar, Planet};
use serde::{Deserialize, Serialize};
use stellar::{StarType, StellarColor, luminosity_from_mass};
use uuid::Uuid;

use crate::metadata::{SystemOrigin, normalize_key, system_id};
use crate::position::Position;

/// A single-star system with its planets
///
/// Mass, luminosity and position are read-only after construction:
/// luminosity is always `mass^3.5` and a system never moves.
///
/// # Example
/// ```
/// use star_system::{Position, StarSystem, SystemOrigin};
/// use stellar::StarType;
///
/// let sol = StarSystem::new(
///     "Sol", StarType::G, 1.0, 1.0, 5778.0,
///     Position::origin(), Vec::new(), SystemOrigin::Known,
/// );
/// assert_eq!(sol.luminosity(), 1.0);
/// assert_eq!(sol.key(), "sol");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StarSystemFields")]
pub struct StarSystem {
    /// Stable id derived from the lookup key
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub star_type: StarType,
    /// Solar masses (M☉)
    mass: f64,
    /// Solar radii (R☉)
    pub radius: f64,
    /// Effective temperature in Kelvin
    pub temperature: f64,
    /// Solar luminosities (L☉), derived from mass
    luminosity: f64,
    position: Position,
    pub color: StellarColor,
    pub planets: Vec<Planet>,
    pub binary: bool,
    pub origin: SystemOrigin,
}

/// Serialized form of a system; luminosity is recomputed on load
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StarSystemFields {
    id: Uuid,
    name: String,
    #[serde(rename = "type")]
    star_type: StarType,
    mass: f64,
    radius: f64,
    temperature: f64,
    position: Position,
    color: StellarColor,
    #[serde(default)]
    planets: Vec<Planet>,
    #[serde(default)]
    binary: bool,
    origin: SystemOrigin,
}

impl From<StarSystemFields> for StarSystem {
    fn from(fields: StarSystemFields) -> Self {
        Self {
            id: fields.id,
            name: fields.name,
            star_type: fields.star_type,
            mass: fields.mass,
            radius: fields.radius,
            temperature: fields.temperature,
            luminosity: luminosity_from_mass(fields.mass),
            position: fields.position,
            color: fields.color,
            planets: fields.planets,
            binary: fields.binary,
            origin: fields.origin,
        }
    }
}

impl StarSystem {
    /// Create a system, deriving id, luminosity and the table colour
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        star_type: StarType,
        mass: f64,
        radius: f64,
        temperature: f64,
        position: Position,
        planets: Vec<Planet>,
        origin: SystemOrigin,
    ) -> Self {
        let name = name.into();
        let id = system_id(&normalize_key(&name).unwrap_or_default());

        Self {
            id,
            name,
            star_type,
            mass,
            radius,
            temperature,
            luminosity: luminosity_from_mass(mass),
            position,
            color: star_type.info().display_color(),
            planets,
            binary: false,
            origin,
        }
    }

    /// Override the table colour (builder pattern)
    pub fn with_color(mut self, color: StellarColor) -> Self {
        self.color = color;
        self
    }

    /// Mark as a binary system (builder pattern)
    pub fn with_binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn luminosity(&self) -> f64 {
        self.luminosity
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Lowercase lookup key
    pub fn key(&self) -> String {
        normalize_key(&self.name).unwrap_or_default()
    }

    /// Host star parameters for deriving planet properties
    pub fn host(&self) -> HostStar {
        HostStar::new(self.mass, self.temperature)
    }

    pub fn is_known(&self) -> bool {
        self.origin == SystemOrigin::Known
    }

    /// Distance in light-years to another system
    pub fn distance_to(&self, other: &StarSystem) -> f64 {
        self.position.distance_to(&other.position)
    }

    pub fn distance_from_origin(&self) -> f64 {
        self.position.distance_from_origin()
    }

    pub fn habitable_planets(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter().filter(|p| p.is_habitable())
    }

    /// Look up a planet by name, ignoring case
    pub fn planet(&self, name: &str) -> Option<&Planet> {
        self.planets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }
}
