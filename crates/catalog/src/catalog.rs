//! Static catalog of hand-authored star systems
//!
//! The catalog file is a JSON object mapping lowercase system names to
//! records. Records are validated once at load time; a record missing a
//! required field is a content defect and rejects the whole catalog.

use std::collections::{BTreeMap, HashSet};

use planetary::{Planet, PlanetType, orbital_period, planet_name, planet_temperature};
use serde::Deserialize;
use star_system::{Position, StarSystem, SystemOrigin, normalize_key};
use stellar::{StarType, StellarColor};

use crate::error::{CatalogError, CatalogResult};

const NEARBY_STARS_JSON: &str = include_str!("../data/nearby_stars.json");

/// Raw catalog record as authored; every field is checked in `validate`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogRecord {
    name: Option<String>,
    #[serde(rename = "type")]
    star_type: Option<String>,
    mass: Option<f64>,
    radius: Option<f64>,
    temperature: Option<f64>,
    position: Option<Position>,
    #[serde(default)]
    planets: Vec<PlanetRecord>,
    #[serde(default)]
    binary: bool,
    color: Option<String>,
}

/// Raw planet record; orbit-derived fields may be omitted
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanetRecord {
    name: Option<String>,
    #[serde(rename = "type")]
    planet_type: Option<PlanetType>,
    orbit_radius: Option<f64>,
    mass: Option<f64>,
    period: Option<f64>,
    angle: Option<f64>,
    temperature: Option<f64>,
    atmosphere: Option<bool>,
}

fn require<T>(value: Option<T>, system: &str, field: &'static str) -> CatalogResult<T> {
    value.ok_or_else(|| CatalogError::MissingField {
        system: system.to_string(),
        field,
    })
}

fn require_positive(value: Option<f64>, system: &str, field: &'static str) -> CatalogResult<f64> {
    let value = require(value, system, field)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CatalogError::InvalidField {
            system: system.to_string(),
            field,
            reason: format!("expected a positive number, got {}", value),
        })
    }
}

impl CatalogRecord {
    fn validate(self, key: &str) -> CatalogResult<StarSystem> {
        let name = require(self.name, key, "name")?;
        let expected = normalize_key(&name).ok_or_else(|| CatalogError::InvalidField {
            system: key.to_string(),
            field: "name",
            reason: "name is blank".to_string(),
        })?;
        if normalize_key(key).as_deref() != Some(expected.as_str()) {
            return Err(CatalogError::KeyMismatch {
                key: key.to_string(),
                name,
            });
        }

        let star_type: StarType = require(self.star_type, &name, "type")?
            .parse()
            .map_err(|reason| CatalogError::InvalidField {
                system: name.clone(),
                field: "type",
                reason,
            })?;
        let mass = require_positive(self.mass, &name, "mass")?;
        let radius = require_positive(self.radius, &name, "radius")?;
        let temperature = require_positive(self.temperature, &name, "temperature")?;
        let position = require(self.position, &name, "position")?;
        if !position.is_finite() {
            return Err(CatalogError::InvalidField {
                system: name,
                field: "position",
                reason: "coordinates must be finite".to_string(),
            });
        }

        let planets = self
            .planets
            .into_iter()
            .enumerate()
            .map(|(index, planet)| planet.validate(&name, index, mass, temperature))
            .collect::<CatalogResult<Vec<_>>>()?;

        let mut system = StarSystem::new(
            name.clone(),
            star_type,
            mass,
            radius,
            temperature,
            position,
            planets,
            SystemOrigin::Known,
        )
        .with_binary(self.binary);

        if let Some(color) = self.color {
            let color = StellarColor::from_hex(&color).map_err(|reason| {
                CatalogError::InvalidField {
                    system: name,
                    field: "color",
                    reason,
                }
            })?;
            system = system.with_color(color);
        }

        Ok(system)
    }
}

impl PlanetRecord {
    fn validate(
        self,
        system: &str,
        index: usize,
        star_mass: f64,
        star_temp: f64,
    ) -> CatalogResult<Planet> {
        let label = format!("{} planet {}", system, index + 1);
        let planet_type = require(self.planet_type, &label, "type")?;
        let orbit_radius = require_positive(self.orbit_radius, &label, "orbitRadius")?;
        let mass = require_positive(self.mass, &label, "mass")?;

        let period = match self.period {
            Some(period) => require_positive(Some(period), &label, "period")?,
            None => orbital_period(orbit_radius, star_mass),
        };
        let temperature = match self.temperature {
            Some(temperature) => require_positive(Some(temperature), &label, "temperature")?,
            None => planet_temperature(star_temp, orbit_radius),
        };
        let angle = self.angle.unwrap_or(0.0);
        if !angle.is_finite() {
            return Err(CatalogError::InvalidField {
                system: label,
                field: "angle",
                reason: format!("expected a finite angle, got {}", angle),
            });
        }

        Ok(Planet {
            name: self.name.unwrap_or_else(|| planet_name(system, index)),
            planet_type,
            orbit_radius,
            mass,
            period,
            angle,
            temperature,
            atmosphere: self.atmosphere.unwrap_or(false),
        })
    }
}

/// The full validated catalog, before any bubble filtering
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    systems: Vec<StarSystem>,
}

impl Catalog {
    /// Parse and validate a catalog JSON object (`{ key: record, ... }`)
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let records: BTreeMap<String, CatalogRecord> = serde_json::from_str(json)?;
        let systems = records
            .into_iter()
            .map(|(key, record)| record.validate(&key))
            .collect::<CatalogResult<Vec<_>>>()?;
        Self::from_systems(systems)
    }

    /// Build a catalog from already constructed systems
    ///
    /// Rejects two systems whose names normalize to the same key.
    pub fn from_systems(systems: Vec<StarSystem>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for system in &systems {
            if !seen.insert(system.key()) {
                return Err(CatalogError::DuplicateSystem(system.key()));
            }
        }
        Ok(Self { systems })
    }

    /// Bundled catalog of real stars near Sol
    pub fn nearby_stars() -> CatalogResult<Self> {
        Self::from_json(NEARBY_STARS_JSON)
    }

    pub fn systems(&self) -> &[StarSystem] {
        &self.systems
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Systems within `radius` light-years of the origin (inclusive)
    ///
    /// Compares squared distances so no square root is taken.
    pub fn within_radius(&self, radius: f64) -> impl Iterator<Item = &StarSystem> {
        let radius_squared = radius * radius;
        self.systems
            .iter()
            .filter(move |system| system.position().distance_squared_from_origin() <= radius_squared)
    }
}
