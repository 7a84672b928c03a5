//! Planet archetypes and their static table
//!
//! Archetypes are assigned from orbit radius and equilibrium temperature;
//! the table supplies the mass range each archetype is drawn from along
//! with its display colour and flavour text.

use std::fmt;

use serde::{Deserialize, Serialize};
use stellar::StellarColor;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Orbit and temperature thresholds used by archetype selection
pub mod zones {
    /// Inside this orbit (AU) a hot enough planet is molten
    pub const LAVA_MAX_ORBIT: f64 = 0.5;
    /// Minimum temperature (K) for a lava world
    pub const LAVA_MIN_TEMP: f64 = 600.0;
    /// Inside this orbit (AU) a temperate planet may hold oceans
    pub const OCEAN_MAX_ORBIT: f64 = 1.5;
    /// Temperate band (K), exclusive on both ends
    pub const OCEAN_TEMP: (f64, f64) = (250.0, 350.0);
    /// Chance a temperate inner planet is an ocean world
    pub const OCEAN_CHANCE: f64 = 0.3;
    /// Inside this orbit (AU) warm planets are rocky or desert
    pub const INNER_MAX_ORBIT: f64 = 2.0;
    /// Chance a warm inner planet is rocky rather than desert
    pub const ROCKY_CHANCE: f64 = 0.5;
    /// Gas giant belt (AU), exclusive on both ends
    pub const GAS_GIANT_ORBIT: (f64, f64) = (3.0, 10.0);
    /// Beyond this orbit (AU) planets are ice giants
    pub const ICE_GIANT_MIN_ORBIT: f64 = 10.0;
    /// Below this temperature (K) a planet is frozen
    pub const FROZEN_TEMP: f64 = 200.0;
}

/// Observable planet archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum PlanetType {
    Lava,
    Rocky,
    Desert,
    Ocean,
    GasGiant,
    IceGiant,
    Ice,
    /// Temperate world with liquid surface water. Only produced by the rare
    /// habitable bonus roll or by hand-authored catalog entries.
    Earthlike,
}

/// Static data for one planet archetype
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetTypeInfo {
    pub planet_type: PlanetType,
    /// Minimum mass in Earth masses (M⊕)
    pub min_mass: f64,
    /// Maximum mass in Earth masses (M⊕)
    pub max_mass: f64,
    /// Display colour as a hex string
    pub color: &'static str,
    pub description: &'static str,
}

impl PlanetTypeInfo {
    pub fn display_color(&self) -> StellarColor {
        StellarColor::from_hex(self.color).unwrap_or_else(|_| StellarColor::new(128, 128, 128))
    }
}

pub static PLANET_TYPES: [PlanetTypeInfo; 8] = [
    PlanetTypeInfo {
        planet_type: PlanetType::Lava,
        min_mass: 0.1,
        max_mass: 2.0,
        color: "#FF4500",
        description: "Molten surface under a haze of vaporised rock",
    },
    PlanetTypeInfo {
        planet_type: PlanetType::Rocky,
        min_mass: 0.1,
        max_mass: 2.0,
        color: "#8B7355",
        description: "Cratered silicate crust with a thin or absent atmosphere",
    },
    PlanetTypeInfo {
        planet_type: PlanetType::Desert,
        min_mass: 0.3,
        max_mass: 1.5,
        color: "#D2B48C",
        description: "Dry dune seas and wind-carved plateaus",
    },
    PlanetTypeInfo {
        planet_type: PlanetType::Ocean,
        min_mass: 0.5,
        max_mass: 5.0,
        color: "#1E90FF",
        description: "A single global ocean with scattered island chains",
    },
    PlanetTypeInfo {
        planet_type: PlanetType::GasGiant,
        min_mass: 50.0,
        max_mass: 500.0,
        color: "#DAA520",
        description: "Banded hydrogen giant with storms larger than worlds",
    },
    PlanetTypeInfo {
        planet_type: PlanetType::IceGiant,
        min_mass: 10.0,
        max_mass: 50.0,
        color: "#87CEEB",
        description: "Cold methane-blue giant wrapped around a slushy mantle",
    },
    PlanetTypeInfo {
        planet_type: PlanetType::Ice,
        min_mass: 0.01,
        max_mass: 1.0,
        color: "#E0FFFF",
        description: "Frozen shell that may hide a subsurface sea",
    },
    PlanetTypeInfo {
        planet_type: PlanetType::Earthlike,
        min_mass: 0.8,
        max_mass: 1.2,
        color: "#228B22",
        description: "Blue oceans, green continents and breathable air",
    },
];

impl PlanetType {
    pub const ALL: [PlanetType; 8] = [
        PlanetType::Lava,
        PlanetType::Rocky,
        PlanetType::Desert,
        PlanetType::Ocean,
        PlanetType::GasGiant,
        PlanetType::IceGiant,
        PlanetType::Ice,
        PlanetType::Earthlike,
    ];

    pub fn index(&self) -> usize {
        match self {
            Self::Lava => 0,
            Self::Rocky => 1,
            Self::Desert => 2,
            Self::Ocean => 3,
            Self::GasGiant => 4,
            Self::IceGiant => 5,
            Self::Ice => 6,
            Self::Earthlike => 7,
        }
    }

    /// Table entry for this archetype
    pub fn info(&self) -> &'static PlanetTypeInfo {
        &PLANET_TYPES[self.index()]
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lava => "Lava",
            Self::Rocky => "Rocky",
            Self::Desert => "Desert",
            Self::Ocean => "Ocean",
            Self::GasGiant => "Gas Giant",
            Self::IceGiant => "Ice Giant",
            Self::Ice => "Ice",
            Self::Earthlike => "Earthlike",
        }
    }

    /// Pick an archetype from orbit radius (AU) and temperature (K)
    ///
    /// Rules are checked in order and the first match wins. `roll` supplies
    /// a uniform draw in [0, 1) and is only invoked by the two branches that
    /// need one, so the caller's random stream advances only when a
    /// probabilistic choice is actually made.
    pub fn from_orbit(orbit_radius: f64, temperature: f64, roll: impl FnOnce() -> f64) -> Self {
        use zones::*;

        if orbit_radius < LAVA_MAX_ORBIT && temperature > LAVA_MIN_TEMP {
            Self::Lava
        } else if orbit_radius < OCEAN_MAX_ORBIT
            && temperature > OCEAN_TEMP.0
            && temperature < OCEAN_TEMP.1
        {
            if roll() < OCEAN_CHANCE {
                Self::Ocean
            } else {
                Self::Rocky
            }
        } else if orbit_radius < INNER_MAX_ORBIT && temperature > FROZEN_TEMP {
            if roll() < ROCKY_CHANCE {
                Self::Rocky
            } else {
                Self::Desert
            }
        } else if orbit_radius > GAS_GIANT_ORBIT.0 && orbit_radius < GAS_GIANT_ORBIT.1 {
            Self::GasGiant
        } else if orbit_radius > ICE_GIANT_MIN_ORBIT {
            Self::IceGiant
        } else if temperature < FROZEN_TEMP {
            Self::Ice
        } else {
            Self::Rocky
        }
    }

    /// Probability that a generated planet of this archetype has an atmosphere
    pub fn atmosphere_chance(&self) -> f64 {
        match self {
            Self::GasGiant | Self::IceGiant | Self::Ocean | Self::Earthlike => 1.0,
            Self::Rocky => 0.5,
            Self::Desert => 0.3,
            Self::Ice => 0.2,
            Self::Lava => 0.0,
        }
    }

    pub fn is_giant(&self) -> bool {
        matches!(self, Self::GasGiant | Self::IceGiant)
    }

    /// Whether a world of this archetype could host surface life
    pub fn potentially_habitable(&self) -> bool {
        matches!(self, Self::Ocean | Self::Earthlike)
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
