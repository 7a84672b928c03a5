//! Static star classification table
//!
//! One entry per spectral class with the ranges a generated star is drawn
//! from and the relative frequency used by the weighted class roll.
//! Frequencies follow the approximate local stellar census and are
//! unnormalized: they sum to slightly less than one, and a roll past the
//! accumulated total lands on the last (most common) class.

use crate::spectral::StarType;
use crate::stellar_color::StellarColor;

/// Classification data for a single spectral class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarTypeInfo {
    pub star_type: StarType,
    /// Display colour as a hex string
    pub color: &'static str,
    /// Effective temperature range in Kelvin
    pub temp_range: (f64, f64),
    /// Mass range in solar masses (M☉)
    pub mass_range: (f64, f64),
    /// Radius range in solar radii (R☉)
    pub radius_range: (f64, f64),
    /// Habitable zone bounds in AU (inner, outer)
    pub habitable_zone: (f64, f64),
    /// Unnormalized occurrence weight
    pub frequency: f64,
}

impl StarTypeInfo {
    /// Display colour parsed from the table's hex string
    pub fn display_color(&self) -> StellarColor {
        // Table literals are all valid six-digit hex
        StellarColor::from_hex(self.color).unwrap_or_else(|_| StellarColor::new(255, 255, 255))
    }

    /// Orbit radius (AU) at the geometric mean of the habitable zone
    pub fn habitable_radius(&self) -> f64 {
        (self.habitable_zone.0 * self.habitable_zone.1).sqrt()
    }
}

pub static STAR_TYPES: [StarTypeInfo; 7] = [
    StarTypeInfo {
        star_type: StarType::O,
        color: "#9BB0FF",
        temp_range: (30_000.0, 50_000.0),
        mass_range: (16.0, 90.0),
        radius_range: (6.6, 20.0),
        habitable_zone: (60.0, 180.0),
        frequency: 0.00003,
    },
    StarTypeInfo {
        star_type: StarType::B,
        color: "#AABFFF",
        temp_range: (10_000.0, 30_000.0),
        mass_range: (2.1, 16.0),
        radius_range: (1.8, 6.6),
        habitable_zone: (10.0, 40.0),
        frequency: 0.0013,
    },
    StarTypeInfo {
        star_type: StarType::A,
        color: "#CAD7FF",
        temp_range: (7_500.0, 10_000.0),
        mass_range: (1.4, 2.1),
        radius_range: (1.4, 1.8),
        habitable_zone: (2.5, 5.0),
        frequency: 0.006,
    },
    StarTypeInfo {
        star_type: StarType::F,
        color: "#F8F7FF",
        temp_range: (6_000.0, 7_500.0),
        mass_range: (1.04, 1.4),
        radius_range: (1.15, 1.4),
        habitable_zone: (1.3, 2.3),
        frequency: 0.03,
    },
    StarTypeInfo {
        star_type: StarType::G,
        color: "#FFF4EA",
        temp_range: (5_200.0, 6_000.0),
        mass_range: (0.8, 1.04),
        radius_range: (0.96, 1.15),
        habitable_zone: (0.95, 1.4),
        frequency: 0.076,
    },
    StarTypeInfo {
        star_type: StarType::K,
        color: "#FFD2A1",
        temp_range: (3_700.0, 5_200.0),
        mass_range: (0.45, 0.8),
        radius_range: (0.7, 0.96),
        habitable_zone: (0.5, 0.9),
        frequency: 0.121,
    },
    StarTypeInfo {
        star_type: StarType::M,
        color: "#FFCC6F",
        temp_range: (2_400.0, 3_700.0),
        mass_range: (0.08, 0.45),
        radius_range: (0.1, 0.7),
        habitable_zone: (0.1, 0.4),
        frequency: 0.7645,
    },
];

/// Sum of all table frequencies
pub fn total_frequency() -> f64 {
    STAR_TYPES.iter().map(|info| info.frequency).sum()
}

/// Select a spectral class from a uniform roll in [0, 1)
///
/// Walks the table in declaration order accumulating frequencies and picks
/// the first class whose cumulative weight exceeds the roll. Rolls past the
/// total fall back to the last entry.
pub fn select_star_type(roll: f64) -> StarType {
    let mut cumulative = 0.0;
    for info in STAR_TYPES.iter() {
        cumulative += info.frequency;
        if roll < cumulative {
            return info.star_type;
        }
    }
    STAR_TYPES[STAR_TYPES.len() - 1].star_type
}
