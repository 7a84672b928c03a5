//! Stellar classification: spectral classes, the static class table and
//! display colours.

pub mod classification;
pub mod spectral;
pub mod stellar_color;


pub use classification::{STAR_TYPES, StarTypeInfo, select_star_type, total_frequency};
pub use spectral::StarType;
pub use stellar_color::StellarColor;

/// Luminosity (L☉) from mass (M☉) via the main sequence relation L = M^3.5
pub fn luminosity_from_mass(mass: f64) -> f64 {
    mass.powf(3.5)
}
