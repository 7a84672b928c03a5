//! Orbital relations between a planet and its host star
//!
//! Both relations are deliberately simple game-scale approximations rather
//! than physical models: temperature falls off with the inverse square root
//! of orbit radius and periods follow Kepler's third law in solar units.

/// Orbit radius (AU) at which a planet sits at the star's own temperature
/// divided by √2. Anchors the inverse-square-root falloff.
pub const FALLOFF_REFERENCE_AU: f64 = 0.5;

/// Planet temperature (K) at `orbit_radius` AU from a star at `star_temp` K
///
/// T = T★ · √(0.5 / r)
pub fn planet_temperature(star_temp: f64, orbit_radius: f64) -> f64 {
    star_temp * (FALLOFF_REFERENCE_AU / orbit_radius).sqrt()
}

/// Orbital period in years for an orbit of `orbit_radius` AU around a star
/// of `star_mass` M☉
///
/// P = √(a³ / M)
pub fn orbital_period(orbit_radius: f64, star_mass: f64) -> f64 {
    (orbit_radius.powi(3) / star_mass).sqrt()
}
