//! Deterministic star system generation
//!
//! A system is a pure function of its name, the random stream and its
//! position. The draw order below is part of the contract: reordering any
//! draw changes every system generated after it.
//!
//! 1. Star class roll, then mass, radius and temperature from the class table
//! 2. Planet count from N(4, 2), floored and clamped to 0..=12
//! 3. Per planet: orbit jitter, archetype roll (only where the archetype
//!    rules call for one), mass, initial angle, atmosphere roll
//! 4. Rare habitable bonus roll, plus its mass, temperature and angle
//! 5. Binary companion roll

use std::f64::consts::TAU;

use planetary::{HostStar, Planet, PlanetType, planet_name, planet_temperature};
use star_system::{Position, StarSystem, SystemOrigin, display_name, normalize_key};
use stellar::{StarTypeInfo, select_star_type};

use crate::seeded::SeededRng;

/// Planet count distribution N(mean, std_dev)
const PLANET_COUNT_MEAN: f64 = 4.0;
const PLANET_COUNT_STD_DEV: f64 = 2.0;
pub const MAX_PLANETS: usize = 12;

/// Innermost orbit offset in AU
const BASE_ORBIT_AU: f64 = 0.3;
/// Each planet sits roughly this factor farther out than the previous one
const ORBIT_SPACING: f64 = 1.5;
const ORBIT_JITTER: (f64, f64) = (0.8, 1.2);

/// Chance of an extra earthlike world in the habitable zone
pub const HABITABLE_BONUS_CHANCE: f64 = 0.001;
const HABITABLE_BONUS_MASS: (f64, f64) = (0.8, 1.2);
const HABITABLE_BONUS_TEMP: (f64, f64) = (273.0, 323.0);

/// Generate a complete star system from a name, a random stream and a position
///
/// Planets are named `{name}-b`, `{name}-c`, ... in generation order.
pub fn generate_star_system(name: &str, rng: &mut SeededRng, position: Position) -> StarSystem {
    let star_type = select_star_type(rng.random());
    let info = star_type.info();

    let mass = rng.range(info.mass_range.0, info.mass_range.1);
    let radius = rng.range(info.radius_range.0, info.radius_range.1);
    let temperature = rng.range(info.temp_range.0, info.temp_range.1);
    let host = HostStar::new(mass, temperature);

    let planet_count = rng
        .gaussian(PLANET_COUNT_MEAN, PLANET_COUNT_STD_DEV)
        .floor()
        .clamp(0.0, MAX_PLANETS as f64) as usize;

    let mut planets = Vec::with_capacity(planet_count + 1);
    for index in 0..planet_count {
        planets.push(generate_planet(rng, name, index, host));
    }

    if rng.random() < HABITABLE_BONUS_CHANCE {
        let index = planets.len();
        planets.push(habitable_bonus_planet(rng, name, index, host, info));
    }

    let binary = rng.random() < binary_fraction(mass);

    StarSystem::new(
        name,
        star_type,
        mass,
        radius,
        temperature,
        position,
        planets,
        SystemOrigin::Generated,
    )
    .with_binary(binary)
}

/// Generate the system for an arbitrary name
///
/// The stream is seeded with the normalized key and the display name is the
/// key in title case, so any spelling variant of a name yields the same
/// system. Returns `None` for a blank name.
pub fn generate_star_system_named(name: &str, position: Position) -> Option<StarSystem> {
    let key = normalize_key(name)?;
    let mut rng = SeededRng::new(&key);
    Some(generate_star_system(&display_name(&key), &mut rng, position))
}

fn generate_planet(rng: &mut SeededRng, system_name: &str, index: usize, host: HostStar) -> Planet {
    let orbit_radius =
        BASE_ORBIT_AU + ORBIT_SPACING.powi(index as i32) * rng.range(ORBIT_JITTER.0, ORBIT_JITTER.1);
    let temperature = planet_temperature(host.temperature, orbit_radius);
    let planet_type = PlanetType::from_orbit(orbit_radius, temperature, || rng.random());

    let info = planet_type.info();
    let mass = rng.range(info.min_mass, info.max_mass);
    let angle = rng.range(0.0, TAU);
    let atmosphere = rng.random() < planet_type.atmosphere_chance();

    Planet::new(
        planet_name(system_name, index),
        planet_type,
        orbit_radius,
        mass,
        angle,
        atmosphere,
        host,
    )
}

pub(crate) fn habitable_bonus_planet(
    rng: &mut SeededRng,
    system_name: &str,
    index: usize,
    host: HostStar,
    star: &StarTypeInfo,
) -> Planet {
    let mass = rng.range(HABITABLE_BONUS_MASS.0, HABITABLE_BONUS_MASS.1);
    let temperature = rng.range(HABITABLE_BONUS_TEMP.0, HABITABLE_BONUS_TEMP.1);
    let angle = rng.range(0.0, TAU);

    Planet::new(
        planet_name(system_name, index),
        PlanetType::Earthlike,
        star.habitable_radius(),
        mass,
        angle,
        true,
        host,
    )
    .with_temperature(temperature)
}

/// Fraction of stars with a bound companion, by primary mass (M☉)
pub fn binary_fraction(primary_mass: f64) -> f64 {
    match primary_mass {
        m if m >= 16.0 => 0.80, // O stars
        m if m >= 3.0 => 0.60,  // B & A stars
        m if m >= 0.8 => 0.44,  // F & G stars
        m if m >= 0.45 => 0.35, // K stars
        _ => 0.25,              // M stars
    }
}

/// Deterministic position for a generated system
///
/// Places the system in a shell just outside the local bubble: a uniform
/// direction on the sphere at a distance in
/// `[bubble_radius, bubble_radius + shell_depth)` light-years. Uses its own
/// stream keyed by `"{key}#position"` so the system stream is untouched.
pub fn scatter_position(key: &str, bubble_radius: f64, shell_depth: f64) -> Position {
    let mut rng = SeededRng::new(&format!("{key}#position"));
    let z = rng.range(-1.0, 1.0);
    let phi = rng.range(0.0, TAU);
    let distance = rng.range(bubble_radius, bubble_radius + shell_depth);
    let ring = (1.0 - z * z).sqrt();

    Position::new(
        distance * ring * phi.cos(),
        distance * ring * phi.sin(),
        distance * z,
    )
}
