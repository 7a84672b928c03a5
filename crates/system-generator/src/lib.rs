//! Procedural star system generation
//!
//! Every unknown system name maps to exactly one star system: the name seeds
//! a [`SeededRng`] and [`generate_star_system`] consumes it in a fixed order.

pub mod generation;
pub mod seeded;

pub use generation::{
    HABITABLE_BONUS_CHANCE, MAX_PLANETS, binary_fraction, generate_star_system,
    generate_star_system_named, scatter_position,
};
pub use seeded::{SeededRng, seed_hash};

#[cfg(test)]
mod seeded_test;
