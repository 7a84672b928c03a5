//! String-seeded pseudo-random stream
//!
//! A polynomial rolling hash of the seed string initializes a small linear
//! congruential generator. The stream is weak but fully reproducible: the
//! same seed and the same sequence of calls always yield the same values,
//! on every platform. Not suitable for anything security related.

use std::f64::consts::PI;

use rand::RngCore;

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233_280;

/// Rolling hash of a seed string: `hash = hash * 31 + code_unit`
///
/// Runs over UTF-16 code units with 32-bit signed wrapping, then takes the
/// absolute value. `i32::MIN` maps to 2^31 rather than overflowing.
pub fn seed_hash(seed: &str) -> u32 {
    let hash = seed
        .encode_utf16()
        .fold(0_i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)));
    i64::from(hash).unsigned_abs() as u32
}

/// Deterministic random stream keyed by a string
///
/// # Example
/// ```
/// use system_generator::SeededRng;
///
/// let mut a = SeededRng::new("tau ceti");
/// let mut b = SeededRng::new("tau ceti");
/// assert_eq!(a.random(), b.random());
/// assert_eq!(a.range(1.0, 2.0), b.range(1.0, 2.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: &str) -> Self {
        Self {
            state: u64::from(seed_hash(seed)),
        }
    }

    /// Next value in [0, 1)
    pub fn random(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Uniform value in [min, max); caller guarantees `min <= max`
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.random() * (max - min)
    }

    /// Uniform integer in [min, max], both ends inclusive
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        self.range(min as f64, max as f64 + 1.0).floor() as i64
    }

    /// Uniformly chosen element, `None` for an empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = (self.random() * items.len() as f64).floor() as usize;
        items.get(index.min(items.len() - 1))
    }

    /// Normally distributed value (Box-Muller), always consumes two draws
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        // The stream can emit exactly 0.0, keep ln() finite
        let u1 = self.random().max(f64::EPSILON);
        let u2 = self.random();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

/// Bridges the stream into the `rand` ecosystem so it can drive any
/// `&mut impl Rng` API. Each `next_u32` consumes one draw.
impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        (self.random() * 4_294_967_296.0) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
