use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Galactic position in light-years, origin at the home system
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::default()
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Projection onto the star map plane
    pub fn plane(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// x² + y² + z², for radius checks without a square root
    pub fn distance_squared_from_origin(&self) -> f64 {
        self.to_vector().magnitude_squared()
    }

    pub fn distance_from_origin(&self) -> f64 {
        self.to_vector().magnitude()
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.to_vector() - other.to_vector()).magnitude()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<Vector3<f64>> for Position {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
