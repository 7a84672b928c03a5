use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::classification::{STAR_TYPES, StarTypeInfo};

/// Harvard spectral class of a main sequence star, hottest first.
///
/// Declaration order matters: the classification table and the weighted
/// star type roll both walk the classes in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum StarType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl StarType {
    /// Every class in table order
    pub const ALL: [StarType; 7] = [
        StarType::O,
        StarType::B,
        StarType::A,
        StarType::F,
        StarType::G,
        StarType::K,
        StarType::M,
    ];

    /// Classification table entry for this class
    pub fn info(&self) -> &'static StarTypeInfo {
        &STAR_TYPES[self.index()]
    }

    /// Position of this class in the table (O = 0 .. M = 6)
    pub fn index(&self) -> usize {
        match self {
            StarType::O => 0,
            StarType::B => 1,
            StarType::A => 2,
            StarType::F => 3,
            StarType::G => 4,
            StarType::K => 5,
            StarType::M => 6,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            StarType::O => "O",
            StarType::B => "B",
            StarType::A => "A",
            StarType::F => "F",
            StarType::G => "G",
            StarType::K => "K",
            StarType::M => "M",
        }
    }
}

impl fmt::Display for StarType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for StarType {
    type Err = String;

    /// Parses a class symbol, ignoring case and surrounding whitespace.
    /// Only the leading letter is significant, so "G2" parses as `G`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s
            .trim()
            .chars()
            .next()
            .ok_or_else(|| "Empty spectral type".to_string())?;

        match symbol.to_ascii_uppercase() {
            'O' => Ok(StarType::O),
            'B' => Ok(StarType::B),
            'A' => Ok(StarType::A),
            'F' => Ok(StarType::F),
            'G' => Ok(StarType::G),
            'K' => Ok(StarType::K),
            'M' => Ok(StarType::M),
            _ => Err(format!("Unknown spectral type: {}", s.trim())),
        }
    }
}
