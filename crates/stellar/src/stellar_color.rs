use std::fmt;

use serde::{Deserialize, Serialize};

/// RGB display colour for stars and planets
///
/// Serialized as a `#RRGGBB` string so catalog files and snapshots stay
/// readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StellarColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl StellarColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed `0xRRGGBB` value, the form sprite tints take
    pub fn to_u32(&self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Returns the color as a hex string (e.g., "#FF9944")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a hex color string (e.g., "#FF9944" or "FF9944")
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(format!("Invalid hex color: {}", s));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range.clone()], 16)
                .map_err(|_| format!("Invalid color component: {}", &digits[range]))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for StellarColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl TryFrom<String> for StellarColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<StellarColor> for String {
    fn from(color: StellarColor) -> Self {
        color.to_hex()
    }
}
