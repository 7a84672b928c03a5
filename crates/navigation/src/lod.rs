//! Level-of-detail tiers
//!
//! A tier is chosen from camera distance and gates what the presentation
//! layer draws: labels at CLOSE and MEDIUM, orbital detail only at CLOSE.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Camera distance at a viewport scale of 1.0
pub const LOD_REFERENCE_DISTANCE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LodTier {
    Close,
    Medium,
    Far,
    VeryFar,
}

/// Thresholds and visibility flags for one tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LodTierInfo {
    pub tier: LodTier,
    /// Largest camera distance still in this tier
    pub max_distance: f64,
    /// Smallest viewport scale still in this tier
    pub min_scale: f64,
    pub show_label: bool,
    pub show_detail: bool,
}

/// Tiers in ascending `max_distance` order
pub static LOD_TIERS: [LodTierInfo; 4] = [
    LodTierInfo {
        tier: LodTier::Close,
        max_distance: 50.0,
        min_scale: 2.0,
        show_label: true,
        show_detail: true,
    },
    LodTierInfo {
        tier: LodTier::Medium,
        max_distance: 200.0,
        min_scale: 0.5,
        show_label: true,
        show_detail: false,
    },
    LodTierInfo {
        tier: LodTier::Far,
        max_distance: 1000.0,
        min_scale: 0.1,
        show_label: false,
        show_detail: false,
    },
    LodTierInfo {
        tier: LodTier::VeryFar,
        max_distance: f64::INFINITY,
        min_scale: 0.0,
        show_label: false,
        show_detail: false,
    },
];

/// Select the first tier whose `max_distance` covers `distance`
///
/// NaN falls through to `VeryFar`.
pub fn classify(distance: f64) -> LodTier {
    LOD_TIERS
        .iter()
        .find(|info| distance <= info.max_distance)
        .map_or(LodTier::VeryFar, |info| info.tier)
}

/// Camera distance equivalent of a viewport scale
pub fn distance_for_scale(scale: f64) -> f64 {
    if scale > 0.0 {
        LOD_REFERENCE_DISTANCE / scale
    } else {
        f64::INFINITY
    }
}

impl LodTier {
    pub const ALL: [LodTier; 4] = [
        LodTier::Close,
        LodTier::Medium,
        LodTier::Far,
        LodTier::VeryFar,
    ];

    /// Tier for a viewport scale
    pub fn for_scale(scale: f64) -> Self {
        classify(distance_for_scale(scale))
    }

    /// 0 for CLOSE up to 3 for VERY_FAR
    pub fn index(&self) -> usize {
        match self {
            LodTier::Close => 0,
            LodTier::Medium => 1,
            LodTier::Far => 2,
            LodTier::VeryFar => 3,
        }
    }

    pub fn info(&self) -> &'static LodTierInfo {
        &LOD_TIERS[self.index()]
    }

    pub fn max_distance(&self) -> f64 {
        self.info().max_distance
    }

    pub fn min_scale(&self) -> f64 {
        self.info().min_scale
    }

    pub fn show_label(&self) -> bool {
        self.info().show_label
    }

    pub fn show_detail(&self) -> bool {
        self.info().show_detail
    }

    /// Whether the orrery is drawn at this tier
    pub fn shows_orrery(&self) -> bool {
        *self <= LodTier::Medium
    }
}

impl fmt::Display for LodTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LodTier::Close => "CLOSE",
            LodTier::Medium => "MEDIUM",
            LodTier::Far => "FAR",
            LodTier::VeryFar => "VERY_FAR",
        };
        write!(f, "{}", name)
    }
}
