//! # Rigging Rules
//!
//! Fixed rule constants for below-the-hook rigging. These are hard rules, not
//! tunable defaults: changing one changes what the engine certifies.
//!
//! | Rule                         | Value                 |
//! |------------------------------|-----------------------|
//! | Bottom rigging minimum angle | > 45° from horizontal |
//! | Top rigging minimum angle    | ≥ 60° from horizontal |
//! | Recommended sling WLL        | ≥ 1.5 × tension       |
//! | Shackle connection factor    | 1.25 × tension        |
//! | Minimum shackle size         | 0.5 t                 |
//! | Lateral pressure limit       | 10 % of load          |
//! | Mitigation sling length cap  | 40 ft                 |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::Degrees;

/// Bottom-of-hook / bottom-of-beam minimum sling angle (exclusive)
pub const BOTTOM_MIN_ANGLE_DEG: f64 = 45.0;

/// Top-of-beam minimum sling angle (inclusive)
pub const TOP_MIN_ANGLE_DEG: f64 = 60.0;

/// Recommended sling WLL as a multiple of calculated tension
pub const RECOMMENDED_WLL_FACTOR: f64 = 1.5;

/// Connection factor applied when a shackle is sized from tension
pub const SHACKLE_CONNECTION_FACTOR: f64 = 1.25;

/// Smallest shackle rating allowed (metric tons)
pub const MIN_SHACKLE_TONNAGE: f64 = 0.5;

/// Lateral force limit as a percentage of total load
pub const LATERAL_LIMIT_PERCENT: f64 = 10.0;

/// Longest sling considered by the mitigation search (ft)
pub const MAX_SLING_LENGTH_FT: u32 = 40;

/// Pounds per metric ton, for presentation
pub const LBS_PER_METRIC_TON: f64 = 2204.62;

/// Fixed disclaimer attached to every engine output and response
pub const DISCLAIMER: &str = "Load acceptability and lug integrity are the user’s responsibility.";

/// Fixed closing statement of every governing summary
pub const LIMITS_STATEMENT: &str = "This is what limits the lift.";

/// Where a rigging set sits relative to the hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiggingPosition {
    /// Load to hook, or load to spreader bar / lift beam
    Bottom,
    /// Spreader bar / lift beam to hook
    Top,
}

impl RiggingPosition {
    /// Minimum angle rule for this position
    pub fn angle_rule(self) -> AngleRule {
        match self {
            RiggingPosition::Bottom => AngleRule::BOTTOM,
            RiggingPosition::Top => AngleRule::TOP,
        }
    }
}

impl fmt::Display for RiggingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiggingPosition::Bottom => f.write_str("bottom"),
            RiggingPosition::Top => f.write_str("top"),
        }
    }
}

/// Minimum sling angle with its boundary semantics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRule {
    /// Threshold angle from horizontal
    pub minimum_deg: f64,
    /// Whether an angle exactly at the threshold passes
    pub inclusive: bool,
}

impl AngleRule {
    /// Bottom rigging: strictly greater than 45°
    pub const BOTTOM: AngleRule = AngleRule {
        minimum_deg: BOTTOM_MIN_ANGLE_DEG,
        inclusive: false,
    };

    /// Top rigging: 60° or more
    pub const TOP: AngleRule = AngleRule {
        minimum_deg: TOP_MIN_ANGLE_DEG,
        inclusive: true,
    };

    /// Check an unrounded angle against the threshold
    pub fn admits(&self, angle: Degrees) -> bool {
        if self.inclusive {
            angle.value() >= self.minimum_deg
        } else {
            angle.value() > self.minimum_deg
        }
    }
}
