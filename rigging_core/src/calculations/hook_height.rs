//! # Hook Height (informational)
//!
//! Stack-up from the pick points to the hook:
//!
//! ```text
//! hook height = bottom governing rise + beam height + top governing rise
//! ```
//!
//! Crane limits only produce warnings. Nothing computed here feeds back into
//! geometry, tension or selection.

use serde::{Deserialize, Serialize};

use crate::calculations::beam::BeamInput;
use crate::calculations::rigging::RiggingResult;
use crate::errors::CalcResult;

/// Fixed note attached to every hook height result
pub const HOOK_HEIGHT_NOTE: &str =
    "Hook height evaluated for informational purposes only. Sling geometry and selection remain independent of hook height.";

/// Optional crane limits
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CraneLimits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hook_height_ft: Option<f64>,
    /// Minimum block / headroom clearance (ft)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_clearance_ft: Option<f64>,
}

/// Hook height result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookHeightInfo {
    pub hook_height_ft: f64,
    /// Limit violations only
    pub warnings: Vec<String>,
    pub note: String,
    pub informational_only: bool,
}

/// Compute hook height and compare it against crane limits.
pub fn evaluate_hook_height(
    bottom: &RiggingResult,
    beam: Option<&BeamInput>,
    top: Option<&RiggingResult>,
    crane: Option<&CraneLimits>,
) -> CalcResult<HookHeightInfo> {
    let mut hook_height = bottom.governing_leg()?.vertical_rise_ft;
    if let Some(beam) = beam {
        hook_height += beam.height();
    }
    if let Some(top) = top {
        hook_height += top.governing_leg()?.vertical_rise_ft;
    }

    let mut warnings = Vec::new();
    if let Some(limits) = crane {
        if let Some(max) = limits.max_hook_height_ft {
            if hook_height > max {
                warnings.push(format!(
                    "Calculated hook height ({:.1} ft) exceeds crane maximum hook height ({} ft).",
                    hook_height, max
                ));
            }
        }
        if let Some(clearance) = limits.block_clearance_ft {
            if hook_height < clearance {
                warnings.push(format!(
                    "Insufficient block or headroom clearance. Required clearance: {} ft.",
                    clearance
                ));
            }
        }
    }

    Ok(HookHeightInfo {
        hook_height_ft: hook_height,
        warnings,
        note: HOOK_HEIGHT_NOTE.to_string(),
        informational_only: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::beam::BeamType;
    use crate::calculations::rigging::{evaluate_rigging, LegInput, PickGeometry};
    use crate::rules::RiggingPosition;
    use crate::tables::CapacityTables;

    fn rigging(position: RiggingPosition, rise: f64, offset: f64) -> RiggingResult {
        let legs = vec![LegInput {
            id: "L1".to_string(),
            load_share_lbs: 5000.0,
            pick_point: PickGeometry {
                vertical_rise_ft: rise,
                horizontal_offset_ft: offset,
            },
            sling_length_ft: rise.hypot(offset),
        }];
        evaluate_rigging(position, &legs, false, &CapacityTables::builtin()).unwrap()
    }

    #[test]
    fn test_bottom_only() {
        let bottom = rigging(RiggingPosition::Bottom, 12.0, 5.0);
        let info = evaluate_hook_height(&bottom, None, None, None).unwrap();
        assert_eq!(info.hook_height_ft, 12.0);
        assert!(info.warnings.is_empty());
        assert!(info.informational_only);
        assert_eq!(info.note, HOOK_HEIGHT_NOTE);
    }

    #[test]
    fn test_stack_up_with_beam_and_top() {
        let bottom = rigging(RiggingPosition::Bottom, 10.0, 4.0);
        let top = rigging(RiggingPosition::Top, 8.0, 4.0);
        let beam = BeamInput {
            beam_type: BeamType::LiftBeam,
            wll_lbs: None,
            weight_lbs: Some(900.0),
            height_ft: Some(1.5),
        };
        let info = evaluate_hook_height(&bottom, Some(&beam), Some(&top), None).unwrap();
        assert_eq!(info.hook_height_ft, 19.5);
    }

    #[test]
    fn test_limit_warnings() {
        let bottom = rigging(RiggingPosition::Bottom, 12.0, 5.0);
        let crane = CraneLimits {
            max_hook_height_ft: Some(10.0),
            block_clearance_ft: Some(15.0),
        };
        let info = evaluate_hook_height(&bottom, None, None, Some(&crane)).unwrap();
        assert_eq!(
            info.warnings,
            vec![
                "Calculated hook height (12.0 ft) exceeds crane maximum hook height (10 ft).".to_string(),
                "Insufficient block or headroom clearance. Required clearance: 15 ft.".to_string(),
            ]
        );
    }
}
