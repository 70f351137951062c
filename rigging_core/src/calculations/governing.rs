//! # Governing Summary
//!
//! Reduces the evaluated pipeline to a single verdict naming what limits the
//! lift. Checks run in a fixed order and the first match wins:
//!
//! 1. Beam required but not validated: `block`
//! 2. Otherwise `governing`, built from bottom rigging, top rigging (if any),
//!    lateral pressure (if non-zero) and a hook height note (if hook height
//!    produced warnings)
//!
//! The arbiter only reads its inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::beam::BeamEvaluation;
use crate::calculations::hook_height::HookHeightInfo;
use crate::calculations::lateral::LateralPressureResult;
use crate::calculations::rigging::RiggingResult;
use crate::rules::LIMITS_STATEMENT;

/// Verdict severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The lift is feasible; the summary names the limiting element
    Governing,
    /// The lift cannot proceed as configured
    Block,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Governing => write!(f, "governing"),
            Severity::Block => write!(f, "block"),
        }
    }
}

/// The condition that limits the lift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoverningCondition {
    BottomRiggingTension,
    TopRiggingTension,
    BeamRequiredNotValid,
}

impl GoverningCondition {
    pub fn description(&self) -> &'static str {
        match self {
            GoverningCondition::BottomRiggingTension => "Bottom rigging sling tension governs the lift.",
            GoverningCondition::TopRiggingTension => "Top rigging sling tension governs the lift.",
            GoverningCondition::BeamRequiredNotValid => "Spreader bar or lift beam required but not valid.",
        }
    }
}

/// Final verdict of an evaluated lift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoverningSummary {
    pub condition: GoverningCondition,
    /// Human-readable form of `condition`
    pub governing_condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governing_leg_id: Option<String>,
    pub reason: String,
    pub statement: String,
    pub severity: Severity,
}

impl GoverningSummary {
    pub fn is_block(&self) -> bool {
        self.severity == Severity::Block
    }
}

/// Arbitrate the evaluated results into one governing summary.
pub fn finalize_governing_summary(
    bottom: &RiggingResult,
    top: Option<&RiggingResult>,
    lateral: &LateralPressureResult,
    beam: &BeamEvaluation,
    hook: &HookHeightInfo,
) -> GoverningSummary {
    if beam.is_blocking() {
        let condition = GoverningCondition::BeamRequiredNotValid;
        return GoverningSummary {
            condition,
            governing_condition: condition.description().to_string(),
            governing_leg_id: None,
            reason: "Lateral pressure exceeds allowable limits and a beam is required. Beam weight was not provided."
                .to_string(),
            statement: LIMITS_STATEMENT.to_string(),
            severity: Severity::Block,
        };
    }

    let mut reasons = vec![format!(
        "Bottom rigging governing leg: {} at {:.0} lb.",
        bottom.governing_leg_id, bottom.governing_tension_lbs
    )];

    if let Some(top) = top {
        reasons.push(format!(
            "Top rigging governing leg: {} at {:.0} lb.",
            top.governing_leg_id, top.governing_tension_lbs
        ));
    }

    if lateral.lateral_percent > 0.0 {
        reasons.push(format!("Lateral pressure: {:.1}% of total load.", lateral.lateral_percent));
    }

    if !hook.warnings.is_empty() {
        reasons.push("Hook height evaluated for feasibility and clearance only.".to_string());
    }

    // Top only takes over on strictly greater tension
    let (condition, leg_id) = match top {
        Some(top) if top.governing_tension_lbs > bottom.governing_tension_lbs => {
            (GoverningCondition::TopRiggingTension, top.governing_leg_id.clone())
        }
        _ => (GoverningCondition::BottomRiggingTension, bottom.governing_leg_id.clone()),
    };

    GoverningSummary {
        condition,
        governing_condition: condition.description().to_string(),
        governing_leg_id: Some(leg_id),
        reason: reasons.join(" "),
        statement: LIMITS_STATEMENT.to_string(),
        severity: Severity::Governing,
    }
}
