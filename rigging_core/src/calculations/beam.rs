//! # Spreader Bar / Lift Beam Requirement
//!
//! A beam becomes mandatory when lateral pressure cannot be brought under the
//! limit with longer slings. A required beam must come with its actual
//! weight: estimated weights are never substituted.
//!
//! ## JSON Example
//!
//! ```json
//! { "type": "spreader_bar", "wll_lbs": 40000.0, "weight_lbs": 850.0, "height_ft": 2.0 }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::lateral::LateralPressureResult;
use crate::errors::{CalcResult, RiggingError};

/// Reason recorded on a validated beam
pub const BEAM_GOVERNING_REASON: &str = "Beam required to control lateral pressure exceeding allowable limits.";

/// Kind of below-the-hook beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeamType {
    SpreaderBar,
    LiftBeam,
}

impl fmt::Display for BeamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeamType::SpreaderBar => write!(f, "spreader_bar"),
            BeamType::LiftBeam => write!(f, "lift_beam"),
        }
    }
}

/// Caller-supplied spreader bar or lift beam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    #[serde(rename = "type")]
    pub beam_type: BeamType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wll_lbs: Option<f64>,
    /// Actual beam weight (lb); mandatory when the beam is required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_lbs: Option<f64>,
    /// Height added between bottom and top rigging (ft)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_ft: Option<f64>,
}

impl BeamInput {
    /// Beam height for the hook stack-up, zero when not given
    pub fn height(&self) -> f64 {
        self.height_ft.unwrap_or(0.0)
    }

    /// Supplied weight when it is a usable positive value
    pub fn actual_weight(&self) -> Option<f64> {
        self.weight_lbs.filter(|w| w.is_finite() && *w > 0.0)
    }
}

/// Outcome of the beam requirement check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamEvaluation {
    pub beam_required: bool,
    /// True when a required beam carried an actual weight
    pub validated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beam_type: Option<BeamType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beam_wll_lbs: Option<f64>,
    pub beam_weight_lbs: f64,
    pub added_to_rigging_weight: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governing_reason: Option<String>,
}

impl BeamEvaluation {
    /// No beam needed
    pub fn not_required() -> Self {
        BeamEvaluation {
            beam_required: false,
            validated: false,
            beam_type: None,
            beam_wll_lbs: None,
            beam_weight_lbs: 0.0,
            added_to_rigging_weight: false,
            governing_reason: None,
        }
    }

    /// Beam needed but not usable as supplied
    pub fn unvalidated(beam: Option<&BeamInput>) -> Self {
        BeamEvaluation {
            beam_required: true,
            validated: false,
            beam_type: beam.map(|b| b.beam_type),
            beam_wll_lbs: beam.and_then(|b| b.wll_lbs),
            beam_weight_lbs: 0.0,
            added_to_rigging_weight: false,
            governing_reason: None,
        }
    }

    /// Beam was required and could not be validated
    pub fn is_blocking(&self) -> bool {
        self.beam_required && !self.validated
    }
}

/// Check whether a beam is required and, if so, that its weight was supplied.
pub fn evaluate_beam_requirement(lateral: &LateralPressureResult, beam: Option<&BeamInput>) -> CalcResult<BeamEvaluation> {
    if !lateral.beam_required {
        return Ok(BeamEvaluation::not_required());
    }

    let beam = beam.ok_or_else(|| RiggingError::BeamWeightMissing {
        reason: "Spreader bar or lift beam is required, but no beam data was provided.".to_string(),
    })?;

    let weight = beam.actual_weight().ok_or_else(|| RiggingError::BeamWeightMissing {
        reason: "Spreader bar or lift beam weight is mandatory and must be provided. Estimated weights are not permitted."
            .to_string(),
    })?;

    Ok(BeamEvaluation {
        beam_required: true,
        validated: true,
        beam_type: Some(beam.beam_type),
        beam_wll_lbs: beam.wll_lbs,
        beam_weight_lbs: weight,
        added_to_rigging_weight: true,
        governing_reason: Some(BEAM_GOVERNING_REASON.to_string()),
    })
}
