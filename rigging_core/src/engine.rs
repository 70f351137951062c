//! # Rigging Engine
//!
//! Single entry point for a below-the-hook rigging evaluation. Stages run
//! leaves-first, once per call:
//!
//! 1. Bottom rigging (angle > 45°, tension, sling, shackle, governing leg)
//! 2. Lateral pressure and the longer-sling mitigation search
//! 3. Beam requirement (only when mitigation fails)
//! 4. Top rigging (angle ≥ 60°), independent of bottom rigging
//! 5. Hook height (informational)
//! 6. Governing summary
//!
//! The call returns one of three things:
//!
//! - `Ok(Verdict::Evaluated(..))`: a complete output, which may still carry a
//!   `block` summary
//! - `Ok(Verdict::Rejected(..))`: a business rejection with a closed reason
//! - `Err(..)`: a contract violation; the input should never have reached the
//!   engine
//!
//! ## Example
//!
//! ```rust
//! use rigging_core::engine::{evaluate_standard, EngineInput, Verdict};
//!
//! let json = r#"{
//!   "load": { "weight_lbs": 20000.0 },
//!   "bottom_rigging": {
//!     "legs": [
//!       { "id": "A", "load_share_lbs": 10000.0,
//!         "pick_point": { "vertical_rise_ft": 19.3649, "horizontal_offset_ft": 5.0 },
//!         "sling_length_ft": 20.0 },
//!       { "id": "B", "load_share_lbs": 10000.0,
//!         "pick_point": { "vertical_rise_ft": 19.3649, "horizontal_offset_ft": 5.0 },
//!         "sling_length_ft": 20.0 }
//!     ]
//!   }
//! }"#;
//!
//! let input: EngineInput = serde_json::from_str(json).unwrap();
//! match evaluate_standard(&input).unwrap() {
//!     Verdict::Evaluated(output) => {
//!         assert_eq!(output.bottom_rigging.governing_leg_id, "A");
//!         assert!(output.governing_summary.statement.ends_with("This is what limits the lift."));
//!     }
//!     Verdict::Rejected(rejection) => panic!("rejected: {}", rejection.details),
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::calculations::beam::{evaluate_beam_requirement, BeamEvaluation, BeamInput};
use crate::calculations::governing::{finalize_governing_summary, GoverningSummary};
use crate::calculations::hook_height::{evaluate_hook_height, CraneLimits, HookHeightInfo};
use crate::calculations::lateral::{evaluate_lateral_pressure, LateralPressureResult};
use crate::calculations::rigging::{evaluate_rigging, LegInput, RiggingResult};
use crate::errors::{CalcResult, Rejection, RiggingError};
use crate::rules::{RiggingPosition, DISCLAIMER};
use crate::tables::{self, CapacityTables};
use crate::units::Pounds;

/// Total applied load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadInput {
    pub weight_lbs: f64,
}

/// Site conditions affecting selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    /// Sharp edges at contact points exclude synthetic slings
    #[serde(default)]
    pub sharp_edges_present: bool,
}

/// Rigging below the hook or beam, with the optional beam itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottomRiggingInput {
    pub legs: Vec<LegInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beam: Option<BeamInput>,
}

/// Rigging from the beam to the hook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopRiggingInput {
    pub legs: Vec<LegInput>,
}

/// Engine input contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineInput {
    pub load: LoadInput,
    #[serde(default)]
    pub conditions: Conditions,
    pub bottom_rigging: BottomRiggingInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_rigging: Option<TopRiggingInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crane: Option<CraneLimits>,
}

impl EngineInput {
    /// Top rigging legs, `None` when absent or empty
    pub fn top_legs(&self) -> Option<&[LegInput]> {
        self.top_rigging
            .as_ref()
            .map(|top| top.legs.as_slice())
            .filter(|legs| !legs.is_empty())
    }

    pub fn beam(&self) -> Option<&BeamInput> {
        self.bottom_rigging.beam.as_ref()
    }
}

/// Complete engine output. Built once per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOutput {
    pub input: EngineInput,
    pub bottom_rigging: RiggingResult,
    pub lateral_pressure: LateralPressureResult,
    pub beam_evaluation: BeamEvaluation,
    pub top_rigging: Option<RiggingResult>,
    pub hook_height: HookHeightInfo,
    pub governing_summary: GoverningSummary,
    pub disclaimer: String,
}

/// Outcome of an engine call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Evaluated(Box<EngineOutput>),
    Rejected(Rejection),
}

impl Verdict {
    /// True for a governing (non-blocked) evaluation
    pub fn is_acceptable(&self) -> bool {
        match self {
            Verdict::Evaluated(output) => !output.governing_summary.is_block(),
            Verdict::Rejected(_) => false,
        }
    }
}

/// Evaluate a lift against the given capacity tables.
#[instrument(skip(input, tables), fields(
    load_lbs = input.load.weight_lbs,
    bottom_legs = input.bottom_rigging.legs.len(),
    top_legs = input.top_legs().map_or(0, |legs| legs.len())
))]
pub fn evaluate(input: &EngineInput, tables: &CapacityTables) -> CalcResult<Verdict> {
    match run_pipeline(input, tables) {
        Ok(output) => {
            let summary = &output.governing_summary;
            if summary.is_block() {
                warn!(condition = %summary.governing_condition, "Lift blocked");
            } else {
                info!(
                    severity = %summary.severity,
                    governing_leg = summary.governing_leg_id.as_deref().unwrap_or(""),
                    "Lift evaluated"
                );
            }
            Ok(Verdict::Evaluated(Box::new(output)))
        }
        Err(err) => match err.into_rejection() {
            Ok(rejection) => {
                warn!(reason = %rejection.reason, details = %rejection.details, "Lift rejected");
                Ok(Verdict::Rejected(rejection))
            }
            Err(err) => Err(err),
        },
    }
}

/// Evaluate against the built-in capacity tables.
pub fn evaluate_standard(input: &EngineInput) -> CalcResult<Verdict> {
    evaluate(input, tables::standard())
}

fn run_pipeline(input: &EngineInput, tables: &CapacityTables) -> CalcResult<EngineOutput> {
    let sharp_edges = input.conditions.sharp_edges_present;

    let bottom = evaluate_rigging(RiggingPosition::Bottom, &input.bottom_rigging.legs, sharp_edges, tables)?;
    debug!(
        governing_leg = %bottom.governing_leg_id,
        tension_lbs = bottom.governing_tension_lbs,
        "Bottom rigging evaluated"
    );

    let lateral = evaluate_lateral_pressure(&bottom, Pounds(input.load.weight_lbs))?;
    debug!(
        percent = lateral.lateral_percent,
        status = lateral.status.as_str(),
        alternatives = lateral.evaluated_alternatives.len(),
        "Lateral pressure evaluated"
    );

    let beam = match evaluate_beam_requirement(&lateral, input.beam()) {
        Ok(evaluation) => evaluation,
        Err(RiggingError::BeamWeightMissing { reason }) => {
            warn!(%reason, "Beam required but not validated");
            BeamEvaluation::unvalidated(input.beam())
        }
        Err(err) => return Err(err),
    };

    let top = input
        .top_legs()
        .map(|legs| evaluate_rigging(RiggingPosition::Top, legs, sharp_edges, tables))
        .transpose()?;

    let hook_height = evaluate_hook_height(&bottom, input.beam(), top.as_ref(), input.crane.as_ref())?;
    debug!(
        hook_height_ft = hook_height.hook_height_ft,
        warnings = hook_height.warnings.len(),
        "Hook height evaluated"
    );

    let governing_summary = finalize_governing_summary(&bottom, top.as_ref(), &lateral, &beam, &hook_height);

    Ok(EngineOutput {
        input: input.clone(),
        bottom_rigging: bottom,
        lateral_pressure: lateral,
        beam_evaluation: beam,
        top_rigging: top,
        hook_height,
        governing_summary,
        disclaimer: DISCLAIMER.to_string(),
    })
}
