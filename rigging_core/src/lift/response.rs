//! Lift response shape.
//!
//! Presentation rounding happens here and nowhere else: angles to the nearest
//! degree, forces and WLLs up to the next pound, hook height up to the next
//! foot, metric tons to two decimals.

use serde::{Deserialize, Serialize};

use crate::calculations::governing::GoverningCondition;
use crate::calculations::lateral::LateralStatus;
use crate::calculations::rigging::LegResult;
use crate::errors::{Rejection, RejectionReason};
use crate::rules::{DISCLAIMER, LIMITS_STATEMENT, RECOMMENDED_WLL_FACTOR};
use crate::tables::SlingMaterial;
use crate::units::{MetricTons, Pounds};

/// Response to a lift request, tagged by `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LiftResponse {
    Valid(ValidLift),
    Invalid(BlockedLift),
}

impl LiftResponse {
    pub fn is_valid(&self) -> bool {
        matches!(self, LiftResponse::Valid(_))
    }

    pub fn disclaimer(&self) -> &str {
        match self {
            LiftResponse::Valid(valid) => &valid.disclaimer,
            LiftResponse::Invalid(blocked) => &blocked.disclaimer,
        }
    }

    /// Rejection reason, `None` for a valid lift
    pub fn reason(&self) -> Option<RejectionReason> {
        match self {
            LiftResponse::Valid(_) => None,
            LiftResponse::Invalid(blocked) => Some(blocked.reason),
        }
    }
}

impl From<Rejection> for LiftResponse {
    fn from(rejection: Rejection) -> Self {
        LiftResponse::Invalid(BlockedLift {
            blocked: true,
            reason: rejection.reason,
            details: rejection.details,
            disclaimer: DISCLAIMER.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedLift {
    pub blocked: bool,
    pub reason: RejectionReason,
    pub details: String,
    pub disclaimer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidLift {
    pub blocked: bool,
    pub summary: LiftSummary,
    pub results: LiftResults,
    pub warnings: Vec<String>,
    pub disclaimer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftSummary {
    pub governing_condition: GoverningCondition,
    pub governing_element_id: String,
    pub why: String,
    /// Arbiter reasoning behind the governing condition
    pub reason: String,
}

impl LiftSummary {
    pub fn new(condition: GoverningCondition, element_id: impl Into<String>, reason: impl Into<String>) -> Self {
        LiftSummary {
            governing_condition: condition,
            governing_element_id: element_id.into(),
            why: LIMITS_STATEMENT.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftResults {
    pub angles: Vec<AngleEntry>,
    pub tensions: Vec<TensionEntry>,
    pub selections: Vec<SelectionEntry>,
    pub weights: LiftWeights,
    pub hook_height: HookHeightCheck,
    pub lateral_pressure: LateralSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleEntry {
    pub sling_id: String,
    /// 1-based leg number
    pub leg: u32,
    pub angle_deg_from_horizontal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensionEntry {
    pub sling_id: String,
    pub leg: u32,
    pub tension_lbs: f64,
    pub required_wll_lbs: f64,
    pub recommended_wll_lbs: f64,
}

/// Engine-selected hardware for one leg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub sling_id: String,
    pub leg: u32,
    pub sling_material: SlingMaterial,
    pub sling_size: String,
    pub sling_wll_lbs: f64,
    pub recommended_sling_size: String,
    pub recommended_sling_wll_lbs: f64,
    pub shackle_size: String,
    pub shackle_wll_lbs: f64,
    pub shackle_required_capacity_lbs: f64,
    pub shackle_applied_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftWeights {
    pub load_lbs: f64,
    pub rigging_lbs: f64,
    pub total_lift_lbs: f64,
    pub total_lift_metric_tons: f64,
}

impl LiftWeights {
    /// Rigging weight is rounded up; metric tons to two decimals
    pub fn new(load_lbs: f64, rigging_lbs: f64) -> Self {
        let rigging = Pounds(rigging_lbs).ceil();
        let total = Pounds(load_lbs) + rigging;
        LiftWeights {
            load_lbs,
            rigging_lbs: rigging.value(),
            total_lift_lbs: total.value(),
            total_lift_metric_tons: MetricTons::from(total).rounded().value(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookHeightCheck {
    pub required_ft: f64,
    pub limit_ft: f64,
    pub within_limit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateralSummary {
    /// Percent of total load, one decimal
    pub percent: f64,
    pub status: LateralStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_sling_length_ft: Option<f64>,
}

/// Leg number from an engine leg id of the form `<sling>-leg-<n>`
fn leg_number(leg_id: &str, fallback: usize) -> u32 {
    leg_id
        .rsplit_once("-leg-")
        .and_then(|(_, n)| n.parse().ok())
        .unwrap_or(fallback as u32 + 1)
}

pub(crate) fn angle_entries(sling_id: &str, legs: &[LegResult]) -> Vec<AngleEntry> {
    legs.iter()
        .enumerate()
        .map(|(i, leg)| AngleEntry {
            sling_id: sling_id.to_string(),
            leg: leg_number(&leg.leg_id, i),
            angle_deg_from_horizontal: leg.angle_from_horizontal_deg.round(),
        })
        .collect()
}

pub(crate) fn tension_entries(sling_id: &str, legs: &[LegResult]) -> Vec<TensionEntry> {
    legs.iter()
        .enumerate()
        .map(|(i, leg)| {
            let tension = Pounds(leg.tension_lbs).ceil().value();
            TensionEntry {
                sling_id: sling_id.to_string(),
                leg: leg_number(&leg.leg_id, i),
                tension_lbs: tension,
                required_wll_lbs: tension,
                recommended_wll_lbs: Pounds(leg.tension_lbs * RECOMMENDED_WLL_FACTOR).ceil().value(),
            }
        })
        .collect()
}

pub(crate) fn selection_entries(sling_id: &str, legs: &[LegResult]) -> Vec<SelectionEntry> {
    legs.iter()
        .enumerate()
        .map(|(i, leg)| SelectionEntry {
            sling_id: sling_id.to_string(),
            leg: leg_number(&leg.leg_id, i),
            sling_material: leg.sling.material,
            sling_size: leg.sling.selected_size.clone(),
            sling_wll_lbs: leg.sling.minimum_wll_lbs,
            recommended_sling_size: leg.sling.recommended_size.clone(),
            recommended_sling_wll_lbs: leg.sling.recommended_wll_lbs,
            shackle_size: leg.shackle.nominal_size.clone(),
            shackle_wll_lbs: leg.shackle.wll_lbs,
            shackle_required_capacity_lbs: Pounds(leg.shackle.required_capacity_lbs).ceil().value(),
            shackle_applied_factor: leg.shackle.applied_factor,
        })
        .collect()
}
