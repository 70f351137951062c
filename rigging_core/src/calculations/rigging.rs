//! # Rigging Evaluation
//!
//! Evaluates a set of sling legs against one angle rule. The same algorithm
//! serves bottom rigging (load to hook or beam, angle > 45°) and top rigging
//! (beam to hook, angle ≥ 60°); the two are evaluated independently.
//!
//! Per leg:
//!
//! 1. Sling angle from the pick-point geometry
//! 2. Angle rule check (hard failure, no derating)
//! 3. Tension from the load share
//! 4. Sling selection
//! 5. Shackle selection
//!
//! The governing leg is the one with the highest tension. On ties the first
//! leg in input order governs.
//!
//! ## JSON Example (leg input)
//!
//! ```json
//! {
//!   "id": "A",
//!   "load_share_lbs": 10000.0,
//!   "pick_point": { "vertical_rise_ft": 19.365, "horizontal_offset_ft": 5.0 },
//!   "sling_length_ft": 20.0
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::geometry::sling_angle;
use crate::calculations::selection::{select_shackle, select_sling, ShackleSelection, SlingSelection};
use crate::calculations::tension::sling_tension;
use crate::errors::{CalcResult, RiggingError};
use crate::rules::RiggingPosition;
use crate::tables::CapacityTables;
use crate::units::{Feet, Pounds};

/// Pick-point geometry relative to the bearing point above it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickGeometry {
    pub vertical_rise_ft: f64,
    pub horizontal_offset_ft: f64,
}

/// One sling leg as supplied to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegInput {
    pub id: String,
    /// Vertical load carried by this leg (lb)
    pub load_share_lbs: f64,
    pub pick_point: PickGeometry,
    pub sling_length_ft: f64,
}

/// One evaluated sling leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegResult {
    pub leg_id: String,
    pub load_share_lbs: f64,
    pub vertical_rise_ft: f64,
    pub horizontal_offset_ft: f64,
    pub sling_length_ft: f64,
    pub angle_from_horizontal_deg: f64,
    pub tension_lbs: f64,
    pub sling: SlingSelection,
    pub shackle: ShackleSelection,
}

/// Evaluated rigging set (bottom or top).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiggingResult {
    pub position: RiggingPosition,
    pub legs: Vec<LegResult>,
    pub governing_leg_id: String,
    pub governing_tension_lbs: f64,
    pub governing_reason: String,
}

impl RiggingResult {
    /// The leg named by `governing_leg_id`
    pub fn governing_leg(&self) -> CalcResult<&LegResult> {
        self.legs
            .iter()
            .find(|leg| leg.leg_id == self.governing_leg_id)
            .ok_or_else(|| RiggingError::GoverningLegNotFound {
                position: self.position,
                leg_id: self.governing_leg_id.clone(),
            })
    }
}

/// Evaluate a single leg against the rule for `position`.
pub fn evaluate_leg(
    position: RiggingPosition,
    leg: &LegInput,
    sharp_edges_present: bool,
    tables: &CapacityTables,
) -> CalcResult<LegResult> {
    let rise = Feet(leg.pick_point.vertical_rise_ft);
    let offset = Feet(leg.pick_point.horizontal_offset_ft);

    if !(leg.sling_length_ft.is_finite() && leg.sling_length_ft > 0.0) {
        return Err(RiggingError::invalid_input(
            "sling_length_ft",
            leg.sling_length_ft.to_string(),
            "Sling length must be greater than zero",
        ));
    }

    let angle = sling_angle(rise, offset)?;

    let rule = position.angle_rule();
    if !rule.admits(angle) {
        return Err(RiggingError::AngleBelowMinimum {
            position,
            leg_id: leg.id.clone(),
            angle_deg: angle.value(),
            minimum_deg: rule.minimum_deg,
            inclusive: rule.inclusive,
        });
    }

    let tension = sling_tension(Pounds(leg.load_share_lbs), angle)?;
    let sling = select_sling(tension, sharp_edges_present, tables)?;
    let shackle = select_shackle(tension, Pounds(sling.minimum_wll_lbs), tables)?;

    debug!(
        %position,
        leg = %leg.id,
        angle_deg = angle.value(),
        tension_lbs = tension.value(),
        sling = %sling.selected_size,
        shackle = %shackle.nominal_size,
        "Leg evaluated"
    );

    Ok(LegResult {
        leg_id: leg.id.clone(),
        load_share_lbs: leg.load_share_lbs,
        vertical_rise_ft: rise.value(),
        horizontal_offset_ft: offset.value(),
        sling_length_ft: leg.sling_length_ft,
        angle_from_horizontal_deg: angle.value(),
        tension_lbs: tension.value(),
        sling,
        shackle,
    })
}

/// Evaluate every leg of a rigging set and identify the governing leg.
///
/// Business failures inside a leg (angle, sling, shackle) come back wrapped
/// in [`RiggingError::Leg`] so the caller knows where they happened.
pub fn evaluate_rigging(
    position: RiggingPosition,
    legs: &[LegInput],
    sharp_edges_present: bool,
    tables: &CapacityTables,
) -> CalcResult<RiggingResult> {
    if legs.is_empty() {
        return Err(RiggingError::EmptyRigging { position });
    }

    let results = legs
        .iter()
        .map(|leg| {
            evaluate_leg(position, leg, sharp_edges_present, tables)
                .map_err(|e| e.in_leg(position, leg.id.clone()))
        })
        .collect::<CalcResult<Vec<_>>>()?;

    // Strict comparison keeps the first leg on ties
    let mut governing = &results[0];
    for leg in &results[1..] {
        if leg.tension_lbs > governing.tension_lbs {
            governing = leg;
        }
    }

    let governing_leg_id = governing.leg_id.clone();
    let governing_tension_lbs = governing.tension_lbs;

    Ok(RiggingResult {
        position,
        governing_reason: format!("Highest calculated sling tension governs {} rigging.", position),
        governing_leg_id,
        governing_tension_lbs,
        legs: results,
    })
}
