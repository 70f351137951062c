//! # Lateral Pressure
//!
//! Horizontal force induced at the pick point by the bottom governing leg,
//! as a percentage of the total load.
//!
//! | Lateral percent | Status                         |
//! |-----------------|--------------------------------|
//! | 0               | `ideal`                        |
//! | (0, 10]         | `acceptable-with-warning`      |
//! | > 10, mitigable | `mitigated-with-longer-slings` |
//! | > 10, otherwise | `exceeds-limit` (beam required)|
//!
//! Mitigation keeps the horizontal offset and load share of the governing leg
//! and tries every whole-foot sling length from the next foot above the
//! current length up to 40 ft. Every candidate is recorded; the first at or
//! under the limit is selected.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::geometry::{sling_angle, vertical_rise_for_length};
use crate::calculations::rigging::{LegResult, RiggingResult};
use crate::calculations::tension::{lateral_force, sling_tension};
use crate::errors::{CalcResult, RiggingError};
use crate::rules::{LATERAL_LIMIT_PERCENT, MAX_SLING_LENGTH_FT};
use crate::units::{Degrees, Feet, Pounds};

/// Caution attached to a mitigated result
pub const LONGER_SLING_CAUTION: &str =
    "Longer slings increase hook height and require block clearance verification.";

/// Failure reason when no sling length within the cap works
pub const UNMITIGABLE_REASON: &str =
    "Lateral pressure exceeds 10% and cannot be reduced within 40 ft sling length cap.";

/// Lateral pressure classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LateralStatus {
    Ideal,
    AcceptableWithWarning,
    MitigatedWithLongerSlings,
    ExceedsLimit,
}

impl LateralStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LateralStatus::Ideal => "ideal",
            LateralStatus::AcceptableWithWarning => "acceptable-with-warning",
            LateralStatus::MitigatedWithLongerSlings => "mitigated-with-longer-slings",
            LateralStatus::ExceedsLimit => "exceeds-limit",
        }
    }
}

/// One candidate sling length from the mitigation search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlingAlternative {
    pub sling_length_ft: f64,
    pub vertical_rise_ft: f64,
    pub angle_from_horizontal_deg: f64,
    pub tension_lbs: f64,
    pub lateral_force_lbs: f64,
    pub lateral_percent: f64,
}

/// Lateral pressure evaluation of the bottom governing leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateralPressureResult {
    pub governing_leg_id: String,
    pub lateral_force_lbs: f64,
    pub lateral_percent: f64,
    pub status: LateralStatus,
    pub mitigation_required: bool,
    pub beam_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_alternative: Option<SlingAlternative>,
    #[serde(default)]
    pub evaluated_alternatives: Vec<SlingAlternative>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

fn percent_of(force: Pounds, total_load: Pounds) -> f64 {
    force.value() / total_load.value() * 100.0
}

/// Recompute a leg at a longer sling length, same offset and load share.
pub fn recalculate_with_length(leg: &LegResult, sling_length: Feet, total_load: Pounds) -> CalcResult<SlingAlternative> {
    let offset = Feet(leg.horizontal_offset_ft);

    let rise = vertical_rise_for_length(sling_length, offset).map_err(|_| {
        RiggingError::InvalidMitigationGeometry {
            sling_length_ft: sling_length.value(),
            horizontal_offset_ft: offset.value(),
        }
    })?;

    let angle = sling_angle(rise, offset)?;
    let tension = sling_tension(Pounds(leg.load_share_lbs), angle)?;
    let force = lateral_force(tension, angle)?;

    Ok(SlingAlternative {
        sling_length_ft: sling_length.value(),
        vertical_rise_ft: rise.value(),
        angle_from_horizontal_deg: angle.value(),
        tension_lbs: tension.value(),
        lateral_force_lbs: force.value(),
        lateral_percent: percent_of(force, total_load),
    })
}

/// Evaluate lateral pressure for the bottom governing leg, searching longer
/// slings when the limit is exceeded.
pub fn evaluate_lateral_pressure(bottom: &RiggingResult, total_load: Pounds) -> CalcResult<LateralPressureResult> {
    if !(total_load.value().is_finite() && total_load.value() > 0.0) {
        return Err(RiggingError::invalid_input(
            "load.weight_lbs",
            total_load.value().to_string(),
            "Total load must be greater than zero",
        ));
    }

    let governing = bottom.governing_leg()?;
    let angle = Degrees(governing.angle_from_horizontal_deg);
    let force = lateral_force(Pounds(governing.tension_lbs), angle)?;
    let percent = percent_of(force, total_load);

    let mut result = LateralPressureResult {
        governing_leg_id: governing.leg_id.clone(),
        lateral_force_lbs: force.value(),
        lateral_percent: percent,
        status: LateralStatus::AcceptableWithWarning,
        mitigation_required: false,
        beam_required: false,
        selected_alternative: None,
        evaluated_alternatives: Vec::new(),
        caution: None,
        failure_reason: None,
    };

    if percent == 0.0 {
        result.status = LateralStatus::Ideal;
        return Ok(result);
    }
    if percent <= LATERAL_LIMIT_PERCENT {
        return Ok(result);
    }

    result.mitigation_required = true;

    let cap = MAX_SLING_LENGTH_FT as f64;
    let mut length = governing.sling_length_ft.floor() + 1.0;
    while length <= cap {
        let alternative = recalculate_with_length(governing, Feet(length), total_load)?;
        let within_limit = alternative.lateral_percent <= LATERAL_LIMIT_PERCENT;

        debug!(
            sling_length_ft = length,
            lateral_percent = alternative.lateral_percent,
            within_limit,
            "Mitigation candidate"
        );

        result.evaluated_alternatives.push(alternative.clone());
        if within_limit {
            result.status = LateralStatus::MitigatedWithLongerSlings;
            result.selected_alternative = Some(alternative);
            result.caution = Some(LONGER_SLING_CAUTION.to_string());
            return Ok(result);
        }
        length += 1.0;
    }

    result.status = LateralStatus::ExceedsLimit;
    result.beam_required = true;
    result.failure_reason = Some(UNMITIGABLE_REASON.to_string());
    Ok(result)
}
