//! # Lift Requests
//!
//! The pick-point request form around the engine. A request is validated,
//! resolved into engine legs (hook centred over the pick points), evaluated,
//! and then checked against the hardware the user actually has:
//!
//! 1. Engine rejection (angle, table capacity, shackle size)
//! 2. User sling WLL against every bottom leg tension: `wll_exceeded`
//! 3. User top sling WLL against every top leg tension: `top_rigging_wll_exceeded`
//! 4. User shackle WLL against the required shackle capacity: `shackle_wll_exceeded`
//! 5. Blocked governing summary: `lateral_pressure_exceeded`
//! 6. Required hook height against the hook limit: `hook_height_exceeded`
//!
//! A request that passes everything gets a `valid` response with the
//! governing condition, per-leg results, lift weights and warnings.
//!
//! ## Example
//!
//! ```rust
//! use rigging_core::lift::{evaluate_request, LiftRequest};
//! use rigging_core::tables;
//!
//! let request: LiftRequest = serde_json::from_str(r#"{
//!   "units": "imperial",
//!   "load": { "weight_lbs": 20000, "cg_known": true },
//!   "geometry": {
//!     "pick_points": [
//!       { "id": "A", "x_ft": 0, "y_ft": 0, "z_ft": 6 },
//!       { "id": "B", "x_ft": 10, "y_ft": 0, "z_ft": 6 }
//!     ],
//!     "distances_authoritative": true
//!   },
//!   "slings": [{ "id": "S1", "type": "wire_rope", "legs": 2, "length_ft": 20, "wll_lbs": 30000 }],
//!   "hook_interface": { "hook_height_limit_ft": 50, "block_clearance_ft": 6 },
//!   "options": { "auto_sling_length": false, "round_distances_up": true }
//! }"#).unwrap();
//!
//! let response = evaluate_request(&request, tables::standard()).unwrap();
//! assert!(response.is_valid());
//! ```

pub mod request;
pub mod response;

pub use request::{
    GeometrySpec, HardwareSpec, HookInterface, LiftRequest, LoadSpec, PickPoint, RequestOptions, ShackleSpec,
    SlingSpec, TopRiggingSpec, Units,
};
pub use response::{
    AngleEntry, BlockedLift, HookHeightCheck, LateralSummary, LiftResponse, LiftResults, LiftSummary, LiftWeights,
    SelectionEntry, TensionEntry, ValidLift,
};

use tracing::{debug, info, instrument, warn};

use crate::calculations::lateral::LateralStatus;
use crate::engine::{self, EngineOutput, Verdict};
use crate::errors::{CalcResult, Rejection, RejectionReason, RiggingError};
use crate::rules::DISCLAIMER;
use crate::tables::{CapacityTables, SlingMaterial};
use crate::units::{Feet, Pounds};

impl LiftRequest {
    /// Parse a request; malformed JSON is an `invalid_request_payload` rejection.
    pub fn from_json(json: &str) -> Result<Self, Rejection> {
        serde_json::from_str(json)
            .map_err(|e| Rejection::new(RejectionReason::InvalidRequestPayload, format!("Malformed request: {}", e)))
    }
}

/// Parse and evaluate a JSON request.
pub fn evaluate_request_json(json: &str, tables: &CapacityTables) -> CalcResult<LiftResponse> {
    match LiftRequest::from_json(json) {
        Ok(request) => evaluate_request(&request, tables),
        Err(rejection) => {
            warn!(reason = %rejection.reason, "Request rejected");
            Ok(rejection.into())
        }
    }
}

/// Evaluate a lift request.
///
/// Business outcomes, including every rejection, come back as a
/// [`LiftResponse`]. Only contract violations are `Err`.
#[instrument(skip(request, tables), fields(
    load_lbs = request.load.weight_lbs,
    pick_points = request.geometry.pick_points.len()
))]
pub fn evaluate_request(request: &LiftRequest, tables: &CapacityTables) -> CalcResult<LiftResponse> {
    match evaluate_checked(request, tables)? {
        Ok(valid) => {
            info!(
                governing = %valid.summary.governing_element_id,
                total_lift_lbs = valid.results.weights.total_lift_lbs,
                "Lift valid"
            );
            Ok(LiftResponse::Valid(valid))
        }
        Err(rejection) => {
            warn!(reason = %rejection.reason, details = %rejection.details, "Lift invalid");
            Ok(rejection.into())
        }
    }
}

fn evaluate_checked(request: &LiftRequest, tables: &CapacityTables) -> CalcResult<Result<ValidLift, Rejection>> {
    if let Err(rejection) = request.validate() {
        return Ok(Err(rejection));
    }

    let sling = request
        .bottom_sling()
        .ok_or_else(|| RiggingError::invalid_input("slings", "[]", "No sling configuration after validation"))?;

    let mut sling_length = sling.length_ft;
    let mut warnings = Vec::new();

    let mut output = match run_engine(request, sling_length, tables)? {
        Ok(output) => output,
        Err(rejection) => return Ok(Err(rejection)),
    };

    if request.options.auto_sling_length {
        if let Some(alternative) = output.lateral_pressure.selected_alternative.clone() {
            debug!(
                from_ft = sling_length,
                to_ft = alternative.sling_length_ft,
                "Adopting mitigation sling length"
            );
            output = match run_engine(request, alternative.sling_length_ft, tables)? {
                Ok(output) => output,
                Err(rejection) => return Ok(Err(rejection)),
            };
            warnings.push(format!(
                "Sling length increased from {} ft to {} ft to control lateral pressure.",
                sling_length, alternative.sling_length_ft
            ));
            sling_length = alternative.sling_length_ft;
        }
    }

    let hook_height = match hard_checks(request, &output) {
        Ok(check) => check,
        Err(rejection) => return Ok(Err(rejection)),
    };

    warnings.extend(output_warnings(&output));

    Ok(Ok(build_valid(request, &output, tables, sling_length, hook_height, warnings)))
}

fn run_engine(request: &LiftRequest, sling_length_ft: f64, tables: &CapacityTables) -> CalcResult<Result<EngineOutput, Rejection>> {
    let input = match request.to_engine_input(sling_length_ft) {
        Ok(input) => input,
        Err(rejection) => return Ok(Err(rejection)),
    };

    Ok(match engine::evaluate(&input, tables)? {
        Verdict::Evaluated(output) => Ok(*output),
        Verdict::Rejected(rejection) => Err(rejection),
    })
}

/// User hardware and hook checks applied to a complete engine output.
fn hard_checks(request: &LiftRequest, output: &EngineOutput) -> Result<HookHeightCheck, Rejection> {
    if let Some(sling) = request.bottom_sling() {
        if let Some(leg) = output
            .bottom_rigging
            .legs
            .iter()
            .find(|leg| Pounds(leg.tension_lbs).ceil().value() > sling.wll_lbs)
        {
            return Err(Rejection::new(
                RejectionReason::WllExceeded,
                format!(
                    "Sling '{}' WLL ({} lb) is below the {:.0} lb tension on {}",
                    sling.id,
                    sling.wll_lbs,
                    Pounds(leg.tension_lbs).ceil().value(),
                    leg.leg_id
                ),
            ));
        }
    }

    if let (Some(spec), Some(top)) = (&request.hardware.top_rigging, &output.top_rigging) {
        if let Some(wll) = spec.wll_lbs {
            if let Some(leg) = top.legs.iter().find(|leg| Pounds(leg.tension_lbs).ceil().value() > wll) {
                return Err(Rejection::new(
                    RejectionReason::TopRiggingWllExceeded,
                    format!(
                        "Top rigging sling WLL ({} lb) is below the {:.0} lb tension on {}",
                        wll,
                        Pounds(leg.tension_lbs).ceil().value(),
                        leg.leg_id
                    ),
                ));
            }
        }
    }

    let required_shackle = output
        .bottom_rigging
        .legs
        .iter()
        .map(|leg| Pounds(leg.shackle.required_capacity_lbs).ceil().value())
        .fold(0.0, f64::max);
    if let Some(shackle) = request.hardware.shackles.iter().find(|s| s.wll_lbs < required_shackle) {
        return Err(Rejection::new(
            RejectionReason::ShackleWllExceeded,
            format!(
                "Shackle '{}' WLL ({} lb) is below the required {} lb",
                shackle.id, shackle.wll_lbs, required_shackle
            ),
        ));
    }

    let summary = &output.governing_summary;
    if summary.is_block() {
        return Err(Rejection::new(
            RejectionReason::LateralPressureExceeded,
            format!("{} {}", summary.governing_condition, summary.reason),
        ));
    }

    let hook = &request.hook_interface;
    let required = Feet(request.max_pick_point_z() + output.hook_height.hook_height_ft + hook.block_clearance_ft).ceil();
    if required.value() > hook.hook_height_limit_ft {
        return Err(Rejection::new(
            RejectionReason::HookHeightExceeded,
            format!(
                "Required hook height ({} ft) exceeds limit ({} ft)",
                required.value(),
                hook.hook_height_limit_ft
            ),
        ));
    }

    Ok(HookHeightCheck {
        required_ft: required.value(),
        limit_ft: hook.hook_height_limit_ft,
        within_limit: true,
    })
}

fn output_warnings(output: &EngineOutput) -> Vec<String> {
    let mut warnings = Vec::new();
    let lateral = &output.lateral_pressure;

    match lateral.status {
        LateralStatus::AcceptableWithWarning => warnings.push(format!(
            "Lateral pressure is {:.1}% of total load (limit 10%).",
            lateral.lateral_percent
        )),
        LateralStatus::MitigatedWithLongerSlings => {
            if let Some(alt) = &lateral.selected_alternative {
                warnings.push(format!(
                    "Lateral pressure of {:.1}% exceeds 10%; {} ft slings reduce it to {:.1}%.",
                    lateral.lateral_percent, alt.sling_length_ft, alt.lateral_percent
                ));
            }
            warnings.extend(lateral.caution.clone());
        }
        LateralStatus::Ideal | LateralStatus::ExceedsLimit => {}
    }

    warnings.extend(output.beam_evaluation.governing_reason.clone());
    warnings.extend(output.hook_height.warnings.iter().cloned());
    warnings
}

/// Self-weight of the rigging being lifted (lb, unrounded).
pub fn rigging_weight(request: &LiftRequest, output: &EngineOutput, sling_length_ft: f64, tables: &CapacityTables) -> f64 {
    let weights = &tables.sling_weights;
    let mut total = 0.0;

    if let Some(sling) = request.bottom_sling() {
        total += weights.lbs_per_ft(sling.material) * sling_length_ft * sling.legs as f64;
    }
    total += output
        .bottom_rigging
        .legs
        .iter()
        .map(|leg| leg.shackle.weight_lbs)
        .sum::<f64>();

    if let (Some(spec), Some(top)) = (&request.hardware.top_rigging, &output.top_rigging) {
        let material = match spec.material {
            Some(material) => material,
            None => top
                .governing_leg()
                .map(|leg| leg.sling.material)
                .unwrap_or(SlingMaterial::WireRope),
        };
        total += weights.lbs_per_ft(material) * spec.length_ft * spec.legs as f64;
        total += top.legs.iter().map(|leg| leg.shackle.weight_lbs).sum::<f64>();
    }

    if output.beam_evaluation.added_to_rigging_weight {
        total += output.beam_evaluation.beam_weight_lbs;
    }

    total
}

fn build_valid(
    request: &LiftRequest,
    output: &EngineOutput,
    tables: &CapacityTables,
    sling_length_ft: f64,
    hook_height: HookHeightCheck,
    warnings: Vec<String>,
) -> ValidLift {
    let bottom = &output.bottom_rigging;
    let sling_id = request.bottom_sling().map_or("", |s| s.id.as_str());

    let mut angles = response::angle_entries(sling_id, &bottom.legs);
    let mut tensions = response::tension_entries(sling_id, &bottom.legs);
    let mut selections = response::selection_entries(sling_id, &bottom.legs);

    if let (Some(spec), Some(top)) = (&request.hardware.top_rigging, &output.top_rigging) {
        angles.extend(response::angle_entries(&spec.id, &top.legs));
        tensions.extend(response::tension_entries(&spec.id, &top.legs));
        selections.extend(response::selection_entries(&spec.id, &top.legs));
    }

    let summary = &output.governing_summary;
    let lateral = &output.lateral_pressure;

    ValidLift {
        blocked: false,
        summary: LiftSummary::new(
            summary.condition,
            summary.governing_leg_id.clone().unwrap_or_default(),
            summary.reason.clone(),
        ),
        results: LiftResults {
            angles,
            tensions,
            selections,
            weights: LiftWeights::new(
                request.load.weight_lbs,
                rigging_weight(request, output, sling_length_ft, tables),
            ),
            hook_height,
            lateral_pressure: LateralSummary {
                percent: (lateral.lateral_percent * 10.0).round() / 10.0,
                status: lateral.status,
                recommended_sling_length_ft: lateral.selected_alternative.as_ref().map(|alt| alt.sling_length_ft),
            },
        },
        warnings,
        disclaimer: DISCLAIMER.to_string(),
    }
}
