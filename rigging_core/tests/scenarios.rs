//! End-to-end lift scenarios through the request contract and the engine.

use rigging_core::calculations::geometry::sling_angle;
use rigging_core::calculations::lateral::LateralStatus;
use rigging_core::calculations::selection::ShackleBasis;
use rigging_core::calculations::tension::sling_tension;
use rigging_core::calculations::GoverningCondition;
use rigging_core::engine::{evaluate_standard, EngineInput, Verdict};
use rigging_core::lift::{evaluate_request, evaluate_request_json, LiftRequest, LiftResponse, ValidLift};
use rigging_core::rules::DISCLAIMER;
use rigging_core::tables;
use rigging_core::units::{Feet, Pounds};
use rigging_core::RejectionReason;
use serde_json::{json, Value};

fn scenario_a() -> Value {
    json!({
        "units": "imperial",
        "load": { "weight_lbs": 20000, "cg_known": true, "sharp_edges_present": false },
        "geometry": {
            "pick_points": [
                { "id": "A", "x_ft": 0, "y_ft": 0, "z_ft": 6 },
                { "id": "B", "x_ft": 10, "y_ft": 0, "z_ft": 6 }
            ],
            "distances_authoritative": true
        },
        "slings": [
            { "id": "S1", "type": "wire_rope", "legs": 2, "length_ft": 20, "wll_lbs": 30000, "sharing_allowed": true }
        ],
        "hardware": { "shackles": [{ "id": "SH1", "wll_lbs": 17000 }] },
        "hook_interface": { "hook_height_limit_ft": 50, "block_clearance_ft": 6 },
        "options": { "auto_sling_length": false, "round_distances_up": true }
    })
}

/// 15000 lb on 8 ft slings at 4 ft offset: 60 degrees, 28.87% lateral
fn scenario_e() -> Value {
    json!({
        "units": "imperial",
        "load": { "weight_lbs": 15000, "cg_known": true },
        "geometry": {
            "pick_points": [
                { "id": "A", "x_ft": 0, "y_ft": 0, "z_ft": 2 },
                { "id": "B", "x_ft": 8, "y_ft": 0, "z_ft": 2 }
            ],
            "distances_authoritative": true
        },
        "slings": [{ "id": "S1", "type": "wire_rope", "legs": 2, "length_ft": 8, "wll_lbs": 20000 }],
        "hook_interface": { "hook_height_limit_ft": 50, "block_clearance_ft": 6 },
        "options": { "auto_sling_length": false, "round_distances_up": true }
    })
}

/// 10000 lb at 8 ft offset on 12 ft slings: 44.7% lateral, not fixable by 40 ft
fn unmitigable() -> Value {
    json!({
        "units": "imperial",
        "load": { "weight_lbs": 10000, "cg_known": true },
        "geometry": {
            "pick_points": [
                { "id": "A", "x_ft": 0, "y_ft": 0, "z_ft": 3 },
                { "id": "B", "x_ft": 16, "y_ft": 0, "z_ft": 3 }
            ],
            "distances_authoritative": true
        },
        "slings": [{ "id": "S1", "type": "wire_rope", "legs": 2, "length_ft": 12, "wll_lbs": 20000 }],
        "hook_interface": { "hook_height_limit_ft": 50, "block_clearance_ft": 6 },
        "options": { "auto_sling_length": false, "round_distances_up": true }
    })
}

fn run(request: Value) -> LiftResponse {
    let request: LiftRequest = serde_json::from_value(request).unwrap();
    evaluate_request(&request, tables::standard()).unwrap()
}

fn expect_valid(response: LiftResponse) -> ValidLift {
    match response {
        LiftResponse::Valid(valid) => valid,
        LiftResponse::Invalid(blocked) => panic!("expected valid lift, got {} ({})", blocked.reason, blocked.details),
    }
}

fn expect_reason(response: &LiftResponse, reason: RejectionReason) {
    assert_eq!(response.reason(), Some(reason), "{:?}", response);
    assert_eq!(response.disclaimer(), DISCLAIMER);
}

#[test]
fn scenario_a_two_leg_wire_rope_is_valid() {
    let valid = expect_valid(run(scenario_a()));

    assert!(!valid.blocked);
    assert_eq!(valid.summary.governing_condition, GoverningCondition::BottomRiggingTension);
    assert_eq!(valid.summary.governing_element_id, "S1-leg-1");
    assert_eq!(valid.summary.why, "This is what limits the lift.");

    let results = &valid.results;
    assert_eq!(results.angles.len(), 2);
    for angle in &results.angles {
        assert!(angle.angle_deg_from_horizontal >= 60.0);
        assert_eq!(angle.angle_deg_from_horizontal, 76.0);
    }
    for tension in &results.tensions {
        assert_eq!(tension.tension_lbs, 10328.0);
        assert_eq!(tension.required_wll_lbs, 10328.0);
        assert_eq!(tension.recommended_wll_lbs, 15492.0);
    }
    for selection in &results.selections {
        assert_eq!(selection.shackle_required_capacity_lbs, 12910.0);
        assert_eq!(selection.shackle_applied_factor, 1.25);
    }

    assert_eq!(results.hook_height.required_ft, 32.0);
    assert_eq!(results.hook_height.limit_ft, 50.0);
    assert!(results.hook_height.within_limit);

    assert_eq!(results.weights.load_lbs, 20000.0);
    assert_eq!(results.weights.rigging_lbs, 68.0);
    assert_eq!(results.weights.total_lift_lbs, 20068.0);
    assert_eq!(results.weights.total_lift_metric_tons, 9.1);

    // 12.9% at 20 ft, fixed by 26 ft slings
    assert_eq!(results.lateral_pressure.percent, 12.9);
    assert_eq!(results.lateral_pressure.status, LateralStatus::MitigatedWithLongerSlings);
    assert_eq!(results.lateral_pressure.recommended_sling_length_ft, Some(26.0));
    assert_eq!(valid.disclaimer, DISCLAIMER);
}

#[test]
fn scenario_b_shallow_angle_is_rejected() {
    let mut request = scenario_a();
    request["geometry"]["pick_points"][1]["x_ft"] = json!(30);
    request["slings"][0]["length_ft"] = json!(15.04);

    let response = run(request);
    expect_reason(&response, RejectionReason::SlingAngleBelowMinimum);
}

#[test]
fn scenario_c_sling_wll_too_low() {
    let mut request = scenario_a();
    request["slings"][0]["wll_lbs"] = json!(5000);

    let response = run(request);
    expect_reason(&response, RejectionReason::WllExceeded);
    match response {
        LiftResponse::Invalid(blocked) => {
            assert!(blocked.blocked);
            assert!(blocked.details.contains("10328"));
        }
        LiftResponse::Valid(_) => unreachable!(),
    }
}

#[test]
fn scenario_d_hook_height_limit() {
    let mut request = scenario_a();
    request["hook_interface"]["hook_height_limit_ft"] = json!(30);

    expect_reason(&run(request), RejectionReason::HookHeightExceeded);

    // Exactly at the requirement passes
    let mut request = scenario_a();
    request["hook_interface"]["hook_height_limit_ft"] = json!(32);
    assert!(run(request).is_valid());
}

#[test]
fn scenario_e_mitigation_selects_longer_sling() {
    let valid = expect_valid(run(scenario_e()));
    let lateral = &valid.results.lateral_pressure;

    assert_eq!(lateral.percent, 28.9);
    assert_eq!(lateral.status, LateralStatus::MitigatedWithLongerSlings);
    assert_eq!(lateral.recommended_sling_length_ft, Some(21.0));
    assert!(valid.warnings.iter().any(|w| w.contains("21 ft slings")));
    assert!(valid.warnings.iter().any(|w| w.contains("block clearance")));
}

#[test]
fn slings_no_longer_than_half_span_cannot_reach() {
    // 8 ft slings across a 16 ft span: each leg is exactly as long as its offset
    let mut request = scenario_e();
    request["geometry"]["pick_points"][1]["x_ft"] = json!(16);

    let response = run(request);
    expect_reason(&response, RejectionReason::InvalidPickPointGeometry);
}

#[test]
fn scenario_e_engine_records_every_alternative() {
    let request: LiftRequest = serde_json::from_value(scenario_e()).unwrap();
    let input = request.to_engine_input(8.0).unwrap();

    let output = match evaluate_standard(&input).unwrap() {
        Verdict::Evaluated(output) => output,
        Verdict::Rejected(rejection) => panic!("unexpected rejection: {:?}", rejection),
    };
    let lateral = &output.lateral_pressure;

    assert!((lateral.lateral_percent - 28.8675).abs() < 1e-3);
    assert!(lateral.mitigation_required);
    assert!(!lateral.beam_required);

    let lengths: Vec<f64> = lateral.evaluated_alternatives.iter().map(|a| a.sling_length_ft).collect();
    assert_eq!(lengths, (9..=21).map(f64::from).collect::<Vec<_>>());

    let selected = lateral.selected_alternative.as_ref().unwrap();
    assert!(selected.sling_length_ft > 8.0);
    assert!(selected.lateral_percent <= 10.0);

    for pair in lateral.evaluated_alternatives.windows(2) {
        assert!(pair[1].lateral_percent <= pair[0].lateral_percent);
    }
}

#[test]
fn auto_sling_length_adopts_mitigation() {
    let mut request = scenario_e();
    request["options"]["auto_sling_length"] = json!(true);

    let valid = expect_valid(run(request));
    let lateral = &valid.results.lateral_pressure;

    assert_eq!(lateral.status, LateralStatus::AcceptableWithWarning);
    assert_eq!(lateral.percent, 9.7);
    assert!(valid
        .warnings
        .iter()
        .any(|w| w == "Sling length increased from 8 ft to 21 ft to control lateral pressure."));

    // 2 + 20.6 rise + 6 clearance
    assert_eq!(valid.results.hook_height.required_ft, 29.0);
}

#[test]
fn unmitigable_lateral_without_beam_is_blocked() {
    let response = run(unmitigable());
    expect_reason(&response, RejectionReason::LateralPressureExceeded);
}

#[test]
fn unmitigable_lateral_search_runs_to_cap() {
    let request: LiftRequest = serde_json::from_value(unmitigable()).unwrap();
    let input = request.to_engine_input(12.0).unwrap();

    let output = match evaluate_standard(&input).unwrap() {
        Verdict::Evaluated(output) => output,
        Verdict::Rejected(rejection) => panic!("unexpected rejection: {:?}", rejection),
    };

    let lateral = &output.lateral_pressure;
    assert_eq!(lateral.status, LateralStatus::ExceedsLimit);
    assert!(lateral.beam_required);
    assert_eq!(lateral.evaluated_alternatives.len(), 28);
    assert!(lateral.selected_alternative.is_none());
    let last = lateral.evaluated_alternatives.last().unwrap();
    assert_eq!(last.sling_length_ft, 40.0);
    assert!(last.lateral_percent > 10.0);

    assert!(output.governing_summary.is_block());
    assert_eq!(output.governing_summary.condition, GoverningCondition::BeamRequiredNotValid);
    assert!(!Verdict::Evaluated(output).is_acceptable());
}

#[test]
fn beam_with_top_rigging_resolves_lateral_pressure() {
    let mut request = unmitigable();
    request["hardware"] = json!({
        "beam": { "type": "spreader_bar", "wll_lbs": 40000, "weight_lbs": 800, "height_ft": 2 },
        "top_rigging": { "legs": 2, "length_ft": 12, "span_ft": 10, "type": "wire_rope" }
    });

    let valid = expect_valid(run(request));

    // Bottom 6708 lb governs the 5940 lb top legs
    assert_eq!(valid.summary.governing_condition, GoverningCondition::BottomRiggingTension);
    assert_eq!(valid.results.angles.len(), 4);
    assert!(valid.results.angles.iter().any(|a| a.sling_id == "TOP" && a.leg == 2));
    assert_eq!(valid.results.lateral_pressure.status, LateralStatus::ExceedsLimit);

    // 36 ft bottom wire rope, 36 ft top wire rope and the 800 lb bar, plus shackles
    assert!(valid.results.weights.rigging_lbs > 872.0);

    // 3 + 8.94 + 2 + 10.91 + 6
    assert_eq!(valid.results.hook_height.required_ft, 31.0);
}

#[test]
fn top_rigging_wll_is_checked() {
    let mut request = unmitigable();
    request["hardware"] = json!({
        "beam": { "type": "lift_beam", "weight_lbs": 800, "height_ft": 2 },
        "top_rigging": { "legs": 2, "length_ft": 12, "span_ft": 10, "wll_lbs": 5000 }
    });

    expect_reason(&run(request), RejectionReason::TopRiggingWllExceeded);
}

#[test]
fn user_shackle_below_requirement() {
    let mut request = scenario_a();
    request["hardware"]["shackles"][0]["wll_lbs"] = json!(12000);

    expect_reason(&run(request), RejectionReason::ShackleWllExceeded);
}

#[test]
fn symmetric_lift_has_equal_tensions() {
    let mut request = scenario_a();
    request["geometry"]["pick_points"] = json!([
        { "id": "A", "x_ft": -5, "y_ft": -5, "z_ft": 4 },
        { "id": "B", "x_ft": 5, "y_ft": -5, "z_ft": 4 },
        { "id": "C", "x_ft": 5, "y_ft": 5, "z_ft": 4 },
        { "id": "D", "x_ft": -5, "y_ft": 5, "z_ft": 4 }
    ]);
    request["slings"][0]["legs"] = json!(4);
    request["hardware"] = json!({});

    let valid = expect_valid(run(request));
    let tensions: Vec<f64> = valid.results.tensions.iter().map(|t| t.tension_lbs).collect();
    assert_eq!(tensions.len(), 4);
    assert!(tensions.iter().all(|t| *t == tensions[0]));
    assert_eq!(valid.summary.governing_element_id, "S1-leg-1");
}

#[test]
fn smaller_offset_gives_steeper_angle_and_lower_tension() {
    let rise = Feet(10.0);
    let share = Pounds(5000.0);

    let near = sling_angle(rise, Feet(3.0)).unwrap();
    let far = sling_angle(rise, Feet(6.0)).unwrap();
    assert!(near.value() > far.value());

    let near_tension = sling_tension(share, near).unwrap();
    let far_tension = sling_tension(share, far).unwrap();
    assert!(near_tension.value() < far_tension.value());
}

#[test]
fn bottom_angle_of_exactly_45_is_rejected() {
    let input: EngineInput = serde_json::from_value(json!({
        "load": { "weight_lbs": 10000 },
        "bottom_rigging": { "legs": [
            { "id": "L1", "load_share_lbs": 5000, "sling_length_ft": 7.08,
              "pick_point": { "vertical_rise_ft": 5, "horizontal_offset_ft": 5 } },
            { "id": "L2", "load_share_lbs": 5000, "sling_length_ft": 7.08,
              "pick_point": { "vertical_rise_ft": 5, "horizontal_offset_ft": 5 } }
        ] }
    }))
    .unwrap();

    match evaluate_standard(&input).unwrap() {
        Verdict::Rejected(rejection) => {
            assert_eq!(rejection.reason, RejectionReason::SlingAngleBelowMinimum);
        }
        Verdict::Evaluated(_) => panic!("45 degrees must not pass bottom rigging"),
    }
}

#[test]
fn shackle_sizing_basis_is_exclusive() {
    let request: LiftRequest = serde_json::from_value(scenario_a()).unwrap();
    let input = request.to_engine_input(20.0).unwrap();

    let output = match evaluate_standard(&input).unwrap() {
        Verdict::Evaluated(output) => output,
        Verdict::Rejected(rejection) => panic!("unexpected rejection: {:?}", rejection),
    };

    for leg in &output.bottom_rigging.legs {
        let shackle = &leg.shackle;
        match shackle.sized_from {
            ShackleBasis::Tension => {
                assert_eq!(shackle.applied_factor, 1.25);
                assert!((shackle.required_capacity_lbs - leg.tension_lbs * 1.25).abs() < 1e-9);
            }
            ShackleBasis::SlingWll => {
                assert_eq!(shackle.applied_factor, 1.0);
                assert_eq!(shackle.required_capacity_lbs, leg.sling.minimum_wll_lbs);
            }
        }
        assert!(shackle.wll_lbs >= shackle.required_capacity_lbs);
    }
}

#[test]
fn identical_requests_give_identical_json() {
    let json = scenario_e().to_string();
    let first = serde_json::to_string(&evaluate_request_json(&json, tables::standard()).unwrap()).unwrap();
    let second = serde_json::to_string(&evaluate_request_json(&json, tables::standard()).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_json_is_invalid_payload() {
    let response = evaluate_request_json("{ \"units\": ", tables::standard()).unwrap();
    expect_reason(&response, RejectionReason::InvalidRequestPayload);

    let missing_hook = r#"{ "units": "imperial", "load": { "weight_lbs": 1000 } }"#;
    let response = evaluate_request_json(missing_hook, tables::standard()).unwrap();
    expect_reason(&response, RejectionReason::InvalidRequestPayload);
}

#[test]
fn valid_response_wire_shape() {
    let response = run(scenario_a());
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["status"], "valid");
    assert_eq!(json["blocked"], false);
    assert_eq!(json["summary"]["governing_condition"], "bottom_rigging_tension");
    assert_eq!(json["summary"]["governing_element_id"], "S1-leg-1");
    assert_eq!(json["results"]["angles"][0]["sling_id"], "S1");
    assert_eq!(json["results"]["angles"][0]["leg"], 1);
    assert_eq!(json["results"]["lateral_pressure"]["status"], "mitigated-with-longer-slings");
    assert_eq!(json["results"]["weights"]["total_lift_lbs"], 20068.0);
    assert!(json["warnings"].is_array());
    assert_eq!(json["disclaimer"], DISCLAIMER);
}

#[test]
fn invalid_response_wire_shape() {
    let mut request = scenario_a();
    request["slings"][0]["legs"] = json!(3);

    let json = serde_json::to_value(run(request)).unwrap();
    assert_eq!(json["status"], "invalid");
    assert_eq!(json["blocked"], true);
    assert_eq!(json["reason"], "legs_pick_points_mismatch");
    assert_eq!(json["disclaimer"], DISCLAIMER);
}

#[test]
fn result_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<rigging_core::EngineOutput>();
    assert_send_sync::<Verdict>();
    assert_send_sync::<LiftResponse>();
    assert_send_sync::<rigging_core::CapacityTables>();
}
