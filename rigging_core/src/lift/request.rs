//! Lift request schema, validation and resolution into engine legs.
//!
//! Validation runs before any calculation; a request that fails here never
//! reaches the engine. Failures are [`Rejection`]s with a closed reason code.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::calculations::beam::BeamInput;
use crate::calculations::geometry::{centroid, horizontal_offset, vertical_rise_for_length, PlanPoint};
use crate::calculations::rigging::{LegInput, PickGeometry};
use crate::engine::{BottomRiggingInput, Conditions, EngineInput, LoadInput, TopRiggingInput};
use crate::errors::{Rejection, RejectionReason};
use crate::rules::MAX_SLING_LENGTH_FT;
use crate::tables::SlingMaterial;
use crate::units::Feet;

/// Offsets at or below this are treated as a vertical leg
const VERTICAL_LEG_TOLERANCE_FT: f64 = 1e-9;

/// Measurement system of the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Imperial,
    Metric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSpec {
    pub weight_lbs: f64,
    #[serde(default)]
    pub cg_known: bool,
    #[serde(default)]
    pub sharp_edges_present: bool,
}

/// Lift point. `z_ft` is measured from the top of the load to the
/// pick-point centerline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickPoint {
    pub id: String,
    pub x_ft: f64,
    pub y_ft: f64,
    pub z_ft: f64,
}

impl PickPoint {
    pub fn plan(&self) -> PlanPoint {
        PlanPoint::new(self.x_ft, self.y_ft)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometrySpec {
    pub pick_points: Vec<PickPoint>,
    pub distances_authoritative: bool,
}

/// User-supplied sling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlingSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub material: SlingMaterial,
    pub legs: u32,
    pub length_ft: f64,
    pub wll_lbs: f64,
    #[serde(default)]
    pub sharing_allowed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShackleSpec {
    pub id: String,
    pub wll_lbs: f64,
}

fn default_top_rigging_id() -> String {
    "TOP".to_string()
}

/// Rigging from a spreader bar or lift beam up to the hook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopRiggingSpec {
    #[serde(default = "default_top_rigging_id")]
    pub id: String,
    pub legs: u32,
    pub length_ft: f64,
    /// Distance between the beam attachment points
    pub span_ft: f64,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub material: Option<SlingMaterial>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wll_lbs: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareSpec {
    #[serde(default)]
    pub shackles: Vec<ShackleSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beam: Option<BeamInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_rigging: Option<TopRiggingSpec>,
}

/// Crane hook limits for the request-level hook height check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookInterface {
    pub hook_height_limit_ft: f64,
    pub block_clearance_ft: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// Adopt the mitigation sling length when lateral pressure needs it
    #[serde(default)]
    pub auto_sling_length: bool,
    pub round_distances_up: bool,
}

/// Pick-point lift request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftRequest {
    pub units: Units,
    pub load: LoadSpec,
    pub geometry: GeometrySpec,
    pub slings: Vec<SlingSpec>,
    #[serde(default)]
    pub hardware: HardwareSpec,
    pub hook_interface: HookInterface,
    pub options: RequestOptions,
}

fn reject(reason: RejectionReason, details: impl Into<String>) -> Rejection {
    Rejection::new(reason, details)
}

fn payload(details: impl Into<String>) -> Rejection {
    reject(RejectionReason::InvalidRequestPayload, details)
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl LiftRequest {
    /// The single bottom sling configuration (valid after [`validate`](Self::validate))
    pub fn bottom_sling(&self) -> Option<&SlingSpec> {
        self.slings.first()
    }

    /// Highest pick point above the top of the load
    pub fn max_pick_point_z(&self) -> f64 {
        self.geometry
            .pick_points
            .iter()
            .map(|p| p.z_ft)
            .fold(0.0, f64::max)
    }

    /// Schema and configuration checks.
    pub fn validate(&self) -> Result<(), Rejection> {
        if self.units != Units::Imperial {
            return Err(reject(
                RejectionReason::UnsupportedConfiguration,
                "Only imperial units are supported",
            ));
        }

        if !is_positive(self.load.weight_lbs) {
            return Err(payload("Load weight must be greater than zero"));
        }

        self.validate_geometry()?;

        if !self.options.round_distances_up {
            return Err(payload("round_distances_up must be true"));
        }

        let sling = match self.slings.as_slice() {
            [] => return Err(payload("At least one sling configuration is required")),
            [sling] => sling,
            _ => {
                return Err(reject(
                    RejectionReason::UnsupportedConfiguration,
                    format!(
                        "Exactly one bottom sling configuration is supported, {} were provided",
                        self.slings.len()
                    ),
                ))
            }
        };
        self.validate_sling(sling)?;

        for shackle in &self.hardware.shackles {
            if shackle.id.trim().is_empty() {
                return Err(payload("Shackle id is required"));
            }
            if !is_positive(shackle.wll_lbs) {
                return Err(payload(format!("Shackle '{}' WLL must be greater than zero", shackle.id)));
            }
        }

        if let Some(beam) = &self.hardware.beam {
            if beam.wll_lbs.is_some_and(|w| !is_positive(w)) {
                return Err(payload("Beam WLL must be greater than zero"));
            }
            if beam.height_ft.is_some_and(|h| !(h.is_finite() && h >= 0.0)) {
                return Err(payload("Beam height cannot be negative"));
            }
        }

        if let Some(top) = &self.hardware.top_rigging {
            if top.legs == 0 {
                return Err(payload("Top rigging must include at least one sling"));
            }
            if !is_positive(top.length_ft) {
                return Err(payload("Top rigging sling length must be greater than zero"));
            }
            if top.length_ft > MAX_SLING_LENGTH_FT as f64 {
                return Err(reject(
                    RejectionReason::SlingLengthExceedsMaximum,
                    format!("Maximum allowed sling length is {} ft", MAX_SLING_LENGTH_FT),
                ));
            }
            if !(top.span_ft.is_finite() && top.span_ft >= 0.0) {
                return Err(payload("Top rigging span cannot be negative"));
            }
            if top.wll_lbs.is_some_and(|w| !is_positive(w)) {
                return Err(payload("Top rigging sling WLL must be greater than zero"));
            }
        }

        if !is_positive(self.hook_interface.hook_height_limit_ft) {
            return Err(payload("Hook height limit must be greater than zero"));
        }
        if !is_positive(self.hook_interface.block_clearance_ft) {
            return Err(payload("Block clearance must be greater than zero"));
        }

        Ok(())
    }

    fn validate_geometry(&self) -> Result<(), Rejection> {
        let points = &self.geometry.pick_points;
        if points.is_empty() {
            return Err(payload("At least one pick point is required"));
        }
        if !self.geometry.distances_authoritative {
            return Err(payload("distances_authoritative must be true"));
        }

        let mut seen = HashSet::new();
        for point in points {
            if point.id.trim().is_empty() {
                return Err(payload("Pick point ID is required"));
            }
            if !seen.insert(point.id.as_str()) {
                return Err(payload(format!("Duplicate pick point id '{}'", point.id)));
            }
            if !(point.x_ft.is_finite() && point.y_ft.is_finite()) {
                return Err(payload(format!("Pick point '{}' coordinates must be finite", point.id)));
            }
            if !(point.z_ft.is_finite() && point.z_ft >= 0.0) {
                return Err(payload(format!("Pick point '{}' Z must be ≥ 0", point.id)));
            }
        }
        Ok(())
    }

    fn validate_sling(&self, sling: &SlingSpec) -> Result<(), Rejection> {
        if sling.id.trim().is_empty() {
            return Err(payload("Sling id is required"));
        }
        if sling.legs == 0 {
            return Err(payload(format!("Sling '{}' must have at least one leg", sling.id)));
        }
        let points = self.geometry.pick_points.len();
        if sling.legs as usize != points {
            return Err(reject(
                RejectionReason::LegsPickPointsMismatch,
                format!(
                    "Sling \"{}\" has {} legs but {} pick points were provided",
                    sling.id, sling.legs, points
                ),
            ));
        }
        if !is_positive(sling.length_ft) {
            return Err(payload("Sling length must be greater than zero"));
        }
        if sling.length_ft > MAX_SLING_LENGTH_FT as f64 {
            return Err(reject(
                RejectionReason::SlingLengthExceedsMaximum,
                format!("Maximum allowed sling length is {} ft", MAX_SLING_LENGTH_FT),
            ));
        }
        if !is_positive(sling.wll_lbs) {
            return Err(payload("Sling WLL must be greater than zero"));
        }
        Ok(())
    }

    /// Resolve pick points into engine legs with the hook over the plan-view
    /// centroid, using `sling_length_ft` for every bottom leg.
    pub fn to_engine_input(&self, sling_length_ft: f64) -> Result<EngineInput, Rejection> {
        let sling = self
            .bottom_sling()
            .ok_or_else(|| payload("At least one sling configuration is required"))?;

        let plan: Vec<PlanPoint> = self.geometry.pick_points.iter().map(PickPoint::plan).collect();
        let centre = centroid(&plan).ok_or_else(|| payload("At least one pick point is required"))?;
        let share = self.load.weight_lbs / sling.legs as f64;

        let legs = self
            .geometry
            .pick_points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let offset = horizontal_offset(point.plan(), centre);
                resolve_leg(
                    format!("{}-leg-{}", sling.id, i + 1),
                    &point.id,
                    share,
                    offset,
                    sling_length_ft,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let top_rigging = match &self.hardware.top_rigging {
            Some(top) => Some(self.resolve_top_rigging(top)?),
            None => None,
        };

        Ok(EngineInput {
            load: LoadInput {
                weight_lbs: self.load.weight_lbs,
            },
            conditions: Conditions {
                sharp_edges_present: self.load.sharp_edges_present,
            },
            bottom_rigging: BottomRiggingInput {
                legs,
                beam: self.hardware.beam.clone(),
            },
            top_rigging,
            crane: None,
        })
    }

    fn resolve_top_rigging(&self, top: &TopRiggingSpec) -> Result<TopRiggingInput, Rejection> {
        let beam_weight = self
            .hardware
            .beam
            .as_ref()
            .and_then(BeamInput::actual_weight)
            .unwrap_or(0.0);
        let share = (self.load.weight_lbs + beam_weight) / top.legs as f64;
        let offset = Feet(top.span_ft / 2.0);

        let legs = (1..=top.legs)
            .map(|n| {
                let id = format!("{}-leg-{}", top.id, n);
                resolve_leg(id.clone(), &id, share, offset, top.length_ft)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TopRiggingInput { legs })
    }
}

fn resolve_leg(id: String, point_id: &str, share: f64, offset: Feet, sling_length_ft: f64) -> Result<LegInput, Rejection> {
    if offset.value() <= VERTICAL_LEG_TOLERANCE_FT {
        return Err(reject(
            RejectionReason::UnsupportedConfiguration,
            format!(
                "Pick point '{}' lies directly below the hook; vertical legs are not supported",
                point_id
            ),
        ));
    }

    let rise = vertical_rise_for_length(Feet(sling_length_ft), offset).map_err(|_| {
        reject(
            RejectionReason::InvalidPickPointGeometry,
            format!(
                "Sling length {} ft cannot reach pick point '{}' at {:.2} ft horizontal offset",
                sling_length_ft,
                point_id,
                offset.value()
            ),
        )
    })?;

    Ok(LegInput {
        id,
        load_share_lbs: share,
        pick_point: PickGeometry {
            vertical_rise_ft: rise.value(),
            horizontal_offset_ft: offset.value(),
        },
        sling_length_ft,
    })
}
