//! # Error Types
//!
//! Structured error types for rigging_core. Errors fall into two tiers:
//!
//! - **Business rejections**: the lift is not acceptable as described (angle
//!   below minimum, no sling or shackle in the tables can carry the load, a
//!   mandatory beam weight is missing). These map onto a closed
//!   [`RejectionReason`] and are reported as a [`Rejection`], never as a
//!   generic failure.
//! - **Contract violations**: input reached the engine that the upstream
//!   validator should have excluded (non-positive rise, empty rigging,
//!   unordered tables). These stay errors and end the request.
//!
//! ## Example
//!
//! ```rust
//! use rigging_core::errors::{RiggingError, RejectionReason};
//!
//! let err = RiggingError::NoCompliantSling {
//!     required_lbs: 250_000.0,
//!     sharp_edges_present: false,
//! };
//! assert_eq!(err.rejection_reason(), Some(RejectionReason::WllExceeded));
//!
//! let contract = RiggingError::invalid_input("load.weight_lbs", "-1", "Load weight must be positive");
//! assert!(contract.rejection_reason().is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules::RiggingPosition;

/// Result type alias for rigging_core operations
pub type CalcResult<T> = Result<T, RiggingError>;

/// Structured error type for rigging calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RiggingError {
    /// Rise/offset pair cannot form a sling leg
    #[error("Invalid geometry: rise {vertical_rise_ft} ft, offset {horizontal_offset_ft} ft - {reason}")]
    InvalidGeometry {
        vertical_rise_ft: f64,
        horizontal_offset_ft: f64,
        reason: String,
    },

    /// Load share or angle outside the tension formula's domain
    #[error("Invalid tension input: load share {load_share_lbs} lb at {angle_deg}° - {reason}")]
    InvalidTensionInput {
        load_share_lbs: f64,
        angle_deg: f64,
        reason: String,
    },

    /// Sling cannot reach the bearing point
    #[error("Sling length {sling_length_ft} ft does not exceed horizontal offset {horizontal_offset_ft} ft")]
    SlingTooShort {
        sling_length_ft: f64,
        horizontal_offset_ft: f64,
    },

    /// A mitigation candidate length could not form valid geometry
    #[error("Invalid mitigation geometry: {sling_length_ft} ft sling cannot span {horizontal_offset_ft} ft offset")]
    InvalidMitigationGeometry {
        sling_length_ft: f64,
        horizontal_offset_ft: f64,
    },

    /// Sling angle fails the minimum for its rigging position
    #[error("Invalid {position} rigging configuration: sling angle {angle_deg:.1}° on leg '{leg_id}' is below the minimum allowed {minimum_deg}°")]
    AngleBelowMinimum {
        position: RiggingPosition,
        leg_id: String,
        angle_deg: f64,
        minimum_deg: f64,
        inclusive: bool,
    },

    /// No sling material in the applicable order carries the tension
    #[error("No compliant sling found for required tension {required_lbs:.0} lb")]
    NoCompliantSling {
        required_lbs: f64,
        sharp_edges_present: bool,
    },

    /// No carbon steel shackle carries the governing load
    #[error("No compliant carbon steel shackle found for governing load {governing_load_lbs:.0} lb")]
    NoCompliantShackle { governing_load_lbs: f64 },

    /// Selected shackle is rated below the minimum size
    #[error("Shackle {size} ({tonnage} t) is below the minimum allowed size of {minimum_tonnage} t")]
    BelowMinimumSize {
        size: String,
        tonnage: f64,
        minimum_tonnage: f64,
    },

    /// Beam is required but its actual weight was not supplied
    #[error("Beam weight missing: {reason}")]
    BeamWeightMissing { reason: String },

    /// Failure while evaluating a specific leg
    #[error("{position} rigging leg '{leg_id}': {source}")]
    Leg {
        position: RiggingPosition,
        leg_id: String,
        source: Box<RiggingError>,
    },

    /// Rigging evaluated with no legs
    #[error("{position} rigging has no legs")]
    EmptyRigging { position: RiggingPosition },

    /// Governing leg id does not match any evaluated leg
    #[error("Governing {position} rigging leg '{leg_id}' not found")]
    GoverningLegNotFound {
        position: RiggingPosition,
        leg_id: String,
    },

    /// Capacity table violates its ordering or value invariants
    #[error("Capacity table '{table}' is invalid: {reason}")]
    TableInvariant { table: String, reason: String },

    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl RiggingError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        RiggingError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(vertical_rise_ft: f64, horizontal_offset_ft: f64, reason: impl Into<String>) -> Self {
        RiggingError::InvalidGeometry {
            vertical_rise_ft,
            horizontal_offset_ft,
            reason: reason.into(),
        }
    }

    /// Create an InvalidTensionInput error
    pub fn invalid_tension(load_share_lbs: f64, angle_deg: f64, reason: impl Into<String>) -> Self {
        RiggingError::InvalidTensionInput {
            load_share_lbs,
            angle_deg,
            reason: reason.into(),
        }
    }

    /// Create a TableInvariant error
    pub fn table_invariant(table: impl Into<String>, reason: impl Into<String>) -> Self {
        RiggingError::TableInvariant {
            table: table.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        RiggingError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an error raised while evaluating one leg
    pub fn in_leg(self, position: RiggingPosition, leg_id: impl Into<String>) -> Self {
        RiggingError::Leg {
            position,
            leg_id: leg_id.into(),
            source: Box::new(self),
        }
    }

    /// The rejection reason for business outcomes, `None` for contract violations.
    pub fn rejection_reason(&self) -> Option<RejectionReason> {
        match self {
            RiggingError::AngleBelowMinimum { .. } => Some(RejectionReason::SlingAngleBelowMinimum),
            RiggingError::NoCompliantSling { .. } => Some(RejectionReason::WllExceeded),
            RiggingError::NoCompliantShackle { .. } | RiggingError::BelowMinimumSize { .. } => {
                Some(RejectionReason::ShackleWllExceeded)
            }
            RiggingError::BeamWeightMissing { .. } => Some(RejectionReason::LateralPressureExceeded),
            RiggingError::Leg { position, source, .. } => match source.rejection_reason() {
                Some(RejectionReason::WllExceeded) if *position == RiggingPosition::Top => {
                    Some(RejectionReason::TopRiggingWllExceeded)
                }
                other => other,
            },
            _ => None,
        }
    }

    /// Convert a business outcome into a [`Rejection`]; contract violations come back as `Err`.
    pub fn into_rejection(self) -> Result<Rejection, RiggingError> {
        match self.rejection_reason() {
            Some(reason) => Ok(Rejection::new(reason, self.to_string())),
            None => Err(self),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RiggingError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            RiggingError::InvalidTensionInput { .. } => "INVALID_TENSION_INPUT",
            RiggingError::SlingTooShort { .. } => "SLING_TOO_SHORT",
            RiggingError::InvalidMitigationGeometry { .. } => "INVALID_MITIGATION_GEOMETRY",
            RiggingError::AngleBelowMinimum { .. } => "ANGLE_BELOW_MINIMUM",
            RiggingError::NoCompliantSling { .. } => "NO_COMPLIANT_SLING",
            RiggingError::NoCompliantShackle { .. } => "NO_COMPLIANT_SHACKLE",
            RiggingError::BelowMinimumSize { .. } => "BELOW_MINIMUM_SIZE",
            RiggingError::BeamWeightMissing { .. } => "BEAM_WEIGHT_MISSING",
            RiggingError::Leg { .. } => "LEG_FAILED",
            RiggingError::EmptyRigging { .. } => "EMPTY_RIGGING",
            RiggingError::GoverningLegNotFound { .. } => "GOVERNING_LEG_NOT_FOUND",
            RiggingError::TableInvariant { .. } => "TABLE_INVARIANT",
            RiggingError::InvalidInput { .. } => "INVALID_INPUT",
            RiggingError::FileError { .. } => "FILE_ERROR",
            RiggingError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

/// Closed set of reasons a lift is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    SlingAngleBelowMinimum,
    SlingLengthExceedsMaximum,
    WllExceeded,
    TopRiggingWllExceeded,
    ShackleWllExceeded,
    InvalidPickPointGeometry,
    LegsPickPointsMismatch,
    LateralPressureExceeded,
    HookHeightExceeded,
    BlockClearanceInsufficient,
    InvalidRequestPayload,
    UnsupportedConfiguration,
}

impl RejectionReason {
    /// Wire code, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::SlingAngleBelowMinimum => "sling_angle_below_minimum",
            RejectionReason::SlingLengthExceedsMaximum => "sling_length_exceeds_maximum",
            RejectionReason::WllExceeded => "wll_exceeded",
            RejectionReason::TopRiggingWllExceeded => "top_rigging_wll_exceeded",
            RejectionReason::ShackleWllExceeded => "shackle_wll_exceeded",
            RejectionReason::InvalidPickPointGeometry => "invalid_pick_point_geometry",
            RejectionReason::LegsPickPointsMismatch => "legs_pick_points_mismatch",
            RejectionReason::LateralPressureExceeded => "lateral_pressure_exceeded",
            RejectionReason::HookHeightExceeded => "hook_height_exceeded",
            RejectionReason::BlockClearanceInsufficient => "block_clearance_insufficient",
            RejectionReason::InvalidRequestPayload => "invalid_request_payload",
            RejectionReason::UnsupportedConfiguration => "unsupported_configuration",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A business rejection: closed reason code plus human-readable detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejection {
    pub reason: RejectionReason,
    pub details: String,
}

impl Rejection {
    pub fn new(reason: RejectionReason, details: impl Into<String>) -> Self {
        Rejection {
            reason,
            details: details.into(),
        }
    }
}
