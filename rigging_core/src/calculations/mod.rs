//! # Rigging Calculations
//!
//! The engine pipeline, one module per stage. Every stage is a pure function
//! over plain JSON-serializable value types:
//!
//! - `*Input` - caller-supplied data
//! - `*Result` / `*Evaluation` / `*Info` - computed results, never patched
//!
//! ## Stages
//!
//! - [`geometry`] - sling angle from rise and offset
//! - [`tension`] - leg tension and lateral force
//! - [`selection`] - sling and shackle selection from capacity tables
//! - [`rigging`] - bottom/top rigging evaluation and governing leg
//! - [`lateral`] - lateral pressure and the longer-sling mitigation search
//! - [`beam`] - spreader bar / lift beam requirement
//! - [`hook_height`] - informational hook height stack-up
//! - [`governing`] - final governing summary

pub mod beam;
pub mod geometry;
pub mod governing;
pub mod hook_height;
pub mod lateral;
pub mod rigging;
pub mod selection;
pub mod tension;

// Re-export commonly used types
pub use beam::{evaluate_beam_requirement, BeamEvaluation, BeamInput, BeamType};
pub use geometry::{pair_angle, sling_angle, vertical_rise_for_length, PlanPoint};
pub use governing::{finalize_governing_summary, GoverningCondition, GoverningSummary, Severity};
pub use hook_height::{evaluate_hook_height, CraneLimits, HookHeightInfo};
pub use lateral::{evaluate_lateral_pressure, LateralPressureResult, LateralStatus, SlingAlternative};
pub use rigging::{evaluate_rigging, LegInput, LegResult, PickGeometry, RiggingResult};
pub use selection::{select_shackle, select_sling, ShackleBasis, ShackleSelection, SlingSelection};
pub use tension::{lateral_force, sling_tension};
