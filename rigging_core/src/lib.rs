//! # rigging_core - Below-the-Hook Rigging Calculation Engine
//!
//! `rigging_core` computes rigging geometry, sling and shackle sizing, and
//! pass/fail verdicts for single-crane, static, below-the-hook lifts. All
//! inputs and outputs are JSON-serializable so the same types travel through
//! files, the CLI and any other transport unchanged.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every stage is a pure function; identical input gives identical output
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rejections are results**: a lift that fails a rule comes back as a
//!   tagged verdict with a closed reason, never as a panic
//! - **Locked rules**: angle limits and factors are constants, capacity tables are data
//!
//! ## Quick Start
//!
//! ```rust
//! use rigging_core::engine::{evaluate_standard, EngineInput};
//!
//! let input: EngineInput = serde_json::from_str(r#"{
//!   "load": { "weight_lbs": 20000 },
//!   "bottom_rigging": { "legs": [
//!     { "id": "L1", "load_share_lbs": 10000, "sling_length_ft": 20,
//!       "pick_point": { "vertical_rise_ft": 19.3649, "horizontal_offset_ft": 5 } },
//!     { "id": "L2", "load_share_lbs": 10000, "sling_length_ft": 20,
//!       "pick_point": { "vertical_rise_ft": 19.3649, "horizontal_offset_ft": 5 } }
//!   ] }
//! }"#).unwrap();
//!
//! let verdict = evaluate_standard(&input).unwrap();
//! assert!(verdict.is_acceptable());
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - engine input/output and the evaluation pipeline
//! - [`calculations`] - one module per pipeline stage
//! - [`lift`] - pick-point request form, hardware checks and response shape
//! - [`tables`] - sling and shackle capacity tables
//! - [`rules`] - locked rule constants and the disclaimer
//! - [`units`] - type-safe unit wrappers
//! - [`errors`] - structured errors and rejection reasons
//! - [`file_io`] - JSON file loading and atomic writes

pub mod calculations;
pub mod engine;
pub mod errors;
pub mod file_io;
pub mod lift;
pub mod rules;
pub mod tables;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use engine::{evaluate, evaluate_standard, EngineInput, EngineOutput, Verdict};
pub use errors::{CalcResult, Rejection, RejectionReason, RiggingError};
pub use file_io::{load_engine_input, load_tables, read_request_json, save_json};
pub use lift::{evaluate_request, evaluate_request_json, LiftRequest, LiftResponse};
pub use tables::CapacityTables;
