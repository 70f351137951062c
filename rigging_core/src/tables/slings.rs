//! Sling Capacity Tables
//!
//! Vertical-hitch Working Load Limits for the three sling materials the
//! engine can recommend. All capacities are in pounds, ordered from lowest to
//! highest, with no reductions or multipliers applied here.
//!
//! ## Materials
//!
//! - **Synthetic round slings**: color-coded by rated tonnage
//! - **Wire rope slings**: 6×19 / 6×36 EIPS, by rope diameter
//! - **Chain slings**: Grade 80 alloy, by chain size

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sling material family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlingMaterial {
    /// Synthetic round sling
    Synthetic,
    /// Wire rope sling (steel choker)
    WireRope,
    /// Alloy chain sling
    Chain,
}

impl SlingMaterial {
    /// Preference order when no sharp edges are present
    pub const PREFERRED: [SlingMaterial; 3] = [
        SlingMaterial::Synthetic,
        SlingMaterial::WireRope,
        SlingMaterial::Chain,
    ];

    /// Preference order when sharp edges are present (synthetic excluded)
    pub const SHARP_EDGE: [SlingMaterial; 2] = [SlingMaterial::WireRope, SlingMaterial::Chain];

    /// Material evaluation order for the given edge condition
    pub fn evaluation_order(sharp_edges_present: bool) -> &'static [SlingMaterial] {
        if sharp_edges_present {
            &Self::SHARP_EDGE
        } else {
            &Self::PREFERRED
        }
    }

    /// Wire code, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            SlingMaterial::Synthetic => "synthetic",
            SlingMaterial::WireRope => "wire_rope",
            SlingMaterial::Chain => "chain",
        }
    }
}

impl fmt::Display for SlingMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a sling capacity table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlingRow {
    /// Size designation (e.g., "5/8 in", "3 ton (yellow)")
    pub size: String,
    /// Vertical Working Load Limit (lb)
    pub wll_lbs: f64,
}

impl SlingRow {
    pub fn new(size: impl Into<String>, wll_lbs: f64) -> Self {
        SlingRow {
            size: size.into(),
            wll_lbs,
        }
    }
}

/// Sling self-weight per foot of length, by material (lb/ft).
///
/// Used only for rigging weight accounting, never for selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlingWeights {
    pub synthetic_lbs_per_ft: f64,
    pub wire_rope_lbs_per_ft: f64,
    pub chain_lbs_per_ft: f64,
}

impl SlingWeights {
    pub fn lbs_per_ft(&self, material: SlingMaterial) -> f64 {
        match material {
            SlingMaterial::Synthetic => self.synthetic_lbs_per_ft,
            SlingMaterial::WireRope => self.wire_rope_lbs_per_ft,
            SlingMaterial::Chain => self.chain_lbs_per_ft,
        }
    }
}

impl Default for SlingWeights {
    fn default() -> Self {
        SlingWeights {
            synthetic_lbs_per_ft: 0.4,
            wire_rope_lbs_per_ft: 1.5,
            chain_lbs_per_ft: 2.2,
        }
    }
}

/// Synthetic round slings, vertical rating
pub fn builtin_synthetic() -> Vec<SlingRow> {
    [
        ("1 ton (purple)", 2000.0),
        ("2 ton (green)", 4000.0),
        ("3 ton (yellow)", 6000.0),
        ("4 ton (tan)", 8000.0),
        ("5 ton (red)", 10000.0),
        ("6 ton (white)", 12000.0),
        ("7.5 ton (blue)", 15000.0),
        ("10 ton (orange)", 20000.0),
        ("12.5 ton (gray)", 25000.0),
        ("15.5 ton (brown)", 31000.0),
        ("33 ton (olive)", 66000.0),
        ("45 ton (black)", 90000.0),
        ("50 ton (black)", 100000.0),
        ("55 ton (black)", 110000.0),
    ]
    .into_iter()
    .map(|(size, wll)| SlingRow::new(size, wll))
    .collect()
}

/// Wire rope slings (6×19 / 6×36 EIPS), vertical rating
pub fn builtin_wire_rope() -> Vec<SlingRow> {
    [
        ("1/2 in", 8600.0),
        ("5/8 in", 13200.0),
        ("3/4 in", 19600.0),
        ("7/8 in", 26600.0),
        ("1 in", 34200.0),
        ("1-1/8 in", 43200.0),
        ("1-1/4 in", 53200.0),
        ("1-1/2 in", 72000.0),
        ("1-3/4 in", 96000.0),
        ("2 in", 120000.0),
    ]
    .into_iter()
    .map(|(size, wll)| SlingRow::new(size, wll))
    .collect()
}

/// Grade 80 chain slings, vertical rating
pub fn builtin_chain() -> Vec<SlingRow> {
    [
        ("1/4 in G80", 3500.0),
        ("5/16 in G80", 4500.0),
        ("3/8 in G80", 7100.0),
        ("1/2 in G80", 12000.0),
        ("5/8 in G80", 18100.0),
        ("3/4 in G80", 28300.0),
    ]
    .into_iter()
    .map(|(size, wll)| SlingRow::new(size, wll))
    .collect()
}
