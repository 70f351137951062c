//! # Capacity Tables
//!
//! Reference data for sling and shackle selection. Tables are injected into
//! the engine as `&CapacityTables`; the built-in set is available through
//! [`standard()`] and alternates can be loaded from JSON (see
//! [`crate::file_io::load_tables`]).
//!
//! Every table is ordered by ascending WLL. Selection is always "first entry
//! whose WLL is at least the requirement", so equality counts as a pass.
//!
//! ## Example
//!
//! ```rust
//! use rigging_core::tables::{self, SlingMaterial};
//!
//! let tables = tables::standard();
//! let row = tables.first_sling_at_least(SlingMaterial::WireRope, 13_200.0).unwrap();
//! assert_eq!(row.size, "5/8 in");
//!
//! let shackle = tables.first_shackle_at_least(12_910.0).unwrap();
//! assert_eq!(shackle.size, "7/8 in");
//! ```

pub mod shackles;
pub mod slings;

pub use shackles::{builtin_carbon_steel, ShackleRow};
pub use slings::{builtin_chain, builtin_synthetic, builtin_wire_rope, SlingMaterial, SlingRow, SlingWeights};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, RiggingError};

static STANDARD_TABLES: Lazy<CapacityTables> = Lazy::new(CapacityTables::builtin);

/// Process-wide built-in tables, built on first use and shared read-only.
pub fn standard() -> &'static CapacityTables {
    &STANDARD_TABLES
}

/// Sling and shackle capacity tables plus sling self-weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityTables {
    pub synthetic: Vec<SlingRow>,
    pub wire_rope: Vec<SlingRow>,
    pub chain: Vec<SlingRow>,
    /// Carbon steel shackles only
    pub shackles: Vec<ShackleRow>,
    #[serde(default)]
    pub sling_weights: SlingWeights,
}

impl Default for CapacityTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CapacityTables {
    /// Built-in tables
    pub fn builtin() -> Self {
        CapacityTables {
            synthetic: builtin_synthetic(),
            wire_rope: builtin_wire_rope(),
            chain: builtin_chain(),
            shackles: builtin_carbon_steel(),
            sling_weights: SlingWeights::default(),
        }
    }

    /// Table rows for one sling material
    pub fn sling_table(&self, material: SlingMaterial) -> &[SlingRow] {
        match material {
            SlingMaterial::Synthetic => &self.synthetic,
            SlingMaterial::WireRope => &self.wire_rope,
            SlingMaterial::Chain => &self.chain,
        }
    }

    /// First sling of `material` rated for at least `required_lbs`
    pub fn first_sling_at_least(&self, material: SlingMaterial, required_lbs: f64) -> Option<&SlingRow> {
        let rows = self.sling_table(material);
        rows.get(rows.partition_point(|row| row.wll_lbs < required_lbs))
    }

    /// First shackle rated for at least `required_lbs`
    pub fn first_shackle_at_least(&self, required_lbs: f64) -> Option<&ShackleRow> {
        self.shackles
            .get(self.shackles.partition_point(|row| row.wll_lbs < required_lbs))
    }

    /// Check ordering and value invariants.
    ///
    /// Binary search only returns the first qualifying entry when rows are
    /// strictly ascending, so loaded tables must pass this before use.
    pub fn validate(&self) -> CalcResult<()> {
        for material in SlingMaterial::PREFERRED {
            let rows = self.sling_table(material);
            check_ascending(material.as_str(), rows.iter().map(|r| (r.size.as_str(), r.wll_lbs)))?;
        }

        check_ascending("shackles", self.shackles.iter().map(|r| (r.size.as_str(), r.wll_lbs)))?;

        for row in &self.shackles {
            if !(row.tonnage.is_finite() && row.tonnage > 0.0) {
                return Err(RiggingError::table_invariant(
                    "shackles",
                    format!("shackle '{}' has non-positive tonnage {}", row.size, row.tonnage),
                ));
            }
            if !(row.weight_lbs.is_finite() && row.weight_lbs >= 0.0) {
                return Err(RiggingError::table_invariant(
                    "shackles",
                    format!("shackle '{}' has negative weight {}", row.size, row.weight_lbs),
                ));
            }
        }

        for material in SlingMaterial::PREFERRED {
            let per_ft = self.sling_weights.lbs_per_ft(material);
            if !(per_ft.is_finite() && per_ft >= 0.0) {
                return Err(RiggingError::table_invariant(
                    "sling_weights",
                    format!("{} weight per foot must be non-negative, got {}", material, per_ft),
                ));
            }
        }

        Ok(())
    }
}

fn check_ascending<'a>(table: &str, rows: impl Iterator<Item = (&'a str, f64)>) -> CalcResult<()> {
    let mut previous: Option<f64> = None;
    let mut count = 0usize;

    for (size, wll) in rows {
        count += 1;
        if !(wll.is_finite() && wll > 0.0) {
            return Err(RiggingError::table_invariant(
                table,
                format!("entry '{}' has non-positive WLL {}", size, wll),
            ));
        }
        if let Some(prev) = previous {
            if wll < prev {
                return Err(RiggingError::table_invariant(
                    table,
                    format!("entry '{}' ({} lb) is below the previous entry ({} lb)", size, wll, prev),
                ));
            }
        }
        previous = Some(wll);
    }

    if count == 0 {
        return Err(RiggingError::table_invariant(table, "table is empty"));
    }

    Ok(())
}
