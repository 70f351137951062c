//! # Capacity Selection
//!
//! Picks slings and shackles from the capacity tables for a calculated leg
//! tension.
//!
//! ## Slings
//!
//! Materials are tried in preference order (synthetic, wire rope, chain; wire
//! rope and chain only when sharp edges are present). The first material that
//! has both an entry rated for the tension and an entry rated for 1.5× the
//! tension wins.
//!
//! ## Shackles
//!
//! The shackle is sized for the larger of `1.25 × T` and the selected sling's
//! minimum WLL. The connection factor applies only to the tension-derived
//! requirement, so the recorded `applied_factor` is exactly 1.25 or exactly 1.
//!
//! ## Example
//!
//! ```rust
//! use rigging_core::calculations::selection::{select_shackle, select_sling, ShackleBasis};
//! use rigging_core::tables::{self, SlingMaterial};
//! use rigging_core::units::Pounds;
//!
//! let tables = tables::standard();
//! let sling = select_sling(Pounds(10_328.0), false, tables).unwrap();
//! assert_eq!(sling.material, SlingMaterial::Synthetic);
//! assert_eq!(sling.selected_size, "6 ton (white)");
//!
//! let shackle = select_shackle(Pounds(10_328.0), Pounds(sling.minimum_wll_lbs), tables).unwrap();
//! assert_eq!(shackle.sized_from, ShackleBasis::Tension);
//! assert_eq!(shackle.applied_factor, 1.25);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, RiggingError};
use crate::rules::{MIN_SHACKLE_TONNAGE, RECOMMENDED_WLL_FACTOR, SHACKLE_CONNECTION_FACTOR};
use crate::tables::{CapacityTables, SlingMaterial};
use crate::units::Pounds;

/// Sling chosen for one leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlingSelection {
    pub material: SlingMaterial,
    /// WLL of the smallest entry rated for the tension (lb)
    pub minimum_wll_lbs: f64,
    /// WLL of the smallest entry rated for 1.5× the tension (lb)
    pub recommended_wll_lbs: f64,
    pub selected_size: String,
    pub recommended_size: String,
}

/// Which requirement sized the shackle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShackleBasis {
    /// 1.25 × calculated tension
    Tension,
    /// Selected sling minimum WLL
    SlingWll,
}

/// Shackle chosen for one leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShackleSelection {
    pub nominal_size: String,
    pub tonnage: f64,
    pub wll_lbs: f64,
    pub weight_lbs: f64,
    /// Governing load the shackle was sized for (lb)
    pub required_capacity_lbs: f64,
    /// 1.25 when sized from tension, 1.0 when sized from sling WLL
    pub applied_factor: f64,
    pub sized_from: ShackleBasis,
}

/// Select the sling for a leg tension.
pub fn select_sling(tension: Pounds, sharp_edges_present: bool, tables: &CapacityTables) -> CalcResult<SlingSelection> {
    let required = tension.value();
    let recommended = required * RECOMMENDED_WLL_FACTOR;

    for &material in SlingMaterial::evaluation_order(sharp_edges_present) {
        let minimum_row = tables.first_sling_at_least(material, required);
        let recommended_row = tables.first_sling_at_least(material, recommended);

        if let (Some(min), Some(rec)) = (minimum_row, recommended_row) {
            return Ok(SlingSelection {
                material,
                minimum_wll_lbs: min.wll_lbs,
                recommended_wll_lbs: rec.wll_lbs,
                selected_size: min.size.clone(),
                recommended_size: rec.size.clone(),
            });
        }
    }

    Err(RiggingError::NoCompliantSling {
        required_lbs: required,
        sharp_edges_present,
    })
}

/// Select the shackle for a leg from its tension and sling minimum WLL.
pub fn select_shackle(tension: Pounds, sling_minimum_wll: Pounds, tables: &CapacityTables) -> CalcResult<ShackleSelection> {
    if !(tension.value().is_finite() && tension.value() > 0.0) {
        return Err(RiggingError::invalid_input(
            "tension_lbs",
            tension.value().to_string(),
            "Applied load must be greater than zero",
        ));
    }
    if !(sling_minimum_wll.value().is_finite() && sling_minimum_wll.value() > 0.0) {
        return Err(RiggingError::invalid_input(
            "sling_minimum_wll_lbs",
            sling_minimum_wll.value().to_string(),
            "Sling WLL must be greater than zero",
        ));
    }

    let from_tension = tension.value() * SHACKLE_CONNECTION_FACTOR;
    let from_sling = sling_minimum_wll.value();

    // Ties count as tension-sized
    let (governing_load, applied_factor, sized_from) = if from_tension >= from_sling {
        (from_tension, SHACKLE_CONNECTION_FACTOR, ShackleBasis::Tension)
    } else {
        (from_sling, 1.0, ShackleBasis::SlingWll)
    };

    let row = tables
        .first_shackle_at_least(governing_load)
        .ok_or(RiggingError::NoCompliantShackle {
            governing_load_lbs: governing_load,
        })?;

    if row.tonnage < MIN_SHACKLE_TONNAGE {
        return Err(RiggingError::BelowMinimumSize {
            size: row.size.clone(),
            tonnage: row.tonnage,
            minimum_tonnage: MIN_SHACKLE_TONNAGE,
        });
    }

    Ok(ShackleSelection {
        nominal_size: row.size.clone(),
        tonnage: row.tonnage,
        wll_lbs: row.wll_lbs,
        weight_lbs: row.weight_lbs,
        required_capacity_lbs: governing_load,
        applied_factor,
        sized_from,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{ShackleRow, SlingRow};

    #[test]
    fn test_synthetic_preferred() {
        let sel = select_sling(Pounds(10_327.96), false, &CapacityTables::builtin()).unwrap();
        assert_eq!(sel.material, SlingMaterial::Synthetic);
        assert_eq!(sel.minimum_wll_lbs, 12000.0);
        // 1.5 × 10327.96 = 15491.9 → 10 ton
        assert_eq!(sel.recommended_wll_lbs, 20000.0);
        assert_eq!(sel.recommended_size, "10 ton (orange)");
    }

    #[test]
    fn test_sharp_edges_exclude_synthetic() {
        let sel = select_sling(Pounds(10_327.96), true, &CapacityTables::builtin()).unwrap();
        assert_eq!(sel.material, SlingMaterial::WireRope);
        assert_eq!(sel.selected_size, "5/8 in");
        assert_eq!(sel.recommended_size, "3/4 in");
    }

    #[test]
    fn test_falls_through_to_next_material() {
        // Synthetic tops out at 110000: 80000 × 1.5 = 120000 needs wire rope
        let sel = select_sling(Pounds(80_000.0), false, &CapacityTables::builtin()).unwrap();
        assert_eq!(sel.material, SlingMaterial::WireRope);
        assert_eq!(sel.recommended_wll_lbs, 120000.0);
    }

    #[test]
    fn test_no_compliant_sling() {
        let err = select_sling(Pounds(100_000.0), true, &CapacityTables::builtin()).unwrap_err();
        assert_eq!(
            err,
            RiggingError::NoCompliantSling {
                required_lbs: 100_000.0,
                sharp_edges_present: true
            }
        );
    }

    #[test]
    fn test_shackle_sized_from_tension() {
        let tables = CapacityTables::builtin();
        let sel = select_shackle(Pounds(10_000.0), Pounds(12_000.0), &tables).unwrap();
        assert_eq!(sel.sized_from, ShackleBasis::Tension);
        assert_eq!(sel.applied_factor, 1.25);
        assert_eq!(sel.required_capacity_lbs, 12_500.0);
        assert_eq!(sel.nominal_size, "7/8 in");
    }

    #[test]
    fn test_shackle_sized_from_sling_wll() {
        let tables = CapacityTables::builtin();
        // 1.25 × 8661 = 10826 < 12000
        let sel = select_shackle(Pounds(8_661.0), Pounds(12_000.0), &tables).unwrap();
        assert_eq!(sel.sized_from, ShackleBasis::SlingWll);
        assert_eq!(sel.applied_factor, 1.0);
        assert_eq!(sel.required_capacity_lbs, 12_000.0);
        assert_eq!(sel.nominal_size, "7/8 in");
    }

    #[test]
    fn test_shackle_factor_exclusive() {
        let tables = CapacityTables::builtin();
        for (t, s) in [(1_000.0, 2_000.0), (5_000.0, 6_000.0), (9_600.0, 12_000.0), (20_000.0, 20_000.0)] {
            let sel = select_shackle(Pounds(t), Pounds(s), &tables).unwrap();
            let tension_based = sel.required_capacity_lbs == t * 1.25 && sel.applied_factor == 1.25;
            let sling_based = sel.required_capacity_lbs == s && sel.applied_factor == 1.0;
            assert!(tension_based ^ sling_based);
        }
    }

    #[test]
    fn test_no_compliant_shackle() {
        let err = select_shackle(Pounds(160_000.0), Pounds(100_000.0), &CapacityTables::builtin()).unwrap_err();
        assert_eq!(err.error_code(), "NO_COMPLIANT_SHACKLE");
    }

    #[test]
    fn test_shackle_rejects_non_positive_inputs() {
        let tables = CapacityTables::builtin();
        let err = select_shackle(Pounds(0.0), Pounds(12_000.0), &tables).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = select_shackle(Pounds(10_000.0), Pounds(-1.0), &tables).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("sling_minimum_wll_lbs"));
    }

    #[test]
    fn test_below_minimum_size() {
        let mut tables = CapacityTables::builtin();
        tables.shackles.insert(
            0,
            ShackleRow {
                size: "3/16 in".to_string(),
                tonnage: 0.33,
                wll_lbs: 666.0,
                weight_lbs: 0.06,
            },
        );
        let err = select_shackle(Pounds(400.0), Pounds(400.0), &tables).unwrap_err();
        assert_eq!(err.error_code(), "BELOW_MINIMUM_SIZE");
    }

    #[test]
    fn test_injected_fixture_table() {
        let mut tables = CapacityTables::builtin();
        tables.synthetic = vec![SlingRow::new("fixture", 1000.0), SlingRow::new("fixture-xl", 1500.0)];
        let sel = select_sling(Pounds(1000.0), false, &tables).unwrap();
        assert_eq!(sel.selected_size, "fixture");
        assert_eq!(sel.recommended_size, "fixture-xl");
    }
}
