//! Carbon Steel Shackle Table
//!
//! Working Load Limits at a 5:1 design factor, in pounds. Only carbon steel
//! shackles are listed: alloy shackles are absent from the table itself, so
//! no runtime filter can let one through.

use serde::{Deserialize, Serialize};

/// One row of the shackle table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShackleRow {
    /// Nominal size (e.g., "3/4 in")
    pub size: String,
    /// Rated capacity in metric tons
    pub tonnage: f64,
    /// Working Load Limit (lb)
    pub wll_lbs: f64,
    /// Shackle self-weight (lb)
    pub weight_lbs: f64,
}

/// Built-in carbon steel shackle table
pub fn builtin_carbon_steel() -> Vec<ShackleRow> {
    [
        ("1/4 in", 0.5, 1102.0, 0.1),
        ("5/16 in", 0.75, 1653.0, 0.19),
        ("3/8 in", 1.0, 2204.0, 0.31),
        ("7/16 in", 1.5, 3306.0, 0.38),
        ("1/2 in", 2.0, 4409.0, 0.72),
        ("5/8 in", 3.25, 7165.0, 1.37),
        ("3/4 in", 4.75, 10471.0, 2.35),
        ("7/8 in", 6.5, 14330.0, 3.62),
        ("1 in", 8.5, 18739.0, 5.03),
        ("1-1/8 in", 9.5, 20943.0, 7.41),
        ("1-1/4 in", 12.0, 26455.0, 9.5),
        ("1-3/8 in", 13.5, 29762.0, 13.53),
        ("1-1/2 in", 17.0, 37478.0, 17.2),
        ("1-3/4 in", 25.0, 55115.0, 27.78),
        ("2 in", 35.0, 77161.0, 45.0),
        ("2-1/2 in", 55.0, 121254.0, 85.75),
        ("2-1/2 in (85T)", 85.0, 187392.0, 103.0),
    ]
    .into_iter()
    .map(|(size, tonnage, wll_lbs, weight_lbs)| ShackleRow {
        size: size.to_string(),
        tonnage,
        wll_lbs,
        weight_lbs,
    })
    .collect()
}
