//! # Unit Types
//!
//! Type-safe wrappers for rigging units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## US Customary Units (Primary)
//!
//! Lift plans are prepared in imperial units:
//! - Length: feet (ft)
//! - Force / weight: pounds (lb)
//! - Angles: degrees measured from horizontal
//!
//! Metric tons appear only as a presentation value for total lift weight.
//!
//! ## Example
//!
//! ```rust
//! use rigging_core::units::{Degrees, MetricTons, Pounds};
//!
//! let total = Pounds(22046.2);
//! let tons: MetricTons = total.into();
//! assert!((tons.0 - 10.0).abs() < 1e-9);
//!
//! let angle = Degrees(30.0);
//! assert!((angle.sin() - 0.5).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::rules::LBS_PER_METRIC_TON;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

impl Feet {
    /// Round up to the next whole foot (presentation only)
    pub fn ceil(self) -> Feet {
        Feet(self.0.ceil())
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force or weight in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Weight in metric tons (1 t = 2204.62 lb)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricTons(pub f64);

impl Pounds {
    /// Round up to the next whole pound (presentation only)
    pub fn ceil(self) -> Pounds {
        Pounds(self.0.ceil())
    }
}

impl MetricTons {
    /// Round to two decimals (presentation only)
    pub fn rounded(self) -> MetricTons {
        MetricTons((self.0 * 100.0).round() / 100.0)
    }
}

impl From<Pounds> for MetricTons {
    fn from(lb: Pounds) -> Self {
        MetricTons(lb.0 / LBS_PER_METRIC_TON)
    }
}

impl From<MetricTons> for Pounds {
    fn from(t: MetricTons) -> Self {
        Pounds(t.0 * LBS_PER_METRIC_TON)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Build from radians
    pub fn from_radians(radians: f64) -> Self {
        Degrees(radians.to_degrees())
    }

    /// Angle in radians
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    pub fn sin(self) -> f64 {
        self.radians().sin()
    }

    pub fn cos(self) -> f64 {
        self.radians().cos()
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Pounds);
impl_arithmetic!(MetricTons);
impl_arithmetic!(Degrees);
