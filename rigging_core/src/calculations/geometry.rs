//! # Sling Geometry
//!
//! Converts pick-point geometry into the sling angle measured from horizontal.
//! Nothing here rounds; presentation rounding happens only at the response
//! boundary.
//!
//! ```text
//!            hook / bearing point
//!               /|
//!       sling  / |  vertical rise
//!             /θ |
//!   pick pt  +---+
//!           horizontal offset
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rigging_core::calculations::geometry::{sling_angle, vertical_rise_for_length};
//! use rigging_core::units::Feet;
//!
//! let rise = vertical_rise_for_length(Feet(20.0), Feet(5.0)).unwrap();
//! let angle = sling_angle(rise, Feet(5.0)).unwrap();
//! assert!((angle.0 - 75.52).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, RiggingError};
use crate::units::{Degrees, Feet};

/// Angle of a sling leg from horizontal.
///
/// Requires a positive rise and a non-negative offset; a zero offset yields a
/// vertical leg (90°).
pub fn sling_angle(vertical_rise: Feet, horizontal_offset: Feet) -> CalcResult<Degrees> {
    let rise = vertical_rise.value();
    let offset = horizontal_offset.value();

    if !rise.is_finite() || !offset.is_finite() {
        return Err(RiggingError::invalid_geometry(rise, offset, "Geometry values must be finite"));
    }
    if rise <= 0.0 {
        return Err(RiggingError::invalid_geometry(
            rise,
            offset,
            "Vertical rise must be greater than zero",
        ));
    }
    if offset < 0.0 {
        return Err(RiggingError::invalid_geometry(
            rise,
            offset,
            "Horizontal offset cannot be negative",
        ));
    }

    Ok(Degrees::from_radians(rise.atan2(offset)))
}

/// Angle for a pair of pick points with the bearing point centred between them.
pub fn pair_angle(span: Feet, vertical_rise: Feet) -> CalcResult<Degrees> {
    if !span.value().is_finite() || span.value() < 0.0 {
        return Err(RiggingError::invalid_geometry(
            vertical_rise.value(),
            span.value() / 2.0,
            "Span between pick points cannot be negative",
        ));
    }
    sling_angle(vertical_rise, span / 2.0)
}

/// Vertical rise reached by a sling of `sling_length` over `horizontal_offset`.
pub fn vertical_rise_for_length(sling_length: Feet, horizontal_offset: Feet) -> CalcResult<Feet> {
    let length = sling_length.value();
    let offset = horizontal_offset.value();

    if !(length.is_finite() && offset.is_finite()) || length <= offset {
        return Err(RiggingError::SlingTooShort {
            sling_length_ft: length,
            horizontal_offset_ft: offset,
        });
    }

    Ok(Feet((length * length - offset * offset).sqrt()))
}

/// Plan-view position of a pick point or bearing point (ft)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanPoint {
    pub x_ft: f64,
    pub y_ft: f64,
}

impl PlanPoint {
    pub fn new(x_ft: f64, y_ft: f64) -> Self {
        PlanPoint { x_ft, y_ft }
    }
}

/// Planar distance from a pick point to the bearing point above the load.
pub fn horizontal_offset(point: PlanPoint, centre: PlanPoint) -> Feet {
    Feet((point.x_ft - centre.x_ft).hypot(point.y_ft - centre.y_ft))
}

/// Plan-view centroid of a set of points, `None` when empty.
pub fn centroid(points: &[PlanPoint]) -> Option<PlanPoint> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x_ft, sy + p.y_ft));
    Some(PlanPoint::new(sx / n, sy / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forty_five_degrees() {
        let angle = sling_angle(Feet(10.0), Feet(10.0)).unwrap();
        assert!((angle.0 - 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_vertical_leg() {
        let angle = sling_angle(Feet(10.0), Feet(0.0)).unwrap();
        assert!((angle.0 - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_rise_fails() {
        let err = sling_angle(Feet(0.0), Feet(4.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
        assert!(sling_angle(Feet(-1.0), Feet(4.0)).is_err());
    }

    #[test]
    fn test_negative_offset_fails() {
        assert!(sling_angle(Feet(4.0), Feet(-0.1)).is_err());
    }

    #[test]
    fn test_pair_angle_uses_half_span() {
        // 30 ft span, 1 ft rise: offset 15 ft
        let angle = pair_angle(Feet(30.0), Feet(1.0)).unwrap();
        let direct = sling_angle(Feet(1.0), Feet(15.0)).unwrap();
        assert_eq!(angle, direct);
        assert!(angle.0 < 4.0);
    }

    #[test]
    fn test_smaller_offset_gives_larger_angle() {
        let wide = sling_angle(Feet(10.0), Feet(8.0)).unwrap();
        let narrow = sling_angle(Feet(10.0), Feet(4.0)).unwrap();
        assert!(narrow.0 > wide.0);
    }

    #[test]
    fn test_rise_for_length() {
        let rise = vertical_rise_for_length(Feet(5.0), Feet(3.0)).unwrap();
        assert!((rise.0 - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_sling_too_short() {
        let err = vertical_rise_for_length(Feet(5.0), Feet(5.0)).unwrap_err();
        assert_eq!(
            err,
            RiggingError::SlingTooShort {
                sling_length_ft: 5.0,
                horizontal_offset_ft: 5.0
            }
        );
    }

    #[test]
    fn test_centroid_and_offset() {
        let points = [PlanPoint::new(0.0, 0.0), PlanPoint::new(10.0, 0.0)];
        let centre = centroid(&points).unwrap();
        assert_eq!(centre, PlanPoint::new(5.0, 0.0));
        assert_eq!(horizontal_offset(points[0], centre), Feet(5.0));

        let square = [
            PlanPoint::new(0.0, 0.0),
            PlanPoint::new(6.0, 0.0),
            PlanPoint::new(6.0, 8.0),
            PlanPoint::new(0.0, 8.0),
        ];
        let centre = centroid(&square).unwrap();
        assert!((horizontal_offset(square[2], centre).0 - 5.0).abs() < 1e-12);

        assert!(centroid(&[]).is_none());
    }
}
