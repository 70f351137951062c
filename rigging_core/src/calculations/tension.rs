//! # Sling Tension
//!
//! Leg tension from the vertical load share and the sling angle:
//!
//! ```text
//! T = load_share / sin(θ)
//! lateral force = T · cos(θ)
//! ```
//!
//! The tension formula is only defined for `0° < θ < 90°`; a vertical leg is
//! rejected as a contract violation rather than special-cased.

use crate::errors::{CalcResult, RiggingError};
use crate::units::{Degrees, Pounds};

/// Tension in one sling leg.
pub fn sling_tension(load_share: Pounds, angle: Degrees) -> CalcResult<Pounds> {
    let share = load_share.value();
    let deg = angle.value();

    if !share.is_finite() || share <= 0.0 {
        return Err(RiggingError::invalid_tension(share, deg, "Load share must be greater than zero"));
    }
    if !deg.is_finite() || deg <= 0.0 || deg >= 90.0 {
        return Err(RiggingError::invalid_tension(
            share,
            deg,
            "Sling angle must be between 0° and 90° exclusive",
        ));
    }

    Ok(Pounds(share / angle.sin()))
}

/// Horizontal component of a leg tension.
pub fn lateral_force(tension: Pounds, angle: Degrees) -> CalcResult<Pounds> {
    let t = tension.value();
    let deg = angle.value();

    if !t.is_finite() || t <= 0.0 {
        return Err(RiggingError::invalid_tension(t, deg, "Tension must be greater than zero"));
    }
    if !deg.is_finite() || !(0.0..=90.0).contains(&deg) {
        return Err(RiggingError::invalid_tension(
            t,
            deg,
            "Sling angle must be between 0° and 90° inclusive",
        ));
    }

    Ok(Pounds(t * angle.cos()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tension_at_thirty_degrees_doubles_share() {
        let t = sling_tension(Pounds(5000.0), Degrees(30.0)).unwrap();
        assert!((t.0 - 10000.0).abs() < 1e-6);
    }

    #[test]
    fn test_tension_at_sixty_degrees() {
        let t = sling_tension(Pounds(7500.0), Degrees(60.0)).unwrap();
        assert!((t.0 - 8660.254).abs() < 1e-3);
    }

    #[test]
    fn test_tension_domain() {
        assert!(sling_tension(Pounds(0.0), Degrees(60.0)).is_err());
        assert!(sling_tension(Pounds(100.0), Degrees(0.0)).is_err());
        let err = sling_tension(Pounds(100.0), Degrees(90.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TENSION_INPUT");
    }

    #[test]
    fn test_steeper_angle_lowers_tension() {
        let shallow = sling_tension(Pounds(10000.0), Degrees(50.0)).unwrap();
        let steep = sling_tension(Pounds(10000.0), Degrees(75.0)).unwrap();
        assert!(steep.0 < shallow.0);
    }

    #[test]
    fn test_lateral_force() {
        let f = lateral_force(Pounds(10000.0), Degrees(60.0)).unwrap();
        assert!((f.0 - 5000.0).abs() < 1e-6);

        let vertical = lateral_force(Pounds(10000.0), Degrees(90.0)).unwrap();
        assert!(vertical.0.abs() < 1e-9);

        assert!(lateral_force(Pounds(0.0), Degrees(60.0)).is_err());
        assert!(lateral_force(Pounds(100.0), Degrees(91.0)).is_err());
    }
}
