//! Horizon Geometry Module
//!
//! Effective horizon altitude for sunrise/sunset: the solar disc plus
//! standard refraction, lowered further by the elevation-dependent dip.

// ===================== CONSTANTS =====================

/// Altitude of the sun's center at rise/set for a sea-level observer,
/// combining the solar semi-diameter and standard refraction (degrees)
pub const SOLAR_DEPRESSION_DEG: f64 = -0.833;

/// Horizon dip, in arcminutes per square-root meter of observer elevation
pub const DIP_COEFF_ARCMIN: f64 = 2.076;

// ===================== GEOMETRY FUNCTIONS =====================

/// Altitude of the sun's center at the moment of rise/set, in degrees.
///
/// Sea level gives the standard -0.833°. Elevated observers look down on
/// the horizon, so the target drops by a further 2.076′·√elevation.
///
/// Negative elevation is outside the model; the square root yields NaN
/// and the caller's range checks pass it through unchanged.
pub fn horizon_altitude_deg(elevation_m: f64) -> f64 {
    SOLAR_DEPRESSION_DEG - DIP_COEFF_ARCMIN * elevation_m.sqrt() / 60.0
}

// ===================== TESTS =====================
