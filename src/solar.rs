//! Solar Position Calculation Module
//!
//! The sunrise-equation pipeline: Julian day number, mean solar time,
//! mean anomaly, equation of center, ecliptic longitude, solar transit,
//! declination, and hour angle, mapped back to sunrise/sunset timestamps.
//! Days on which the sun never crosses the horizon altitude come back as
//! explicit polar-day/polar-night results.

use crate::geo::horizon_altitude_deg;
use crate::time::{SECONDS_PER_DAY, julian_to_timestamp, timestamp_to_julian};

// ===================== CONSTANTS =====================

/// Julian date of the J2000 epoch (2000-01-01T12:00:00 TT)
const J2000_JD: f64 = 2_451_545.0;

/// Leap-second drift folded into the day count and mean solar time
const J2000_ADJUSTMENT: f64 = 0.0009;

/// TT - UT offset, in days
const TT_OFFSET_DAYS: f64 = 69.184 / 86_400.0;

/// Solar mean anomaly at the J2000 epoch (degrees)
const MEAN_ANOMALY_EPOCH_DEG: f64 = 357.5291;

/// Mean daily solar motion (degrees per day)
const MEAN_MOTION_DEG_PER_DAY: f64 = 0.985_600_28;

/// Argument of perihelion (degrees)
const PERIHELION_DEG: f64 = 102.9372;

/// Obliquity of the ecliptic (degrees)
const OBLIQUITY_DEG: f64 = 23.4397;

// ===================== TYPES =====================

/// Outcome of a sunrise/sunset calculation.
///
/// The polar variants encode the sign of the hour-angle cosine argument:
/// past +1 the sun stays below the horizon altitude even at transit
/// ([`AllNight`](SunriseResult::AllNight)), past -1 it stays above even at
/// lower culmination ([`AllDay`](SunriseResult::AllDay)).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SunriseResult {
    /// The sun crosses the horizon altitude twice on this solar day.
    RegularDay {
        /// Sunrise as a Unix timestamp (seconds)
        sunrise: f64,
        /// Sunset as a Unix timestamp (seconds)
        sunset: f64,
    },
    /// Midnight sun: the sun never drops below the horizon altitude.
    AllDay,
    /// Polar night: the sun never reaches the horizon altitude.
    AllNight,
}

/// One labeled intermediate of the derivation, reported through the trace
/// callback in emission order. A polar result stops the sequence after
/// [`SolarTransit`](TraceStep::SolarTransit).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TraceStep {
    /// Input timestamp as a Julian date (days)
    JulianDate(f64),
    /// Whole Julian days since the J2000 epoch
    JulianDay(f64),
    /// Mean solar time (days)
    MeanSolarTime(f64),
    /// Solar mean anomaly (degrees, [0, 360))
    MeanAnomaly(f64),
    /// Equation-of-center correction (degrees)
    EquationOfCenter(f64),
    /// Ecliptic longitude (degrees, [0, 360))
    EclipticLongitude(f64),
    /// Solar transit as a Julian date (days)
    SolarTransit(f64),
    /// Hour angle (degrees, [0, 180])
    HourAngle(f64),
    /// Sunrise as a Unix timestamp (seconds)
    Sunrise(f64),
    /// Sunset as a Unix timestamp (seconds)
    Sunset(f64),
}

// ===================== SOLAR CALCULATION CONTEXT =====================

/// Context for sunrise/sunset calculations.
///
/// Plain immutable observer data. Every call recomputes the full
/// derivation chain; nothing is cached between calls.
#[derive(Clone, Copy, Debug)]
pub struct SolarCalc {
    /// Observer latitude in degrees
    pub lat: f64,
    /// Observer longitude in degrees
    pub lon: f64,
    /// Observer elevation above mean sea level in meters
    pub elevation: f64,
}

impl SolarCalc {
    /// Sunrise and sunset for the solar day containing `ts`.
    pub fn sun_events(&self, ts: f64) -> SunriseResult {
        self.sun_events_traced(ts, &mut |_| {})
    }

    /// Like [`sun_events`](Self::sun_events), reporting each intermediate
    /// value to `trace` as it is derived.
    pub fn sun_events_traced(
        &self,
        ts: f64,
        trace: &mut dyn FnMut(TraceStep),
    ) -> SunriseResult {
        let j_date = timestamp_to_julian(ts);
        trace(TraceStep::JulianDate(j_date));

        // Whole days since J2000, rounded up, with the TT-UT offset folded
        // in. ceil of a value in (-1, 0) is -0.0; + 0.0 normalizes the sign.
        let j_day = (j_date - (J2000_JD + J2000_ADJUSTMENT) + TT_OFFSET_DAYS).ceil() + 0.0;
        trace(TraceStep::JulianDay(j_day));

        let mst = j_day + J2000_ADJUSTMENT - self.lon / 360.0;
        trace(TraceStep::MeanSolarTime(mst));

        let m_deg =
            (MEAN_ANOMALY_EPOCH_DEG + MEAN_MOTION_DEG_PER_DAY * mst).rem_euclid(360.0);
        let m_rad = m_deg.to_radians();
        trace(TraceStep::MeanAnomaly(m_deg));

        let c_deg =
            1.9148 * m_rad.sin() + 0.02 * (2.0 * m_rad).sin() + 0.0003 * (3.0 * m_rad).sin();
        trace(TraceStep::EquationOfCenter(c_deg));

        let l_deg = (m_deg + c_deg + 180.0 + PERIHELION_DEG).rem_euclid(360.0);
        let l_rad = l_deg.to_radians();
        trace(TraceStep::EclipticLongitude(l_deg));

        let j_transit = J2000_JD + mst + 0.0053 * m_rad.sin() - 0.0069 * (2.0 * l_rad).sin();
        trace(TraceStep::SolarTransit(j_transit));

        let sin_decl = l_rad.sin() * OBLIQUITY_DEG.to_radians().sin();
        let cos_decl = sin_decl.asin().cos();

        let lat_rad = self.lat.to_radians();
        let horizon_rad = horizon_altitude_deg(self.elevation).to_radians();
        let x = (horizon_rad.sin() - lat_rad.sin() * sin_decl) / (lat_rad.cos() * cos_decl);

        // Past +1 the sun misses the horizon altitude even at transit; past
        // -1 it clears it even at lower culmination. NaN fails both
        // comparisons and rides through acos into the timestamps.
        if x > 1.0 {
            return SunriseResult::AllNight;
        }
        if x < -1.0 {
            return SunriseResult::AllDay;
        }

        let ha_deg = x.acos().to_degrees();
        trace(TraceStep::HourAngle(ha_deg));

        let sunrise = julian_to_timestamp(j_transit - ha_deg / 360.0);
        let sunset = julian_to_timestamp(j_transit + ha_deg / 360.0);
        trace(TraceStep::Sunrise(sunrise));
        trace(TraceStep::Sunset(sunset));

        SunriseResult::RegularDay { sunrise, sunset }
    }

    /// Find the next sunrise or sunset strictly after `start`.
    ///
    /// Steps one solar day at a time, up to 370 days ahead, so polar
    /// locations get an answer from the far side of the bright or dark
    /// season.
    pub fn next_crossing(&self, start: f64) -> Option<(&'static str, f64)> {
        for day in 0..370 {
            let ts = start + day as f64 * SECONDS_PER_DAY;
            if let SunriseResult::RegularDay { sunrise, sunset } = self.sun_events(ts) {
                if sunrise > start {
                    return Some(("Sunrise", sunrise));
                }
                if sunset > start {
                    return Some(("Sunset", sunset));
                }
            }
        }
        None
    }
}

// ===================== HELPER FUNCTIONS =====================

/// Day length in seconds, or `None` for polar results.
pub fn day_length(events: &SunriseResult) -> Option<f64> {
    match *events {
        SunriseResult::RegularDay { sunrise, sunset } => Some(sunset - sunrise),
        SunriseResult::AllDay | SunriseResult::AllNight => None,
    }
}

// ===================== TESTS =====================
