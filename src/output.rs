//! Output Formatting Module
//!
//! Human-readable rendering of angles, timestamps, and Julian dates, plus
//! the terminal report for sun events.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::solar::{SolarCalc, SunriseResult, TraceStep};
use crate::time::{format_hms, julian_to_timestamp};

// ===================== VALUE FORMATTING =====================

/// Format an angle given in degrees as radians, DMS, and decimal degrees.
pub fn format_angle(deg: f64) -> String {
    // floor split of the arc-second count: minutes and seconds stay in
    // [0, 60), a negative angle lands entirely in the degree term
    let x = (deg * 3600.0) as i64;
    format!(
        "∠{:.3}rad = ∠{}°{}′{}″ = ∠{:.3}°",
        deg.to_radians(),
        x.div_euclid(3600),
        x.div_euclid(60).rem_euclid(60),
        x.rem_euclid(60),
        deg
    )
}

/// Resolve a Unix timestamp to a calendar time in the given timezone.
///
/// `None` for non-finite values and timestamps outside chrono's range.
pub fn to_datetime(ts: f64, tz: Tz) -> Option<DateTime<Tz>> {
    if !ts.is_finite() {
        return None;
    }
    let secs = ts.floor();
    DateTime::from_timestamp(secs as i64, ((ts - secs) * 1e9) as u32)
        .map(|utc| utc.with_timezone(&tz))
}

/// Render a Unix timestamp next to its calendar form.
pub fn format_timestamp(ts: f64, tz: Tz) -> String {
    match to_datetime(ts, tz) {
        Some(dt) => format!("{ts} = {}", dt.format("%Y-%m-%d %H:%M:%S%.6f %Z")),
        None => format!("{ts} (not a calendar time)"),
    }
}

/// Render a Julian date next to its timestamp and calendar form.
pub fn format_julian(jd: f64, tz: Tz) -> String {
    format!("{jd:.6} days = {}", format_timestamp(julian_to_timestamp(jd), tz))
}

/// One debug line per derivation step, in the pipeline's own labeling.
pub fn describe_step(step: &TraceStep, tz: Tz) -> String {
    match *step {
        TraceStep::JulianDate(j) => format!("Julian date            j_date    = {j:.3} days"),
        TraceStep::JulianDay(j) => format!("Julian day             j_day     = {j:.3} days"),
        TraceStep::MeanSolarTime(t) => {
            format!("Mean solar time        mst       = {t:.9} days")
        }
        TraceStep::MeanAnomaly(m) => {
            format!("Solar mean anomaly     m         = {}", format_angle(m))
        }
        TraceStep::EquationOfCenter(c) => {
            format!("Equation of the center c         = {}", format_angle(c))
        }
        TraceStep::EclipticLongitude(l) => {
            format!("Ecliptic longitude     l         = {}", format_angle(l))
        }
        TraceStep::SolarTransit(j) => {
            format!("Solar transit time     j_transit = {}", format_julian(j, tz))
        }
        TraceStep::HourAngle(h) => {
            format!("Hour angle             ha        = {}", format_angle(h))
        }
        TraceStep::Sunrise(ts) => {
            format!("Sunrise                j_rise    = {}", format_timestamp(ts, tz))
        }
        TraceStep::Sunset(ts) => {
            format!("Sunset                 j_set     = {}", format_timestamp(ts, tz))
        }
    }
}

// ===================== TERMINAL OUTPUT =====================

fn clock(ts: f64, tz: Tz) -> String {
    match to_datetime(ts, tz) {
        Some(dt) => dt.format("%H:%M:%S %Z").to_string(),
        None => format!("{ts}"),
    }
}

/// Print the sun-events report for one day.
pub fn print_sun_events(
    events: &SunriseResult,
    len_today: Option<f64>,
    len_tomorrow: Option<f64>,
    calc: &SolarCalc,
    ts: f64,
    tz: Tz,
) {
    match *events {
        SunriseResult::RegularDay { sunrise, sunset } => {
            // transit is the midpoint of the pair by construction
            let noon = (sunrise + sunset) / 2.0;
            println!("Sunrise     : {}", clock(sunrise, tz));
            println!("Solar noon  : {}", clock(noon, tz));
            println!("Sunset      : {}", clock(sunset, tz));

            if let Some(today) = len_today {
                println!("Daylight    : {}", format_hms(today as i64));

                if let Some(tomorrow) = len_tomorrow {
                    let diff = (tomorrow - today) as i64;
                    if diff == 0 {
                        println!("Tomorrow day is same length");
                    } else {
                        println!(
                            "Tomorrow day is {} {}",
                            format_hms(diff),
                            if diff > 0 { "longer" } else { "shorter" }
                        );
                    }
                }
            }
        }
        SunriseResult::AllDay => {
            println!("Polar Day (Midnight Sun).");
            print_next_crossing(calc, ts, tz);
        }
        SunriseResult::AllNight => {
            println!("Polar Night.");
            print_next_crossing(calc, ts, tz);
        }
    }
}

fn print_next_crossing(calc: &SolarCalc, ts: f64, tz: Tz) {
    if let Some((kind, t)) = calc.next_crossing(ts)
        && let Some(dt) = to_datetime(t, tz)
    {
        println!("Next {} on {} at {}", kind, dt.date_naive(), dt.format("%H:%M:%S %Z"));
    }
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_angle_known_values() {
        assert_eq!(
            format_angle(90.90516911330946),
            "∠1.587rad = ∠90°54′18″ = ∠90.905°"
        );
        assert_eq!(format_angle(48.269655), "∠0.842rad = ∠48°16′10″ = ∠48.270°");
        assert_eq!(format_angle(0.0), "∠0.000rad = ∠0°0′0″ = ∠0.000°");
    }

    #[test]
    fn test_format_angle_negative_floor_split() {
        // equation-of-center values are routinely negative in winter;
        // minutes and seconds must stay nonnegative
        assert_eq!(format_angle(-0.0856), "∠-0.001rad = ∠-1°54′52″ = ∠-0.086°");
        assert_eq!(format_angle(-0.833), "∠-0.015rad = ∠-1°10′2″ = ∠-0.833°");
    }

    #[test]
    fn test_format_timestamp_utc() {
        let s = format_timestamp(946_684_800.0, Tz::UTC);
        assert!(s.starts_with("946684800"), "{s}");
        assert!(s.contains("2000-01-01 00:00:00"), "{s}");
    }

    #[test]
    fn test_format_timestamp_rejects_nan() {
        let s = format_timestamp(f64::NAN, Tz::UTC);
        assert!(s.contains("not a calendar time"), "{s}");
    }

    #[test]
    fn test_format_julian_epoch() {
        let s = format_julian(2_440_587.5, Tz::UTC);
        assert!(s.starts_with("2440587.500000 days"), "{s}");
        assert!(s.contains("1970-01-01 00:00:00"), "{s}");
    }

    #[test]
    fn test_describe_step_labels() {
        let line = describe_step(&TraceStep::MeanAnomaly(357.529), Tz::UTC);
        assert!(line.starts_with("Solar mean anomaly"), "{line}");
        assert!(line.contains("∠357.529°"), "{line}");

        let line = describe_step(&TraceStep::MeanSolarTime(0.0009), Tz::UTC);
        assert!(line.contains("0.000900000 days"), "{line}");
    }

    #[test]
    fn test_clock_falls_back_on_nan() {
        assert_eq!(clock(f64::NAN, Tz::UTC), "NaN");
    }
}
