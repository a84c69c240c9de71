//! Time Conversion Module
//!
//! Maps between Unix timestamps and Julian dates, and provides the
//! duration formatting and system-timezone helpers used by the report.

use chrono_tz::Tz;
use iana_time_zone::get_timezone;

// ===================== CONSTANTS =====================

/// Julian date of the Unix epoch (1970-01-01T00:00:00Z)
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds per day, shared by both time scales
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// ===================== JULIAN DATE CONVERSIONS =====================

/// Convert a Unix timestamp (seconds) to a Julian date (days).
///
/// Accepts the full `f64` range, including negative pre-epoch values.
pub fn timestamp_to_julian(ts: f64) -> f64 {
    ts / SECONDS_PER_DAY + UNIX_EPOCH_JD
}

/// Convert a Julian date (days) back to a Unix timestamp (seconds).
///
/// Inverse of [`timestamp_to_julian`] up to floating rounding.
pub fn julian_to_timestamp(jd: f64) -> f64 {
    (jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY
}

// ===================== TIMEZONE UTILITIES =====================

/// Get the system's configured timezone.
///
/// Falls back to UTC if the system timezone cannot be determined.
pub fn system_timezone() -> Tz {
    get_timezone().ok().and_then(|s| s.parse().ok()).unwrap_or(Tz::UTC)
}

// ===================== FORMATTING =====================

/// Format a duration in seconds as "Xh Ym Zs".
///
/// # Arguments
/// * `seconds` - Duration in seconds (can be negative, abs value is used)
///
/// # Returns
/// Formatted string like "5h 30m 45s"
pub fn format_hms(seconds: i64) -> String {
    let total_seconds = seconds.abs();
    if total_seconds == 0 {
        return "0s".to_string();
    }

    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;

    let mut parts = Vec::new();
    if h > 0 {
        parts.push(format!("{}h", h));
    }
    if m > 0 {
        parts.push(format!("{}m", m));
    }
    if s > 0 {
        parts.push(format!("{}s", s));
    }

    parts.join(" ")
}

// ===================== TESTS =====================
