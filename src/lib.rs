//! Sunrise and sunset times from the closed-form sunrise equation.
//!
//! The pipeline converts a Unix timestamp to a Julian day number, derives
//! the sun's mean anomaly, equation of center, ecliptic longitude, solar
//! transit, declination, and hour angle, and maps the hour angle back to
//! sunrise/sunset timestamps. Days on which the sun never crosses the
//! horizon altitude come back as explicit polar-day/polar-night results
//! instead of errors.
//!
//! ```
//! use sunup::solar::{SolarCalc, SunriseResult};
//!
//! let calc = SolarCalc { lat: 48.269655, lon: 14.311495, elevation: 0.0 };
//! match calc.sun_events(946_681_200.0) {
//!     SunriseResult::RegularDay { sunrise, sunset } => assert!(sunrise < sunset),
//!     SunriseResult::AllDay | SunriseResult::AllNight => unreachable!(),
//! }
//! ```
//!
//! All timestamps are seconds since the Unix epoch. The calculation never
//! reads the system clock, performs no I/O, and keeps no state between
//! calls; the optional trace callback is the only side channel.

pub mod cli;
pub mod geo;
pub mod output;
pub mod solar;
pub mod time;

pub use solar::{SolarCalc, SunriseResult, TraceStep, day_length};
pub use time::{julian_to_timestamp, timestamp_to_julian};
