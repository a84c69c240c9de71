//! Command-Line Interface Module
//!
//! Handles argument parsing and validation for the sunup binary.

use clap::Parser;
use serde::Deserialize;

// ===================== CLI =====================

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Observer latitude in decimal degrees (-90 to 90)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_latitude,
          env = "SUNUP_LATITUDE", required_unless_present = "show_build_info")]
    pub latitude: Option<f64>,
    /// Observer longitude in decimal degrees (-180 to 180)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_longitude,
          env = "SUNUP_LONGITUDE", required_unless_present = "show_build_info")]
    pub longitude: Option<f64>,
    /// Observer elevation above mean sea level (meters, 0 to 11000)
    #[arg(long, default_value_t = 0.0, value_parser = parse_elevation, env = "SUNUP_ELEVATION")]
    pub elevation: f64,

    /// Unix timestamp (seconds) to calculate for; defaults to the current time
    #[arg(long, allow_hyphen_values = true, conflicts_with = "date")]
    pub timestamp: Option<f64>,
    /// Date for calculations (e.g., "2024-12-25" or "today")
    #[arg(long)]
    pub date: Option<String>,

    /// Time zone for displayed times ("system" or an IANA time zone name)
    #[arg(long, default_value = "system", env = "SUNUP_TIMEZONE")]
    pub timezone: String,
    /// Display times in UTC
    #[arg(long)]
    pub utc: bool,

    /// Log every step of the derivation
    #[arg(long, short)]
    pub verbose: bool,

    /// Show build info from Cargo.lock at time of building
    #[arg(long)]
    pub show_build_info: bool,
}

// Define the structure to match what we serialized in build.rs
#[derive(Debug, Deserialize)]
pub struct DepInfo {
    pub name: String,
    pub version: String,
    pub checksum: Option<String>,
    pub source: Option<String>,
}

// ===================== CLI VALUE PARSERS =====================

fn parse_latitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-90.0..=90.0).contains(&v) {
        return Err(format!("Latitude must be between -90 and 90, got {}", v));
    }
    Ok(v)
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-180.0..=180.0).contains(&v) {
        return Err(format!("Longitude must be between -180 and 180, got {}", v));
    }
    Ok(v)
}

fn parse_elevation(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(0.0..=11_000.0).contains(&v) {
        return Err(format!("Elevation must be between 0 and 11000 meters, got {}", v));
    }
    Ok(v)
}
