use chrono::Utc;
use chrono_english::{Dialect, parse_date_string};
use chrono_tz::Tz;
use clap::Parser;
use flexi_logger::Logger;

use sunup::cli::{Args, DepInfo};
use sunup::geo::horizon_altitude_deg;
use sunup::output;
use sunup::solar::{SolarCalc, day_length};
use sunup::time::{SECONDS_PER_DAY, system_timezone};

// ===================== MAIN =====================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.show_build_info {
        println!("Built from Git commit: {}\n", env!("APP_GIT_HASH"));
        const DEP_INFO_RAW: &str = include_str!(env!("DEPS_INFO_PATH"));
        let deps: Vec<DepInfo> = serde_json::from_str(DEP_INFO_RAW)?;

        println!("Found {} dependencies.", deps.len());
        for dep in deps {
            println!("- {} v{}", dep.name, dep.version);
            if let Some(sum) = dep.checksum {
                println!("    Checksum: {}", sum);
            }
            if let Some(src) = dep.source {
                println!("    Source:   {}", src);
            }
        }
        return Ok(());
    }

    let _logger =
        Logger::try_with_env_or_str(if args.verbose { "debug" } else { "info" })?.start()?;

    let latitude = args.latitude.ok_or("--latitude is required")?;
    let longitude = args.longitude.ok_or("--longitude is required")?;

    let tz = if args.utc {
        Tz::UTC
    } else {
        match args.timezone.as_str() {
            "system" => system_timezone(),
            other => other.parse().unwrap_or(Tz::UTC),
        }
    };

    // Pick the instant to calculate for; the calculator never reads the clock
    let ts = match (&args.timestamp, &args.date) {
        (Some(ts), _) => *ts,
        (None, Some(expr)) => {
            let anchor = Utc::now().with_timezone(&tz);
            parse_date_string(expr, anchor, Dialect::Us)?.timestamp() as f64
        }
        (None, None) => Utc::now().timestamp_millis() as f64 / 1000.0,
    };

    let calc = SolarCalc { lat: latitude, lon: longitude, elevation: args.elevation };

    println!("Location : lat={:.6}, lon={:.6}", latitude, longitude);
    println!("Timezone : {}", tz);
    if let Some(dt) = output::to_datetime(ts, tz) {
        println!("Date     : {}", dt.date_naive());
    }
    println!("Horizon altitude : {:.6}°", horizon_altitude_deg(args.elevation));
    println!();

    log::debug!("Latitude               lat       = {}", output::format_angle(latitude));
    log::debug!("Longitude              lon       = {}", output::format_angle(longitude));
    log::debug!("Now                    ts        = {}", output::format_timestamp(ts, tz));

    let events = calc.sun_events_traced(ts, &mut |step| {
        log::debug!("{}", output::describe_step(&step, tz));
    });

    let len_today = day_length(&events);
    let len_tomorrow = day_length(&calc.sun_events(ts + SECONDS_PER_DAY));

    if let Some(len) = len_today {
        log::debug!("Day length                         {:.3} hours", len / 3600.0);
    }

    output::print_sun_events(&events, len_today, len_tomorrow, &calc, ts, tz);

    Ok(())
}
