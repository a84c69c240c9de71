use assert_cmd::Command;
use predicates::prelude::*;

fn sunup() -> Command {
    let mut cmd = Command::cargo_bin("sunup").expect("binary builds");
    cmd.env_remove("SUNUP_LATITUDE")
        .env_remove("SUNUP_LONGITUDE")
        .env_remove("SUNUP_ELEVATION")
        .env_remove("SUNUP_TIMEZONE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn reports_the_equator_day() {
    sunup()
        .args(["--latitude", "0", "--longitude", "0", "--timestamp", "946684800", "--utc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunrise     : 06:00:52 UTC"))
        .stdout(predicate::str::contains("Solar noon  : 12:04:29 UTC"))
        .stdout(predicate::str::contains("Sunset      : 18:08:06 UTC"))
        .stdout(predicate::str::contains("Daylight    : 12h 7m 14s"));
}

#[test]
fn resolves_a_plain_english_date() {
    sunup()
        .args(["--latitude", "0", "--longitude", "0", "--date", "2024-12-25", "--utc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Date     : 2024-12-25"))
        .stdout(predicate::str::contains("Sunrise     : 05:57:47 UTC"))
        .stdout(predicate::str::contains("Sunset      : 18:05:03 UTC"));
}

#[test]
fn renders_times_in_a_named_timezone() {
    sunup()
        .args([
            "--latitude",
            "48.269655",
            "--longitude",
            "14.311495",
            "--timestamp",
            "946681200",
            "--timezone",
            "Europe/Vienna",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timezone : Europe/Vienna"))
        .stdout(predicate::str::contains("Date     : 2000-01-01"))
        .stdout(predicate::str::contains("Sunrise     : 07:54:58 CET"))
        .stdout(predicate::str::contains("Sunset      : 16:19:28 CET"));
}

#[test]
fn unknown_timezone_falls_back_to_utc() {
    sunup()
        .args([
            "--latitude",
            "0",
            "--longitude",
            "0",
            "--timestamp",
            "946684800",
            "--timezone",
            "Not/AZone",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timezone : UTC"))
        .stdout(predicate::str::contains("Sunrise     : 06:00:52 UTC"));
}

#[test]
fn reports_midnight_sun() {
    sunup()
        .args(["--latitude", "78", "--longitude", "0", "--timestamp", "1687348800", "--utc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Polar Day (Midnight Sun)."))
        .stdout(predicate::str::contains("Next Sunrise on"));
}

#[test]
fn reports_polar_night_with_the_return_date() {
    sunup()
        .args(["--latitude", "78", "--longitude", "0", "--timestamp", "1703160000", "--utc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Polar Night."))
        .stdout(predicate::str::contains("Next Sunrise on 2024-02-16 at 11:24:45 UTC"));
}

#[test]
fn southern_winter_is_polar_night() {
    sunup()
        .args(["--latitude", "-78", "--longitude", "0", "--timestamp", "1687348800", "--utc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Polar Night."));
}

#[test]
fn verbose_logs_the_derivation() {
    sunup()
        .args([
            "--latitude",
            "0",
            "--longitude",
            "0",
            "--timestamp",
            "946684800",
            "--utc",
            "--verbose",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Solar mean anomaly"))
        .stderr(predicate::str::contains("Hour angle"));
}

#[test]
fn rejects_out_of_range_latitude() {
    sunup()
        .args(["--latitude", "91", "--longitude", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Latitude must be between -90 and 90"));
}

#[test]
fn rejects_negative_elevation() {
    sunup()
        .args(["--latitude", "0", "--longitude", "0", "--elevation=-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Elevation must be between 0 and 11000"));
}

#[test]
fn requires_coordinates() {
    sunup().assert().failure().stderr(predicate::str::contains("required"));
}

#[test]
fn prints_build_info_without_coordinates() {
    sunup()
        .args(["--show-build-info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dependencies"))
        .stdout(predicate::str::contains("clap"));
}
