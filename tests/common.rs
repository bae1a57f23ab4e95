#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;
use timesnap::models::{PunchRecord, SessionType, SubVariant};

pub fn tsn() -> Command {
    cargo_bin_cmd!("timesnap")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timesnap.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh database initialized through the CLI
pub fn init_test_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    tsn()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// 2024-01-15 at the given UTC wall time
pub fn jan15(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(
        &NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap(),
    )
}

/// Full-day record punched in on day `day` of January 2024 at 09:00 UTC
pub fn full_day_record(day: u32) -> PunchRecord {
    let punch_in = Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap();
    timesnap::core::lifecycle::build_record(SessionType::FullDay, None, punch_in)
}

pub fn short_leave_record(day: u32, half: SubVariant) -> PunchRecord {
    let punch_in = Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap();
    timesnap::core::lifecycle::build_record(SessionType::ShortLeave, Some(half), punch_in)
}
