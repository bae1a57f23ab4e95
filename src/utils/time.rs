//! Time utilities: parsing HH:MM, clock formatting.

use crate::config::TimeFormat;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveTime, TimeZone, Timelike};
use std::fmt::Display;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Parse `HH:MM` into hour and minute.
pub fn parse_hour_minute(t: &str) -> AppResult<(u32, u32)> {
    let time = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok((time.hour(), time.minute()))
}

/// Clock time only, e.g. `17:30` or `05:30 PM`.
pub fn format_clock<Tz: TimeZone>(dt: &DateTime<Tz>, fmt: TimeFormat) -> String
where
    Tz::Offset: Display,
{
    match fmt {
        TimeFormat::H24 => dt.format("%H:%M").to_string(),
        TimeFormat::H12 => dt.format("%I:%M %p").to_string(),
    }
}

/// Date and clock time, e.g. `2024-01-15 17:30`.
pub fn format_stamp<Tz: TimeZone>(dt: &DateTime<Tz>, fmt: TimeFormat) -> String
where
    Tz::Offset: Display,
{
    format!("{} {}", dt.format("%Y-%m-%d"), format_clock(dt, fmt))
}
