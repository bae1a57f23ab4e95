use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, TimeZone};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The instant `hour:minute` on `date` in the given zone.
///
/// On a DST fold the earlier instant is used; a wall time skipped by a DST
/// jump is rejected.
pub fn at_time_on<Tz: TimeZone>(
    tz: &Tz,
    date: NaiveDate,
    hour: u32,
    minute: u32,
) -> AppResult<DateTime<Tz>> {
    let naive = date
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| AppError::InvalidTime(format!("{:02}:{:02}", hour, minute)))?;

    tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
        AppError::InvalidTime(format!(
            "{} {:02}:{:02} does not exist in local time",
            date, hour, minute
        ))
    })
}
