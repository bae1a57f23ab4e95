//! Terminal rendering of punches and history.

use crate::config::TimeFormat;
use crate::core::{ActiveSession, PunchOutcome, RETENTION_CAP};
use crate::models::PunchRecord;
use crate::ui::messages::{dialog, info};
use crate::utils::colors::colorize_in_out;
use crate::utils::formatting::{bold, mins2readable};
use crate::utils::table::Table;
use crate::utils::time::{format_clock, format_stamp};
use chrono::Local;

/// History table, oldest first.
pub fn history_table(history: &[PunchRecord], fmt: TimeFormat) -> String {
    let mut table = Table::new(["#", "Type", "Half", "Punch In", "Punch Out", "Length"]);

    for (i, r) in history.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            r.session_type.label().to_string(),
            r.leave_type.map(|v| v.label()).unwrap_or("-").to_string(),
            format_stamp(&r.punch_in_local(), fmt),
            format_stamp(&r.punch_out_local(), fmt),
            mins2readable(r.duration().num_minutes(), false, false),
        ]);
    }

    table.render()
}

pub fn print_history(history: &[PunchRecord], fmt: TimeFormat) {
    println!(
        "{}",
        bold(&format!("Last {} Days Punch History", RETENTION_CAP))
    );

    if history.is_empty() {
        info("No punch history yet.");
        return;
    }

    print!("{}", history_table(history, fmt));
}

/// Confirmation shown after a punch, `title` being "Punched In" or "Added".
pub fn print_outcome(title: &str, outcome: &PunchOutcome, fmt: TimeFormat) {
    let label = if title == "Added" {
        "Manual Punch In"
    } else {
        "You punched in at"
    };

    dialog(
        title,
        format!(
            "{}: {}\nExpected Punch Out: {}",
            label,
            format_clock(&outcome.record.punch_in_local(), fmt),
            format_clock(&outcome.record.punch_out_local(), fmt)
        ),
    );

    if let Some(id) = outcome.reminder {
        info(format!(
            "Reminder #{} set for {}",
            id,
            format_stamp(&outcome.record.punch_out_local(), fmt)
        ));
    }
}

pub fn print_active(active: Option<&ActiveSession>, fmt: TimeFormat) {
    match active {
        Some(a) => {
            let p_in = format_clock(&a.punch_in.with_timezone(&Local), fmt);
            let p_out = format_clock(&a.punch_out.with_timezone(&Local), fmt);
            println!("Punched In:    {}", colorize_in_out(&p_in, true));
            println!("Expected Out:  {}", colorize_in_out(&p_out, false));
        }
        None => {
            println!("Punched In:    {}", colorize_in_out("--:--", true));
            println!("Expected Out:  {}", colorize_in_out("--:--", false));
        }
    }
}
