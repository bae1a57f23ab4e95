//! Punch-out reminders.
//!
//! The core only asks for a reminder at an instant and never observes
//! delivery. `SqliteReminderQueue` keeps the requests in the database and the
//! `remind` command delivers them on the terminal.

pub mod recording;
pub mod sqlite;

use chrono::{DateTime, Utc};

pub use recording::RecordingNotifier;
pub use sqlite::SqliteReminderQueue;

use crate::errors::AppResult;

/// Token identifying one scheduled reminder.
pub type ReminderId = i64;

/// A scheduled reminder as stored in the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: ReminderId,
    pub fire_at: DateTime<Utc>,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
}

impl Reminder {
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.delivered_at.is_none() && self.fire_at <= now
    }
}

/// Host facility able to deliver a one-shot notification at a given instant.
///
/// Every call registers an independent reminder; nothing already scheduled
/// is replaced or cancelled.
pub trait Notifier {
    fn schedule(&self, at: DateTime<Utc>, title: &str, body: &str) -> AppResult<ReminderId>;
}

/// Instants in the past (or now) fire immediately.
pub fn effective_fire_time(at: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    at.max(now)
}
