//! Reminder queue stored in the `reminders` table.

use crate::errors::{AppError, AppResult};
use crate::reminder::{Notifier, Reminder, ReminderId, effective_fire_time};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

fn ts(dt: DateTime<Utc>) -> String {
    // fixed width so that TEXT comparison in SQL follows time order
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_ts(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

fn map_row(row: &Row) -> rusqlite::Result<Reminder> {
    let fire_at: String = row.get("fire_at")?;
    let created_at: String = row.get("created_at")?;
    let delivered_at: Option<String> = row.get("delivered_at")?;

    Ok(Reminder {
        id: row.get("id")?,
        fire_at: parse_ts(1, &fire_at)?,
        title: row.get("title")?,
        body: row.get("body")?,
        created_at: parse_ts(4, &created_at)?,
        delivered_at: delivered_at.as_deref().map(|d| parse_ts(5, d)).transpose()?,
    })
}

pub struct SqliteReminderQueue<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteReminderQueue<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Queue a reminder, clamping `at` to `now`.
    pub fn schedule_at(
        &self,
        at: DateTime<Utc>,
        now: DateTime<Utc>,
        title: &str,
        body: &str,
    ) -> AppResult<ReminderId> {
        let fire_at = effective_fire_time(at, now);

        self.conn
            .execute(
                "INSERT INTO reminders (fire_at, title, body, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![ts(fire_at), title, body, ts(now)],
            )
            .map_err(|e| AppError::Notification(e.to_string()))?;

        Ok(self.conn.last_insert_rowid())
    }

    fn query(&self, sql: &str, now: Option<DateTime<Utc>>) -> AppResult<Vec<Reminder>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = match now {
            Some(n) => stmt.query_map([ts(n)], map_row)?,
            None => stmt.query_map([], map_row)?,
        };

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Undelivered reminders, soonest first.
    pub fn pending(&self) -> AppResult<Vec<Reminder>> {
        self.query(
            "SELECT * FROM reminders
             WHERE delivered_at IS NULL
             ORDER BY fire_at ASC, id ASC",
            None,
        )
    }

    /// Undelivered reminders whose time has come.
    pub fn due(&self, now: DateTime<Utc>) -> AppResult<Vec<Reminder>> {
        self.query(
            "SELECT * FROM reminders
             WHERE delivered_at IS NULL AND fire_at <= ?1
             ORDER BY fire_at ASC, id ASC",
            Some(now),
        )
    }

    pub fn next_pending(&self) -> AppResult<Option<Reminder>> {
        let next = self
            .conn
            .query_row(
                "SELECT * FROM reminders
                 WHERE delivered_at IS NULL
                 ORDER BY fire_at ASC, id ASC
                 LIMIT 1",
                [],
                map_row,
            )
            .optional()?;
        Ok(next)
    }

    pub fn mark_delivered(&self, id: ReminderId, at: DateTime<Utc>) -> AppResult<()> {
        self.conn.execute(
            "UPDATE reminders SET delivered_at = ?1 WHERE id = ?2 AND delivered_at IS NULL",
            params![ts(at), id],
        )?;
        Ok(())
    }

    /// Mark every due reminder as delivered and return them.
    pub fn deliver_due(&self, now: DateTime<Utc>) -> AppResult<Vec<Reminder>> {
        let mut due = self.due(now)?;
        for r in due.iter_mut() {
            self.mark_delivered(r.id, now)?;
            r.delivered_at = Some(now);
        }
        Ok(due)
    }

    /// Drop a reminder that has not been delivered yet.
    pub fn cancel(&self, id: ReminderId) -> AppResult<()> {
        let removed = self.conn.execute(
            "DELETE FROM reminders WHERE id = ?1 AND delivered_at IS NULL",
            [id],
        )?;
        if removed == 0 {
            return Err(AppError::InvalidReminder(id));
        }
        Ok(())
    }
}

impl Notifier for SqliteReminderQueue<'_> {
    fn schedule(&self, at: DateTime<Utc>, title: &str, body: &str) -> AppResult<ReminderId> {
        self.schedule_at(at, Utc::now(), title, body)
    }
}
