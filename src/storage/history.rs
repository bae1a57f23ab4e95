//! Durable punch history: one JSON array under a single key.

use crate::core::lifecycle::trim_to_cap;
use crate::db::kv::KeyValueStore;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::models::PunchRecord;
use crate::ui::messages::warning;
use rusqlite::Connection;

/// Key under which the serialized history is stored.
pub const HISTORY_KEY: &str = "punchHistory";

/// Read/write access to the last punches.
///
/// The `try_*` methods surface storage failures; the plain variants report
/// them (stderr and, when attached, the internal log) and degrade to an
/// empty history or a dropped write.
pub struct HistoryStore<'a, K: KeyValueStore> {
    kv: &'a K,
    audit: Option<&'a Connection>,
}

impl<'a, K: KeyValueStore> HistoryStore<'a, K> {
    pub fn new(kv: &'a K) -> Self {
        Self { kv, audit: None }
    }

    /// Record degraded reads/writes in the internal `log` table.
    pub fn with_audit(mut self, conn: &'a Connection) -> Self {
        self.audit = Some(conn);
        self
    }

    pub fn try_load(&self) -> AppResult<Vec<PunchRecord>> {
        let Some(raw) = self.kv.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        let history: Vec<PunchRecord> =
            serde_json::from_str(&raw).map_err(|e| AppError::CorruptHistory(e.to_string()))?;

        Ok(trim_to_cap(history))
    }

    pub fn load(&self) -> Vec<PunchRecord> {
        match self.try_load() {
            Ok(history) => history,
            Err(e) => {
                self.report("load", &e);
                Vec::new()
            }
        }
    }

    pub fn try_save(&self, history: &[PunchRecord]) -> AppResult<()> {
        let raw = serde_json::to_string(history)?;
        self.kv.set(HISTORY_KEY, &raw)
    }

    pub fn save(&self, history: &[PunchRecord]) {
        if let Err(e) = self.try_save(history) {
            self.report("save", &e);
        }
    }

    /// Append one record, keep the newest five, persist. Returns what was
    /// written.
    pub fn try_append(&self, record: &PunchRecord) -> AppResult<Vec<PunchRecord>> {
        let current = self.try_load()?;
        let next = append_record(&current, record);
        self.try_save(&next)?;
        Ok(next)
    }

    /// Degrading variant of [`try_append`](Self::try_append): an unreadable
    /// history is treated as empty, a failed write is reported and dropped.
    pub fn append(&self, record: &PunchRecord) -> Vec<PunchRecord> {
        let current = self.load();
        let next = append_record(&current, record);
        self.save(&next);
        next
    }

    pub fn try_clear(&self) -> AppResult<()> {
        self.kv.delete(HISTORY_KEY)
    }

    pub fn clear(&self) {
        if let Err(e) = self.try_clear() {
            self.report("clear", &e);
        }
    }

    fn report(&self, operation: &str, err: &AppError) {
        warning(format!("Punch history {} failed: {}", operation, err));
        if let Some(conn) = self.audit {
            ttlog_quiet(conn, "storage_error", operation, &err.to_string());
        }
    }
}

fn append_record(history: &[PunchRecord], record: &PunchRecord) -> Vec<PunchRecord> {
    let mut next = history.to_vec();
    next.push(record.clone());
    trim_to_cap(next)
}
