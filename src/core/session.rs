//! One session surface, parameterized by a [`SessionPolicy`].
//!
//! The flow holds the transient "active session" in memory only. A new flow
//! always starts without one, even when the stored history ends with a punch
//! that is still running.

use crate::core::lifecycle::build_record;
use crate::core::policy::{SessionPolicy, effective_sub_variant};
use crate::db::kv::KeyValueStore;
use crate::errors::AppResult;
use crate::models::{PunchRecord, SubVariant};
use crate::reminder::{Notifier, ReminderId};
use crate::storage::HistoryStore;
use crate::ui::messages::warning;
use crate::utils::date::at_time_on;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Punch started from this surface during the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSession {
    pub punch_in: DateTime<Utc>,
    pub punch_out: DateTime<Utc>,
}

/// What a punch produced.
#[derive(Debug, Clone)]
pub struct PunchOutcome {
    pub record: PunchRecord,
    pub history: Vec<PunchRecord>,
    /// `None` when the reminder could not be scheduled.
    pub reminder: Option<ReminderId>,
}

pub struct SessionFlow<'a, K: KeyValueStore, N: Notifier> {
    policy: &'static SessionPolicy,
    store: &'a HistoryStore<'a, K>,
    notifier: &'a N,
    reminder_title: String,
    sub_variant: SubVariant,
    active: Option<ActiveSession>,
    history: Vec<PunchRecord>,
}

impl<'a, K: KeyValueStore, N: Notifier> SessionFlow<'a, K, N> {
    /// Build the surface and load the displayed history.
    pub fn new(
        policy: &'static SessionPolicy,
        store: &'a HistoryStore<'a, K>,
        notifier: &'a N,
        reminder_title: impl Into<String>,
    ) -> Self {
        Self {
            policy,
            store,
            notifier,
            reminder_title: reminder_title.into(),
            sub_variant: SubVariant::default(),
            active: None,
            history: store.load(),
        }
    }

    pub fn policy(&self) -> &'static SessionPolicy {
        self.policy
    }

    pub fn history(&self) -> &[PunchRecord] {
        &self.history
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        self.active.as_ref()
    }

    /// Selected half, `None` for full-day surfaces.
    pub fn sub_variant(&self) -> Option<SubVariant> {
        effective_sub_variant(self.policy.session_type, Some(self.sub_variant))
    }

    pub fn select_sub_variant(&mut self, sub_variant: SubVariant) {
        self.sub_variant = sub_variant;
    }

    /// Punch in at `now` and make it the active session.
    pub fn punch_in_now(&mut self, now: DateTime<Utc>) -> PunchOutcome {
        let outcome = self.punch(now);
        self.active = Some(ActiveSession {
            punch_in: outcome.record.punch_in,
            punch_out: outcome.record.punch_out,
        });
        outcome
    }

    /// Record a punch at `hour:minute` on `today`; the active session is left
    /// as it is.
    pub fn manual_add<Tz: TimeZone>(
        &mut self,
        tz: &Tz,
        today: NaiveDate,
        hour: u32,
        minute: u32,
    ) -> AppResult<PunchOutcome> {
        let punch_in = at_time_on(tz, today, hour, minute)?;
        Ok(self.punch(punch_in.with_timezone(&Utc)))
    }

    /// Delete the whole stored history.
    pub fn clear_history(&mut self) {
        self.store.clear();
        self.history.clear();
    }

    /// Forget the active session; history is untouched.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Re-read the displayed history from the store.
    pub fn refresh(&mut self) -> &[PunchRecord] {
        self.history = self.store.load();
        &self.history
    }

    fn punch(&mut self, punch_in: DateTime<Utc>) -> PunchOutcome {
        let record = build_record(self.policy.session_type, self.sub_variant(), punch_in);

        let reminder = match self.notifier.schedule(
            record.punch_out,
            &self.reminder_title,
            self.policy.reminder_body,
        ) {
            Ok(id) => Some(id),
            Err(e) => {
                warning(format!("Reminder not scheduled: {}", e));
                None
            }
        };

        self.store.append(&record);
        let history = self.refresh().to_vec();

        PunchOutcome {
            record,
            history,
            reminder,
        }
    }
}
