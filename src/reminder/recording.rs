//! In-memory notifier for tests and dry runs.

use crate::errors::{AppError, AppResult};
use crate::reminder::{Notifier, ReminderId};
use chrono::{DateTime, Utc};
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledCall {
    pub id: ReminderId,
    pub at: DateTime<Utc>,
    pub title: String,
    pub body: String,
}

/// Records every scheduling request instead of delivering it.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    calls: RefCell<Vec<ScheduledCall>>,

    /// Make the next calls fail
    pub fail: Cell<bool>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ScheduledCall> {
        self.calls.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn schedule(&self, at: DateTime<Utc>, title: &str, body: &str) -> AppResult<ReminderId> {
        if self.fail.get() {
            return Err(AppError::Notification("notifier offline".into()));
        }

        let mut calls = self.calls.borrow_mut();
        let id = calls.len() as ReminderId + 1;
        calls.push(ScheduledCall {
            id,
            at,
            title: title.to_string(),
            body: body.to_string(),
        });
        Ok(id)
    }
}
