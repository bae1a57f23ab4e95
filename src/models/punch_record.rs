use crate::models::{SessionType, SubVariant};
use chrono::{DateTime, Duration, Local, Utc};
use serde::{Deserialize, Serialize};

/// One punched session as kept in the history blob.
///
/// `punch_out` is derived from `punch_in` and the session policy when the
/// record is built and never touched afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchRecord {
    #[serde(rename = "type")]
    pub session_type: SessionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<SubVariant>,
    pub punch_in: DateTime<Utc>,
    pub punch_out: DateTime<Utc>,
}

impl PunchRecord {
    pub fn new(
        session_type: SessionType,
        leave_type: Option<SubVariant>,
        punch_in: DateTime<Utc>,
        punch_out: DateTime<Utc>,
    ) -> Self {
        Self {
            session_type,
            leave_type,
            punch_in,
            punch_out,
        }
    }

    /// Planned length of the session.
    pub fn duration(&self) -> Duration {
        self.punch_out - self.punch_in
    }

    pub fn punch_in_local(&self) -> DateTime<Local> {
        self.punch_in.with_timezone(&Local)
    }

    pub fn punch_out_local(&self) -> DateTime<Local> {
        self.punch_out.with_timezone(&Local)
    }
}
