//! Duration policy per session type and the display labels of each session
//! surface.

use crate::models::{SessionType, SubVariant};
use chrono::Duration;

/// Maximum number of records kept in the persisted history.
pub const RETENTION_CAP: usize = 5;

const FULL_DAY_MINUTES: i64 = 8 * 60 + 30;
const HALF_DAY_FIRST_MINUTES: i64 = 4 * 60;
const HALF_DAY_SECOND_MINUTES: i64 = 4 * 60 + 30;
const SHORT_LEAVE_MINUTES: i64 = 6 * 60 + 30;

/// Sub-variant actually applied to a punch of the given type.
///
/// Full-day sessions carry none; the others fall back to the first half.
pub fn effective_sub_variant(
    session_type: SessionType,
    sub_variant: Option<SubVariant>,
) -> Option<SubVariant> {
    if session_type.has_sub_variant() {
        Some(sub_variant.unwrap_or_default())
    } else {
        None
    }
}

/// Minutes to add to the punch-in time.
pub fn duration_minutes(session_type: SessionType, sub_variant: Option<SubVariant>) -> i64 {
    match (session_type, effective_sub_variant(session_type, sub_variant)) {
        (SessionType::FullDay, _) => FULL_DAY_MINUTES,
        (SessionType::HalfDay, Some(SubVariant::SecondHalf)) => HALF_DAY_SECOND_MINUTES,
        (SessionType::HalfDay, _) => HALF_DAY_FIRST_MINUTES,
        // constant across halves; the half is informational only
        (SessionType::ShortLeave, _) => SHORT_LEAVE_MINUTES,
    }
}

pub fn duration_for(session_type: SessionType, sub_variant: Option<SubVariant>) -> Duration {
    Duration::minutes(duration_minutes(session_type, sub_variant))
}

/// Everything that differs between the full-day, half-day and short-leave
/// surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPolicy {
    pub session_type: SessionType,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub reminder_body: &'static str,
}

impl SessionPolicy {
    pub const FULL_DAY: SessionPolicy = SessionPolicy {
        session_type: SessionType::FullDay,
        title: "Full Day",
        subtitle: "Regular Work Mode",
        reminder_body: "Your punch out time is up!",
    };

    pub const HALF_DAY: SessionPolicy = SessionPolicy {
        session_type: SessionType::HalfDay,
        title: "Half Day",
        subtitle: "Half Day Work Mode",
        reminder_body: "Your half day punch out is up!",
    };

    pub const SHORT_LEAVE: SessionPolicy = SessionPolicy {
        session_type: SessionType::ShortLeave,
        title: "Short Leave",
        subtitle: "Quick Break Work Mode",
        reminder_body: "Your short leave punch-out time is up!",
    };

    pub fn for_type(session_type: SessionType) -> &'static SessionPolicy {
        match session_type {
            SessionType::FullDay => &Self::FULL_DAY,
            SessionType::HalfDay => &Self::HALF_DAY,
            SessionType::ShortLeave => &Self::SHORT_LEAVE,
        }
    }

    pub fn selects_sub_variant(&self) -> bool {
        self.session_type.has_sub_variant()
    }

    pub fn duration(&self, sub_variant: Option<SubVariant>) -> Duration {
        duration_for(self.session_type, sub_variant)
    }
}
