//! Punch record lifecycle: punch-out computation and the retention cap.

use crate::core::policy::{RETENTION_CAP, duration_for, effective_sub_variant};
use crate::models::{PunchRecord, SessionType, SubVariant};
use chrono::{DateTime, TimeZone, Utc};

/// `punch_in + duration_for(type, sub_variant)`.
pub fn compute_punch_out<Tz: TimeZone>(
    punch_in: DateTime<Tz>,
    session_type: SessionType,
    sub_variant: Option<SubVariant>,
) -> DateTime<Tz> {
    punch_in + duration_for(session_type, sub_variant)
}

/// Build the record for a punch-in instant.
pub fn build_record<Tz: TimeZone>(
    session_type: SessionType,
    sub_variant: Option<SubVariant>,
    punch_in: DateTime<Tz>,
) -> PunchRecord {
    let punch_in = punch_in.with_timezone(&Utc);
    let punch_out = compute_punch_out(punch_in, session_type, sub_variant);

    PunchRecord::new(
        session_type,
        effective_sub_variant(session_type, sub_variant),
        punch_in,
        punch_out,
    )
}

/// Keep only the newest `RETENTION_CAP` records, preserving their order.
pub fn trim_to_cap(mut history: Vec<PunchRecord>) -> Vec<PunchRecord> {
    if history.len() > RETENTION_CAP {
        let excess = history.len() - RETENTION_CAP;
        history.drain(..excess);
    }
    history
}

/// Append a new punch to a copy of `history` and trim it to the cap.
///
/// Returns the new record together with the new history; `history` itself is
/// left untouched.
pub fn record_punch<Tz: TimeZone>(
    history: &[PunchRecord],
    session_type: SessionType,
    sub_variant: Option<SubVariant>,
    punch_in: DateTime<Tz>,
) -> (PunchRecord, Vec<PunchRecord>) {
    let record = build_record(session_type, sub_variant, punch_in);

    let mut next = Vec::with_capacity(history.len() + 1);
    next.extend_from_slice(history);
    next.push(record.clone());

    (record, trim_to_cap(next))
}
