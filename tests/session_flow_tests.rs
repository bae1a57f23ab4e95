use chrono::{NaiveDate, Utc};
use timesnap::core::{SessionFlow, SessionPolicy};
use timesnap::db::kv::{MemoryKv, SqliteKv};
use timesnap::db::pool::DbPool;
use timesnap::errors::AppError;
use timesnap::models::{SessionType, SubVariant};
use timesnap::reminder::{RecordingNotifier, SqliteReminderQueue};
use timesnap::storage::HistoryStore;

mod common;
use common::{full_day_record, jan15};

fn jan15_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

#[test]
fn test_new_flow_has_no_active_session_but_loads_history() {
    let kv = MemoryKv::new();
    let store = HistoryStore::new(&kv);
    store.save(&[full_day_record(14)]);
    let notifier = RecordingNotifier::new();

    let flow = SessionFlow::new(&SessionPolicy::FULL_DAY, &store, &notifier, "TimeSnap");

    assert!(flow.active().is_none());
    assert_eq!(flow.history().len(), 1);
    assert_eq!(flow.sub_variant(), None);
}

#[test]
fn test_punch_in_now_computes_schedules_and_saves() {
    let kv = MemoryKv::new();
    let store = HistoryStore::new(&kv);
    let notifier = RecordingNotifier::new();
    let mut flow = SessionFlow::new(&SessionPolicy::FULL_DAY, &store, &notifier, "TimeSnap");

    let outcome = flow.punch_in_now(jan15(9, 0));

    assert_eq!(outcome.record.session_type, SessionType::FullDay);
    assert_eq!(outcome.record.punch_out, jan15(17, 30));
    assert_eq!(outcome.reminder, Some(1));

    let calls = notifier.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].at, jan15(17, 30));
    assert_eq!(calls[0].title, "TimeSnap");
    assert_eq!(calls[0].body, "Your punch out time is up!");

    let active = flow.active().unwrap();
    assert_eq!(active.punch_in, jan15(9, 0));
    assert_eq!(active.punch_out, jan15(17, 30));

    assert_eq!(store.load(), vec![outcome.record.clone()]);
    assert_eq!(flow.history(), outcome.history.as_slice());
}

#[test]
fn test_half_day_uses_selected_half() {
    let kv = MemoryKv::new();
    let store = HistoryStore::new(&kv);
    let notifier = RecordingNotifier::new();
    let mut flow = SessionFlow::new(&SessionPolicy::HALF_DAY, &store, &notifier, "TimeSnap");

    assert_eq!(flow.sub_variant(), Some(SubVariant::FirstHalf));
    flow.select_sub_variant(SubVariant::SecondHalf);

    let outcome = flow.punch_in_now(jan15(9, 0));

    assert_eq!(outcome.record.leave_type, Some(SubVariant::SecondHalf));
    assert_eq!(outcome.record.punch_out, jan15(13, 30));
    assert_eq!(notifier.calls()[0].body, "Your half day punch out is up!");
}

#[test]
fn test_manual_add_backdates_without_activating() {
    let kv = MemoryKv::new();
    let store = HistoryStore::new(&kv);
    let notifier = RecordingNotifier::new();
    let mut flow = SessionFlow::new(&SessionPolicy::SHORT_LEAVE, &store, &notifier, "TimeSnap");

    let outcome = flow.manual_add(&Utc, jan15_date(), 9, 0).unwrap();

    assert_eq!(outcome.record.punch_in, jan15(9, 0));
    assert_eq!(outcome.record.punch_out, jan15(15, 30));
    assert_eq!(outcome.record.leave_type, Some(SubVariant::FirstHalf));
    assert!(flow.active().is_none());
    assert_eq!(notifier.calls()[0].at, jan15(15, 30));
    assert_eq!(
        notifier.calls()[0].body,
        "Your short leave punch-out time is up!"
    );
}

#[test]
fn test_manual_add_rejects_invalid_time() {
    let kv = MemoryKv::new();
    let store = HistoryStore::new(&kv);
    let notifier = RecordingNotifier::new();
    let mut flow = SessionFlow::new(&SessionPolicy::FULL_DAY, &store, &notifier, "TimeSnap");

    assert!(matches!(
        flow.manual_add(&Utc, jan15_date(), 25, 0),
        Err(AppError::InvalidTime(_))
    ));
    assert!(store.load().is_empty());
    assert!(notifier.calls().is_empty());
}

#[test]
fn test_reset_keeps_history_and_clear_empties_it() {
    let kv = MemoryKv::new();
    let store = HistoryStore::new(&kv);
    let notifier = RecordingNotifier::new();
    let mut flow = SessionFlow::new(&SessionPolicy::FULL_DAY, &store, &notifier, "TimeSnap");

    flow.punch_in_now(jan15(9, 0));
    flow.reset();

    assert!(flow.active().is_none());
    assert_eq!(flow.history().len(), 1);
    assert_eq!(store.load().len(), 1);

    flow.clear_history();
    assert!(flow.history().is_empty());
    assert!(store.load().is_empty());
}

#[test]
fn test_overlapping_punches_are_allowed() {
    let kv = MemoryKv::new();
    let store = HistoryStore::new(&kv);
    let notifier = RecordingNotifier::new();
    let mut flow = SessionFlow::new(&SessionPolicy::FULL_DAY, &store, &notifier, "TimeSnap");

    flow.punch_in_now(jan15(9, 0));
    let second = flow.punch_in_now(jan15(9, 5));

    assert_eq!(second.history.len(), 2);
    assert_eq!(flow.active().unwrap().punch_in, jan15(9, 5));
    // the first reminder is not cancelled
    assert_eq!(notifier.calls().len(), 2);
}

#[test]
fn test_notifier_failure_still_saves_record() {
    let kv = MemoryKv::new();
    let store = HistoryStore::new(&kv);
    let notifier = RecordingNotifier::new();
    notifier.fail.set(true);
    let mut flow = SessionFlow::new(&SessionPolicy::FULL_DAY, &store, &notifier, "TimeSnap");

    let outcome = flow.punch_in_now(jan15(9, 0));

    assert_eq!(outcome.reminder, None);
    assert_eq!(store.load().len(), 1);
}

#[test]
fn test_history_is_shared_between_surfaces_and_capped() {
    let kv = MemoryKv::new();
    let store = HistoryStore::new(&kv);
    let notifier = RecordingNotifier::new();

    let mut full = SessionFlow::new(&SessionPolicy::FULL_DAY, &store, &notifier, "TimeSnap");
    for h in 6..10 {
        full.punch_in_now(jan15(h, 0));
    }

    let mut short = SessionFlow::new(&SessionPolicy::SHORT_LEAVE, &store, &notifier, "TimeSnap");
    assert_eq!(short.history().len(), 4);

    short.punch_in_now(jan15(10, 0));
    let last = short.punch_in_now(jan15(11, 0));

    assert_eq!(last.history.len(), 5);
    assert_eq!(last.history[0].punch_in, jan15(7, 0));
    assert_eq!(last.history[4].session_type, SessionType::ShortLeave);
}

#[test]
fn test_flow_over_sqlite_backends() {
    let pool = DbPool::in_memory().unwrap();
    let kv = SqliteKv::new(&pool.conn);
    let store = HistoryStore::new(&kv).with_audit(&pool.conn);
    let queue = SqliteReminderQueue::new(&pool.conn);

    let mut flow = SessionFlow::new(&SessionPolicy::HALF_DAY, &store, &queue, "TimeSnap");
    let outcome = flow.punch_in_now(Utc::now());

    let pending = queue.pending().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(Some(pending[0].id), outcome.reminder);
    assert_eq!(store.load(), vec![outcome.record]);
}
