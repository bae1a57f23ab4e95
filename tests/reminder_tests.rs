use chrono::Duration;
use timesnap::db::pool::DbPool;
use timesnap::errors::AppError;
use timesnap::reminder::{
    Notifier, RecordingNotifier, SqliteReminderQueue, effective_fire_time,
};

mod common;
use common::jan15;

#[test]
fn test_past_instants_fire_immediately() {
    let now = jan15(12, 0);

    assert_eq!(effective_fire_time(jan15(9, 0), now), now);
    assert_eq!(effective_fire_time(now, now), now);
    assert_eq!(effective_fire_time(jan15(17, 30), now), jan15(17, 30));
}

#[test]
fn test_queue_clamps_and_lists_pending() {
    let pool = DbPool::in_memory().unwrap();
    let queue = SqliteReminderQueue::new(&pool.conn);
    let now = jan15(12, 0);

    let late = queue
        .schedule_at(jan15(17, 30), now, "TimeSnap", "Your punch out time is up!")
        .unwrap();
    let past = queue
        .schedule_at(jan15(8, 0), now, "TimeSnap", "Your short leave punch-out time is up!")
        .unwrap();

    let pending = queue.pending().unwrap();
    assert_eq!(pending.len(), 2);

    // soonest first; the past one was clamped to `now`
    assert_eq!(pending[0].id, past);
    assert_eq!(pending[0].fire_at, now);
    assert_eq!(pending[1].id, late);
    assert_eq!(pending[1].fire_at, jan15(17, 30));
    assert_eq!(pending[1].body, "Your punch out time is up!");
    assert!(pending.iter().all(|r| r.delivered_at.is_none()));
}

#[test]
fn test_each_schedule_is_independent() {
    let pool = DbPool::in_memory().unwrap();
    let queue = SqliteReminderQueue::new(&pool.conn);
    let now = jan15(9, 0);

    let a = queue.schedule_at(jan15(17, 30), now, "t", "b").unwrap();
    let b = queue.schedule_at(jan15(17, 30), now, "t", "b").unwrap();

    assert_ne!(a, b);
    assert_eq!(queue.pending().unwrap().len(), 2);
}

#[test]
fn test_deliver_due_delivers_once() {
    let pool = DbPool::in_memory().unwrap();
    let queue = SqliteReminderQueue::new(&pool.conn);
    let now = jan15(9, 0);

    let early = queue.schedule_at(jan15(13, 0), now, "TimeSnap", "half").unwrap();
    queue.schedule_at(jan15(17, 30), now, "TimeSnap", "full").unwrap();

    assert!(queue.deliver_due(jan15(12, 59)).unwrap().is_empty());

    let delivered = queue.deliver_due(jan15(13, 0)).unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].id, early);
    assert_eq!(delivered[0].delivered_at, Some(jan15(13, 0)));

    // already delivered
    assert!(queue.deliver_due(jan15(14, 0)).unwrap().is_empty());
    assert_eq!(queue.pending().unwrap().len(), 1);

    assert_eq!(queue.deliver_due(jan15(18, 0)).unwrap().len(), 1);
    assert!(queue.next_pending().unwrap().is_none());
}

#[test]
fn test_due_respects_subsecond_order() {
    let pool = DbPool::in_memory().unwrap();
    let queue = SqliteReminderQueue::new(&pool.conn);
    let at = jan15(13, 0) + Duration::milliseconds(250);

    queue.schedule_at(at, jan15(9, 0), "t", "b").unwrap();

    assert!(queue.due(jan15(13, 0)).unwrap().is_empty());
    assert_eq!(queue.due(at).unwrap().len(), 1);
}

#[test]
fn test_cancel_pending_reminder() {
    let pool = DbPool::in_memory().unwrap();
    let queue = SqliteReminderQueue::new(&pool.conn);

    let id = queue
        .schedule_at(jan15(17, 30), jan15(9, 0), "t", "b")
        .unwrap();
    queue.cancel(id).unwrap();

    assert!(queue.pending().unwrap().is_empty());
    assert!(matches!(queue.cancel(id), Err(AppError::InvalidReminder(x)) if x == id));
}

#[test]
fn test_delivered_reminder_cannot_be_cancelled() {
    let pool = DbPool::in_memory().unwrap();
    let queue = SqliteReminderQueue::new(&pool.conn);

    let id = queue.schedule_at(jan15(9, 0), jan15(9, 0), "t", "b").unwrap();
    queue.deliver_due(jan15(9, 0)).unwrap();

    assert!(queue.cancel(id).is_err());
}

#[test]
fn test_notifier_trait_on_queue_uses_wall_clock() {
    let pool = DbPool::in_memory().unwrap();
    let queue = SqliteReminderQueue::new(&pool.conn);

    // long past: clamped to the current time, so it is due right away
    queue.schedule(jan15(9, 0), "t", "b").unwrap();

    let next = queue.next_pending().unwrap().unwrap();
    assert!(next.fire_at > jan15(9, 0));
    assert_eq!(queue.deliver_due(chrono::Utc::now()).unwrap().len(), 1);
}

#[test]
fn test_recording_notifier() {
    let notifier = RecordingNotifier::new();

    let id = notifier.schedule(jan15(17, 30), "TimeSnap", "body").unwrap();
    assert_eq!(id, 1);
    assert_eq!(notifier.calls()[0].at, jan15(17, 30));

    notifier.fail.set(true);
    assert!(matches!(
        notifier.schedule(jan15(17, 30), "TimeSnap", "body"),
        Err(AppError::Notification(_))
    ));
    assert_eq!(notifier.calls().len(), 1);
}
