use timesnap::db::kv::{KeyValueStore, MemoryKv, SqliteKv};
use timesnap::db::pool::DbPool;
use timesnap::errors::{AppError, AppResult};
use timesnap::models::{PunchRecord, SubVariant};
use timesnap::storage::{HISTORY_KEY, HistoryStore};

mod common;
use common::{full_day_record, short_leave_record};

/// Backend that fails every call.
struct BrokenKv;

impl KeyValueStore for BrokenKv {
    fn get(&self, _key: &str) -> AppResult<Option<String>> {
        Err(AppError::StorageUnavailable("disk gone".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::StorageUnavailable("disk gone".into()))
    }

    fn delete(&self, _key: &str) -> AppResult<()> {
        Err(AppError::StorageUnavailable("disk gone".into()))
    }
}

fn sample_history() -> Vec<PunchRecord> {
    vec![
        full_day_record(10),
        short_leave_record(11, SubVariant::SecondHalf),
        full_day_record(12),
    ]
}

#[test]
fn test_empty_store_loads_empty_history() {
    let kv = MemoryKv::new();
    let store = HistoryStore::new(&kv);

    assert!(store.load().is_empty());
    assert!(store.try_load().unwrap().is_empty());
}

#[test]
fn test_save_then_load_round_trip_memory() {
    let kv = MemoryKv::new();
    let store = HistoryStore::new(&kv);
    let history = sample_history();

    store.save(&history);

    assert_eq!(store.load(), history);
}

#[test]
fn test_save_then_load_round_trip_sqlite() {
    let pool = DbPool::in_memory().unwrap();
    let kv = SqliteKv::new(&pool.conn);
    let store = HistoryStore::new(&kv).with_audit(&pool.conn);
    let history = sample_history();

    store.try_save(&history).unwrap();
    assert_eq!(store.try_load().unwrap(), history);

    // a second save replaces the first
    store.try_save(&history[..1]).unwrap();
    assert_eq!(store.try_load().unwrap(), history[..1].to_vec());
}

#[test]
fn test_clear_then_load_is_empty() {
    let pool = DbPool::in_memory().unwrap();
    let kv = SqliteKv::new(&pool.conn);
    let store = HistoryStore::new(&kv);

    store.save(&sample_history());
    store.clear();

    assert!(store.load().is_empty());
    assert_eq!(kv.get(HISTORY_KEY).unwrap(), None);

    // clearing twice is fine
    store.try_clear().unwrap();
}

#[test]
fn test_stored_blob_format() {
    let kv = MemoryKv::new();
    let store = HistoryStore::new(&kv);

    store.save(&[
        full_day_record(15),
        short_leave_record(15, SubVariant::FirstHalf),
    ]);

    let raw = kv.get(HISTORY_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let items = json.as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["type"], "fullDay");
    assert!(items[0].get("leaveType").is_none());
    assert_eq!(items[0]["punchIn"], "2024-01-15T09:00:00Z");
    assert_eq!(items[0]["punchOut"], "2024-01-15T17:30:00Z");
    assert_eq!(items[1]["type"], "shortLeave");
    assert_eq!(items[1]["leaveType"], "firstHalf");
    assert_eq!(items[1]["punchOut"], "2024-01-15T15:30:00Z");
}

#[test]
fn test_reads_blob_with_millis_and_offsets() {
    let kv = MemoryKv::new();
    kv.set(
        HISTORY_KEY,
        r#"[{"type":"halfDay","punchIn":"2024-01-15T09:00:00.000Z","punchOut":"2024-01-15T13:00:00.000Z"},
            {"type":"shortLeave","leaveType":"secondHalf","punchIn":"2024-01-16T10:00:00+01:00","punchOut":"2024-01-16T16:30:00+01:00"}]"#,
    )
    .unwrap();

    let history = HistoryStore::new(&kv).try_load().unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].leave_type, None);
    assert_eq!(history[0].duration().num_minutes(), 240);
    assert_eq!(history[1].leave_type, Some(SubVariant::SecondHalf));
    assert_eq!(history[1].punch_in.to_rfc3339(), "2024-01-16T09:00:00+00:00");
}

#[test]
fn test_malformed_blob_is_named_error_and_degrades() {
    let kv = MemoryKv::new();
    kv.set(HISTORY_KEY, "{not json").unwrap();
    let store = HistoryStore::new(&kv);

    assert!(matches!(store.try_load(), Err(AppError::CorruptHistory(_))));
    assert!(store.load().is_empty());
}

#[test]
fn test_unknown_type_is_rejected() {
    let kv = MemoryKv::new();
    kv.set(
        HISTORY_KEY,
        r#"[{"type":"overtime","punchIn":"2024-01-15T09:00:00Z","punchOut":"2024-01-15T10:00:00Z"}]"#,
    )
    .unwrap();

    assert!(matches!(
        HistoryStore::new(&kv).try_load(),
        Err(AppError::CorruptHistory(_))
    ));
}

#[test]
fn test_broken_backend_is_named_error_and_degrades() {
    let kv = BrokenKv;
    let store = HistoryStore::new(&kv);

    assert!(matches!(
        store.try_load(),
        Err(AppError::StorageUnavailable(_))
    ));
    assert!(matches!(
        store.try_save(&sample_history()),
        Err(AppError::StorageUnavailable(_))
    ));

    // degraded variants never fail
    assert!(store.load().is_empty());
    store.save(&sample_history());
    store.clear();
    assert_eq!(store.append(&full_day_record(1)).len(), 1);
}

#[test]
fn test_degraded_read_is_written_to_internal_log() {
    let pool = DbPool::in_memory().unwrap();
    let kv = SqliteKv::new(&pool.conn);
    kv.set(HISTORY_KEY, "garbage").unwrap();

    let store = HistoryStore::new(&kv).with_audit(&pool.conn);
    assert!(store.load().is_empty());

    let count: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'storage_error' AND target = 'load'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_append_keeps_last_five() {
    let pool = DbPool::in_memory().unwrap();
    let kv = SqliteKv::new(&pool.conn);
    let store = HistoryStore::new(&kv);

    let records: Vec<PunchRecord> = (1..=7).map(full_day_record).collect();
    for r in &records {
        store.try_append(r).unwrap();
    }

    assert_eq!(store.load(), records[2..].to_vec());
}

#[test]
fn test_oversized_blob_is_trimmed_on_load() {
    let kv = MemoryKv::new();
    let records: Vec<PunchRecord> = (1..=7).map(full_day_record).collect();
    kv.set(HISTORY_KEY, &serde_json::to_string(&records).unwrap())
        .unwrap();

    assert_eq!(HistoryStore::new(&kv).load(), records[2..].to_vec());
}
