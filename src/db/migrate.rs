use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
///
/// Every other migration records itself in this table, so it is created
/// unconditionally before anything else.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check whether a migration has already been recorded in the `log` table.
fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Key-value table holding the serialized punch history.
fn migrate_create_kv_store(conn: &Connection) -> Result<()> {
    let version = "20250301_0001_create_kv_store";
    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    mark_applied(conn, version, "Created kv_store table")?;
    success(format!("Migration applied: {} → created 'kv_store' table", version));
    Ok(())
}

/// Queue of scheduled punch-out reminders.
fn migrate_create_reminders(conn: &Connection) -> Result<()> {
    let version = "20250301_0002_create_reminders";
    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS reminders (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            fire_at      TEXT NOT NULL,
            title        TEXT NOT NULL,
            body         TEXT NOT NULL,
            created_at   TEXT NOT NULL,
            delivered_at TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_reminders_pending ON reminders(delivered_at, fire_at);
        "#,
    )?;

    mark_applied(conn, version, "Created reminders table")?;
    success(format!("Migration applied: {} → created 'reminders' table", version));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_create_kv_store(conn)?;
    migrate_create_reminders(conn)?;
    Ok(())
}
