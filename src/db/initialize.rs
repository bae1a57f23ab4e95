use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::time::Duration;

/// Initialize the database.
/// Schema creation and upgrades all go through the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.busy_timeout(Duration::from_secs(2))?;

    run_pending_migrations(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    Ok(())
}
