use crate::config::Config;
use crate::db::kv::SqliteKv;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::HistoryStore;
use crate::ui::render::print_history;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let kv = SqliteKv::new(&pool.conn);
    let store = HistoryStore::new(&kv).with_audit(&pool.conn);

    print_history(&store.load(), cfg.time_format);
    Ok(())
}
