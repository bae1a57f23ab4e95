use crate::cli::commands::resolve_half;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{SessionFlow, SessionPolicy};
use crate::db::kv::SqliteKv;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::reminder::SqliteReminderQueue;
use crate::storage::HistoryStore;
use crate::ui::render::{print_history, print_outcome};
use chrono::Utc;

/// Punch in now.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { kind, half } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let kv = SqliteKv::new(&pool.conn);
        let store = HistoryStore::new(&kv).with_audit(&pool.conn);
        let queue = SqliteReminderQueue::new(&pool.conn);

        let policy = SessionPolicy::for_type(*kind);
        let mut flow = SessionFlow::new(policy, &store, &queue, cfg.reminder_title.as_str());
        if let Some(h) = resolve_half(*kind, *half, cfg) {
            flow.select_sub_variant(h);
        }

        let outcome = flow.punch_in_now(Utc::now());

        print_outcome("Punched In", &outcome, cfg.time_format);
        println!();
        print_history(&outcome.history, cfg.time_format);

        ttlog_quiet(
            &pool.conn,
            "punch",
            kind.as_str(),
            &format!(
                "Punch in {} → expected out {}",
                outcome.record.punch_in.to_rfc3339(),
                outcome.record.punch_out.to_rfc3339()
            ),
        );
    }

    Ok(())
}
