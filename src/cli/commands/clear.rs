use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::kv::SqliteKv;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::HistoryStore;
use crate::ui::messages::{dialog, info};
use std::io::{BufRead, Write, stdin, stdout};

/// Ask a yes/no question on stdin; anything but y/yes is a no.
pub fn confirm<R: BufRead>(input: &mut R, question: &str) -> AppResult<bool> {
    println!("{} [y/N]: ", question);
    print!("> ");
    stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes && !confirm(&mut stdin().lock(), "Delete all punch history?")? {
            info("Clear cancelled.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let kv = SqliteKv::new(&pool.conn);
        let store = HistoryStore::new(&kv).with_audit(&pool.conn);

        store.try_clear()?;

        dialog("Cleared", "Punch history deleted.");
        ttlog_quiet(&pool.conn, "clear", "punchHistory", "Punch history deleted");
    }

    Ok(())
}
