use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::reminder::{Reminder, SqliteReminderQueue};
use crate::ui::messages::{info, notification, success};
use crate::utils::table::Table;
use crate::utils::time::format_stamp;
use chrono::{Local, Utc};
use std::thread;

fn print_pending(pending: &[Reminder], cfg: &Config) {
    if pending.is_empty() {
        info("No pending reminders.");
        return;
    }

    let mut table = Table::new(["ID", "Fires at", "Title", "Message"]);
    for r in pending {
        table.add_row(vec![
            r.id.to_string(),
            format_stamp(&r.fire_at.with_timezone(&Local), cfg.time_format),
            r.title.clone(),
            r.body.clone(),
        ]);
    }
    print!("{}", table.render());
}

fn deliver(queue: &SqliteReminderQueue, pool: &DbPool) -> AppResult<usize> {
    let delivered = queue.deliver_due(Utc::now())?;
    for r in &delivered {
        notification(&r.title, &r.body);
        ttlog_quiet(&pool.conn, "remind", &r.id.to_string(), "Reminder delivered");
    }
    Ok(delivered.len())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Remind {
        list,
        fire,
        wait,
        cancel,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let queue = SqliteReminderQueue::new(&pool.conn);

        if let Some(id) = cancel {
            queue.cancel(*id)?;
            success(format!("Reminder #{} cancelled.", id));
            ttlog_quiet(&pool.conn, "remind", &id.to_string(), "Reminder cancelled");
        }

        if *fire && deliver(&queue, &pool)? == 0 {
            info("No reminders due.");
        }

        if *wait {
            match queue.next_pending()? {
                Some(next) => {
                    let remaining = next.fire_at - Utc::now();
                    if let Ok(sleep_for) = remaining.to_std() {
                        info(format!(
                            "Waiting for reminder #{} at {}…",
                            next.id,
                            format_stamp(&next.fire_at.with_timezone(&Local), cfg.time_format)
                        ));
                        thread::sleep(sleep_for);
                    }
                    deliver(&queue, &pool)?;
                }
                None => info("No pending reminders."),
            }
        }

        let nothing_requested = !*fire && !*wait && cancel.is_none();
        if *list || nothing_requested {
            print_pending(&queue.pending()?, cfg);
        }
    }

    Ok(())
}
