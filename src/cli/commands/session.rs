//! Interactive session screen.
//!
//! One screen per session type, all driven by the same loop. The punched-in
//! state only lives as long as the loop does.

use crate::cli::commands::clear::confirm;
use crate::cli::commands::resolve_half;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SessionFlow;
use crate::core::SessionPolicy;
use crate::db::kv::{KeyValueStore, SqliteKv};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::SubVariant;
use crate::reminder::{Notifier, SqliteReminderQueue};
use crate::storage::HistoryStore;
use crate::ui::messages::{dialog, error, header, info, warning};
use crate::ui::render::{print_active, print_history, print_outcome};
use crate::utils::date;
use crate::utils::time::parse_hour_minute;
use chrono::{Local, Utc};
use std::io::{BufRead, Write, stdin, stdout};

const HELP: &str = "\
Commands:
  in              punch in now
  add HH:MM       record a punch-in at HH:MM today
  half first|second
                  select the half (half-day and short-leave)
  status          show the current punch
  history         show the last five punches
  clear           delete the whole history
  reset           forget the current punch (history is kept)
  help            show this help
  quit            leave the session";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { kind, half } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let kv = SqliteKv::new(&pool.conn);
        let store = HistoryStore::new(&kv).with_audit(&pool.conn);
        let queue = SqliteReminderQueue::new(&pool.conn);

        let policy = SessionPolicy::for_type(*kind);
        let mut flow = SessionFlow::new(policy, &store, &queue, cfg.reminder_title.as_str());
        if let Some(h) = resolve_half(*kind, *half, cfg) {
            flow.select_sub_variant(h);
        }

        run(&mut flow, &mut stdin().lock(), cfg)?;
    }

    Ok(())
}

fn prompt() {
    print!("> ");
    stdout().flush().ok();
}

fn print_screen<K: KeyValueStore, N: Notifier>(flow: &SessionFlow<'_, K, N>, cfg: &Config) {
    let policy = flow.policy();
    header(format!("{} · {}", policy.title, policy.subtitle));

    if let Some(v) = flow.sub_variant() {
        println!("Selected half: {}", v.label());
    }
    print_active(flow.active(), cfg.time_format);
    println!();
    print_history(flow.history(), cfg.time_format);
}

/// Read commands from `input` until `quit` or end of input.
pub fn run<K, N, R>(flow: &mut SessionFlow<'_, K, N>, input: &mut R, cfg: &Config) -> AppResult<()>
where
    K: KeyValueStore,
    N: Notifier,
    R: BufRead,
{
    print_screen(flow, cfg);
    println!("\nType 'help' for the list of commands.");

    loop {
        prompt();

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let arg = parts.next();

        match command.to_lowercase().as_str() {
            "in" | "punch" => {
                if flow.active().is_some() {
                    warning("Already punched in. Use 'reset' to start over.");
                    continue;
                }
                let outcome = flow.punch_in_now(Utc::now());
                print_outcome("Punched In", &outcome, cfg.time_format);
            }
            "add" => match arg.map(parse_hour_minute) {
                Some(Ok((hour, minute))) => {
                    match flow.manual_add(&Local, date::today(), hour, minute) {
                        Ok(outcome) => print_outcome("Added", &outcome, cfg.time_format),
                        Err(e) => error(e),
                    }
                }
                Some(Err(e)) => error(e),
                None => error("Usage: add HH:MM"),
            },
            "half" => {
                if !flow.policy().selects_sub_variant() {
                    warning(format!("{} has no halves.", flow.policy().title));
                    continue;
                }
                match arg.and_then(SubVariant::from_code) {
                    Some(v) => {
                        flow.select_sub_variant(v);
                        info(format!("Selected half: {}", v.label()));
                    }
                    None => error("Usage: half first|second"),
                }
            }
            "status" => print_active(flow.active(), cfg.time_format),
            "history" => print_history(flow.history(), cfg.time_format),
            "clear" => {
                if flow.history().is_empty() {
                    info("No punch history to delete.");
                } else if confirm(input, "Delete all punch history?")? {
                    flow.clear_history();
                    dialog("Cleared", "Punch history deleted.");
                } else {
                    info("Clear cancelled.");
                }
            }
            "reset" => {
                flow.reset();
                dialog("Reset", "Punch In/Out reset successfully.");
            }
            "help" | "?" => println!("{}", HELP),
            "quit" | "exit" | "q" => break,
            other => error(format!("Unknown command '{}'. Type 'help'.", other)),
        }
    }

    Ok(())
}
