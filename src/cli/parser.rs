use crate::models::{SessionType, SubVariant};
use clap::{Parser, Subcommand};

/// Command-line interface definition for timesnap
#[derive(Parser)]
#[command(
    name = "timesnap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Punch in full-day, half-day or short-leave sessions and get reminded at punch-out time",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Punch in now and schedule the punch-out reminder
    Punch {
        /// Session type: full-day, half-day or short-leave
        #[arg(value_enum)]
        kind: SessionType,

        #[arg(long = "half", value_enum, help = "Half for half-day and short-leave sessions")]
        half: Option<SubVariant>,
    },

    /// Record a punch-in at a given time of today
    Add {
        /// Session type: full-day, half-day or short-leave
        #[arg(value_enum)]
        kind: SessionType,

        #[arg(long = "at", value_name = "HH:MM", help = "Punch-in time (HH:MM)")]
        at: String,

        #[arg(long = "half", value_enum, help = "Half for half-day and short-leave sessions")]
        half: Option<SubVariant>,
    },

    /// Show the last five punches
    History,

    /// Delete the whole punch history
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Interactive session screen reading commands from stdin
    Session {
        #[arg(value_enum)]
        kind: SessionType,

        #[arg(long = "half", value_enum, help = "Initially selected half")]
        half: Option<SubVariant>,
    },

    /// Inspect and deliver scheduled punch-out reminders
    Remind {
        #[arg(long = "list", help = "List pending reminders")]
        list: bool,

        #[arg(long = "fire", help = "Deliver every reminder that is due")]
        fire: bool,

        #[arg(long = "wait", help = "Wait for the next reminder and deliver it")]
        wait: bool,

        #[arg(long = "cancel", value_name = "ID", help = "Cancel a pending reminder")]
        cancel: Option<i64>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
