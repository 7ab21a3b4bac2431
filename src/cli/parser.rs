use clap::{Parser, Subcommand};

/// Command-line interface definition for rCalendar
/// Shared calendar with one-off and recurring events stored in SQLite
#[derive(Parser)]
#[command(
    name = "rcalendar",
    version = env!("CARGO_PKG_VERSION"),
    about = "A shared calendar: one-off and recurring events resolved per month, backed by SQLite",
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
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "drop", help = "Drop every calendar table (irreversible)")]
        drop: bool,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a one-off event (--date) or a recurring one (--start + one pattern key)
    Add {
        /// Event text
        body: String,

        #[arg(long = "date", help = "Date of a one-off event (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "start", help = "First day a recurring event may occur (YYYY-MM-DD)")]
        start: Option<String>,

        #[arg(long = "end", help = "Last day a recurring event may occur (YYYY-MM-DD)")]
        end: Option<String>,

        #[arg(long = "year", help = "Repeat in the given year (1-9999)")]
        year: Option<i64>,

        #[arg(long = "month", help = "Repeat in the given month (1-12)")]
        month: Option<i64>,

        #[arg(long = "day", help = "Repeat on the given day of the month (1-31)")]
        day: Option<i64>,

        #[arg(long = "week", help = "Repeat in the given ISO week (1-53)")]
        week: Option<i64>,

        #[arg(
            long = "weekday",
            help = "Repeat on the given weekday: 0=Sun, 1=Mon, ... 6=Sat"
        )]
        weekday: Option<i64>,
    },

    /// Replace the text of an event
    Edit {
        id: i64,

        body: String,
    },

    /// Delete an event by ID
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show a month: grid with event markers, then the event listing
    Month {
        /// Month to show (YYYY-MM); defaults to the current one
        period: Option<String>,

        #[arg(long = "json", help = "Print the month as JSON")]
        json: bool,
    },

    /// Run the HTTP server
    Serve {
        #[arg(long = "host", help = "Address to bind (default from config)")]
        host: Option<String>,

        #[arg(long = "port", help = "Port to listen on (default from config)")]
        port: Option<u16>,
    },
}
