use crate::models::Periodicity;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rHabits
/// CLI application to track habits, check-offs and streaks
#[derive(Parser)]
#[command(
    name = "rhabits",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple habit tracker: register daily/weekly habits, check them off and follow your streaks",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a separate profile)
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Reference date used as "today" (YYYY-MM-DD, default: local date)
    #[arg(global = true, long = "today", value_name = "DATE")]
    pub today: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data files
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the application log
    Log {
        #[arg(long = "print", help = "Print the application log file")]
        print: bool,
    },

    /// Register a new habit
    Add {
        /// Short title, unique among all habits
        title: String,

        /// What to do, unique among all habits
        description: String,

        #[arg(long, short, value_enum, default_value = "daily")]
        periodicity: Periodicity,
    },

    /// List active (or archived) habits
    List {
        #[arg(long, help = "List archived habits instead of active ones")]
        archived: bool,
    },

    /// Show the details of one habit
    Show { title: String },

    /// Change the description of a habit
    Edit { title: String, description: String },

    /// Stop tracking a habit, keeping its history
    Archive {
        title: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Delete a habit together with its check-off history
    Del {
        title: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Check off a habit for today
    Check {
        title: String,

        #[arg(
            long,
            short,
            help = "Emotion after completing the habit: 0 (none or negative) to 5 (very positive)"
        )]
        emotion: i64,
    },

    /// Show the latest check-offs of a habit
    History {
        title: String,

        #[arg(long, short = 'n', help = "How many recent check-offs to show")]
        last: Option<usize>,
    },

    /// Delete a check-off reported by mistake
    Uncheck {
        title: String,

        /// Number of the check-off in `history` (1 = oldest shown)
        index: usize,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Streaks, missed periods and emotion trends
    Dashboard {
        #[arg(long, help = "Show archived habits instead of active ones")]
        archived: bool,
    },
}
