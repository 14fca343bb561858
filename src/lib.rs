//! rHabits library root.
//! Exposes the CLI parser, the high-level run() function, the record store,
//! the habit catalog, the check-off ledger and the streak calculators.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use chrono::NaiveDate;
use clap::Parser;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::{CheckOffLedger, HabitCatalog, TextLimits};
use crate::errors::{AppError, AppResult};

/// Everything a command needs: the effective configuration and the
/// reference date.
pub struct AppContext {
    pub cfg: Config,
    pub today: NaiveDate,
}

impl AppContext {
    pub fn new(cfg: Config, today: NaiveDate) -> Self {
        Self { cfg, today }
    }

    pub fn catalog(&self) -> HabitCatalog {
        HabitCatalog::new(
            self.cfg.habits_path(),
            self.today,
            TextLimits::from(&self.cfg),
        )
    }

    pub fn ledger(&self) -> CheckOffLedger {
        CheckOffLedger::new(self.cfg.check_offs_path())
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, ctx),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, ctx),
        Commands::List { .. } | Commands::Show { .. } => {
            cli::commands::list::handle(&cli.command, ctx)
        }
        Commands::Edit { .. } | Commands::Archive { .. } => {
            cli::commands::edit::handle(&cli.command, ctx)
        }
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, ctx),
        Commands::Check { .. } | Commands::History { .. } | Commands::Uncheck { .. } => {
            cli::commands::check::handle(&cli.command, ctx)
        }
        Commands::Dashboard { .. } => cli::commands::dashboard::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, then apply the data dir override
    let mut cfg = Config::load()?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    // 3️⃣ file logging (never fatal)
    if let Err(e) = logging::init_logging(&cfg.log_level, &cfg.data_path()) {
        ui::messages::warning(format!("Logging disabled: {e}"));
    }

    // 4️⃣ reference date: injected or local calendar date
    let today = match &cli.today {
        Some(s) => utils::date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => utils::date::today(),
    };

    let ctx = AppContext::new(cfg, today);
    let result = dispatch(&cli, &ctx);

    if let Err(e) = &result {
        if e.is_validation() {
            log::warn!("command rejected: {e}");
        } else {
            log::error!("command failed: {e}");
        }
    }
    result
}
