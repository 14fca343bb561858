use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data directory
///  - empty habit and check-off files
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rHabits…");

    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;

    log::info!("initialized data dir {}", cfg.data_path().display());
    success(format!(
        "rHabits initialized: habits in {}, check-offs in {}",
        cfg.habits_path().display(),
        cfg.check_offs_path().display()
    ));
    Ok(())
}
