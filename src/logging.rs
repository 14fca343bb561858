//! Application log bootstrap.
//!
//! The log lives next to the data files as `rhabits_rCURRENT.log`; once it
//! grows past the size limit it is renamed `rhabits_rNNNNN.log`. Starting
//! the logger never aborts a command: the caller only gets an error string
//! to show as a warning.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const LOG_FILE_BASENAME: &str = "rhabits";
pub const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
pub const MAX_LOG_FILES: usize = 3;

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Path of the live log file inside `log_dir`.
pub fn log_file(log_dir: &Path) -> PathBuf {
    log_dir.join(format!("{LOG_FILE_BASENAME}_rCURRENT.log"))
}

/// Start file logging at `level` (trace|debug|info|warn|error) in `log_dir`.
/// Calling it again after a successful start is a no-op.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let level = normalize_level(level)?;
    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME)
                .suppress_timestamp(),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .append()
        .write_mode(WriteMode::Direct)
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    log::debug!(
        "logger started: level={} dir={} version={}",
        level,
        log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    let _ = LOGGER.set(handle);
    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error|off"
        )),
    }
}
