//! Unified application error type.
//! All modules (store, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Malformed store file {path}: {reason}")]
    MalformedStore { path: String, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid periodicity: {0} (expected Daily or Weekly)")]
    InvalidPeriodicity(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("There is another habit with the title '{0}'")]
    DuplicateTitle(String),

    #[error("There is another habit with the description '{0}'")]
    DuplicateDescription(String),

    #[error("{field} must be between {min} and {max} characters long (got {len})")]
    InvalidLength {
        field: &'static str,
        min: usize,
        max: usize,
        len: usize,
    },

    #[error("Invalid emotion level {0}: choose a number between 0 and 5")]
    InvalidEmotion(i64),

    #[error("Invalid selection {index}: choose a number between 1 and {max}")]
    InvalidSelection { index: usize, max: usize },

    #[error("Habit '{0}' was already checked-off on {1}")]
    AlreadyCheckedOff(String, NaiveDate),

    #[error("Habit '{0}' is archived")]
    HabitArchived(String),

    #[error("No habit found with title '{0}'")]
    HabitNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for rejections caused by user input rather than storage or config.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidPeriodicity(_)
                | AppError::DuplicateTitle(_)
                | AppError::DuplicateDescription(_)
                | AppError::InvalidLength { .. }
                | AppError::InvalidEmotion(_)
                | AppError::InvalidSelection { .. }
                | AppError::AlreadyCheckedOff(..)
                | AppError::HabitArchived(_)
                | AppError::HabitNotFound(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
