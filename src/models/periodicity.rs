use chrono::Duration;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Cadence of a habit. `Daily` sorts before `Weekly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ValueEnum)]
pub enum Periodicity {
    Daily,
    Weekly,
}

impl Periodicity {
    /// Convert enum → stored string
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Daily => "Daily",
            Periodicity::Weekly => "Weekly",
        }
    }

    /// Convert stored string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Daily" => Some(Periodicity::Daily),
            "Weekly" => Some(Periodicity::Weekly),
            _ => None,
        }
    }

    pub fn days(&self) -> i64 {
        match self {
            Periodicity::Daily => 1,
            Periodicity::Weekly => 7,
        }
    }

    pub fn period(&self) -> Duration {
        Duration::days(self.days())
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
