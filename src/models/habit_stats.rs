use crate::core::calculator::emotion::{EmotionSummary, Trend};
use std::fmt;

pub const NOT_AVAILABLE: &str = "N/D";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NotStarted,
    Streak,
    Broken,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "Not started",
            Status::Streak => "Streak",
            Status::Broken => "Broken",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dashboard figures of one habit, recomputed on every query.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitStats {
    pub tenure: i64,     // periods since the description was updated
    pub status: Status,
    pub streak: usize,   // live streak length
    pub hiatus: i64,     // missed periods while broken
    pub max_streak: usize,
    pub emotion: Option<EmotionSummary>,
}

impl HabitStats {
    pub fn average_emotion(&self) -> Option<f64> {
        self.emotion.map(|e| e.average)
    }

    pub fn trend(&self) -> Option<Trend> {
        self.emotion.map(|e| e.trend)
    }

    /// Average emotion with one decimal, or "N/D".
    pub fn average_label(&self) -> String {
        self.average_emotion()
            .map(|a| format!("{a:.1}"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn trend_label(&self) -> &'static str {
        self.trend().map_or(NOT_AVAILABLE, |t| t.as_str())
    }
}
