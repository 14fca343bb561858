//! Streak detection over a chronological sequence of check-offs.

use crate::models::CheckOff;
use chrono::{Duration, NaiveDate};

/// Where the most recent check-off leaves the habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakInfo {
    /// Length of the segment ending at the last check-off, 0 when broken.
    pub current: usize,
    /// Longest segment anywhere in the history.
    pub max: usize,
    /// Whole periods since the last check-off, 0 while the streak is alive.
    pub hiatus: i64,
    pub alive: bool,
}

/// Lengths (in check-offs) of the maximal runs where consecutive events are
/// at most `period` apart. A lone check-off is a run of 1.
///
/// `history` must be sorted by date.
pub fn segments(history: &[CheckOff], period: Duration) -> Vec<usize> {
    if history.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut run = 1usize;

    for w in history.windows(2) {
        if w[1].created - w[0].created <= period {
            run += 1;
        } else {
            out.push(run);
            run = 1;
        }
    }
    out.push(run);

    out
}

/// Streak figures for a non-empty, date-sorted history. `None` when empty.
pub fn analyze_streak(
    history: &[CheckOff],
    period: Duration,
    today: NaiveDate,
) -> Option<StreakInfo> {
    let last = history.last()?;
    let runs = segments(history, period);
    let max = runs.iter().copied().max().unwrap_or(0);

    let since_last = today - last.created;

    if since_last < period {
        Some(StreakInfo {
            current: runs.last().copied().unwrap_or(1).max(1),
            max,
            hiatus: 0,
            alive: true,
        })
    } else {
        let periods = since_last.num_days() as f64 / period.num_days() as f64;
        Some(StreakInfo {
            current: 0,
            max,
            hiatus: periods.round() as i64,
            alive: false,
        })
    }
}
