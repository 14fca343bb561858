use crate::core::calculator::{emotion, streak};
use crate::core::ledger::CheckOffLedger;
use crate::errors::AppResult;
use crate::models::{CheckOff, Habit, HabitStats, Status};
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Statistics of `habit` from its check-off history as of `today`.
    ///
    /// `window` is how many of the latest check-offs feed the emotion
    /// average and trend.
    pub fn compute(
        habit: &Habit,
        history: &[CheckOff],
        window: usize,
        today: NaiveDate,
    ) -> HabitStats {
        let tenure = habit.tenure(today);

        let mut sorted = history.to_vec();
        sorted.sort_by_key(|c| c.created);

        let Some(info) = streak::analyze_streak(&sorted, habit.periodicity.period(), today) else {
            return HabitStats {
                tenure,
                status: Status::NotStarted,
                streak: 0,
                hiatus: 0,
                max_streak: 0,
                emotion: None,
            };
        };

        let recent = &sorted[sorted.len().saturating_sub(window)..];

        HabitStats {
            tenure,
            status: if info.alive {
                Status::Streak
            } else {
                Status::Broken
            },
            streak: info.current,
            hiatus: info.hiatus,
            max_streak: info.max,
            emotion: emotion::summarize(recent),
        }
    }

    /// Read the history of `habit` through the ledger and compute its stats.
    pub fn analyze(
        habit: &Habit,
        ledger: &CheckOffLedger,
        window: usize,
        today: NaiveDate,
    ) -> AppResult<HabitStats> {
        let history = ledger.history(&habit.title, None)?;
        Ok(Self::compute(habit, &history, window, today))
    }
}
