use crate::errors::{AppError, AppResult};
use crate::models::{CheckOff, Habit};
use crate::store::{FileRecords, JsonStore};
use chrono::{Duration, NaiveDate};
use log::{info, warn};
use std::path::PathBuf;

/// History of check-offs for every habit, in append (chronological) order.
///
/// New check-offs take the append path of the store; removals rewrite the
/// file as a stream.
pub struct CheckOffLedger {
    store: JsonStore<CheckOff>,
}

impl CheckOffLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonStore::new(path),
        }
    }

    /// Stream every check-off in stored order.
    pub fn all(&self) -> AppResult<FileRecords<CheckOff>> {
        self.store.load()
    }

    /// Check-offs of `habit_title` in stored order; with `limit`, only the
    /// trailing `limit` ones.
    pub fn history(&self, habit_title: &str, limit: Option<usize>) -> AppResult<Vec<CheckOff>> {
        let mut out = Vec::new();
        for rec in self.store.load()? {
            let rec = rec?;
            if rec.habit_title == habit_title {
                out.push(rec);
            }
        }

        if let Some(n) = limit
            && out.len() > n
        {
            out.drain(..out.len() - n);
        }
        Ok(out)
    }

    /// Most recent check-off of `habit_title`.
    pub fn last(&self, habit_title: &str) -> AppResult<Option<CheckOff>> {
        let mut last = None;
        for rec in self.store.load()? {
            let rec = rec?;
            if rec.habit_title == habit_title {
                last = Some(rec);
            }
        }
        Ok(last)
    }

    /// Record that `habit` was done on `today`.
    ///
    /// Only the most recent check-off of the habit is compared: a habit can
    /// be checked off once per calendar day, whatever its periodicity.
    pub fn report(&self, habit: &Habit, emotion: i64, today: NaiveDate) -> AppResult<CheckOff> {
        if !habit.active {
            return Err(AppError::HabitArchived(habit.title.clone()));
        }

        let check_off = CheckOff::new(&habit.title, emotion, today)?;

        if let Some(last) = self.last(&habit.title)?
            && today - last.created < Duration::days(1)
        {
            warn!(
                "check-off rejected: '{}' already done on {}",
                habit.title, last.created
            );
            return Err(AppError::AlreadyCheckedOff(habit.title.clone(), last.created));
        }

        self.store.append_one(&check_off)?;
        info!(
            "check-off reported: '{}' on {} (emotion {})",
            check_off.habit_title, check_off.created, check_off.emotion
        );
        Ok(check_off)
    }

    /// Delete the `index`-th (1-based) record of `history(habit, window)`.
    /// Exactly one record is removed even if identical ones exist.
    pub fn delete(
        &self,
        habit: &Habit,
        index: usize,
        window: Option<usize>,
    ) -> AppResult<CheckOff> {
        let total = self.history(&habit.title, None)?.len();
        let shown = window.map_or(total, |n| n.min(total));

        if index < 1 || index > shown {
            return Err(AppError::InvalidSelection { index, max: shown });
        }

        // position among all of this habit's records
        let target = total - shown + (index - 1);
        let mut seen = 0usize;
        let mut deleted = None;

        self.store.retain(|rec| {
            if rec.habit_title != habit.title {
                return true;
            }
            let here = seen;
            seen += 1;
            if here == target {
                deleted = Some(rec.clone());
                false
            } else {
                true
            }
        })?;

        let deleted = deleted.ok_or_else(|| {
            AppError::Other(format!(
                "check-off #{index} of '{}' disappeared during delete",
                habit.title
            ))
        })?;

        info!(
            "check-off deleted: '{}' on {}",
            deleted.habit_title, deleted.created
        );
        Ok(deleted)
    }

    /// Remove every check-off of `habit_title`. Returns how many were removed.
    pub fn purge(&self, habit_title: &str) -> AppResult<usize> {
        let removed = self.store.retain(|rec| rec.habit_title != habit_title)?;
        info!("purged {removed} check-off(s) of '{habit_title}'");
        Ok(removed)
    }
}
