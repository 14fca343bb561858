use crate::config::Config;
use crate::core::ledger::CheckOffLedger;
use crate::errors::{AppError, AppResult};
use crate::models::{Habit, Periodicity};
use crate::store::JsonStore;
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::path::PathBuf;

/// Length bounds for free-text habit fields, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLimits {
    pub max_title: usize,
    pub max_description: usize,
}

impl Default for TextLimits {
    fn default() -> Self {
        Self {
            max_title: 20,
            max_description: 45,
        }
    }
}

impl From<&Config> for TextLimits {
    fn from(cfg: &Config) -> Self {
        Self {
            max_title: cfg.max_title_len,
            max_description: cfg.max_description_len,
        }
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len < 1 || len > max {
        return Err(AppError::InvalidLength {
            field,
            min: 1,
            max,
            len,
        });
    }
    Ok(())
}

/// The registered habits, active and archived.
///
/// The collection is small, so every mutation loads the full list, replaces
/// values, re-sorts by (periodicity, title) and rewrites the file.
pub struct HabitCatalog {
    store: JsonStore<Habit>,
    today: NaiveDate,
    limits: TextLimits,
}

impl HabitCatalog {
    pub fn new(path: impl Into<PathBuf>, today: NaiveDate, limits: TextLimits) -> Self {
        Self {
            store: JsonStore::new(path),
            today,
            limits,
        }
    }

    /// Every habit in persisted order.
    pub fn all(&self) -> AppResult<Vec<Habit>> {
        self.store.load_all()
    }

    /// Active (`true`) or archived (`false`) habits in persisted order.
    pub fn list(&self, active: bool) -> AppResult<Vec<Habit>> {
        self.store
            .load()?
            .filter(|h| h.as_ref().map_or(true, |h| h.active == active))
            .collect()
    }

    /// Exact title lookup across active and archived habits.
    pub fn find(&self, title: &str) -> AppResult<Option<Habit>> {
        for habit in self.store.load()? {
            let habit = habit?;
            if habit.title == title {
                return Ok(Some(habit));
            }
        }
        Ok(None)
    }

    /// Title lookup falling back to a case-insensitive match.
    pub fn resolve(&self, title: &str) -> AppResult<Habit> {
        let all = self.all()?;
        let wanted = title.to_lowercase();
        all.iter()
            .find(|h| h.title == title)
            .or_else(|| all.iter().find(|h| h.title.to_lowercase() == wanted))
            .cloned()
            .ok_or_else(|| AppError::HabitNotFound(title.to_string()))
    }

    /// True when `title` or `description` is already used by any habit.
    pub fn has_duplicate(
        &self,
        title: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<bool> {
        Ok(self.find_duplicate(&self.all()?, title, description).is_some())
    }

    fn find_duplicate(
        &self,
        habits: &[Habit],
        title: Option<&str>,
        description: Option<&str>,
    ) -> Option<AppError> {
        if let Some(t) = title
            && habits.iter().any(|h| h.title == t)
        {
            return Some(AppError::DuplicateTitle(t.to_string()));
        }
        if let Some(d) = description
            && habits.iter().any(|h| h.description == d)
        {
            return Some(AppError::DuplicateDescription(d.to_string()));
        }
        None
    }

    /// Register a new habit created today.
    pub fn add(
        &self,
        title: &str,
        description: &str,
        periodicity: Periodicity,
    ) -> AppResult<Habit> {
        check_length("Title", title, self.limits.max_title)?;
        check_length("Description", description, self.limits.max_description)?;

        let mut habits = self.all()?;
        if let Some(e) = self.find_duplicate(&habits, Some(title), Some(description)) {
            warn!("add rejected: {e}");
            return Err(e);
        }

        let habit = Habit::new(title, description, periodicity, self.today);
        habits.push(habit.clone());
        self.persist(habits)?;

        info!("habit added: '{}' ({})", habit.title, habit.periodicity);
        Ok(habit)
    }

    /// Replace the description of `habit`; `descr_update` becomes today.
    pub fn edit_description(&self, habit: &Habit, description: &str) -> AppResult<Habit> {
        check_length("Description", description, self.limits.max_description)?;

        let habits = self.all()?;
        if let Some(e) = self.find_duplicate(&habits, None, Some(description)) {
            warn!("edit rejected: {e}");
            return Err(e);
        }

        let updated = habit.with_description(description, self.today);
        self.replace(habits, habit, updated.clone())?;

        info!("habit '{}' description updated", habit.title);
        Ok(updated)
    }

    /// Stop tracking `habit`; its history is kept.
    pub fn archive(&self, habit: &Habit) -> AppResult<Habit> {
        let updated = habit.archived();
        self.replace(self.all()?, habit, updated.clone())?;

        info!("habit '{}' archived", habit.title);
        Ok(updated)
    }

    /// Delete `habit` and, first, every check-off recorded for it.
    /// Returns the number of check-offs removed.
    pub fn delete(&self, habit: &Habit, ledger: &CheckOffLedger) -> AppResult<usize> {
        let mut habits = self.all()?;
        let pos = habits
            .iter()
            .position(|h| h == habit)
            .ok_or_else(|| AppError::HabitNotFound(habit.title.clone()))?;

        // check-offs go first: an interruption leaves orphans, never a
        // habit pointing at a truncated history
        let purged = ledger.purge(&habit.title)?;

        habits.remove(pos);
        self.persist(habits)?;

        info!(
            "habit '{}' deleted together with {} check-off(s)",
            habit.title, purged
        );
        Ok(purged)
    }

    fn replace(&self, mut habits: Vec<Habit>, old: &Habit, new: Habit) -> AppResult<()> {
        let pos = habits
            .iter()
            .position(|h| h == old)
            .ok_or_else(|| AppError::HabitNotFound(old.title.clone()))?;
        habits[pos] = new;
        self.persist(habits)
    }

    fn persist(&self, mut habits: Vec<Habit>) -> AppResult<()> {
        habits.sort();
        let count = self.store.save(habits)?;
        debug!("habit catalog rewritten with {count} habit(s)");
        Ok(())
    }
}
