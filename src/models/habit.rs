use super::periodicity::Periodicity;
use crate::errors::{AppError, AppResult};
use crate::store::{FieldKind, RawRecord, Record};
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

/// A behavior the user wants to implement.
///
/// Habits are never changed in place: editing the description or archiving
/// produces a new value that replaces the old one in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Habit {
    pub title: String,
    pub description: String,
    pub periodicity: Periodicity,
    pub created: NaiveDate,      // ⇔ "created" (TEXT "YYYY-MM-DD")
    pub descr_update: NaiveDate, // ⇔ "descr_update" (TEXT "YYYY-MM-DD")
    pub active: bool,
}

impl Habit {
    /// New active habit registered on `today`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        periodicity: Periodicity,
        today: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            periodicity,
            created: today,
            descr_update: today,
            active: true,
        }
    }

    /// Replacement value carrying a new description, updated on `today`.
    pub fn with_description(&self, description: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            description: description.into(),
            descr_update: today,
            ..self.clone()
        }
    }

    /// Replacement value that is no longer tracked.
    pub fn archived(&self) -> Self {
        Self {
            active: false,
            ..self.clone()
        }
    }

    /// Whole periods elapsed since the description was last updated.
    pub fn tenure(&self, today: NaiveDate) -> i64 {
        (today - self.descr_update)
            .num_days()
            .div_euclid(self.periodicity.days())
    }
}

impl Ord for Habit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.periodicity
            .cmp(&other.periodicity)
            .then_with(|| self.title.cmp(&other.title))
            .then_with(|| self.description.cmp(&other.description))
            .then_with(|| self.created.cmp(&other.created))
            .then_with(|| self.descr_update.cmp(&other.descr_update))
            .then_with(|| self.active.cmp(&other.active))
    }
}

impl PartialOrd for Habit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Record for Habit {
    const KIND: &'static str = "habit";

    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("title", FieldKind::Text),
        ("description", FieldKind::Text),
        ("periodicity", FieldKind::Text),
        ("created", FieldKind::Date),
        ("descr_update", FieldKind::Date),
        ("active", FieldKind::Bool),
    ];

    fn from_raw(mut raw: RawRecord) -> AppResult<Self> {
        let periodicity = raw.take_text("periodicity")?;
        Ok(Self {
            title: raw.take_text("title")?,
            description: raw.take_text("description")?,
            periodicity: Periodicity::from_db_str(&periodicity)
                .ok_or(AppError::InvalidPeriodicity(periodicity))?,
            created: raw.take_date("created")?,
            descr_update: raw.take_date("descr_update")?,
            active: raw.take_bool("active")?,
        })
    }
}
