use crate::errors::{AppError, AppResult};
use crate::store::{FieldKind, RawRecord, Record};
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

pub const MIN_EMOTION: i64 = 0;
pub const MAX_EMOTION: i64 = 5;

/// One completion of a habit.
///
/// `emotion` goes from 0 (no emotion or negative) to 5 (very positive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CheckOff {
    pub habit_title: String, // ⇔ Habit.title, by value
    pub emotion: u8,
    pub created: NaiveDate, // ⇔ "created" (TEXT "YYYY-MM-DD")
}

impl CheckOff {
    /// Build a check-off, rejecting emotions outside 0..=5.
    pub fn new(
        habit_title: impl Into<String>,
        emotion: i64,
        created: NaiveDate,
    ) -> AppResult<Self> {
        Ok(Self {
            habit_title: habit_title.into(),
            emotion: validate_emotion(emotion)?,
            created,
        })
    }
}

pub fn validate_emotion(emotion: i64) -> AppResult<u8> {
    if (MIN_EMOTION..=MAX_EMOTION).contains(&emotion) {
        Ok(emotion as u8)
    } else {
        Err(AppError::InvalidEmotion(emotion))
    }
}

/// Chronological order: date first, then title and emotion.
impl Ord for CheckOff {
    fn cmp(&self, other: &Self) -> Ordering {
        self.created
            .cmp(&other.created)
            .then_with(|| self.habit_title.cmp(&other.habit_title))
            .then_with(|| self.emotion.cmp(&other.emotion))
    }
}

impl PartialOrd for CheckOff {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Record for CheckOff {
    const KIND: &'static str = "check-off";

    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("habit_title", FieldKind::Text),
        ("emotion", FieldKind::Int),
        ("created", FieldKind::Date),
    ];

    fn from_raw(mut raw: RawRecord) -> AppResult<Self> {
        let habit_title = raw.take_text("habit_title")?;
        let emotion = raw.take_int("emotion")?;
        let created = raw.take_date("created")?;

        let emotion = validate_emotion(emotion).map_err(|_| {
            AppError::MalformedRecord(format!(
                "check-off '{habit_title}' on {created}: emotion {emotion} out of range"
            ))
        })?;

        Ok(Self {
            habit_title,
            emotion,
            created,
        })
    }
}
