//! Typed decoding of raw JSON objects.
//!
//! Every entity kind declares its own field table, so a date-shaped string
//! is only turned into a date where the entity expects one. A habit titled
//! `2024-01-01` keeps its title as text.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// Expected type of one stored field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Int,
    Bool,
    Date,
}

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Bool(bool),
    Date(NaiveDate),
}

/// Field bag of a single stored object, already re-typed through the
/// entity's field table.
#[derive(Debug)]
pub struct RawRecord {
    kind: &'static str,
    fields: BTreeMap<&'static str, FieldValue>,
}

impl RawRecord {
    pub fn decode(
        value: Value,
        kind: &'static str,
        table: &[(&'static str, FieldKind)],
    ) -> AppResult<Self> {
        let mut object = match value {
            Value::Object(object) => object,
            other => {
                return Err(AppError::MalformedRecord(format!(
                    "{kind}: expected a JSON object, found {other}"
                )));
            }
        };

        let mut fields = BTreeMap::new();
        for &(name, field_kind) in table {
            let raw = object.remove(name).ok_or_else(|| {
                AppError::MalformedRecord(format!("{kind}: missing field '{name}'"))
            })?;
            fields.insert(name, decode_field(kind, name, field_kind, raw)?);
        }

        if !object.is_empty() {
            let extra: Vec<&String> = object.keys().collect();
            log::debug!("{kind}: ignoring unknown fields {extra:?}");
        }

        Ok(Self { kind, fields })
    }

    pub fn take_text(&mut self, name: &'static str) -> AppResult<String> {
        match self.fields.remove(name) {
            Some(FieldValue::Text(s)) => Ok(s),
            other => Err(self.mismatch(name, "text", other)),
        }
    }

    pub fn take_int(&mut self, name: &'static str) -> AppResult<i64> {
        match self.fields.remove(name) {
            Some(FieldValue::Int(n)) => Ok(n),
            other => Err(self.mismatch(name, "integer", other)),
        }
    }

    pub fn take_bool(&mut self, name: &'static str) -> AppResult<bool> {
        match self.fields.remove(name) {
            Some(FieldValue::Bool(b)) => Ok(b),
            other => Err(self.mismatch(name, "boolean", other)),
        }
    }

    pub fn take_date(&mut self, name: &'static str) -> AppResult<NaiveDate> {
        match self.fields.remove(name) {
            Some(FieldValue::Date(d)) => Ok(d),
            other => Err(self.mismatch(name, "date", other)),
        }
    }

    fn mismatch(&self, name: &str, expected: &str, found: Option<FieldValue>) -> AppError {
        AppError::MalformedRecord(format!(
            "{}: field '{}' should be {}, found {:?}",
            self.kind, name, expected, found
        ))
    }
}

fn decode_field(
    kind: &str,
    name: &str,
    field_kind: FieldKind,
    raw: Value,
) -> AppResult<FieldValue> {
    let bad = |raw: &Value| {
        AppError::MalformedRecord(format!(
            "{kind}: field '{name}' expected {field_kind:?}, found {raw}"
        ))
    };

    match (field_kind, &raw) {
        (FieldKind::Text, Value::String(s)) => Ok(FieldValue::Text(s.clone())),
        (FieldKind::Bool, Value::Bool(b)) => Ok(FieldValue::Bool(*b)),
        (FieldKind::Int, Value::Number(n)) => {
            n.as_i64().map(FieldValue::Int).ok_or_else(|| bad(&raw))
        }
        (FieldKind::Date, Value::String(s)) if DATE_PATTERN.is_match(s) => {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(FieldValue::Date)
                .map_err(|_| AppError::InvalidDate(s.clone()))
        }
        _ => Err(bad(&raw)),
    }
}

/// True when `s` has the stored date shape `YYYY-MM-DD`.
pub fn is_date_shaped(s: &str) -> bool {
    DATE_PATTERN.is_match(s)
}

/// An entity that can live in a [`JsonStore`](super::JsonStore).
///
/// Encoding goes through `Serialize`; decoding goes through the explicit
/// `FIELDS` table and `from_raw`.
pub trait Record: Serialize + Sized {
    /// Human readable entity name used in error messages and logs.
    const KIND: &'static str;

    const FIELDS: &'static [(&'static str, FieldKind)];

    fn from_raw(raw: RawRecord) -> AppResult<Self>;

    fn decode(value: Value) -> AppResult<Self> {
        Self::from_raw(RawRecord::decode(value, Self::KIND, Self::FIELDS)?)
    }

    fn encode(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
