//! Rebuild canonical [`WorkRecord`]s from stored documents.
//!
//! Documents written by different app versions use different field names
//! for the same value. All aliases live in the tables below and are probed
//! in order; the first usable field wins.

use crate::models::duration::{DurationUnit, WorkDuration};
use crate::models::work_record::WorkRecord;
use serde_json::{Map, Value};
use tracing::debug;

/// A document as returned by a store, field names untouched.
pub type RawDocument = Map<String, Value>;

const ID_FIELDS: &[&str] = &["$id", "id"];
const DATE_FIELDS: &[&str] = &["date"];
const START_FIELDS: &[&str] = &["startTime", "start_time", "start"];
const END_FIELDS: &[&str] = &["endTime", "end_time", "end"];

/// Integer minutes first, then the hour aliases.
const DURATION_FIELDS: &[(&str, DurationUnit)] = &[
    ("total", DurationUnit::Minutes),
    ("hours", DurationUnit::Hours),
    ("total_hours", DurationUnit::Hours),
    ("totalHours", DurationUnit::Hours),
];

pub fn reconstruct(doc: &RawDocument) -> WorkRecord {
    let id = document_id(doc).unwrap_or_default();

    let total_hours = match document_duration(doc) {
        Some(d) => d.hours().max(0.0),
        None => {
            debug!(id = %id, "document has no duration field, using 0 hours");
            0.0
        }
    };

    WorkRecord {
        date: first_text(doc, DATE_FIELDS).unwrap_or_default(),
        start_time: first_text(doc, START_FIELDS).unwrap_or_default(),
        end_time: first_text(doc, END_FIELDS).unwrap_or_default(),
        total_hours,
        id,
    }
}

pub fn document_id(doc: &RawDocument) -> Option<String> {
    ID_FIELDS.iter().find_map(|f| match doc.get(*f) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

pub fn document_duration(doc: &RawDocument) -> Option<WorkDuration> {
    DURATION_FIELDS
        .iter()
        .find_map(|(field, unit)| doc.get(*field).and_then(Value::as_f64).map(|v| unit.tag(v)))
}

fn first_text(doc: &RawDocument, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|f| match doc.get(*f) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    })
}
