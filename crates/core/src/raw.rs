//! Open record handling: the untyped input shape, tolerant numeric
//! coercion, and the per-field alias probe tables.
//!
//! Upstream vendors disagree on field names, casing and nesting, so each
//! logical field is looked up through a fixed, priority-ordered table of
//! candidate paths. The tables are declarative so the precedence stays
//! auditable and testable on its own; nothing outside this module and the
//! normalizer ever touches the open shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single raw patient record as received from upstream: an open
/// string-keyed map with no schema guarantees. Values may be numbers,
/// numeric-looking strings, nested objects, nulls, or absent entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    /// Wraps a JSON value as a raw record. Non-object values become an
    /// empty record, which will fail every normalization check rather than
    /// disturb batch positions.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Looks up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Resolves a logical field through its alias table: the first candidate
    /// path that is present and non-null wins.
    pub fn probe(&self, paths: &[FieldPath]) -> Option<&Value> {
        paths
            .iter()
            .filter_map(|path| path.resolve(self))
            .find(|value| !value.is_null())
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// One candidate location for a logical field: a top-level key, optionally
/// nested one level under a container key such as `vitals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath {
    container: Option<&'static str>,
    key: &'static str,
}

impl FieldPath {
    const fn top(key: &'static str) -> Self {
        Self {
            container: None,
            key,
        }
    }

    const fn nested(container: &'static str, key: &'static str) -> Self {
        Self {
            container: Some(container),
            key,
        }
    }

    fn resolve<'a>(&self, record: &'a RawRecord) -> Option<&'a Value> {
        match self.container {
            Some(container) => record
                .get(container)
                .and_then(Value::as_object)
                .and_then(|object| object.get(self.key)),
            None => record.get(self.key),
        }
    }
}

/// Candidate paths for the patient identifier.
pub const ID_FIELDS: &[FieldPath] = &[
    FieldPath::top("id"),
    FieldPath::top("patientId"),
    FieldPath::top("patient_id"),
    FieldPath::top("_id"),
];

/// Candidate paths for age in years.
pub const AGE_FIELDS: &[FieldPath] = &[
    FieldPath::top("age"),
    FieldPath::top("Age"),
    FieldPath::nested("vitals", "age"),
];

/// Candidate paths for body temperature in °F.
pub const TEMPERATURE_FIELDS: &[FieldPath] = &[
    FieldPath::top("temperatureF"),
    FieldPath::top("temp"),
    FieldPath::top("Temp"),
    FieldPath::top("temperature"),
    FieldPath::top("temperature_f"),
    FieldPath::nested("vitals", "temperatureF"),
    FieldPath::nested("vitals", "temperature"),
];

/// Candidate paths for the split systolic reading.
pub const SYSTOLIC_FIELDS: &[FieldPath] = &[
    FieldPath::top("systolic"),
    FieldPath::top("bpSystolic"),
    FieldPath::top("bp_systolic"),
    FieldPath::nested("vitals", "systolic"),
];

/// Candidate paths for the split diastolic reading.
pub const DIASTOLIC_FIELDS: &[FieldPath] = &[
    FieldPath::top("diastolic"),
    FieldPath::top("bpDiastolic"),
    FieldPath::top("bp_diastolic"),
    FieldPath::nested("vitals", "diastolic"),
];

/// Candidate paths for a combined blood-pressure string such as `"120/80"`.
pub const BP_STRING_FIELDS: &[FieldPath] = &[
    FieldPath::top("bp"),
    FieldPath::top("BP"),
    FieldPath::top("bloodPressure"),
    FieldPath::top("blood_pressure"),
    FieldPath::nested("vitals", "bp"),
];

/// Coerces a JSON value to a finite number.
///
/// Accepts a finite JSON number, or a string that trims to a non-empty
/// finite number literal. Anything else (bool, object, array, null, empty
/// or garbled string, NaN/Infinity) is treated as absent.
pub fn as_finite_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|x| x.is_finite()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|x| x.is_finite())
        }
        _ => None,
    }
}

/// Coerces a JSON value to an identifier string.
///
/// Strings pass through; numbers are rendered as-is. Other shapes are not
/// usable as an id.
pub fn as_id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
