//! Normalization of raw records into the strict data model.
//!
//! One raw record in, exactly one of [`PatientVitals`] or
//! [`DataQualityIssue`] out. Checks run in a fixed order (age, temperature,
//! blood pressure) and every failing check is collected; a record with three
//! bad fields reports all three reasons, not just the first.

use crate::raw::{self, RawRecord};
use serde_json::Value;
use triage_types::{
    DataQualityIssue, PatientVitals, AGE_RANGE, DIASTOLIC_RANGE, SYSTOLIC_RANGE,
    TEMPERATURE_F_RANGE,
};

/// The outcome of normalizing one raw record.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// Every clinical field resolved and passed its plausibility bounds.
    Vitals(PatientVitals),
    /// At least one check failed; the record is excluded from scoring.
    Issue(DataQualityIssue),
}

/// Normalizes one raw record.
///
/// Field values are resolved through the alias tables in [`crate::raw`],
/// with a combined blood-pressure string (`"120/80"`) as fallback when the
/// split readings do not both resolve. The id is carried through as-is,
/// falling back to an empty string when no usable candidate exists; ids are
/// opaque to the pipeline and never validated.
pub fn normalize_record(record: &RawRecord) -> Normalized {
    let id = record
        .probe(raw::ID_FIELDS)
        .and_then(raw::as_id_string)
        .unwrap_or_default();

    let mut reasons: Vec<String> = Vec::new();

    let age = record.probe(raw::AGE_FIELDS).and_then(raw::as_finite_number);
    match age {
        None => reasons.push("missing/malformed age".to_string()),
        Some(value) if !AGE_RANGE.contains(&value) => {
            reasons.push("age out of range".to_string());
        }
        Some(_) => {}
    }

    let temperature_f = record
        .probe(raw::TEMPERATURE_FIELDS)
        .and_then(raw::as_finite_number);
    match temperature_f {
        None => reasons.push("missing/malformed temperatureF".to_string()),
        Some(value) if !TEMPERATURE_F_RANGE.contains(&value) => {
            reasons.push("temperature out of range".to_string());
        }
        Some(_) => {}
    }

    let mut systolic = record
        .probe(raw::SYSTOLIC_FIELDS)
        .and_then(raw::as_finite_number);
    let mut diastolic = record
        .probe(raw::DIASTOLIC_FIELDS)
        .and_then(raw::as_finite_number);

    // The combined string only fills readings the split fields left open.
    if systolic.is_none() || diastolic.is_none() {
        if let Some(Value::String(bp)) = record.probe(raw::BP_STRING_FIELDS) {
            if let Some((sys, dia)) = parse_bp_string(bp) {
                systolic = systolic.or(Some(sys));
                diastolic = diastolic.or(Some(dia));
            }
        }
    }

    match (systolic, diastolic) {
        // One reason for the pair: a lone reading is not a usable BP.
        (None, _) | (_, None) => reasons.push("missing/malformed BP".to_string()),
        (Some(sys), Some(dia)) => {
            if !SYSTOLIC_RANGE.contains(&sys) {
                reasons.push("systolic out of range".to_string());
            }
            if !DIASTOLIC_RANGE.contains(&dia) {
                reasons.push("diastolic out of range".to_string());
            }
        }
    }

    if let (Some(age), Some(temperature_f), Some(systolic), Some(diastolic), true) =
        (age, temperature_f, systolic, diastolic, reasons.is_empty())
    {
        return Normalized::Vitals(PatientVitals {
            id,
            age: age.round() as i64,
            temperature_f,
            systolic: systolic.round() as i64,
            diastolic: diastolic.round() as i64,
        });
    }

    Normalized::Issue(DataQualityIssue { id, reasons })
}

/// Parses a combined blood-pressure string into (systolic, diastolic).
///
/// Accepts `"120/80"`, `"120 - 80"`, `"120/80 mmHg"` and similar: two 2-3
/// digit integers separated by `/` or `-`, with optional surrounding
/// whitespace and an optional trailing case-insensitive `mmHg` marker.
/// Anything else yields `None` rather than an error.
fn parse_bp_string(bp: &str) -> Option<(f64, f64)> {
    let lowered = bp.trim().to_ascii_lowercase();
    let cleaned = lowered.strip_suffix("mmhg").unwrap_or(&lowered).trim();

    let (sys, dia) = cleaned.split_once(['/', '-'])?;
    Some((parse_bp_reading(sys)?, parse_bp_reading(dia)?))
}

fn parse_bp_reading(reading: &str) -> Option<f64> {
    let digits = reading.trim();
    if !(2..=3).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
