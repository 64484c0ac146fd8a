//! Unwrapping of the upstream paging envelope.
//!
//! The upstream source wraps each page of records in whichever envelope its
//! mood dictates: a bare array, `{patients: [...]}`, `{data: [...]}`,
//! `{items: [...]}` or `{result: {patients: [...]}}`. Callers that fetch
//! pages hand the parsed payload here and get back a flat batch for
//! [`crate::analyze`].

use crate::raw::RawRecord;
use serde_json::Value;

/// Wrapper keys probed on a top-level object, in order.
const WRAPPER_KEYS: &[&str] = &["patients", "data", "items"];

/// Extracts the flat record batch from an upstream payload.
///
/// A wrapper key holding a non-array does not match and the next shape is
/// tried. When no known shape matches, the batch is empty (logged at warn
/// level); an unrecognized envelope is an upstream quirk, not an error.
/// Non-object array elements are kept as empty records so they surface as
/// data-quality issues without disturbing batch positions.
pub fn extract_records(payload: &Value) -> Vec<RawRecord> {
    if let Some(items) = payload.as_array() {
        return to_records(items);
    }

    if let Some(object) = payload.as_object() {
        for key in WRAPPER_KEYS {
            if let Some(items) = object.get(*key).and_then(Value::as_array) {
                return to_records(items);
            }
        }
        if let Some(items) = object
            .get("result")
            .and_then(|result| result.get("patients"))
            .and_then(Value::as_array)
        {
            return to_records(items);
        }
    }

    tracing::warn!("unrecognized patient envelope shape, treating as empty batch");
    Vec::new()
}

fn to_records(items: &[Value]) -> Vec<RawRecord> {
    items
        .iter()
        .map(|item| RawRecord::from_value(item.clone()))
        .collect()
}
