//! # Triage Types
//!
//! The strict data model for the vitals triage pipeline.
//!
//! Raw upstream records are open string-keyed maps with no guarantees; the
//! types in this crate are the trusted forms that exist only on the far side
//! of normalization. A [`PatientVitals`] is produced when every clinical
//! field resolved and passed its plausibility bounds; a [`DataQualityIssue`]
//! is produced otherwise, and such a record never reaches scoring.
//!
//! Field names on the analysis types serialize in camelCase to match the
//! upstream wire format (`temperatureF`, `totalRisk`, `highRiskIds`).

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Plausible patient age in years, inclusive.
pub const AGE_RANGE: RangeInclusive<f64> = 0.0..=125.0;

/// Plausible body temperature in degrees Fahrenheit, inclusive.
pub const TEMPERATURE_F_RANGE: RangeInclusive<f64> = 80.0..=115.0;

/// Plausible systolic blood pressure in mmHg, inclusive.
pub const SYSTOLIC_RANGE: RangeInclusive<f64> = 50.0..=260.0;

/// Plausible diastolic blood pressure in mmHg, inclusive.
pub const DIASTOLIC_RANGE: RangeInclusive<f64> = 30.0..=160.0;

/// A fully validated set of patient vitals.
///
/// Every clinical field is present and within its plausibility range; the
/// normalizer is the only producer of this type. The `id` is opaque and
/// carried through from the raw record unchanged (the pipeline never
/// validates ids, only vitals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientVitals {
    pub id: String,
    /// Age in whole years, within [`AGE_RANGE`].
    pub age: i64,
    /// Body temperature in degrees Fahrenheit, within [`TEMPERATURE_F_RANGE`].
    pub temperature_f: f64,
    /// Systolic blood pressure in mmHg, within [`SYSTOLIC_RANGE`].
    pub systolic: i64,
    /// Diastolic blood pressure in mmHg, within [`DIASTOLIC_RANGE`].
    pub diastolic: i64,
}

/// A record excluded from scoring because one or more vitals could not be
/// resolved or fell outside plausible bounds.
///
/// `reasons` is non-empty and ordered by check: age, then temperature, then
/// blood pressure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataQualityIssue {
    pub id: String,
    pub reasons: Vec<String>,
}

/// The contribution of a single rubric category to a patient's risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Stable machine tag: `"age"`, `"temp"` or `"bp"`.
    pub key: String,
    /// Display name for the category.
    pub label: String,
    pub score: u32,
    /// Human-readable justifications for this exact score, never empty.
    pub reasons: Vec<String>,
}

/// The scored risk breakdown for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskResult {
    pub id: String,
    /// Sum of the three category scores.
    pub total_risk: u32,
    /// Exactly three entries, in fixed order: age, temperature, blood pressure.
    pub categories: Vec<CategoryScore>,
    /// True iff temperature is at or above the fever threshold (99.6°F),
    /// independent of the temperature category's point value.
    pub fever: bool,
}

/// The population-level result of analyzing one batch of raw records.
///
/// Each list preserves the input record order with excluded records removed.
/// Ids are never deduplicated; a patient may appear in both alert lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutput {
    /// Ids of scored patients with `total_risk >= 4`.
    pub high_risk_ids: Vec<String>,
    /// Ids of scored patients with the fever flag set.
    pub fever_ids: Vec<String>,
    /// Ids of records that failed normalization.
    pub data_quality_issue_ids: Vec<String>,
    /// Full issue records, for introspection.
    pub data_quality_issues: Vec<DataQualityIssue>,
    /// Full per-patient score detail, for introspection.
    pub scored: Vec<RiskResult>,
}
