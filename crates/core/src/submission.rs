//! The outbound assessment payload.
//!
//! The downstream assessment endpoint accepts exactly three id lists, in
//! snake_case, and rejects anything else. [`AssessmentSubmission`] is built
//! from an [`AnalysisOutput`]; [`AssessmentSubmission::from_json`] validates
//! an inbound copy of the payload the same way the endpoint would.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use triage_types::AnalysisOutput;

/// The three-list alert payload submitted downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    /// Ids of scored patients with a high-risk total.
    pub high_risk_patients: Vec<String>,
    /// Ids of scored patients with the fever flag set.
    pub fever_patients: Vec<String>,
    /// Ids of records excluded from scoring.
    pub data_quality_issues: Vec<String>,
}

/// Why an inbound submission payload was rejected.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission payload must be a JSON object")]
    NotAnObject,
    #[error("submission payload is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("submission field `{0}` must be an array")]
    NotAnArray(&'static str),
    #[error("submission field `{0}` must contain only strings")]
    NonStringEntry(&'static str),
}

impl AssessmentSubmission {
    /// Validates an inbound payload against the wire contract: a JSON
    /// object carrying all three fields, each an array of strings.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmissionError`] naming the first violated field.
    pub fn from_json(payload: &Value) -> Result<Self, SubmissionError> {
        let object = payload.as_object().ok_or(SubmissionError::NotAnObject)?;
        Ok(Self {
            high_risk_patients: id_list(object, "high_risk_patients")?,
            fever_patients: id_list(object, "fever_patients")?,
            data_quality_issues: id_list(object, "data_quality_issues")?,
        })
    }
}

impl From<&AnalysisOutput> for AssessmentSubmission {
    fn from(output: &AnalysisOutput) -> Self {
        Self {
            high_risk_patients: output.high_risk_ids.clone(),
            fever_patients: output.fever_ids.clone(),
            data_quality_issues: output.data_quality_issue_ids.clone(),
        }
    }
}

fn id_list(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<String>, SubmissionError> {
    let value = object
        .get(field)
        .ok_or(SubmissionError::MissingField(field))?;
    let items = value.as_array().ok_or(SubmissionError::NotAnArray(field))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_owned)
                .ok_or(SubmissionError::NonStringEntry(field))
        })
        .collect()
}
