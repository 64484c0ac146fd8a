//! Batch aggregation: one ordered pass over the raw records, routing each
//! into either the scored list or the data-quality list, then deriving the
//! population-level alert lists.

use crate::normalize::{normalize_record, Normalized};
use crate::raw::RawRecord;
use crate::score::score_patient;
use triage_types::AnalysisOutput;

/// A scored patient at or above this total lands on the high-risk list.
pub const HIGH_RISK_THRESHOLD: u32 = 4;

/// Analyzes one batch of raw patient records.
///
/// Records are processed in input order. A record that fails normalization
/// is excluded from scoring and from both alert lists, with no partial
/// credit. All output lists preserve input order with excluded records
/// removed; ids are never deduplicated, so a patient can appear on both the
/// high-risk and fever lists.
pub fn analyze(records: &[RawRecord]) -> AnalysisOutput {
    let mut data_quality_issues = Vec::new();
    let mut scored = Vec::new();

    for record in records {
        match normalize_record(record) {
            Normalized::Issue(issue) => data_quality_issues.push(issue),
            Normalized::Vitals(vitals) => scored.push(score_patient(&vitals)),
        }
    }

    let high_risk_ids = scored
        .iter()
        .filter(|result| result.total_risk >= HIGH_RISK_THRESHOLD)
        .map(|result| result.id.clone())
        .collect();

    let fever_ids = scored
        .iter()
        .filter(|result| result.fever)
        .map(|result| result.id.clone())
        .collect();

    let data_quality_issue_ids = data_quality_issues
        .iter()
        .map(|issue| issue.id.clone())
        .collect();

    tracing::debug!(
        records = records.len(),
        scored = scored.len(),
        issues = data_quality_issues.len(),
        "analyzed patient batch"
    );

    AnalysisOutput {
        high_risk_ids,
        fever_ids,
        data_quality_issue_ids,
        data_quality_issues,
        scored,
    }
}
