//! # Triage Core
//!
//! Pure analysis pipeline for messy patient vital-sign records.
//!
//! This crate contains the whole decision surface of the system:
//! - Normalization of open, untrusted records into validated vitals
//!   ([`normalize`])
//! - The fixed clinical risk rubric ([`score`])
//! - Batch aggregation into the three alert lists ([`analyze`])
//! - The upstream envelope and outbound submission wire shapes
//!   ([`envelope`], [`submission`])
//!
//! The pipeline is a pure function of its input batch: no I/O, no clocks,
//! no shared state. A record that cannot be trusted is routed to the
//! data-quality list as data, never surfaced as an error.
//!
//! **No transport concerns**: HTTP clients, retry policy, authentication and
//! rendering belong to the callers, which hand this crate an in-memory batch
//! and take back the analysis.

pub mod analyze;
pub mod envelope;
pub mod normalize;
pub mod raw;
pub mod score;
pub mod submission;

pub use analyze::{analyze, HIGH_RISK_THRESHOLD};
pub use normalize::{normalize_record, Normalized};
pub use raw::RawRecord;
pub use score::score_patient;
pub use submission::{AssessmentSubmission, SubmissionError};

pub use triage_types::{
    AnalysisOutput, CategoryScore, DataQualityIssue, PatientVitals, RiskResult,
};
