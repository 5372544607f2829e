//! # Submission Records
//!
//! The evidence submission record, the creation payload, and the review
//! history entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hcity_core::{
    AgencySlug, StandardId, SubmissionId, SubmissionStatus, SubmissionType, ValidationError,
};

/// Opaque reference to an uploaded file.
///
/// Size and content-type validation happen at the upload boundary, not
/// here — the tracker only carries the reference through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileRef(String);

impl FileRef {
    /// Wrap an upload reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Record of one review verdict on a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Status before the verdict.
    pub from: SubmissionStatus,
    /// Status after the verdict.
    pub to: SubmissionStatus,
    /// When the verdict was recorded.
    pub decided_at: DateTime<Utc>,
    /// Reviewer notes attached to the verdict.
    pub notes: Option<String>,
}

/// An evidence submission against a programme standard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// Unique submission identifier.
    pub id: SubmissionId,
    /// The standard this evidence addresses.
    pub standard_id: StandardId,
    /// Kind of evidence.
    pub submission_type: SubmissionType,
    /// Short title. Never empty.
    pub title: String,
    /// Free-text description of the evidence.
    pub description: Option<String>,
    /// Latest reviewer notes.
    pub notes: Option<String>,
    /// Current lifecycle status.
    pub status: SubmissionStatus,
    /// The agency that created the submission.
    pub submitted_by: AgencySlug,
    /// When the submission was filed for review. `None` while a draft.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Attached file references, in upload order.
    pub files: Vec<FileRef>,
    /// Review verdicts, oldest first.
    pub reviews: Vec<ReviewRecord>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a submission.
#[derive(Debug, Clone)]
pub struct SubmissionDraft {
    /// The standard the evidence addresses.
    pub standard_id: StandardId,
    /// Kind of evidence.
    pub submission_type: SubmissionType,
    /// Short title. Required.
    pub title: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Attached file references.
    pub files: Vec<FileRef>,
    /// The agency creating the submission.
    pub submitted_by: AgencySlug,
}

impl SubmissionDraft {
    /// Validate creation rules. The only field-level rule is the
    /// required, non-empty title; everything else is optional.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }
}
