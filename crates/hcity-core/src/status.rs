//! # Status Vocabularies
//!
//! The submission lifecycle, the derived per-standard display status,
//! the evidence type enumeration, and the admin review verdict.
//!
//! The portal this stack replaced stored status strings at both the
//! standard and the submission level, with vocabularies that drifted
//! apart file by file. Here there is exactly one lifecycle
//! ([`SubmissionStatus`]) and the standard-level status
//! ([`StandardStatus`]) is derived from it — never stored.

use serde::{Deserialize, Serialize};

use crate::error::InvalidTypeError;

// ── Submission lifecycle ─────────────────────────────────────────────

/// The lifecycle state of an evidence submission.
///
/// ```text
/// Pending ──▶ PendingApproval ──▶ Approved  (terminal)
///  (draft)       (filed)     └──▶ Rejected  (terminal)
/// ```
///
/// A rejected submission stays in the record as history; superseding it
/// means filing a new submission for the same standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Saved as a draft; not yet filed for review.
    Pending,
    /// Filed and awaiting admin review.
    PendingApproval,
    /// Accepted by the reviewing admin. Terminal.
    Approved,
    /// Declined by the reviewing admin. Terminal.
    Rejected,
}

impl SubmissionStatus {
    /// Whether this status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// The wire-format string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::PendingApproval => "pending_approval",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parse a wire-format status string. Returns `None` for anything
    /// outside the vocabulary — callers decide whether that is an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "pending_approval" => Some(Self::PendingApproval),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Derived standard status ──────────────────────────────────────────

/// The display status of a standard, derived from its submissions.
///
/// `NotSubmitted` when no submission has ever been filed; otherwise the
/// status of the most recently filed submission. Saved-but-unfiled
/// drafts do not count as submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardStatus {
    /// No evidence has been filed for this standard.
    NotSubmitted,
    /// The latest filed evidence is awaiting review.
    PendingApproval,
    /// The latest filed evidence was approved.
    Approved,
    /// The latest filed evidence was rejected.
    Rejected,
}

impl StandardStatus {
    /// The wire-format string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotSubmitted => "not_submitted",
            Self::PendingApproval => "pending_approval",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parse a wire-format status string. Returns `None` for anything
    /// outside the vocabulary (filter parsing is forgiving, not erroring).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "not_submitted" => Some(Self::NotSubmitted),
            "pending_approval" => Some(Self::PendingApproval),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for StandardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Evidence type ────────────────────────────────────────────────────

/// The kind of evidence attached to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionType {
    /// Free-text narrative evidence.
    Text,
    /// Uploaded PDF document.
    Pdf,
    /// Photographic evidence.
    Photo,
    /// Video evidence.
    Video,
}

impl SubmissionType {
    /// The wire-format string for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Pdf => "pdf",
            Self::Photo => "photo",
            Self::Video => "video",
        }
    }

    /// Parse a wire-format type string.
    ///
    /// This is the boundary where out-of-vocabulary evidence types are
    /// rejected with a typed error.
    pub fn parse(s: &str) -> Result<Self, InvalidTypeError> {
        match s {
            "text" => Ok(Self::Text),
            "pdf" => Ok(Self::Pdf),
            "photo" => Ok(Self::Photo),
            "video" => Ok(Self::Video),
            other => Err(InvalidTypeError::UnknownSubmissionType {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Review verdict ───────────────────────────────────────────────────

/// The verdict an admin records when reviewing a filed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    /// Accept the evidence.
    Approved,
    /// Decline the evidence.
    Rejected,
}

impl ReviewDecision {
    /// The submission status this verdict resolves to.
    pub fn as_status(&self) -> SubmissionStatus {
        match self {
            Self::Approved => SubmissionStatus::Approved,
            Self::Rejected => SubmissionStatus::Rejected,
        }
    }
}

impl std::fmt::Display for ReviewDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_terminal_states() {
        assert!(!SubmissionStatus::Pending.is_terminal());
        assert!(!SubmissionStatus::PendingApproval.is_terminal());
        assert!(SubmissionStatus::Approved.is_terminal());
        assert!(SubmissionStatus::Rejected.is_terminal());
    }

    #[test]
    fn submission_status_roundtrip() {
        for status in [
            SubmissionStatus::Pending,
            SubmissionStatus::PendingApproval,
            SubmissionStatus::Approved,
            SubmissionStatus::Rejected,
        ] {
            assert_eq!(SubmissionStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(SubmissionStatus::parse("didnt_submit"), None);
    }

    #[test]
    fn standard_status_roundtrip() {
        for status in [
            StandardStatus::NotSubmitted,
            StandardStatus::PendingApproval,
            StandardStatus::Approved,
            StandardStatus::Rejected,
        ] {
            assert_eq!(StandardStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(StandardStatus::parse("PENDING"), None);
    }

    #[test]
    fn submission_type_parse_accepts_vocabulary() {
        assert_eq!(SubmissionType::parse("text").unwrap(), SubmissionType::Text);
        assert_eq!(SubmissionType::parse("pdf").unwrap(), SubmissionType::Pdf);
        assert_eq!(
            SubmissionType::parse("photo").unwrap(),
            SubmissionType::Photo
        );
        assert_eq!(
            SubmissionType::parse("video").unwrap(),
            SubmissionType::Video
        );
    }

    #[test]
    fn submission_type_parse_rejects_unknown() {
        let err = SubmissionType::parse("spreadsheet").unwrap_err();
        assert!(err.to_string().contains("spreadsheet"));
    }

    #[test]
    fn review_decision_maps_to_status() {
        assert_eq!(
            ReviewDecision::Approved.as_status(),
            SubmissionStatus::Approved
        );
        assert_eq!(
            ReviewDecision::Rejected.as_status(),
            SubmissionStatus::Rejected
        );
    }

    #[test]
    fn statuses_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::PendingApproval).unwrap(),
            "\"pending_approval\""
        );
        assert_eq!(
            serde_json::to_string(&StandardStatus::NotSubmitted).unwrap(),
            "\"not_submitted\""
        );
        assert_eq!(
            serde_json::to_string(&SubmissionType::Pdf).unwrap(),
            "\"pdf\""
        );
    }
}
