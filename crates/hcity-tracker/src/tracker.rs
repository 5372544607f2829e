//! # Submission Tracker
//!
//! Owns the submission store and enforces the lifecycle. Transitions are
//! validated against the current status; illegal ones are rejected with
//! structured errors and leave the record untouched. History — including
//! rejected submissions — is preserved, never overwritten.

use std::collections::BTreeMap;

use chrono::Utc;

use hcity_core::{
    AgencySlug, HcityError, InvalidTransitionError, NotFoundError, ReviewDecision, StandardId,
    SubmissionId, SubmissionStatus,
};
use hcity_registry::StandardCatalog;

use crate::submission::{ReviewRecord, Submission, SubmissionDraft};

/// The in-process submission store.
///
/// Keeps every submission keyed by id plus a per-standard index in
/// creation order, so per-standard queries do not scan the whole store.
#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    submissions: BTreeMap<SubmissionId, Submission>,
    by_standard: BTreeMap<StandardId, Vec<SubmissionId>>,
}

impl SubmissionTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// File evidence for a standard.
    ///
    /// The standard must exist in the catalog and the draft must carry a
    /// title. The stored submission starts at
    /// [`SubmissionStatus::PendingApproval`] with `submitted_at` set.
    pub fn submit(
        &mut self,
        catalog: &StandardCatalog,
        draft: SubmissionDraft,
    ) -> Result<&Submission, HcityError> {
        self.insert_new(catalog, draft, SubmissionStatus::PendingApproval)
    }

    /// Save evidence as a draft without filing it.
    ///
    /// Same validation as [`Self::submit`], but the stored submission
    /// starts at [`SubmissionStatus::Pending`] and does not count as
    /// filed for the standard's derived status.
    pub fn save_draft(
        &mut self,
        catalog: &StandardCatalog,
        draft: SubmissionDraft,
    ) -> Result<&Submission, HcityError> {
        self.insert_new(catalog, draft, SubmissionStatus::Pending)
    }

    fn insert_new(
        &mut self,
        catalog: &StandardCatalog,
        draft: SubmissionDraft,
        status: SubmissionStatus,
    ) -> Result<&Submission, HcityError> {
        if !catalog.contains(draft.standard_id) {
            return Err(NotFoundError::Standard {
                id: draft.standard_id,
            }
            .into());
        }
        draft.validate()?;

        let now = Utc::now();
        let id = SubmissionId::new();
        let submission = Submission {
            id,
            standard_id: draft.standard_id,
            submission_type: draft.submission_type,
            title: draft.title,
            description: draft.description,
            notes: None,
            status,
            submitted_by: draft.submitted_by,
            submitted_at: (status == SubmissionStatus::PendingApproval).then_some(now),
            files: draft.files,
            reviews: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        tracing::info!(
            submission = %id,
            standard = %submission.standard_id,
            agency = %submission.submitted_by,
            status = %status,
            "submission created"
        );

        self.by_standard
            .entry(submission.standard_id)
            .or_default()
            .push(id);
        Ok(self.submissions.entry(id).or_insert(submission))
    }

    /// File a saved draft for review (`Pending → PendingApproval`).
    pub fn file(&mut self, id: SubmissionId) -> Result<&Submission, HcityError> {
        let submission = self
            .submissions
            .get_mut(&id)
            .ok_or(NotFoundError::Submission { id })?;

        if submission.status != SubmissionStatus::Pending {
            return Err(InvalidTransitionError::AlreadyFiled {
                id,
                status: submission.status,
            }
            .into());
        }

        let now = Utc::now();
        submission.status = SubmissionStatus::PendingApproval;
        submission.submitted_at = Some(now);
        submission.updated_at = now;
        tracing::info!(submission = %id, "draft filed for review");
        Ok(submission)
    }

    /// Record an admin verdict on a filed submission.
    ///
    /// Legal only from [`SubmissionStatus::PendingApproval`]. A terminal
    /// submission fails with
    /// [`InvalidTransitionError::AlreadyDecided`] and an unfiled draft
    /// with [`InvalidTransitionError::NotAwaitingReview`]; neither
    /// changes the record.
    pub fn review(
        &mut self,
        id: SubmissionId,
        decision: ReviewDecision,
        notes: Option<String>,
    ) -> Result<&Submission, HcityError> {
        let submission = self
            .submissions
            .get_mut(&id)
            .ok_or(NotFoundError::Submission { id })?;

        match submission.status {
            SubmissionStatus::PendingApproval => {}
            status if status.is_terminal() => {
                return Err(InvalidTransitionError::AlreadyDecided { id, status }.into());
            }
            status => {
                return Err(InvalidTransitionError::NotAwaitingReview { id, status }.into());
            }
        }

        let now = Utc::now();
        let to = decision.as_status();
        submission.reviews.push(ReviewRecord {
            from: submission.status,
            to,
            decided_at: now,
            notes: notes.clone(),
        });
        submission.status = to;
        if notes.is_some() {
            submission.notes = notes;
        }
        submission.updated_at = now;
        tracing::info!(submission = %id, verdict = %decision, "submission reviewed");
        Ok(submission)
    }

    /// Look up a submission by id.
    pub fn get(&self, id: SubmissionId) -> Result<&Submission, NotFoundError> {
        self.submissions
            .get(&id)
            .ok_or(NotFoundError::Submission { id })
    }

    /// All submissions for a standard, oldest first. Empty for a
    /// standard with no submissions (or an unknown id — callers that
    /// need the distinction check the catalog first).
    pub fn submissions_for(&self, standard_id: StandardId) -> Vec<&Submission> {
        self.by_standard
            .get(&standard_id)
            .map(|ids| ids.iter().filter_map(|id| self.submissions.get(id)).collect())
            .unwrap_or_default()
    }

    /// Submissions for a standard restricted to one submitting agency —
    /// the per-agency view when multiple agencies share a standard.
    pub fn filter_by_agency(
        &self,
        standard_id: StandardId,
        agency: &AgencySlug,
    ) -> Vec<&Submission> {
        self.submissions_for(standard_id)
            .into_iter()
            .filter(|s| &s.submitted_by == agency)
            .collect()
    }

    /// The most recently filed submission for a standard, if any.
    /// Unfiled drafts are ignored.
    pub fn latest_filed(&self, standard_id: StandardId) -> Option<&Submission> {
        self.submissions_for(standard_id)
            .into_iter()
            .filter(|s| s.status != SubmissionStatus::Pending)
            .max_by_key(|s| s.submitted_at)
    }

    /// Whether any submission exists for a standard (drafts included).
    pub fn has_submissions(&self, standard_id: StandardId) -> bool {
        self.by_standard
            .get(&standard_id)
            .is_some_and(|ids| !ids.is_empty())
    }

    /// Total number of tracked submissions.
    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    /// Whether the tracker is empty.
    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    /// All submissions, ascending by id.
    pub fn iter(&self) -> impl Iterator<Item = &Submission> {
        self.submissions.values()
    }
}
