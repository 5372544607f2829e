//! # Derived Statistics
//!
//! Deterministic aggregation over the submission store: per-standard
//! counts and acceptance rate, the programme-wide summary, and the
//! derived per-standard display status consumed by catalog search and
//! the dashboards.

use serde::{Deserialize, Serialize};

use hcity_core::{NotFoundError, StandardId, StandardStatus, SubmissionStatus, SubmissionType};
use hcity_registry::{StandardCatalog, StatusMap};

use crate::tracker::SubmissionTracker;

/// Submission counts by evidence type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCounts {
    /// Free-text submissions.
    pub text: usize,
    /// PDF submissions.
    pub pdf: usize,
    /// Photo submissions.
    pub photo: usize,
    /// Video submissions.
    pub video: usize,
}

impl TypeCounts {
    /// Count one submission of the given type.
    pub fn increment(&mut self, kind: SubmissionType) {
        match kind {
            SubmissionType::Text => self.text += 1,
            SubmissionType::Pdf => self.pdf += 1,
            SubmissionType::Photo => self.photo += 1,
            SubmissionType::Video => self.video += 1,
        }
    }

    /// Total across all types.
    pub fn total(&self) -> usize {
        self.text + self.pdf + self.photo + self.video
    }
}

/// Standard counts by derived display status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Standards with no filed evidence.
    pub not_submitted: usize,
    /// Standards whose latest filed evidence awaits review.
    pub pending_approval: usize,
    /// Standards whose latest filed evidence was approved.
    pub approved: usize,
    /// Standards whose latest filed evidence was rejected.
    pub rejected: usize,
}

impl StatusCounts {
    /// Count one standard with the given derived status.
    pub fn increment(&mut self, status: StandardStatus) {
        match status {
            StandardStatus::NotSubmitted => self.not_submitted += 1,
            StandardStatus::PendingApproval => self.pending_approval += 1,
            StandardStatus::Approved => self.approved += 1,
            StandardStatus::Rejected => self.rejected += 1,
        }
    }

    /// Total across all statuses.
    pub fn total(&self) -> usize {
        self.not_submitted + self.pending_approval + self.approved + self.rejected
    }
}

/// Aggregate statistics for one standard's submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardStats {
    /// The standard these counts cover.
    pub standard_id: StandardId,
    /// All submissions ever recorded, drafts included.
    pub total: usize,
    /// Saved drafts not yet filed.
    pub pending: usize,
    /// Filed submissions awaiting review.
    pub pending_approval: usize,
    /// Approved submissions.
    pub approved: usize,
    /// Rejected submissions.
    pub rejected: usize,
    /// Counts by evidence type.
    pub by_type: TypeCounts,
    /// `approved / total`; `0.0` when there are no submissions.
    pub acceptance_rate: f64,
}

/// Programme-wide aggregate statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallStats {
    /// Catalog size.
    pub standards: usize,
    /// All submissions ever recorded, drafts included.
    pub submissions: usize,
    /// Standards by derived display status. Sums to `standards`.
    pub by_status: StatusCounts,
    /// Submissions by evidence type. Sums to `submissions`.
    pub by_type: TypeCounts,
    /// Standards that have never received any submission, draft or filed.
    pub didnt_submit: usize,
}

impl SubmissionTracker {
    /// Aggregate counts for one standard.
    ///
    /// Fails with a typed not-found result for a standard outside the
    /// catalog, so callers can distinguish "no submissions yet" from
    /// "no such standard".
    pub fn stats_for(
        &self,
        catalog: &StandardCatalog,
        standard_id: StandardId,
    ) -> Result<StandardStats, NotFoundError> {
        catalog.get(standard_id)?;

        let mut stats = StandardStats {
            standard_id,
            total: 0,
            pending: 0,
            pending_approval: 0,
            approved: 0,
            rejected: 0,
            by_type: TypeCounts::default(),
            acceptance_rate: 0.0,
        };
        for submission in self.submissions_for(standard_id) {
            stats.total += 1;
            stats.by_type.increment(submission.submission_type);
            match submission.status {
                SubmissionStatus::Pending => stats.pending += 1,
                SubmissionStatus::PendingApproval => stats.pending_approval += 1,
                SubmissionStatus::Approved => stats.approved += 1,
                SubmissionStatus::Rejected => stats.rejected += 1,
            }
        }
        if stats.total > 0 {
            stats.acceptance_rate = stats.approved as f64 / stats.total as f64;
        }
        Ok(stats)
    }

    /// Programme-wide aggregate counts.
    ///
    /// Derived statuses partition the catalog: the four status counts
    /// always sum to the catalog size.
    pub fn stats_overall(&self, catalog: &StandardCatalog) -> OverallStats {
        let mut by_status = StatusCounts::default();
        let mut didnt_submit = 0;
        for id in catalog.ids() {
            by_status.increment(self.derived_status(id));
            if !self.has_submissions(id) {
                didnt_submit += 1;
            }
        }

        let mut by_type = TypeCounts::default();
        for submission in self.iter() {
            by_type.increment(submission.submission_type);
        }

        OverallStats {
            standards: catalog.len(),
            submissions: self.len(),
            by_status,
            by_type,
            didnt_submit,
        }
    }

    /// The derived display status of a standard: `not_submitted` when no
    /// evidence has been filed, otherwise the status of the most
    /// recently filed submission. Unfiled drafts do not count as filed.
    pub fn derived_status(&self, standard_id: StandardId) -> StandardStatus {
        match self.latest_filed(standard_id).map(|s| s.status) {
            None => StandardStatus::NotSubmitted,
            Some(SubmissionStatus::Approved) => StandardStatus::Approved,
            Some(SubmissionStatus::Rejected) => StandardStatus::Rejected,
            Some(_) => StandardStatus::PendingApproval,
        }
    }

    /// Derived statuses for every standard in the catalog. Feeds
    /// [`StandardCatalog::search`] and the dashboard list views.
    pub fn status_map(&self, catalog: &StandardCatalog) -> StatusMap {
        catalog
            .ids()
            .map(|id| (id, self.derived_status(id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::SubmissionDraft;
    use hcity_core::{AgencySlug, HcityError, ReviewDecision};
    use hcity_registry::seed;

    fn sid(n: u16) -> StandardId {
        StandardId::new(n).unwrap()
    }

    fn draft(standard: u16, kind: SubmissionType, title: &str) -> SubmissionDraft {
        SubmissionDraft {
            standard_id: sid(standard),
            submission_type: kind,
            title: title.to_string(),
            description: None,
            files: vec![],
            submitted_by: AgencySlug::new("ministry-of-health").unwrap(),
        }
    }

    fn setup() -> (StandardCatalog, SubmissionTracker) {
        (seed::default_catalog().unwrap(), SubmissionTracker::new())
    }

    #[test]
    fn stats_for_empty_standard_is_all_zero() {
        let (catalog, tracker) = setup();
        let stats = tracker.stats_for(&catalog, sid(41)).unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.acceptance_rate, 0.0);
        assert_eq!(stats.by_type.total(), 0);
    }

    #[test]
    fn stats_for_unknown_standard_is_not_found() {
        let (catalog, tracker) = setup();
        assert!(tracker.stats_for(&catalog, sid(200)).is_err());
    }

    #[test]
    fn single_submission_counts_as_pending_approval() {
        let (catalog, mut tracker) = setup();
        tracker
            .submit(&catalog, draft(41, SubmissionType::Text, "Q1 report"))
            .unwrap();

        let stats = tracker.stats_for(&catalog, sid(41)).unwrap();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.pending_approval, 1);
        assert_eq!(stats.approved, 0);
        assert_eq!(stats.by_type.text, 1);
        assert_eq!(stats.acceptance_rate, 0.0);
    }

    #[test]
    fn approval_drives_acceptance_rate_to_one() {
        let (catalog, mut tracker) = setup();
        let id = tracker
            .submit(&catalog, draft(41, SubmissionType::Text, "Q1 report"))
            .unwrap()
            .id;
        tracker.review(id, ReviewDecision::Approved, None).unwrap();

        let stats = tracker.stats_for(&catalog, sid(41)).unwrap();
        assert_eq!(stats.approved, 1);
        assert_eq!(stats.pending_approval, 0);
        assert_eq!(stats.acceptance_rate, 1.0);
    }

    #[test]
    fn status_counts_always_sum_to_total() {
        let (catalog, mut tracker) = setup();
        let a = tracker
            .submit(&catalog, draft(41, SubmissionType::Text, "A"))
            .unwrap()
            .id;
        let b = tracker
            .submit(&catalog, draft(41, SubmissionType::Pdf, "B"))
            .unwrap()
            .id;
        tracker
            .submit(&catalog, draft(41, SubmissionType::Photo, "C"))
            .unwrap();
        tracker
            .save_draft(&catalog, draft(41, SubmissionType::Video, "D"))
            .unwrap();
        tracker.review(a, ReviewDecision::Approved, None).unwrap();
        tracker.review(b, ReviewDecision::Rejected, None).unwrap();

        let stats = tracker.stats_for(&catalog, sid(41)).unwrap();
        assert_eq!(stats.total, 4);
        assert_eq!(
            stats.pending + stats.pending_approval + stats.approved + stats.rejected,
            stats.total
        );
        assert_eq!(stats.by_type.total(), stats.total);
        assert!(stats.acceptance_rate >= 0.0 && stats.acceptance_rate <= 1.0);
        assert_eq!(stats.acceptance_rate, 0.25);
    }

    #[test]
    fn overall_statuses_partition_the_catalog() {
        let (catalog, mut tracker) = setup();
        let approved = tracker
            .submit(&catalog, draft(1, SubmissionType::Pdf, "Charter"))
            .unwrap()
            .id;
        tracker
            .review(approved, ReviewDecision::Approved, None)
            .unwrap();
        tracker
            .submit(&catalog, draft(2, SubmissionType::Text, "Profile"))
            .unwrap();

        let overall = tracker.stats_overall(&catalog);
        assert_eq!(overall.standards, 80);
        assert_eq!(overall.by_status.total(), 80);
        assert_eq!(overall.by_status.approved, 1);
        assert_eq!(overall.by_status.pending_approval, 1);
        assert_eq!(overall.by_status.not_submitted, 78);
        assert_eq!(overall.didnt_submit, 78);
        assert_eq!(overall.by_type.total(), overall.submissions);
    }

    #[test]
    fn draft_only_standard_is_not_submitted_but_counted_as_touched() {
        let (catalog, mut tracker) = setup();
        tracker
            .save_draft(&catalog, draft(9, SubmissionType::Text, "Draft"))
            .unwrap();

        let overall = tracker.stats_overall(&catalog);
        // Derived status treats unfiled drafts as nothing filed...
        assert_eq!(overall.by_status.not_submitted, 80);
        // ...but the standard has received a submission, so it is not in
        // the never-submitted count.
        assert_eq!(overall.didnt_submit, 79);
    }

    #[test]
    fn derived_status_follows_latest_filed_submission() {
        let (catalog, mut tracker) = setup();
        assert_eq!(tracker.derived_status(sid(41)), StandardStatus::NotSubmitted);

        let first = tracker
            .submit(&catalog, draft(41, SubmissionType::Text, "First"))
            .unwrap()
            .id;
        assert_eq!(
            tracker.derived_status(sid(41)),
            StandardStatus::PendingApproval
        );

        tracker.review(first, ReviewDecision::Rejected, None).unwrap();
        assert_eq!(tracker.derived_status(sid(41)), StandardStatus::Rejected);

        // A fresh filing supersedes the rejection for display purposes.
        tracker
            .submit(&catalog, draft(41, SubmissionType::Pdf, "Second"))
            .unwrap();
        assert_eq!(
            tracker.derived_status(sid(41)),
            StandardStatus::PendingApproval
        );
    }

    #[test]
    fn status_map_covers_every_catalog_standard() {
        let (catalog, tracker) = setup();
        let map = tracker.status_map(&catalog);
        assert_eq!(map.len(), catalog.len());
        assert!(map.values().all(|s| *s == StandardStatus::NotSubmitted));
    }

    #[test]
    fn status_map_feeds_search_status_filter() {
        let (catalog, mut tracker) = setup();
        let id = tracker
            .submit(&catalog, draft(41, SubmissionType::Text, "Q1 report"))
            .unwrap()
            .id;
        tracker.review(id, ReviewDecision::Approved, None).unwrap();

        let statuses = tracker.status_map(&catalog);
        let filter = hcity_registry::SearchFilter {
            agency: None,
            status: Some(StandardStatus::Approved),
        };
        let hits = catalog.search("vaccination", &filter, &statuses);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, sid(41));
    }

    #[test]
    fn review_error_types_surface_through_stats_flow() {
        let (catalog, mut tracker) = setup();
        let id = tracker
            .submit(&catalog, draft(41, SubmissionType::Text, "Q1"))
            .unwrap()
            .id;
        tracker.review(id, ReviewDecision::Approved, None).unwrap();
        let err = tracker.review(id, ReviewDecision::Rejected, None).unwrap_err();
        assert!(matches!(err, HcityError::InvalidTransition(_)));
        // Stats unchanged by the failed review.
        let stats = tracker.stats_for(&catalog, sid(41)).unwrap();
        assert_eq!(stats.approved, 1);
        assert_eq!(stats.rejected, 0);
    }
}
