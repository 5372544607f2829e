#![deny(missing_docs)]

//! # hcity-tracker — Evidence Submission Lifecycle
//!
//! Tracks evidence submissions against programme standards: the
//! submission lifecycle from draft through filing to admin review, the
//! preserved review history, and the derived statistics the admin and
//! agency dashboards consume.
//!
//! ## Lifecycle
//!
//! ```text
//! Pending ──▶ PendingApproval ──▶ Approved  (terminal)
//!  (draft)       (filed)     └──▶ Rejected  (terminal)
//! ```
//!
//! Rejected submissions are never deleted; superseding one means filing
//! a new submission for the same standard. The per-standard display
//! status is derived from the most recently filed submission — standards
//! with no filed evidence display as `not_submitted`.
//!
//! All statistics are computed deterministically over the stored
//! submission set. Counts by derived status always partition the catalog.

pub mod stats;
pub mod submission;
pub mod tracker;

pub use stats::{OverallStats, StandardStats, StatusCounts, TypeCounts};
pub use submission::{FileRef, ReviewRecord, Submission, SubmissionDraft};
pub use tracker::SubmissionTracker;
