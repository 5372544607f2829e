//! # Error Hierarchy
//!
//! Structured error types for the Healthy City stack, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Expected conditions — unknown identifiers, out-of-vocabulary evidence
//! types, illegal review transitions, invalid input — are returned as
//! typed results so that callers (ultimately the portal UI) can render
//! empty states and field-level messages distinctly from hard failures.

use thiserror::Error;

use crate::identity::{AgencySlug, StandardId, SubmissionId};
use crate::status::SubmissionStatus;

/// Top-level error type for the Healthy City stack.
#[derive(Error, Debug)]
pub enum HcityError {
    /// A referenced standard, submission, or agency does not exist.
    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),

    /// An evidence type outside the enumerated vocabulary.
    #[error("invalid submission type: {0}")]
    InvalidType(#[from] InvalidTypeError),

    /// An illegal submission status change.
    #[error("invalid transition: {0}")]
    InvalidTransition(#[from] InvalidTransitionError),

    /// Input failed a domain validation rule.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// A lookup referenced something that does not exist.
#[derive(Error, Debug)]
pub enum NotFoundError {
    /// No standard with this identifier is in the catalog.
    #[error("standard {id} is not in the catalog")]
    Standard {
        /// The identifier that missed.
        id: StandardId,
    },

    /// No submission with this identifier is tracked.
    #[error("submission {id} does not exist")]
    Submission {
        /// The identifier that missed.
        id: SubmissionId,
    },

    /// No agency with this slug is registered.
    #[error("agency \"{slug}\" is not registered")]
    Agency {
        /// The slug that missed.
        slug: AgencySlug,
    },
}

/// An evidence type outside the enumerated vocabulary.
#[derive(Error, Debug)]
pub enum InvalidTypeError {
    /// The submitted type string is not one of text, pdf, photo, video.
    #[error("unknown submission type \"{value}\" (expected text, pdf, photo, or video)")]
    UnknownSubmissionType {
        /// The string that failed to parse.
        value: String,
    },
}

/// An illegal submission lifecycle transition.
#[derive(Error, Debug)]
pub enum InvalidTransitionError {
    /// Review was attempted on a submission already approved or rejected.
    #[error("submission {id} is already {status} and cannot be reviewed again")]
    AlreadyDecided {
        /// The submission.
        id: SubmissionId,
        /// Its terminal status.
        status: SubmissionStatus,
    },

    /// Review was attempted on a submission that has not been filed.
    #[error("submission {id} is {status}, not awaiting review")]
    NotAwaitingReview {
        /// The submission.
        id: SubmissionId,
        /// Its current status.
        status: SubmissionStatus,
    },

    /// Filing was attempted on a submission that is not a saved draft.
    #[error("submission {id} is {status} and cannot be filed")]
    AlreadyFiled {
        /// The submission.
        id: SubmissionId,
        /// Its current status.
        status: SubmissionStatus,
    },
}

/// Input failed a domain validation rule.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A submission must carry a non-empty title.
    #[error("submission title must not be empty")]
    EmptyTitle,

    /// Standard identifiers are positive.
    #[error("invalid standard id: {value} (must be positive)")]
    InvalidStandardId {
        /// The rejected value.
        value: u16,
    },

    /// Agency slugs are lowercase alphanumerics and hyphens.
    #[error("invalid agency slug: \"{value}\" (expected lowercase alphanumerics and hyphens, 1-64 chars)")]
    InvalidAgencySlug {
        /// The rejected value.
        value: String,
    },

    /// A catalog standard must carry a non-empty description.
    #[error("standard {id} has an empty description")]
    EmptyText {
        /// The offending standard.
        id: StandardId,
    },

    /// A catalog standard must name at least one evidence requirement.
    #[error("standard {id} has no evidence requirements")]
    NoRequirements {
        /// The offending standard.
        id: StandardId,
    },

    /// Catalog identifiers are unique.
    #[error("standard {id} appears more than once in the catalog")]
    DuplicateStandardId {
        /// The duplicated identifier.
        id: StandardId,
    },
}
