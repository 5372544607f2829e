#![deny(missing_docs)]

//! # hcity-core — Foundational Types for the Healthy City Standards Stack
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde`, `thiserror`,
//! and `uuid` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** A [`StandardId`] is not
//!    an [`AgencySlug`] is not a [`SubmissionId`]. Mixing them up is a
//!    compile error, not a runtime surprise.
//!
//! 2. **Agencies are keyed by slug, never by fuzzy name match.** The portal
//!    this stack replaced matched agencies by substring containment, which
//!    cross-matches agencies with overlapping names. [`AgencySlug`] enforces
//!    a stable, exact-match key; display names are a separate attribute.
//!
//! 3. **One status vocabulary per concern.** [`SubmissionStatus`] is the
//!    submission lifecycle; [`StandardStatus`] is the per-standard display
//!    status *derived* from submissions. Neither is stored redundantly.
//!
//! 4. **[`HcityError`] hierarchy.** Structured errors with `thiserror` — no
//!    `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod status;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{
    HcityError, InvalidTransitionError, InvalidTypeError, NotFoundError, ValidationError,
};
pub use identity::{AgencySlug, StandardId, SubmissionId};
pub use status::{ReviewDecision, StandardStatus, SubmissionStatus, SubmissionType};
