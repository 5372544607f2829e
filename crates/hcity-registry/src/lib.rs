#![deny(missing_docs)]

//! # hcity-registry — Standard Catalog and Agency Index
//!
//! Owns the fixed registry of the 80 Healthy City programme standards and
//! the many-to-many mapping between government agencies and the standards
//! they are responsible for.
//!
//! The catalog is append-only seed data: standards are created once at
//! initialization and never deleted. The only mutable aspect of a
//! standard is its set of assigned agencies, and the only way to mutate
//! that is through [`AgencyStandardsIndex::assign`] /
//! [`AgencyStandardsIndex::unassign`], which keep the index and the
//! per-standard agency sets exact inverses of each other.
//!
//! Per-standard review status is *not* stored here — it is derived from
//! the submission record (see `hcity-tracker`) and supplied to
//! [`StandardCatalog::search`] as a [`StatusMap`] when filtering by
//! status.

pub mod catalog;
pub mod index;
pub mod seed;

pub use catalog::{SearchFilter, Standard, StandardCatalog, StatusMap};
pub use index::{Agency, AgencyStandardsIndex, AssignOutcome, UnassignOutcome};
