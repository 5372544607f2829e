//! # API Route Modules
//!
//! Route modules for the Healthy City API surface:
//!
//! - `standards` — catalog listing and search, standard detail,
//!   agency assignment toggles, per-standard submissions.
//! - `submissions` — submission detail, draft filing, review verdicts.
//! - `agencies` — the roster and the agency dashboard's assigned /
//!   unassigned views.
//! - `stats` — per-standard and programme-wide aggregate counts.

pub mod agencies;
pub mod standards;
pub mod stats;
pub mod submissions;
