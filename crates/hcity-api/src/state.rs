//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The portal store (catalog + index + tracker) is an explicit, injected
//! value — not a module-level singleton — so the whole API can be stood
//! up against any store in tests. A single `parking_lot::RwLock`
//! serializes competing writes (two admins reviewing the same
//! submission, assignment toggles racing on one standard). The lock is
//! synchronous and never held across `.await` points;
//! `parking_lot::RwLock` is non-poisonable, so a panicking writer does
//! not permanently corrupt the store.

use std::sync::Arc;

use parking_lot::RwLock;

use hcity_core::ValidationError;
use hcity_registry::{seed, AgencyStandardsIndex, StandardCatalog};
use hcity_tracker::SubmissionTracker;

/// The portal's entire in-process store.
#[derive(Debug)]
pub struct Portal {
    /// The 80-standard programme catalog.
    pub catalog: StandardCatalog,
    /// The agency-to-standards index, kept inverse-consistent with the
    /// catalog's per-standard agency sets.
    pub index: AgencyStandardsIndex,
    /// The evidence submission store.
    pub tracker: SubmissionTracker,
}

impl Portal {
    /// Build the portal from the programme seed data.
    pub fn seeded() -> Result<Self, ValidationError> {
        let catalog = seed::default_catalog()?;
        let index = AgencyStandardsIndex::build(&catalog, seed::default_agencies()?);
        Ok(Self {
            catalog,
            index,
            tracker: SubmissionTracker::new(),
        })
    }

    /// Build a portal around an arbitrary catalog and roster.
    pub fn with_catalog(
        catalog: StandardCatalog,
        roster: Vec<hcity_registry::Agency>,
    ) -> Self {
        let index = AgencyStandardsIndex::build(&catalog, roster);
        Self {
            catalog,
            index,
            tracker: SubmissionTracker::new(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly via the `Arc` around the portal store.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The injected portal store.
    pub portal: Arc<RwLock<Portal>>,
    /// Application configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create state seeded with the programme catalog and default roster.
    ///
    /// # Panics
    ///
    /// Panics if the embedded seed data fails validation, which the
    /// registry's own tests rule out. Prefer [`AppState::try_new`] where
    /// a `Result` is more convenient.
    pub fn new() -> Self {
        Self::try_new().expect("programme seed data failed validation")
    }

    /// Create seeded state, returning `Err` if seed validation fails.
    pub fn try_new() -> Result<Self, ValidationError> {
        Ok(Self::from_portal(Portal::seeded()?, AppConfig::default()))
    }

    /// Create state around an explicit portal store and configuration.
    pub fn from_portal(portal: Portal, config: AppConfig) -> Self {
        Self {
            portal: Arc::new(RwLock::new(portal)),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
