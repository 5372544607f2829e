//! # Standard Catalog
//!
//! The registry of programme standards: validated at load, ordered by
//! identifier, searchable by text with AND-composed agency and status
//! filters.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use hcity_core::{AgencySlug, NotFoundError, StandardId, StandardStatus, ValidationError};

/// Derived per-standard display statuses, keyed by standard id.
///
/// Computed by the submission tracker; the catalog itself stores no
/// status. Standards absent from the map are treated as `not_submitted`.
pub type StatusMap = BTreeMap<StandardId, StandardStatus>;

/// A single programme standard.
///
/// `text` and `requirements` are immutable seed data. `assigned_agencies`
/// is mutated only through the agency index, which keeps it consistent
/// with the index's forward map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standard {
    /// Stable identifier within the programme catalog.
    pub id: StandardId,
    /// Description of the requirement.
    pub text: String,
    /// Evidence descriptions required to satisfy the standard, in order.
    pub requirements: Vec<String>,
    /// Agencies responsible for fulfilling the standard. May be empty
    /// (unassigned); a standard actively tracked for follow-up has at
    /// least one.
    pub assigned_agencies: BTreeSet<AgencySlug>,
}

/// Optional filters for [`StandardCatalog::search`]. Filters compose with
/// logical AND.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Restrict to standards assigned to this agency.
    pub agency: Option<AgencySlug>,
    /// Restrict to standards with this derived status.
    pub status: Option<StandardStatus>,
}

/// The registry of programme standards.
///
/// Iteration order is always ascending by id.
#[derive(Debug, Clone, Default)]
pub struct StandardCatalog {
    standards: BTreeMap<StandardId, Standard>,
}

impl StandardCatalog {
    /// Build a catalog from seed standards, validating each entry.
    ///
    /// Rejects duplicate identifiers, empty descriptions, and standards
    /// with no evidence requirements.
    pub fn from_standards(
        standards: impl IntoIterator<Item = Standard>,
    ) -> Result<Self, ValidationError> {
        let mut map = BTreeMap::new();
        for standard in standards {
            if standard.text.trim().is_empty() {
                return Err(ValidationError::EmptyText { id: standard.id });
            }
            if standard.requirements.iter().all(|r| r.trim().is_empty()) {
                return Err(ValidationError::NoRequirements { id: standard.id });
            }
            let id = standard.id;
            if map.insert(id, standard).is_some() {
                return Err(ValidationError::DuplicateStandardId { id });
            }
        }
        Ok(Self { standards: map })
    }

    /// Look up a standard by id.
    pub fn get(&self, id: StandardId) -> Result<&Standard, NotFoundError> {
        self.standards
            .get(&id)
            .ok_or(NotFoundError::Standard { id })
    }

    /// Mutable lookup, for the agency index only.
    pub(crate) fn get_mut(&mut self, id: StandardId) -> Result<&mut Standard, NotFoundError> {
        self.standards
            .get_mut(&id)
            .ok_or(NotFoundError::Standard { id })
    }

    /// Whether a standard with this id exists.
    pub fn contains(&self, id: StandardId) -> bool {
        self.standards.contains_key(&id)
    }

    /// Number of standards in the catalog.
    pub fn len(&self) -> usize {
        self.standards.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.standards.is_empty()
    }

    /// All standard ids, ascending.
    pub fn ids(&self) -> impl Iterator<Item = StandardId> + '_ {
        self.standards.keys().copied()
    }

    /// All standards, ascending by id.
    pub fn list(&self) -> impl Iterator<Item = &Standard> {
        self.standards.values()
    }

    /// Search the catalog.
    ///
    /// Case-insensitive substring match of `query` against each
    /// standard's description and each of its requirement entries. An
    /// empty (or whitespace) query matches every standard. Filters
    /// AND-compose on top of the text match; the status filter consults
    /// `statuses`, treating absent entries as
    /// [`StandardStatus::NotSubmitted`].
    ///
    /// Filtering is forgiving: an agency filter naming an agency that is
    /// assigned nowhere simply yields an empty result.
    pub fn search(
        &self,
        query: &str,
        filter: &SearchFilter,
        statuses: &StatusMap,
    ) -> Vec<&Standard> {
        let needle = query.trim().to_lowercase();
        self.standards
            .values()
            .filter(|s| needle.is_empty() || Self::matches_text(s, &needle))
            .filter(|s| match &filter.agency {
                Some(slug) => s.assigned_agencies.contains(slug),
                None => true,
            })
            .filter(|s| match filter.status {
                Some(wanted) => {
                    let derived = statuses
                        .get(&s.id)
                        .copied()
                        .unwrap_or(StandardStatus::NotSubmitted);
                    derived == wanted
                }
                None => true,
            })
            .collect()
    }

    fn matches_text(standard: &Standard, needle: &str) -> bool {
        standard.text.to_lowercase().contains(needle)
            || standard
                .requirements
                .iter()
                .any(|r| r.to_lowercase().contains(needle))
    }
}
