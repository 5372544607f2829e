//! # Agency Standards Index
//!
//! The many-to-many mapping between agencies and the standards assigned
//! to them. The forward map (`agency -> standard ids`) and the
//! per-standard `assigned_agencies` sets are kept exact inverses: every
//! mutation updates both sides under one borrow.
//!
//! Assignment is an idempotent toggle. Re-assigning an existing pair or
//! unassigning a missing one reports the outcome but is never a hard
//! error — the portal's toggle-style admin UI retries freely.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use hcity_core::{AgencySlug, HcityError, NotFoundError, StandardId};

use crate::catalog::StandardCatalog;

/// An agency in the programme roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency {
    /// Stable exact-match key.
    pub slug: AgencySlug,
    /// Human-readable display name.
    pub name: String,
}

/// Outcome of an assignment. Both variants are success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignOutcome {
    /// The pair was newly linked.
    Assigned,
    /// The pair was already linked; nothing changed.
    AlreadyAssigned,
}

/// Outcome of an unassignment. Both variants are success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnassignOutcome {
    /// The pair was unlinked.
    Unassigned,
    /// The pair was not linked; nothing changed.
    NotAssigned,
}

#[derive(Debug, Clone)]
struct AgencyEntry {
    name: String,
    standards: std::collections::BTreeSet<StandardId>,
}

/// The agency-to-standards index.
#[derive(Debug, Clone, Default)]
pub struct AgencyStandardsIndex {
    agencies: BTreeMap<AgencySlug, AgencyEntry>,
}

impl AgencyStandardsIndex {
    /// Build the index from a catalog and an agency roster.
    ///
    /// The forward map is derived from each standard's
    /// `assigned_agencies`. Agencies named on a standard but absent from
    /// the roster are auto-registered with a display name derived from
    /// the slug, so the bidirectional invariant holds unconditionally
    /// after construction.
    pub fn build(catalog: &StandardCatalog, roster: impl IntoIterator<Item = Agency>) -> Self {
        let mut index = Self::default();
        for agency in roster {
            index.register(agency);
        }
        for standard in catalog.list() {
            for slug in &standard.assigned_agencies {
                let entry = index.entry_or_register(slug);
                entry.standards.insert(standard.id);
            }
        }
        index
    }

    /// Register an agency. Idempotent; an existing entry keeps its
    /// assignments and takes the new display name. Returns `true` if the
    /// agency was new.
    pub fn register(&mut self, agency: Agency) -> bool {
        match self.agencies.get_mut(&agency.slug) {
            Some(entry) => {
                entry.name = agency.name;
                false
            }
            None => {
                self.agencies.insert(
                    agency.slug,
                    AgencyEntry {
                        name: agency.name,
                        standards: Default::default(),
                    },
                );
                true
            }
        }
    }

    fn entry_or_register(&mut self, slug: &AgencySlug) -> &mut AgencyEntry {
        self.agencies.entry(slug.clone()).or_insert_with(|| {
            tracing::debug!(agency = %slug, "auto-registering agency named on a seed standard");
            AgencyEntry {
                name: display_name_from_slug(slug),
                standards: Default::default(),
            }
        })
    }

    /// Whether an agency is registered.
    pub fn contains_agency(&self, slug: &AgencySlug) -> bool {
        self.agencies.contains_key(slug)
    }

    /// The registered roster with per-agency assignment counts,
    /// ascending by slug.
    pub fn agencies(&self) -> impl Iterator<Item = (Agency, usize)> + '_ {
        self.agencies.iter().map(|(slug, entry)| {
            (
                Agency {
                    slug: slug.clone(),
                    name: entry.name.clone(),
                },
                entry.standards.len(),
            )
        })
    }

    /// Number of registered agencies.
    pub fn len(&self) -> usize {
        self.agencies.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.agencies.is_empty()
    }

    /// Standard ids assigned to an agency, ascending. An unknown agency
    /// yields an empty list — an agency with zero assignments is valid,
    /// not an error.
    pub fn standards_for(&self, slug: &AgencySlug) -> Vec<StandardId> {
        self.agencies
            .get(slug)
            .map(|entry| entry.standards.iter().copied().collect())
            .unwrap_or_default()
    }

    /// The complement of [`Self::standards_for`] against the full catalog.
    pub fn unassigned_for(&self, slug: &AgencySlug, catalog: &StandardCatalog) -> Vec<StandardId> {
        match self.agencies.get(slug) {
            Some(entry) => catalog
                .ids()
                .filter(|id| !entry.standards.contains(id))
                .collect(),
            None => catalog.ids().collect(),
        }
    }

    /// Link an agency to a standard, updating both the index and the
    /// standard's `assigned_agencies`.
    ///
    /// Idempotent: re-assigning an existing pair reports
    /// [`AssignOutcome::AlreadyAssigned`] and changes nothing. Unknown
    /// standard or agency fails with a typed not-found error.
    pub fn assign(
        &mut self,
        catalog: &mut StandardCatalog,
        id: StandardId,
        slug: &AgencySlug,
    ) -> Result<AssignOutcome, HcityError> {
        let standard = catalog.get_mut(id)?;
        let entry = self
            .agencies
            .get_mut(slug)
            .ok_or_else(|| NotFoundError::Agency { slug: slug.clone() })?;

        if !entry.standards.insert(id) {
            return Ok(AssignOutcome::AlreadyAssigned);
        }
        standard.assigned_agencies.insert(slug.clone());
        tracing::info!(standard = %id, agency = %slug, "assigned standard to agency");
        Ok(AssignOutcome::Assigned)
    }

    /// Unlink an agency from a standard; inverse of [`Self::assign`].
    ///
    /// Removing a pair that was never linked reports
    /// [`UnassignOutcome::NotAssigned`] without corrupting state.
    pub fn unassign(
        &mut self,
        catalog: &mut StandardCatalog,
        id: StandardId,
        slug: &AgencySlug,
    ) -> Result<UnassignOutcome, HcityError> {
        let standard = catalog.get_mut(id)?;
        let entry = self
            .agencies
            .get_mut(slug)
            .ok_or_else(|| NotFoundError::Agency { slug: slug.clone() })?;

        if !entry.standards.remove(&id) {
            return Ok(UnassignOutcome::NotAssigned);
        }
        standard.assigned_agencies.remove(slug);
        tracing::info!(standard = %id, agency = %slug, "unassigned standard from agency");
        Ok(UnassignOutcome::Unassigned)
    }

    /// Audit the bidirectional invariant against a catalog.
    ///
    /// Returns a description of the first violation found. Used by tests
    /// and debug assertions; under normal operation this never fails.
    pub fn verify_consistent(&self, catalog: &StandardCatalog) -> Result<(), String> {
        for (slug, entry) in &self.agencies {
            for id in &entry.standards {
                let standard = catalog
                    .get(*id)
                    .map_err(|_| format!("index references unknown standard {id}"))?;
                if !standard.assigned_agencies.contains(slug) {
                    return Err(format!(
                        "index links {slug} to standard {id} but the standard does not list it"
                    ));
                }
            }
        }
        for standard in catalog.list() {
            for slug in &standard.assigned_agencies {
                let listed = self
                    .agencies
                    .get(slug)
                    .map(|entry| entry.standards.contains(&standard.id))
                    .unwrap_or(false);
                if !listed {
                    return Err(format!(
                        "standard {} lists {slug} but the index does not link them",
                        standard.id
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Derive a display name from a slug: `"ministry-of-health"` becomes
/// `"Ministry Of Health"`.
fn display_name_from_slug(slug: &AgencySlug) -> String {
    slug.as_str()
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Standard;

    fn sid(n: u16) -> StandardId {
        StandardId::new(n).unwrap()
    }

    fn slug(s: &str) -> AgencySlug {
        AgencySlug::new(s).unwrap()
    }

    fn agency(s: &str, name: &str) -> Agency {
        Agency {
            slug: slug(s),
            name: name.to_string(),
        }
    }

    fn catalog_of(n: u16) -> StandardCatalog {
        StandardCatalog::from_standards((1..=n).map(|i| Standard {
            id: sid(i),
            text: format!("Requirement {i}"),
            requirements: vec![format!("Evidence for requirement {i}")],
            assigned_agencies: Default::default(),
        }))
        .unwrap()
    }

    fn health_roster() -> Vec<Agency> {
        vec![
            agency("ministry-of-health", "Ministry of Health"),
            agency("municipality", "Municipality"),
        ]
    }

    #[test]
    fn assign_then_lookup_round_trips() {
        let mut catalog = catalog_of(80);
        let mut index = AgencyStandardsIndex::build(&catalog, health_roster());
        let health = slug("ministry-of-health");

        let outcome = index.assign(&mut catalog, sid(41), &health).unwrap();
        assert_eq!(outcome, AssignOutcome::Assigned);
        assert_eq!(index.standards_for(&health), vec![sid(41)]);
        assert_eq!(index.unassigned_for(&health, &catalog).len(), 79);
        index.verify_consistent(&catalog).unwrap();
    }

    #[test]
    fn assign_is_idempotent() {
        let mut catalog = catalog_of(5);
        let mut index = AgencyStandardsIndex::build(&catalog, health_roster());
        let health = slug("ministry-of-health");

        index.assign(&mut catalog, sid(3), &health).unwrap();
        let second = index.assign(&mut catalog, sid(3), &health).unwrap();
        assert_eq!(second, AssignOutcome::AlreadyAssigned);
        assert_eq!(index.standards_for(&health), vec![sid(3)]);
        index.verify_consistent(&catalog).unwrap();
    }

    #[test]
    fn assign_then_unassign_restores_prior_state() {
        let mut catalog = catalog_of(5);
        let mut index = AgencyStandardsIndex::build(&catalog, health_roster());
        let health = slug("ministry-of-health");

        index.assign(&mut catalog, sid(2), &health).unwrap();
        let outcome = index.unassign(&mut catalog, sid(2), &health).unwrap();
        assert_eq!(outcome, UnassignOutcome::Unassigned);
        assert!(index.standards_for(&health).is_empty());
        assert!(catalog
            .get(sid(2))
            .unwrap()
            .assigned_agencies
            .is_empty());
        index.verify_consistent(&catalog).unwrap();
    }

    #[test]
    fn unassign_missing_pair_reports_not_assigned() {
        let mut catalog = catalog_of(5);
        let mut index = AgencyStandardsIndex::build(&catalog, health_roster());
        let outcome = index
            .unassign(&mut catalog, sid(1), &slug("municipality"))
            .unwrap();
        assert_eq!(outcome, UnassignOutcome::NotAssigned);
    }

    #[test]
    fn assign_unknown_standard_is_not_found() {
        let mut catalog = catalog_of(5);
        let mut index = AgencyStandardsIndex::build(&catalog, health_roster());
        let err = index
            .assign(&mut catalog, sid(99), &slug("municipality"))
            .unwrap_err();
        assert!(matches!(
            err,
            HcityError::NotFound(NotFoundError::Standard { .. })
        ));
    }

    #[test]
    fn assign_unknown_agency_is_not_found() {
        let mut catalog = catalog_of(5);
        let mut index = AgencyStandardsIndex::build(&catalog, health_roster());
        let err = index
            .assign(&mut catalog, sid(1), &slug("no-such-agency"))
            .unwrap_err();
        assert!(matches!(
            err,
            HcityError::NotFound(NotFoundError::Agency { .. })
        ));
    }

    #[test]
    fn unknown_agency_has_no_standards_but_full_complement() {
        let catalog = catalog_of(5);
        let index = AgencyStandardsIndex::build(&catalog, health_roster());
        let ghost = slug("ghost-agency");
        assert!(index.standards_for(&ghost).is_empty());
        assert_eq!(index.unassigned_for(&ghost, &catalog).len(), 5);
    }

    #[test]
    fn build_derives_forward_map_from_catalog() {
        let mut standards: Vec<Standard> = catalog_of(3).list().cloned().collect();
        standards[0]
            .assigned_agencies
            .insert(slug("ministry-of-health"));
        standards[2]
            .assigned_agencies
            .insert(slug("ministry-of-health"));
        let catalog = StandardCatalog::from_standards(standards).unwrap();

        let index = AgencyStandardsIndex::build(&catalog, health_roster());
        assert_eq!(
            index.standards_for(&slug("ministry-of-health")),
            vec![sid(1), sid(3)]
        );
        index.verify_consistent(&catalog).unwrap();
    }

    #[test]
    fn build_auto_registers_agencies_named_on_standards() {
        let mut standards: Vec<Standard> = catalog_of(1).list().cloned().collect();
        standards[0]
            .assigned_agencies
            .insert(slug("water-authority"));
        let catalog = StandardCatalog::from_standards(standards).unwrap();

        let index = AgencyStandardsIndex::build(&catalog, vec![]);
        assert!(index.contains_agency(&slug("water-authority")));
        let roster: Vec<_> = index.agencies().collect();
        assert_eq!(roster[0].0.name, "Water Authority");
        index.verify_consistent(&catalog).unwrap();
    }

    #[test]
    fn register_updates_display_name_keeps_assignments() {
        let mut catalog = catalog_of(2);
        let mut index = AgencyStandardsIndex::build(&catalog, health_roster());
        let health = slug("ministry-of-health");
        index.assign(&mut catalog, sid(1), &health).unwrap();

        let was_new = index.register(agency("ministry-of-health", "Ministry of Public Health"));
        assert!(!was_new);
        assert_eq!(index.standards_for(&health), vec![sid(1)]);
        let names: Vec<String> = index.agencies().map(|(a, _)| a.name).collect();
        assert!(names.contains(&"Ministry of Public Health".to_string()));
    }
}
