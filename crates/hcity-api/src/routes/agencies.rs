//! # Agency Dashboard API
//!
//! The agency roster and the per-agency standard views backing the
//! agency dashboard: "my assigned standards" and the complement.
//!
//! ## Endpoints
//!
//! - `GET /agencies` — roster with assignment counts
//! - `GET /agencies/:slug/standards` — standards assigned to an agency
//! - `GET /agencies/:slug/standards/unassigned` — the complement
//!
//! Agency reads are forgiving: an unknown or malformed slug yields an
//! empty assigned list (an agency with zero assignments is a valid
//! state, not an error).

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use hcity_core::{AgencySlug, StandardId};

use crate::routes::standards::StandardResponse;
use crate::state::AppState;

// ── Response DTOs ───────────────────────────────────────────────────

/// API representation of a roster entry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AgencyResponse {
    /// Stable exact-match key.
    pub slug: String,
    /// Human-readable display name.
    pub name: String,
    /// Number of standards currently assigned.
    pub assigned_standards: usize,
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the agencies router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/agencies", get(list_agencies))
        .route("/agencies/:slug/standards", get(agency_standards))
        .route(
            "/agencies/:slug/standards/unassigned",
            get(agency_unassigned_standards),
        )
}

// ── Handlers ────────────────────────────────────────────────────────

/// GET /agencies — The agency roster with assignment counts.
#[utoipa::path(
    get,
    path = "/agencies",
    responses(
        (status = 200, description = "Roster, ascending by slug", body = Vec<AgencyResponse>),
    ),
    tag = "agencies"
)]
pub(crate) async fn list_agencies(State(state): State<AppState>) -> Json<Vec<AgencyResponse>> {
    let portal = state.portal.read();
    Json(
        portal
            .index
            .agencies()
            .map(|(agency, assigned)| AgencyResponse {
                slug: agency.slug.to_string(),
                name: agency.name,
                assigned_standards: assigned,
            })
            .collect(),
    )
}

/// GET /agencies/:slug/standards — Standards assigned to an agency.
#[utoipa::path(
    get,
    path = "/agencies/{slug}/standards",
    params(("slug" = String, Path, description = "Agency slug")),
    responses(
        (status = 200, description = "Assigned standards, ascending by id", body = Vec<StandardResponse>),
    ),
    tag = "agencies"
)]
pub(crate) async fn agency_standards(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Json<Vec<StandardResponse>> {
    let slug = match AgencySlug::new(raw) {
        Ok(slug) => slug,
        Err(_) => return Json(Vec::new()),
    };
    let portal = state.portal.read();
    let ids = portal.index.standards_for(&slug);
    Json(standard_responses(&portal, ids))
}

/// GET /agencies/:slug/standards/unassigned — The complement view.
#[utoipa::path(
    get,
    path = "/agencies/{slug}/standards/unassigned",
    params(("slug" = String, Path, description = "Agency slug")),
    responses(
        (status = 200, description = "Unassigned standards, ascending by id", body = Vec<StandardResponse>),
    ),
    tag = "agencies"
)]
pub(crate) async fn agency_unassigned_standards(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Json<Vec<StandardResponse>> {
    let slug = match AgencySlug::new(raw) {
        Ok(slug) => slug,
        Err(_) => return Json(Vec::new()),
    };
    let portal = state.portal.read();
    let ids = portal.index.unassigned_for(&slug, &portal.catalog);
    Json(standard_responses(&portal, ids))
}

/// Resolve ids against the catalog with each standard's derived status.
fn standard_responses(
    portal: &crate::state::Portal,
    ids: Vec<StandardId>,
) -> Vec<StandardResponse> {
    ids.into_iter()
        .filter_map(|id| portal.catalog.get(id).ok())
        .map(|standard| {
            let status = portal.tracker.derived_status(standard.id);
            StandardResponse::from_parts(standard, status)
        })
        .collect()
}
