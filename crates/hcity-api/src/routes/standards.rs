//! # Standards Catalog API
//!
//! Catalog listing and search, standard detail with derived status,
//! agency assignment toggles, and per-standard submissions.
//!
//! ## Endpoints
//!
//! - `GET /standards` — list/search, optional `search`, `agency`,
//!   `status` query parameters
//! - `GET /standards/:id` — standard detail
//! - `POST /standards/:id/assignments` — assign an agency
//! - `DELETE /standards/:id/assignments` — unassign an agency
//! - `GET /standards/:id/submissions` — submissions, optional `agency`
//! - `POST /standards/:id/submissions` — create a submission
//!
//! Query-parameter filtering is forgiving: an out-of-vocabulary status
//! or a malformed agency slug yields an empty list, never an error, so
//! the portal's filter dropdowns stay safe against stale values.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use hcity_core::{AgencySlug, StandardId, StandardStatus, SubmissionType};
use hcity_registry::{SearchFilter, Standard};
use hcity_tracker::{FileRef, SubmissionDraft};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::routes::submissions::SubmissionResponse;
use crate::state::AppState;

// ── Request/Response DTOs ───────────────────────────────────────────

/// API representation of a standard, including its derived status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StandardResponse {
    /// Standard identifier (1-80).
    pub id: u16,
    /// Description of the requirement.
    pub text: String,
    /// Evidence requirements, in order.
    pub requirements: Vec<String>,
    /// Slugs of responsible agencies, ascending.
    pub assigned_agencies: Vec<String>,
    /// Display status derived from the submission record.
    #[schema(value_type = String)]
    pub status: StandardStatus,
}

impl StandardResponse {
    pub(crate) fn from_parts(standard: &Standard, status: StandardStatus) -> Self {
        Self {
            id: standard.id.get(),
            text: standard.text.clone(),
            requirements: standard.requirements.clone(),
            assigned_agencies: standard
                .assigned_agencies
                .iter()
                .map(|slug| slug.to_string())
                .collect(),
            status,
        }
    }
}

/// Query parameters for the catalog listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListStandardsQuery {
    /// Case-insensitive substring over description and requirements.
    #[serde(default)]
    pub search: Option<String>,
    /// Restrict to standards assigned to this agency slug.
    #[serde(default)]
    pub agency: Option<String>,
    /// Restrict to standards with this derived status.
    #[serde(default)]
    pub status: Option<String>,
}

/// Request to assign or unassign an agency.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignmentRequest {
    /// Slug of the agency.
    pub agency: String,
}

impl Validate for AssignmentRequest {
    fn validate(&self) -> Result<(), String> {
        if self.agency.trim().is_empty() {
            return Err("agency must not be empty".to_string());
        }
        Ok(())
    }
}

/// Result of an assignment toggle. Repeats are reported, not rejected.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssignmentResponse {
    /// The standard.
    pub standard_id: u16,
    /// The agency slug.
    pub agency: String,
    /// `assigned`, `already_assigned`, `unassigned`, or `not_assigned`.
    pub outcome: String,
}

/// Optional agency restriction for the submissions listing.
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionsQuery {
    /// Restrict to submissions from this agency slug.
    #[serde(default)]
    pub agency: Option<String>,
}

/// Request to create a submission for a standard.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSubmissionRequest {
    /// Evidence type: `text`, `pdf`, `photo`, or `video`.
    pub submission_type: String,
    /// Short title. Required.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Attached file references.
    #[serde(default)]
    pub files: Vec<String>,
    /// Slug of the submitting agency.
    pub submitted_by: String,
    /// Save as an unfiled draft instead of filing for review.
    #[serde(default)]
    pub draft: bool,
}

impl Validate for CreateSubmissionRequest {
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.submitted_by.trim().is_empty() {
            return Err("submitted_by must not be empty".to_string());
        }
        Ok(())
    }
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the standards router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/standards", get(list_standards))
        .route("/standards/:id", get(get_standard))
        .route(
            "/standards/:id/assignments",
            axum::routing::post(assign_agency).delete(unassign_agency),
        )
        .route(
            "/standards/:id/submissions",
            get(list_submissions).post(create_submission),
        )
}

/// Resolve a path parameter to a catalog id, mapping malformed values
/// to the same 404 an absent standard produces.
fn standard_id_from_path(raw: u16) -> Result<StandardId, AppError> {
    StandardId::new(raw)
        .map_err(|_| AppError::NotFound(format!("standard {raw} is not in the catalog")))
}

// ── Handlers ────────────────────────────────────────────────────────

/// GET /standards — List the catalog, optionally filtered.
#[utoipa::path(
    get,
    path = "/standards",
    params(
        ("search" = Option<String>, Query, description = "Substring match over text and requirements"),
        ("agency" = Option<String>, Query, description = "Restrict to an agency slug"),
        ("status" = Option<String>, Query, description = "Restrict to a derived status"),
    ),
    responses(
        (status = 200, description = "Matching standards, ascending by id", body = Vec<StandardResponse>),
    ),
    tag = "standards"
)]
pub(crate) async fn list_standards(
    State(state): State<AppState>,
    Query(query): Query<ListStandardsQuery>,
) -> Json<Vec<StandardResponse>> {
    let mut filter = SearchFilter::default();

    // Forgiving filter parsing: out-of-vocabulary values yield an empty
    // result set rather than an error.
    if let Some(raw) = query.status.as_deref() {
        match StandardStatus::parse(raw) {
            Some(status) => filter.status = Some(status),
            None => return Json(Vec::new()),
        }
    }
    if let Some(raw) = query.agency.as_deref() {
        match AgencySlug::new(raw) {
            Ok(slug) => filter.agency = Some(slug),
            Err(_) => return Json(Vec::new()),
        }
    }

    let portal = state.portal.read();
    let statuses = portal.tracker.status_map(&portal.catalog);
    let hits = portal
        .catalog
        .search(query.search.as_deref().unwrap_or(""), &filter, &statuses);

    Json(
        hits.into_iter()
            .map(|standard| {
                let status = statuses
                    .get(&standard.id)
                    .copied()
                    .unwrap_or(StandardStatus::NotSubmitted);
                StandardResponse::from_parts(standard, status)
            })
            .collect(),
    )
}

/// GET /standards/:id — Standard detail with derived status.
#[utoipa::path(
    get,
    path = "/standards/{id}",
    params(("id" = u16, Path, description = "Standard ID")),
    responses(
        (status = 200, description = "Standard found", body = StandardResponse),
        (status = 404, description = "Standard not found", body = crate::error::ErrorBody),
    ),
    tag = "standards"
)]
pub(crate) async fn get_standard(
    State(state): State<AppState>,
    Path(raw): Path<u16>,
) -> Result<Json<StandardResponse>, AppError> {
    let id = standard_id_from_path(raw)?;
    let portal = state.portal.read();
    let standard = portal.catalog.get(id)?;
    let status = portal.tracker.derived_status(id);
    Ok(Json(StandardResponse::from_parts(standard, status)))
}

/// POST /standards/:id/assignments — Assign an agency to a standard.
///
/// Idempotent: re-assigning an existing pair succeeds with outcome
/// `already_assigned`.
#[utoipa::path(
    post,
    path = "/standards/{id}/assignments",
    params(("id" = u16, Path, description = "Standard ID")),
    request_body = AssignmentRequest,
    responses(
        (status = 200, description = "Assignment recorded", body = AssignmentResponse),
        (status = 404, description = "Standard or agency not found", body = crate::error::ErrorBody),
        (status = 422, description = "Malformed agency slug", body = crate::error::ErrorBody),
    ),
    tag = "standards"
)]
pub(crate) async fn assign_agency(
    State(state): State<AppState>,
    Path(raw): Path<u16>,
    body: Result<Json<AssignmentRequest>, JsonRejection>,
) -> Result<Json<AssignmentResponse>, AppError> {
    let req = extract_validated_json(body)?;
    let id = standard_id_from_path(raw)?;
    let slug =
        AgencySlug::new(req.agency.as_str()).map_err(|e| AppError::Validation(e.to_string()))?;

    let mut portal = state.portal.write();
    let portal = &mut *portal;
    let outcome = portal.index.assign(&mut portal.catalog, id, &slug)?;

    Ok(Json(AssignmentResponse {
        standard_id: raw,
        agency: slug.to_string(),
        outcome: match outcome {
            hcity_registry::AssignOutcome::Assigned => "assigned".to_string(),
            hcity_registry::AssignOutcome::AlreadyAssigned => "already_assigned".to_string(),
        },
    }))
}

/// DELETE /standards/:id/assignments — Unassign an agency.
///
/// Removing a pair that was never linked succeeds with outcome
/// `not_assigned`.
#[utoipa::path(
    delete,
    path = "/standards/{id}/assignments",
    params(("id" = u16, Path, description = "Standard ID")),
    request_body = AssignmentRequest,
    responses(
        (status = 200, description = "Unassignment recorded", body = AssignmentResponse),
        (status = 404, description = "Standard or agency not found", body = crate::error::ErrorBody),
        (status = 422, description = "Malformed agency slug", body = crate::error::ErrorBody),
    ),
    tag = "standards"
)]
pub(crate) async fn unassign_agency(
    State(state): State<AppState>,
    Path(raw): Path<u16>,
    body: Result<Json<AssignmentRequest>, JsonRejection>,
) -> Result<Json<AssignmentResponse>, AppError> {
    let req = extract_validated_json(body)?;
    let id = standard_id_from_path(raw)?;
    let slug =
        AgencySlug::new(req.agency.as_str()).map_err(|e| AppError::Validation(e.to_string()))?;

    let mut portal = state.portal.write();
    let portal = &mut *portal;
    let outcome = portal.index.unassign(&mut portal.catalog, id, &slug)?;

    Ok(Json(AssignmentResponse {
        standard_id: raw,
        agency: slug.to_string(),
        outcome: match outcome {
            hcity_registry::UnassignOutcome::Unassigned => "unassigned".to_string(),
            hcity_registry::UnassignOutcome::NotAssigned => "not_assigned".to_string(),
        },
    }))
}

/// GET /standards/:id/submissions — Submissions for a standard.
///
/// Chronological, rejected history included. The optional `agency`
/// parameter restricts to one submitting agency; a malformed slug yields
/// an empty list.
#[utoipa::path(
    get,
    path = "/standards/{id}/submissions",
    params(
        ("id" = u16, Path, description = "Standard ID"),
        ("agency" = Option<String>, Query, description = "Restrict to an agency slug"),
    ),
    responses(
        (status = 200, description = "Submissions, oldest first", body = Vec<SubmissionResponse>),
        (status = 404, description = "Standard not found", body = crate::error::ErrorBody),
    ),
    tag = "standards"
)]
pub(crate) async fn list_submissions(
    State(state): State<AppState>,
    Path(raw): Path<u16>,
    Query(query): Query<SubmissionsQuery>,
) -> Result<Json<Vec<SubmissionResponse>>, AppError> {
    let id = standard_id_from_path(raw)?;
    let portal = state.portal.read();
    portal.catalog.get(id)?;

    let submissions = match query.agency.as_deref() {
        None => portal.tracker.submissions_for(id),
        Some(raw_slug) => match AgencySlug::new(raw_slug) {
            Ok(slug) => portal.tracker.filter_by_agency(id, &slug),
            Err(_) => Vec::new(),
        },
    };

    Ok(Json(
        submissions.into_iter().map(SubmissionResponse::from).collect(),
    ))
}

/// POST /standards/:id/submissions — Create a submission.
///
/// Files the evidence for review unless `draft` is set, in which case it
/// is saved without filing.
#[utoipa::path(
    post,
    path = "/standards/{id}/submissions",
    params(("id" = u16, Path, description = "Standard ID")),
    request_body = CreateSubmissionRequest,
    responses(
        (status = 201, description = "Submission created", body = SubmissionResponse),
        (status = 404, description = "Standard not found", body = crate::error::ErrorBody),
        (status = 422, description = "Validation error", body = crate::error::ErrorBody),
    ),
    tag = "standards"
)]
pub(crate) async fn create_submission(
    State(state): State<AppState>,
    Path(raw): Path<u16>,
    body: Result<Json<CreateSubmissionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmissionResponse>), AppError> {
    let req = extract_validated_json(body)?;
    let id = standard_id_from_path(raw)?;
    let submission_type = SubmissionType::parse(&req.submission_type)
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let submitted_by = AgencySlug::new(req.submitted_by.as_str())
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let draft = SubmissionDraft {
        standard_id: id,
        submission_type,
        title: req.title,
        description: req.description,
        files: req.files.into_iter().map(FileRef::new).collect(),
        submitted_by,
    };

    let mut portal = state.portal.write();
    let portal = &mut *portal;
    let stored = if req.draft {
        portal.tracker.save_draft(&portal.catalog, draft)?
    } else {
        portal.tracker.submit(&portal.catalog, draft)?
    };

    Ok((StatusCode::CREATED, Json(SubmissionResponse::from(stored))))
}
