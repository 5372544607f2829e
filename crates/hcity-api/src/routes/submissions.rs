//! # Submission Review API
//!
//! Operations addressed by submission id: detail lookup, filing a saved
//! draft, and the admin review verdict.
//!
//! ## Endpoints
//!
//! - `GET /submissions/:id` — submission detail
//! - `PATCH /submissions/:id` — record a review verdict
//! - `POST /submissions/:id/file` — file a saved draft for review

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use hcity_core::{ReviewDecision, SubmissionId, SubmissionStatus, SubmissionType};
use hcity_tracker::Submission;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

// ── Request/Response DTOs ───────────────────────────────────────────

/// API representation of a submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResponse {
    /// Submission identifier.
    pub id: Uuid,
    /// The standard the evidence addresses.
    pub standard_id: u16,
    /// Evidence type.
    #[schema(value_type = String)]
    pub submission_type: SubmissionType,
    /// Short title.
    pub title: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Latest reviewer notes.
    pub notes: Option<String>,
    /// Lifecycle status.
    #[schema(value_type = String)]
    pub status: SubmissionStatus,
    /// Slug of the submitting agency.
    pub submitted_by: String,
    /// When the submission was filed. Absent for drafts.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Attached file references.
    pub files: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Submission> for SubmissionResponse {
    fn from(s: &Submission) -> Self {
        Self {
            id: *s.id.as_uuid(),
            standard_id: s.standard_id.get(),
            submission_type: s.submission_type,
            title: s.title.clone(),
            description: s.description.clone(),
            notes: s.notes.clone(),
            status: s.status,
            submitted_by: s.submitted_by.to_string(),
            submitted_at: s.submitted_at,
            files: s.files.iter().map(|f| f.as_str().to_string()).collect(),
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// Request to record a review verdict.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewRequest {
    /// The verdict: `approved` or `rejected`.
    pub status: String,
    /// Optional reviewer notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Validate for ReviewRequest {
    fn validate(&self) -> Result<(), String> {
        if self.status.trim().is_empty() {
            return Err("status must not be empty".to_string());
        }
        Ok(())
    }
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the submissions router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/submissions/:id",
            get(get_submission).patch(review_submission),
        )
        .route("/submissions/:id/file", post(file_submission))
}

// ── Handlers ────────────────────────────────────────────────────────

/// GET /submissions/:id — Submission detail.
#[utoipa::path(
    get,
    path = "/submissions/{id}",
    params(("id" = Uuid, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Submission found", body = SubmissionResponse),
        (status = 404, description = "Submission not found", body = crate::error::ErrorBody),
    ),
    tag = "submissions"
)]
pub(crate) async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let portal = state.portal.read();
    let submission = portal.tracker.get(SubmissionId::from_uuid(id))?;
    Ok(Json(SubmissionResponse::from(submission)))
}

/// PATCH /submissions/:id — Record a review verdict.
///
/// Legal only while the submission awaits review; a submission already
/// approved or rejected yields 409 and is left unchanged.
#[utoipa::path(
    patch,
    path = "/submissions/{id}",
    params(("id" = Uuid, Path, description = "Submission ID")),
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Verdict recorded", body = SubmissionResponse),
        (status = 404, description = "Submission not found", body = crate::error::ErrorBody),
        (status = 409, description = "Submission already decided", body = crate::error::ErrorBody),
        (status = 422, description = "Unknown verdict", body = crate::error::ErrorBody),
    ),
    tag = "submissions"
)]
pub(crate) async fn review_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let req = extract_validated_json(body)?;
    let decision = match req.status.as_str() {
        "approved" => ReviewDecision::Approved,
        "rejected" => ReviewDecision::Rejected,
        other => {
            return Err(AppError::Validation(format!(
                "unknown verdict \"{other}\" (expected approved or rejected)"
            )));
        }
    };

    let mut portal = state.portal.write();
    let submission = portal
        .tracker
        .review(SubmissionId::from_uuid(id), decision, req.notes)?;
    Ok(Json(SubmissionResponse::from(submission)))
}

/// POST /submissions/:id/file — File a saved draft for review.
#[utoipa::path(
    post,
    path = "/submissions/{id}/file",
    params(("id" = Uuid, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Draft filed", body = SubmissionResponse),
        (status = 404, description = "Submission not found", body = crate::error::ErrorBody),
        (status = 409, description = "Submission is not a draft", body = crate::error::ErrorBody),
    ),
    tag = "submissions"
)]
pub(crate) async fn file_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let mut portal = state.portal.write();
    let submission = portal.tracker.file(SubmissionId::from_uuid(id))?;
    Ok(Json(SubmissionResponse::from(submission)))
}
