//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Healthy City Standards API",
        version = "0.3.2",
        description = "Compliance tracking for the Healthy City programme: the 80-standard catalog, agency assignments, evidence submissions with admin review, and programme statistics.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        // Standards
        crate::routes::standards::list_standards,
        crate::routes::standards::get_standard,
        crate::routes::standards::assign_agency,
        crate::routes::standards::unassign_agency,
        crate::routes::standards::list_submissions,
        crate::routes::standards::create_submission,
        // Submissions
        crate::routes::submissions::get_submission,
        crate::routes::submissions::review_submission,
        crate::routes::submissions::file_submission,
        // Agencies
        crate::routes::agencies::list_agencies,
        crate::routes::agencies::agency_standards,
        crate::routes::agencies::agency_unassigned_standards,
        // Stats
        crate::routes::stats::overall_stats,
        crate::routes::stats::standard_stats,
    ),
    components(schemas(
        // Standards DTOs
        crate::routes::standards::StandardResponse,
        crate::routes::standards::AssignmentRequest,
        crate::routes::standards::AssignmentResponse,
        crate::routes::standards::CreateSubmissionRequest,
        // Submissions DTOs
        crate::routes::submissions::SubmissionResponse,
        crate::routes::submissions::ReviewRequest,
        // Agencies DTOs
        crate::routes::agencies::AgencyResponse,
        // Stats DTOs
        crate::routes::stats::TypeCountsBody,
        crate::routes::stats::StatusCountsBody,
        crate::routes::stats::StandardStatsResponse,
        crate::routes::stats::OverallStatsResponse,
        // Error types
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "standards", description = "Catalog listing, search, and agency assignment"),
        (name = "submissions", description = "Evidence submission lifecycle and review"),
        (name = "agencies", description = "Agency roster and dashboard views"),
        (name = "stats", description = "Aggregate compliance statistics"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
