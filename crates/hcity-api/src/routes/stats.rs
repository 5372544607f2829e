//! # Statistics API
//!
//! Deterministic aggregate counts for the admin dashboard: per-standard
//! submission statistics and the programme-wide summary.
//!
//! ## Endpoints
//!
//! - `GET /stats` — programme-wide summary
//! - `GET /standards/:id/stats` — per-standard aggregate

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use hcity_core::StandardId;
use hcity_tracker::{OverallStats, StandardStats, StatusCounts, TypeCounts};

use crate::error::AppError;
use crate::state::AppState;

// ── Response DTOs ───────────────────────────────────────────────────

/// Submission counts by evidence type.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TypeCountsBody {
    pub text: usize,
    pub pdf: usize,
    pub photo: usize,
    pub video: usize,
}

impl From<TypeCounts> for TypeCountsBody {
    fn from(c: TypeCounts) -> Self {
        Self {
            text: c.text,
            pdf: c.pdf,
            photo: c.photo,
            video: c.video,
        }
    }
}

/// Standard counts by derived display status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusCountsBody {
    pub not_submitted: usize,
    pub pending_approval: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl From<StatusCounts> for StatusCountsBody {
    fn from(c: StatusCounts) -> Self {
        Self {
            not_submitted: c.not_submitted,
            pending_approval: c.pending_approval,
            approved: c.approved,
            rejected: c.rejected,
        }
    }
}

/// Per-standard submission statistics.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StandardStatsResponse {
    /// The standard these counts cover.
    pub standard_id: u16,
    /// All submissions ever recorded, drafts included.
    pub total: usize,
    /// Saved drafts not yet filed.
    pub pending: usize,
    /// Filed submissions awaiting review.
    pub pending_approval: usize,
    /// Approved submissions.
    pub approved: usize,
    /// Rejected submissions.
    pub rejected: usize,
    /// Counts by evidence type.
    pub by_type: TypeCountsBody,
    /// `approved / total`; `0.0` with no submissions.
    pub acceptance_rate: f64,
}

impl From<StandardStats> for StandardStatsResponse {
    fn from(s: StandardStats) -> Self {
        Self {
            standard_id: s.standard_id.get(),
            total: s.total,
            pending: s.pending,
            pending_approval: s.pending_approval,
            approved: s.approved,
            rejected: s.rejected,
            by_type: s.by_type.into(),
            acceptance_rate: s.acceptance_rate,
        }
    }
}

/// Programme-wide summary.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OverallStatsResponse {
    /// Catalog size.
    pub standards: usize,
    /// All submissions ever recorded.
    pub submissions: usize,
    /// Standards by derived status. Sums to `standards`.
    pub by_status: StatusCountsBody,
    /// Submissions by evidence type. Sums to `submissions`.
    pub by_type: TypeCountsBody,
    /// Standards that have never received any submission.
    pub didnt_submit: usize,
}

impl From<OverallStats> for OverallStatsResponse {
    fn from(s: OverallStats) -> Self {
        Self {
            standards: s.standards,
            submissions: s.submissions,
            by_status: s.by_status.into(),
            by_type: s.by_type.into(),
            didnt_submit: s.didnt_submit,
        }
    }
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the statistics router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(overall_stats))
        .route("/standards/:id/stats", get(standard_stats))
}

// ── Handlers ────────────────────────────────────────────────────────

/// GET /stats — Programme-wide aggregate counts.
#[utoipa::path(
    get,
    path = "/stats",
    responses(
        (status = 200, description = "Programme summary", body = OverallStatsResponse),
    ),
    tag = "stats"
)]
pub(crate) async fn overall_stats(State(state): State<AppState>) -> Json<OverallStatsResponse> {
    let portal = state.portal.read();
    Json(portal.tracker.stats_overall(&portal.catalog).into())
}

/// GET /standards/:id/stats — Per-standard aggregate counts.
#[utoipa::path(
    get,
    path = "/standards/{id}/stats",
    params(("id" = u16, Path, description = "Standard ID")),
    responses(
        (status = 200, description = "Per-standard statistics", body = StandardStatsResponse),
        (status = 404, description = "Standard not found", body = crate::error::ErrorBody),
    ),
    tag = "stats"
)]
pub(crate) async fn standard_stats(
    State(state): State<AppState>,
    Path(raw): Path<u16>,
) -> Result<Json<StandardStatsResponse>, AppError> {
    let id = StandardId::new(raw)
        .map_err(|_| AppError::NotFound(format!("standard {raw} is not in the catalog")))?;
    let portal = state.portal.read();
    let stats = portal.tracker.stats_for(&portal.catalog, id)?;
    Ok(Json(stats.into()))
}
