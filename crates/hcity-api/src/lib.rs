//! # hcity-api — Axum API for the Healthy City Standards Stack
//!
//! The HTTP surface over the programme's compliance core: the
//! 80-standard catalog with search, agency assignment toggles, the
//! evidence submission lifecycle with admin review, and the derived
//! statistics backing the admin and agency dashboards.
//!
//! ## API Surface
//!
//! | Prefix                | Module                    | Domain                       |
//! |-----------------------|---------------------------|------------------------------|
//! | `/standards*`         | [`routes::standards`]     | Catalog and assignments      |
//! | `/standards/:id/stats`| [`routes::stats`]         | Per-standard statistics      |
//! | `/submissions*`       | [`routes::submissions`]   | Submission review lifecycle  |
//! | `/agencies*`          | [`routes::agencies`]      | Agency dashboard views       |
//! | `/stats`              | [`routes::stats`]         | Programme summary            |
//!
//! OpenAPI documentation is generated via utoipa derive macros and
//! served at `/openapi.json`.

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted outside the API merge so they
/// stay reachable regardless of API state.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::standards::router())
        .merge(routes::submissions::router())
        .merge(routes::agencies::router())
        .merge(routes::stats::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
