//! Readiness reporting.
//!
//! Liveness (`/health`) comes from `axum_helpers::health_router`; this
//! module adds the dependency-aware `/ready` endpoint next to it.

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::mongodb::check_health_detailed;

use crate::state::AppState;

/// Router for the readiness endpoint, mounted at the root beside /health
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Aggregated readiness: ready only when every dependency answers.
/// Currently the only dependency is MongoDB.
async fn readiness_check(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "mongodb",
        Box::pin(async {
            check_health_detailed(&state.mongo_client)
                .await
                .into_result()
        }),
    )];

    match run_health_checks(checks).await {
        Ok(ready) => ready.into_response(),
        Err(not_ready) => not_ready.into_response(),
    }
}
