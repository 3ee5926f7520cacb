use std::future::Future;
use std::pin::Pin;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use core_config::AppInfo;
use futures::future::join_all;
use serde::Serialize;
use serde_json::{Map, Value, json};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// A boxed dependency check, resolving to `Err(reason)` when unhealthy.
pub type HealthCheckFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

/// Runs named dependency checks concurrently and folds them into one
/// readiness verdict.
///
/// The body reports each dependency as "connected" or "disconnected";
/// any failure turns the aggregate into `Err` with a 503 so callers can
/// return it straight from a readiness handler.
///
/// ```ignore
/// let checks = vec![
///     ("mongodb", Box::pin(async { ping(&client).await }) as HealthCheckFuture),
/// ];
/// match run_health_checks(checks).await {
///     Ok(ready) => ready.into_response(),
///     Err(not_ready) => not_ready.into_response(),
/// }
/// ```
pub async fn run_health_checks(
    checks: Vec<(&str, HealthCheckFuture<'_>)>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let (names, futures): (Vec<_>, Vec<_>) = checks.into_iter().unzip();
    let outcomes = join_all(futures).await;

    let mut body = Map::new();
    let mut all_healthy = true;

    for (name, outcome) in names.into_iter().zip(outcomes) {
        let verdict = match outcome {
            Ok(()) => "connected",
            Err(reason) => {
                tracing::error!("Readiness check failed: {} error: {:?}", name, reason);
                all_healthy = false;
                "disconnected"
            }
        };
        body.insert(name.to_string(), json!(verdict));
    }

    body.insert(
        "status".to_string(),
        json!(if all_healthy { "ready" } else { "not ready" }),
    );

    let payload = (
        if all_healthy {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        },
        Json(Value::Object(body)),
    );

    if all_healthy { Ok(payload) } else { Err(payload) }
}

/// Liveness handler; 200 with the app's name and version whenever the
/// process is up.
pub async fn health_handler(State(app): State<AppInfo>) -> Response {
    let response = HealthResponse {
        status: "healthy",
        name: app.name,
        version: app.version,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Router serving `/health` from the given [`AppInfo`].
///
/// ```ignore
/// let app = Router::new().merge(health_router(app_info!()));
/// ```
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}
