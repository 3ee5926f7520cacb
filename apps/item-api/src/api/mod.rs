//! HTTP routes for the item API.

pub mod health;

use axum::Router;

use crate::state::AppState;

/// Versioned API routes, nested under /api/v1 by axum_helpers::create_router.
/// Health and readiness are mounted separately at the root (see main.rs).
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/items", domain_items::handlers::router(state.items.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn test_state() -> AppState {
        let config = temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("HOST", None),
                ("PORT", None),
            ],
            Config::from_env,
        )
        .unwrap();
        // The driver connects lazily, so no server is needed here
        let client = mongodb::Client::with_uri_str(config.mongodb.url())
            .await
            .unwrap();
        AppState::new(config, client)
    }

    #[tokio::test]
    async fn test_items_routes_are_mounted() {
        let state = test_state().await;
        let response = routes(&state)
            .oneshot(
                Request::builder()
                    .uri("/items/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Reaches the domain handler, which rejects the malformed id
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_readiness_is_not_under_the_versioned_api() {
        let state = test_state().await;
        let response = routes(&state)
            .oneshot(
                Request::builder()
                    .uri("/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
