use std::io;
use std::time::Duration;

use axum::{Router, middleware};
use core_config::server::ServerConfig;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

use crate::errors::handlers::not_found;
use crate::http::security_headers;
use crate::server::shutdown::{ShutdownCoordinator, coordinated_shutdown};

/// Wraps the versioned API routes with everything a service router needs
/// besides its handlers:
///
/// - the OpenAPI document served through Swagger UI, ReDoc, RapiDoc and Scalar
/// - `apis` nested under `/api/v1`
/// - a structured 404 fallback
/// - request tracing and security headers
///
/// `apis` comes in with its state already applied; domain routers own their
/// state, this only layers the cross-cutting concerns on top.
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let doc_ui = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()));

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Ok(doc_ui
        .nest("/api/v1", apis)
        .fallback(not_found)
        .layer(trace)
        .layer(middleware::from_fn(security_headers)))
}

/// Serves `router` until SIGINT or SIGTERM, then runs `cleanup` with a
/// deadline before the process exits.
///
/// The cleanup future is where connection teardown goes; if it outlives
/// `shutdown_timeout` the server stops waiting and logs a warning.
///
/// ```ignore
/// create_production_app(router, &config.server, Duration::from_secs(30), async move {
///     drop(mongo_client);
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();
    let shutdown_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        shutdown_handle.wait_for_signal().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(coordinated_shutdown(coordinator))
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // The cleanup task observes the same signal; let it finish before returning
    cleanup_handle.await.ok();

    serve_result
}
