//! Router assembly, health endpoints and graceful shutdown.
//!
//! A service composes the three pieces like this:
//!
//! ```ignore
//! // Versioned API routes plus the OpenAPI doc UIs
//! let router = create_router::<ApiDoc>(api_routes).await?;
//!
//! // Liveness at /health
//! let app = router.merge(health_router(app_info!()));
//!
//! // Serve until SIGINT/SIGTERM, then run cleanup
//! create_production_app(app, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;
