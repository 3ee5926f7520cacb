//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Item API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item API",
        version = "0.1.0",
        description = "MongoDB-based REST API for managing catalog items",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/v1/items", api = domain_items::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Item catalog endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;
