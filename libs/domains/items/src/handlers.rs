use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreateItem, InventoryCountQuery, Item, PriceRangeQuery, SearchQuery, UpdateItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_items,
        create_item,
        get_item,
        update_item,
        delete_item,
        get_inventory_count,
        set_inventory_count,
        search_items,
        items_in_price_range,
        get_item_by_upc,
        items_with_inventory_above,
        count_items,
    ),
    components(
        schemas(Item, CreateItem, UpdateItem),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = "Items", description = "Item catalog endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/count", get(count_items))
        .route("/search", get(search_items))
        .route("/price-range", get(items_in_price_range))
        .route("/upc/{upc}", get(get_item_by_upc))
        .route("/inventory/above/{count}", get(items_with_inventory_above))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
        .route(
            "/{id}/inventory",
            get(get_inventory_count).post(set_inventory_count),
        )
        .with_state(shared_service)
}

/// List all items
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "List of items", body = Vec<Item>),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(id).await?;
    Ok(Json(item))
}

/// Update an item in full
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated successfully", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateItem>,
) -> ItemResult<Json<Item>> {
    let item = service.update_item(id, input).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
) -> ItemResult<impl IntoResponse> {
    service.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the inventory count for an item
#[utoipa::path(
    get,
    path = "/{id}/inventory",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Current inventory count", body = i32),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_inventory_count<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
) -> ItemResult<Json<i32>> {
    let item = service.get_item(id).await?;
    Ok(Json(item.inventory_count))
}

/// Set the inventory count for an item
#[utoipa::path(
    post,
    path = "/{id}/inventory",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID"),
        InventoryCountQuery
    ),
    responses(
        (status = 200, description = "Inventory count updated", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn set_inventory_count<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
    Query(query): Query<InventoryCountQuery>,
) -> ItemResult<Json<Item>> {
    let item = service.set_inventory_count(id, query.count).await?;
    Ok(Json(item))
}

/// Search items by name keyword, case-insensitive
#[utoipa::path(
    get,
    path = "/search",
    tag = "Items",
    params(SearchQuery),
    responses(
        (status = 200, description = "Items matching the keyword", body = Vec<Item>),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn search_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Query(query): Query<SearchQuery>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.search_items(&query.keyword).await?;
    Ok(Json(items))
}

/// Items priced within an inclusive range
#[utoipa::path(
    get,
    path = "/price-range",
    tag = "Items",
    params(PriceRangeQuery),
    responses(
        (status = 200, description = "Items within the price range", body = Vec<Item>),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn items_in_price_range<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Query(query): Query<PriceRangeQuery>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service
        .items_in_price_range(query.min_price, query.max_price)
        .await?;
    Ok(Json(items))
}

/// Get an item by its UPC
#[utoipa::path(
    get,
    path = "/upc/{upc}",
    tag = "Items",
    params(
        ("upc" = String, Path, description = "12-digit Universal Product Code")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_item_by_upc<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(upc): Path<String>,
) -> ItemResult<Json<Item>> {
    let item = service.get_item_by_upc(&upc).await?;
    Ok(Json(item))
}

/// Items with inventory count strictly above a threshold
#[utoipa::path(
    get,
    path = "/inventory/above/{count}",
    tag = "Items",
    params(
        ("count" = i32, Path, description = "Exclusive inventory threshold")
    ),
    responses(
        (status = 200, description = "Items above the threshold", body = Vec<Item>),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn items_with_inventory_above<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(count): Path<i32>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.items_with_inventory_above(count).await?;
    Ok(Json(items))
}

/// Count all items
#[utoipa::path(
    get,
    path = "/count",
    tag = "Items",
    responses(
        (status = 200, description = "Item count", body = u64),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn count_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<u64>> {
    let count = service.count_items().await?;
    Ok(Json(count))
}
