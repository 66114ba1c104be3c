use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, JsonBody, PathParam,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;
use crate::use_cases::ItemUseCases;
use crate::validation::parse_id;

const TAG: &str = "Items";

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(
        schemas(Item, CreateItem, UpdateItem),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Item management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the item router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(use_cases: ItemUseCases<R>) -> Router {
    let shared = Arc::new(use_cases);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(shared)
}

/// List all items
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All items, oldest first", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(use_cases): State<Arc<ItemUseCases<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    tracing::debug!("Listing items");
    let items = use_cases.get_all.execute().await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(use_cases): State<Arc<ItemUseCases<R>>>,
    JsonBody(input): JsonBody<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    tracing::debug!("Creating item");
    let item = use_cases.create.execute(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(use_cases): State<Arc<ItemUseCases<R>>>,
    PathParam(id): PathParam<String>,
) -> ItemResult<Json<Item>> {
    tracing::debug!(item_id = %id, "Fetching item");
    let item = use_cases.get_by_id.execute(&id).await?;
    Ok(Json(item))
}

/// Update an item; absent fields are left unchanged
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated successfully", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(use_cases): State<Arc<ItemUseCases<R>>>,
    PathParam(id): PathParam<String>,
    body: Result<JsonBody<UpdateItem>, AppError>,
) -> Result<Json<Item>, AppError> {
    tracing::debug!(item_id = %id, "Updating item");
    // A bad id is reported ahead of a bad body
    parse_id(&id)?;
    let JsonBody(input) = body?;
    let item = use_cases.update.execute(&id, input).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(use_cases): State<Arc<ItemUseCases<R>>>,
    PathParam(id): PathParam<String>,
) -> ItemResult<StatusCode> {
    tracing::debug!(item_id = %id, "Deleting item");
    use_cases.delete.execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
