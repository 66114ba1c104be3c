use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Items API",
        version = "0.1.0",
        description = "CRUD API for items with a name and a price"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/v1/items", api = domain_items::ApiDoc)
    )
)]
pub struct ApiDoc;
