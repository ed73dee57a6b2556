use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Tasks API",
        version = "0.1.0",
        description = "Minimal task-tracking service backed by PostgreSQL"
    ),
    nest(
        (path = "/tasks", api = domain_tasks::ApiDoc)
    )
)]
pub struct ApiDoc;
