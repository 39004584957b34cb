use utoipa::OpenApi;

use crate::error::{HealthResponse, MessageResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{GetResponse, KeyValue, KeysResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "redis-kv-api",
        version = "1.0.0",
        description = "Read-only JSON API over the keys and values of a Redis server"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler
    ),
    components(
        schemas(
            KeysResponse,
            GetResponse,
            KeyValue,
            MessageResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "kv", description = "Key-value store operations")
    )
)]
pub struct ApiDoc;
