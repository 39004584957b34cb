use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{fallback_handler, get_handler, health_handler, list_handler};
use crate::state::AppState;

// Route path constants - single source of truth for all API paths
pub const KEYS: &str = "/";
pub const VALUE: &str = "/redis";
pub const HEALTH: &str = "/health";
pub const DOCS: &str = "/docs";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the full route table. Anything unmatched is redirected to `/`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(KEYS, get(list_handler))
        .route(VALUE, get(get_handler))
        .route(HEALTH, get(health_handler))
        .merge(SwaggerUi::new(DOCS).url(OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub fn test_app(store: impl crate::store::KeyValueStore) -> Router {
    use crate::config::Config;
    use std::sync::Arc;

    let config = Config {
        redis_host: "localhost".to_string(),
        redis_port: 6379,
        service_port: 5000,
        service_host: "0.0.0.0".to_string(),
    };

    create_router(AppState {
        store: Arc::new(store),
        config: Arc::new(config),
    })
}
