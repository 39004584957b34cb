use crate::routes;
use axum::{
    http::{header, StatusCode, Uri},
    response::IntoResponse,
};

/// Fallback for unmatched routes: 302 Found back to the key listing
pub async fn fallback_handler(uri: Uri) -> impl IntoResponse {
    tracing::debug!("No route for {}, redirecting to {}", uri, routes::KEYS);
    (StatusCode::FOUND, [(header::LOCATION, routes::KEYS)])
}
