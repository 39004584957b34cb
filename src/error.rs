use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const MISSING_KEY_MESSAGE: &str =
    "Please provide a valid key. (Returned from Python Flask API)";
pub const KEY_NOT_FOUND_MESSAGE: &str =
    "Key not found or empty data. (Returned from Python Flask API)";
pub const STORE_UNAVAILABLE_MESSAGE: &str =
    "Key-value store unavailable. (Returned from Python Flask API)";

/// Error envelope: a lone `message` field
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Each variant maps to a status code and one of the fixed envelope
/// messages. Store failures are logged here and never echoed to the client.
#[derive(Debug)]
pub enum ApiError {
    /// `key` query parameter absent, empty or unparseable
    MissingKey,
    /// Key absent from the store, or stored as an empty string
    KeyNotFound(String),
    /// Store unreachable or the query failed
    StoreUnavailable(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingKey => (StatusCode::BAD_REQUEST, MISSING_KEY_MESSAGE),
            ApiError::KeyNotFound(key) => {
                tracing::debug!("Key not found or empty: {}", key);
                (StatusCode::NOT_FOUND, KEY_NOT_FOUND_MESSAGE)
            }
            ApiError::StoreUnavailable(err) => {
                tracing::error!("Store error: {:#}", err);
                (StatusCode::SERVICE_UNAVAILABLE, STORE_UNAVAILABLE_MESSAGE)
            }
        };

        let body = Json(MessageResponse {
            message: message.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::StoreUnavailable(err)
    }
}
