use crate::error::{ApiError, MessageResponse};
use crate::models::{GetResponse, KeyValue, SUCCESS_MESSAGE};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};

/// GET /redis?key=<key> handler - Retrieve a single value
///
/// An empty stored value is reported exactly like a missing key.
#[utoipa::path(
    get,
    path = routes::VALUE,
    params(
        ("key" = String, Query, description = "Key to look up")
    ),
    responses(
        (status = 200, description = "Value found", body = GetResponse),
        (status = 400, description = "Missing or empty key parameter", body = MessageResponse),
        (status = 404, description = "Key not found or empty data", body = MessageResponse),
        (status = 503, description = "Store unavailable", body = MessageResponse)
    ),
    tag = "kv"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<(StatusCode, Json<GetResponse>), ApiError> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!("Rejected query string: {}", rejection);
            return Err(ApiError::MissingKey);
        }
    };

    let key = first_key(pairs).ok_or(ApiError::MissingKey)?;

    match state.store.get(&key).await? {
        Some(value) if !value.is_empty() => {
            tracing::info!("Successfully retrieved value for key: {}", key);
            Ok((
                StatusCode::OK,
                Json(GetResponse {
                    data: KeyValue { key, value },
                    message: SUCCESS_MESSAGE.to_string(),
                }),
            ))
        }
        _ => Err(ApiError::KeyNotFound(key)),
    }
}

/// First `key` parameter, if it is non-empty. Later duplicates are ignored.
fn first_key(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(name, _)| name == "key")
        .map(|(_, value)| value)
        .filter(|key| !key.is_empty())
}
