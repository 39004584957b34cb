use crate::error::{ApiError, MessageResponse};
use crate::models::{KeysResponse, SUCCESS_MESSAGE};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET / handler - List every key in the store
///
/// The listing is a snapshot in store order with no pagination.
#[utoipa::path(
    get,
    path = routes::KEYS,
    responses(
        (status = 200, description = "All keys currently stored", body = KeysResponse),
        (status = 503, description = "Store unavailable", body = MessageResponse)
    ),
    tag = "kv"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<KeysResponse>), ApiError> {
    let keys = state.store.keys().await?;

    tracing::info!("Listed {} keys", keys.len());

    Ok((
        StatusCode::OK,
        Json(KeysResponse {
            keys,
            message: SUCCESS_MESSAGE.to_string(),
        }),
    ))
}
