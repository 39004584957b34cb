use serde::{Deserialize, Serialize};

/// Message attached to every successful response
pub const SUCCESS_MESSAGE: &str = "Returned from Python Flask API";

/// Response type for the key listing endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct KeysResponse {
    pub keys: Vec<String>,
    pub message: String,
}

/// Response type for a successful value lookup
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct GetResponse {
    pub data: KeyValue,
    pub message: String,
}

/// A single key and its stored value
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}
