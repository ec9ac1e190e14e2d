use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::AppState;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// Basic health check endpoint
///
/// Returns a simple health status indicating the service is running.
pub async fn health(State(_state): State<AppState>) -> Json<HealthResponse> {
    info!("Basic health check requested");

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "request-logger".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
