use std::{sync::Arc, time::Duration};

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub mod config;
pub mod diagnostics;
pub mod middleware;
pub mod routes;
pub mod store;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::AppConfig>,
    pub log_store: Arc<dyn store::LogStore>,
    pub diagnostics: Arc<dyn diagnostics::DiagnosticSink>,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(routes::health::health))
        // API routes
        .route("/index", post(routes::users::search_users))
        .route("/users/create", post(routes::users::create_user))
        // Add middleware layers
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    state.config.server.timeout_seconds,
                )))
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    middleware::logging::log_requests_middleware,
                )),
        )
        .with_state(state)
}
