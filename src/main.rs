use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use request_logger::{
    config::AppConfig, create_app, diagnostics::TracingDiagnostics, store::InMemoryLogStore,
    AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    init_tracing(&config.logging.level)?;
    info!("Configuration loaded successfully");

    // Create application state; the log store and diagnostic sink are built
    // once here and shared by every in-flight request
    let state = AppState {
        config: Arc::new(config.clone()),
        log_store: Arc::new(InMemoryLogStore::new()),
        diagnostics: Arc::new(TracingDiagnostics),
    };

    // Build the application router
    let app = create_app(state);

    // Start the server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Request logger starting on {}", addr);
    info!("📝 Bodies and auth headers are persisted for every non-excluded path");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let filter = tracing_subscriber::EnvFilter::try_new(level)?;

    let subscriber = tracing_subscriber::registry();

    match log_format.as_str() {
        "json" => {
            subscriber
                .with(tracing_subscriber::fmt::layer().json())
                .with(filter)
                .init();
        }
        _ => {
            subscriber
                .with(tracing_subscriber::fmt::layer())
                .with(filter)
                .init();
        }
    }

    Ok(())
}
