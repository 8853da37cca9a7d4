//! Agricultural Prediction API
//!
//! Leaf disease classification, irrigation and fertilization advice, and
//! supply-chain guidance behind one HTTP service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       AGRI-PREDICT                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────┐   ┌─────────────────────┐  │
//! │  │  Router   │──►│  Handlers    │──►│  Advisory text      │  │
//! │  │  (Axum)   │   │  (validate)  │   │  (rules, formulas)  │  │
//! │  └───────────┘   └──────┬───────┘   └─────────────────────┘  │
//! │                         ▼                                    │
//! │                ┌─────────────────┐                           │
//! │                │  ModelRegistry  │  ONNX ─► mock ─► rules     │
//! │                └─────────────────┘                           │
//! └──────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod constants;
mod models;
mod handlers;
mod logic;
mod error;

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

use config::{Config, LogFormat};
use logic::model::ModelRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    init_tracing(config.log_format);

    tracing::info!("{} v{} starting...", constants::APP_NAME, constants::APP_VERSION);
    tracing::info!("Environment: {}", config.environment);
    if config.is_production() && config.disable_onnx {
        tracing::warn!("ONNX Runtime disabled in production, every endpoint will use its fallback");
    }

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    // Model loading touches the filesystem and the ONNX runtime
    let load_config = config.clone();
    let models = tokio::task::spawn_blocking(move || ModelRegistry::load(&load_config)).await?;

    let state = AppState {
        config: config.clone(),
        models: Arc::new(models),
    };

    let app = create_router(state);

    let listener = bind_listener(&config).await?;
    tracing::info!("🚀 Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| constants::DEFAULT_LOG_FILTER.into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Bind the listen socket. `HOST` may be a hostname or an IPv6 literal.
async fn bind_listener(config: &Config) -> std::io::Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub models: Arc<ModelRegistry>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/predict/leaf-disease", post(handlers::leaf_disease::predict))
        .route("/predict/irrigation", post(handlers::irrigation::predict))
        .route("/predict/supply-chain", post(handlers::supply_chain::predict))
        .route("/predict/soil-analysis", post(handlers::soil_analysis::predict))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_accepts_hostname() {
        let config = Config {
            host: "localhost".to_string(),
            port: 0,
            ..Default::default()
        };

        let listener = bind_listener(&config).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_accepts_ip_literal() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..Default::default()
        };

        let listener = bind_listener(&config).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }
}
