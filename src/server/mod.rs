//! HTTP surface: multipart CSV upload and health check.

mod upload;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::error::{Error, Result};

#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<AppConfig>,
}

/// Build the application router with CORS and body-limit layers applied.
pub fn build_router(config: Arc<AppConfig>) -> Result<Router> {
    let cors = match config.allowed_origin.as_deref() {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .map_err(|_| Error::Config(format!("invalid allowed_origin '{origin}'")))?;
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::permissive(),
    };

    // The upload handler owns oversize rejection so the caller sees the 413
    // with its empty list body; the transport limit just sits above it.
    let body_limit = config.max_upload_bytes() + 1024 * 1024;

    let state = ServerState { config };

    Ok(Router::new()
        .route("/api/upload", post(upload::handle_upload))
        .route("/api/health", get(health_check))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .with_state(state))
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: AppConfig) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = build_router(Arc::new(config))?;

    info!("tandem listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: String,
    timestamp: DateTime<Utc>,
}

async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}
