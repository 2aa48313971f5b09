//! REST API Server for the chat relay
//!
//! Exposes the relay via HTTP endpoints
//! and serves the static landing page.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Instrument};

use crate::error::RelayError;
use crate::models::{ChatRequest, ChatResponse};
use crate::relay::ChatRelay;

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub relay: Arc<ChatRelay>,
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Chat Endpoint
/// =============================

async fn chat_handler(
    State(state): State<ApiState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, RelayError> {
    let Json(req) = payload.map_err(|e| {
        warn!("Rejected chat request: {}", e.body_text());
        RelayError::InvalidRequest(e.body_text())
    })?;

    let Some(message) = req.first_message() else {
        return Err(RelayError::InvalidRequest("No messages provided".into()));
    };

    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("chat", %request_id);

    async move {
        info!(chars = message.len(), "Received chat request");

        match state.relay.handle(message).await {
            Ok(response) => {
                info!(
                    enriched = response.context_info.is_some(),
                    "Chat request completed"
                );
                Ok(Json(response))
            }
            Err(e) => {
                tracing::error!("Chat request failed: {}", e);
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}

/// =============================
/// Router
/// =============================

pub fn create_router(relay: Arc<ChatRelay>, static_dir: &Path) -> Router {
    let state = ApiState { relay };

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route("/health", get(health))
        .route("/api/chat", post(chat_handler))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    relay: Arc<ChatRelay>,
    static_dir: &Path,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(relay, static_dir);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("Server running on http://localhost:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
