// HTTP request handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::router::{ChatEngine, Outcome};

/// Create the application router
pub fn create_router(engine: Arc<ChatEngine>) -> Router {
    Router::new()
        .route("/chat", post(handle_chat))
        .route("/health", get(health_check))
        .with_state(engine)
}

/// Request body for POST /chat
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// A missing field behaves like an empty message
    #[serde(default)]
    pub message: String,
}

/// Response body for POST /chat
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
    pub crisis: bool,
}

/// Handle POST /chat - run one message through the cascade
async fn handle_chat(
    State(engine): State<Arc<ChatEngine>>,
    Json(request): Json<ChatRequest>,
) -> (StatusCode, Json<ChatResponse>) {
    let result = engine.respond(&request.message).await;

    tracing::debug!(outcome = result.outcome.as_str(), "Chat request handled");

    let status = match result.outcome {
        Outcome::InvalidInput => StatusCode::BAD_REQUEST,
        _ => StatusCode::OK,
    };

    (
        status,
        Json(ChatResponse {
            answer: result.reply.answer,
            crisis: result.reply.crisis,
        }),
    )
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub knowledge_topics: usize,
    pub generative_enabled: bool,
}

/// Handle GET /health - report engine state
async fn health_check(State(engine): State<Arc<ChatEngine>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        knowledge_topics: engine.knowledge_topics(),
        generative_enabled: engine.has_provider(),
    })
}
