// HTTP boundary
// Thin axum layer over the chat engine

mod handlers;

pub use handlers::{create_router, ChatRequest, ChatResponse};

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::router::ChatEngine;

/// Configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000")
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
        }
    }
}

/// HTTP front for the chat engine
pub struct ChatServer {
    engine: Arc<ChatEngine>,
    config: ServerConfig,
}

impl ChatServer {
    pub fn new(engine: ChatEngine, config: ServerConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            config,
        }
    }

    /// Start the HTTP server
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self.config.bind_address.parse()?;

        // The browser front end is served separately; allow it in
        let app = create_router(Arc::clone(&self.engine))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        tracing::info!("Starting MindBuddy server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Get reference to the engine
    pub fn engine(&self) -> &Arc<ChatEngine> {
        &self.engine
    }
}
