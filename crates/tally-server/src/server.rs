use std::sync::Arc;

use axum::routing::{delete, get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tally_llm::CompletionClient;
use tally_notify::NotificationSink;
use tally_store::{Database, TodoRepo};
use tally_summary::Summarizer;

use crate::handlers;

/// Server configuration.
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

/// Shared application state passed to Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<TodoRepo>,
    pub summarizer: Arc<Summarizer>,
}

impl AppState {
    /// Wire the store and the two leaf clients together. The clients come in
    /// as trait objects so tests can inject doubles.
    pub fn new(
        db: Database,
        completion: Arc<dyn CompletionClient>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            todos: Arc::new(TodoRepo::new(db)),
            summarizer: Arc::new(Summarizer::new(completion, sink)),
        }
    }
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/todos", get(handlers::list_todos))
        .route("/api/todos", post(handlers::create_todo))
        .route("/api/todos/{id}", patch(handlers::update_todo))
        .route("/api/todos/{id}", delete(handlers::delete_todo))
        .route("/api/summarize", post(handlers::summarize))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Create and start the server. Returns a handle holding the bound port;
/// port 0 asks the OS for a free one (used by tests).
pub async fn start(config: ServerConfig, state: AppState) -> Result<ServerHandle, std::io::Error> {
    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(port = local_addr.port(), "tally server started");

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    Ok(ServerHandle {
        port: local_addr.port(),
        _server: server_handle,
    })
}

/// Handle returned by `start()`; keeps the accept loop alive.
pub struct ServerHandle {
    pub port: u16,
    _server: tokio::task::JoinHandle<()>,
}
