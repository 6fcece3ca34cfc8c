use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;
use tally_llm::{OpenAiClient, OpenAiConfig};
use tally_notify::{SlackConfig, SlackSink};
use tally_server::{AppState, ServerConfig};
use tally_store::Database;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting tally server");

    // Database path: TALLY_DB overrides the default under the home directory
    let db_path = match std::env::var("TALLY_DB") {
        Ok(path) => PathBuf::from(path),
        Err(_) => {
            let tally_dir = dirs_home().join(".tally");
            std::fs::create_dir_all(&tally_dir).expect("Failed to create database directory");
            tally_dir.join("tally.db")
        }
    };

    let db = Database::open(&db_path).expect("Failed to open database");
    tracing::info!(path = %db_path.display(), "Database opened");

    // Outbound clients read their credentials here and nowhere else. A
    // missing credential is reported on first use, not at startup.
    let openai = OpenAiConfig {
        api_key: std::env::var("OPENAI_API_KEY").ok().map(SecretString::from),
        base_url: std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| OpenAiConfig::default().base_url),
        model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| OpenAiConfig::default().model),
    };
    let slack = SlackConfig {
        webhook_url: std::env::var("SLACK_WEBHOOK_URL").ok(),
    };

    let state = AppState::new(
        db,
        Arc::new(OpenAiClient::new(openai)),
        Arc::new(SlackSink::new(slack)),
    );

    // Start server
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(|| ServerConfig::default().port);
    let handle = tally_server::start(ServerConfig { port }, state)
        .await
        .expect("Failed to start server");

    tracing::info!(port = handle.port, "tally server ready");

    // Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for ctrl+c");

    tracing::info!("Shutting down");
}

fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}
