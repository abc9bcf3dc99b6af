// MindBuddy - mental well-being support chat service
// Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use mindbuddy::config::{load_config, Config};
use mindbuddy::crisis::CrisisDetector;
use mindbuddy::knowledge::KnowledgeBase;
use mindbuddy::providers::OpenAiProvider;
use mindbuddy::router::ChatEngine;
use mindbuddy::server::{ChatServer, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "mindbuddy")]
#[command(about = "Mental well-being support chat service", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Run a single message through the cascade and print the answer
    Query {
        /// Message text
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = load_config()?;
    let engine = build_engine(&config)?;

    match args.command {
        Command::Serve { bind } => {
            let server_config = ServerConfig {
                bind_address: bind.unwrap_or_else(|| config.bind_address.clone()),
            };
            ChatServer::new(engine, server_config).serve().await
        }
        Command::Query { message } => {
            let result = engine.respond(&message).await;
            println!("{}", result.reply.answer);
            Ok(())
        }
    }
}

/// Assemble the engine from the configured reference data
fn build_engine(config: &Config) -> Result<ChatEngine> {
    let detector = CrisisDetector::load_from_file(&config.crisis_patterns_path)
        .context("Failed to load crisis patterns")?;
    let knowledge = KnowledgeBase::load_from_file(&config.knowledge_base_path)
        .context("Failed to load knowledge base")?;

    tracing::info!(topics = knowledge.len(), "Knowledge base loaded");

    let mut engine = ChatEngine::new(detector, knowledge);

    if let Some(api_key) = &config.openai_api_key {
        let provider = OpenAiProvider::new(api_key.clone())?.with_model(config.model.clone());
        engine = engine.with_provider(Arc::new(provider));
    }

    Ok(engine)
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
