//! Binary entry point for the Sous chat service.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sous_catalog::Catalog;
use sous_model::OpenAIChatModel;
use sous_server::{AppState, app};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Chat service for the Sous kitchen assistant.
#[derive(Debug, Parser)]
#[command(name = "sous-server", version, about)]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Chat model to use.
    #[arg(long, default_value = "gpt-4o-mini")]
    model: String,

    /// Base URL of an OpenAI-compatible API (e.g. http://localhost:11434/v1).
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (for OPENAI_API_KEY).
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sous_server=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    let mut model = OpenAIChatModel::from_env()
        .context("OPENAI_API_KEY must be set (directly or via .env)")?
        .with_model(&args.model);
    if let Some(base_url) = &args.base_url {
        model = model.with_base_url(base_url);
    }

    let catalog = Catalog::builtin();
    info!(item_count = catalog.len(), model = %args.model, "catalog loaded");

    let state = AppState::new(catalog, Arc::new(model));

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "sous server listening");

    axum::serve(listener, app(state)).await.context("server error")?;
    Ok(())
}
