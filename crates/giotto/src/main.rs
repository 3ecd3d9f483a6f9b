//! Giotto gateway server binary.

use anyhow::Context;
use clap::Parser;
use giotto_database::{Ledger, create_pool, establish_connection, run_migrations};
use giotto_models::{HuggingFaceClient, ModelCatalog};
use giotto_server::{ApiState, GatewayConfig, SubmissionOrchestrator, create_router};
use std::sync::Arc;

/// Gateway forwarding generation requests to the Hugging Face Inference API.
#[derive(Debug, Parser)]
#[command(name = "giotto", version, about)]
struct Cli {
    /// Socket address to bind, overriding GIOTTO_BIND_ADDR
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = GatewayConfig::from_env()?;
    let bind_addr = cli.bind.unwrap_or_else(|| config.bind_addr().clone());

    // Apply any pending migrations before taking traffic.
    let mut conn = establish_connection()?;
    run_migrations(&mut conn)?;

    let pool = create_pool()?;
    let ledger = Ledger::new(pool);
    let catalog = Arc::new(ModelCatalog::new());
    let driver = Arc::new(HuggingFaceClient::new());
    let orchestrator = Arc::new(SubmissionOrchestrator::new(
        driver,
        Arc::new(ledger.clone()),
        Arc::clone(&catalog),
        config.upstream_base_url().clone(),
        config.fallback_api_key().clone(),
    ));

    let state = ApiState {
        orchestrator,
        ledger,
        catalog,
        history_page_size: *config.history_page_size(),
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    tracing::info!(addr = %bind_addr, "Gateway listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for Ctrl+C");
            tracing::info!("Shutting down gateway...");
        })
        .await?;

    Ok(())
}
