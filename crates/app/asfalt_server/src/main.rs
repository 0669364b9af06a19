//! Asfaltios support chat relay server.
//!
//! Serves the chatbot relay and transcript endpoints. Refuses to start
//! without an `OPENAI_API_KEY`.

use std::sync::Arc;

use asfalt_api::config::{
    ApiConfig, DEFAULT_MODEL, DEFAULT_PORT, DEFAULT_UPSTREAM_URL, require_api_key,
};
use clap::Parser;
use tracing::{error, info};

/// CLI arguments for the relay server.
#[derive(Parser, Debug)]
#[command(name = "asfalt_server", about = "Asfaltios support chat relay")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Interface to bind.
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Credential for the completion API.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the OpenAI-compatible completion API.
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_UPSTREAM_URL)]
    upstream_url: String,

    /// Completion model identifier.
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,asfalt_api=debug,asfalt_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    let api_key = match require_api_key(args.api_key) {
        Ok(key) => key,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let config = ApiConfig {
        bind_addr: format!("{}:{}", args.host, args.port),
        upstream_url: args.upstream_url,
        model: args.model,
        api_key,
    };

    info!(
        upstream = %config.upstream_url,
        model = %config.model,
        "starting asfalt_server"
    );

    let state = asfalt_api::AppState::new(Arc::new(config.completion_client()));
    let app = asfalt_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "Server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
