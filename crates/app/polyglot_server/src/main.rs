//! Polyglot chat relay server binary.
//!
//! Serves `POST /chat` and relays each message to Gemini.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use polyglot_api::{AppState, config::ApiConfig};
use polyglot_core::generation::config::{DEFAULT_BASE_URL, DEFAULT_MODEL, GenerationConfig};
use polyglot_core::generation::gemini::GeminiClient;
use tracing::info;

/// CLI arguments for the relay server.
#[derive(Parser, Debug)]
#[command(name = "polyglot_server", version, about = "Polyglot chat relay server")]
struct Args {
    /// Interface to listen on.
    #[arg(long, env = "POLYGLOT_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "POLYGLOT_PORT", default_value_t = 5000)]
    port: u16,

    /// Gemini API key.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Gemini model used for every request.
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Gemini API base URL.
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout for Gemini calls, in seconds. Unset keeps the
    /// HTTP client's default.
    #[arg(long, env = "GEMINI_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,polyglot_api=debug,polyglot_core=debug")
            }),
        )
        .init();

    let args = Args::parse();

    let generation = GenerationConfig {
        api_key: args.api_key,
        model: args.model,
        base_url: args.base_url,
        request_timeout: args.request_timeout_secs.map(Duration::from_secs),
    };

    info!(
        version = polyglot_core::version(),
        model = %generation.model,
        base_url = %generation.base_url,
        "starting polyglot_server"
    );

    let generator = GeminiClient::from_config(&generation)?;

    let config = ApiConfig::new(&args.host, &args.port.to_string());
    let state = AppState {
        generator: Arc::new(generator),
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    let app = polyglot_api::router(state);

    info!(addr = %local_addr, "chat relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, draining in-flight requests");
}
