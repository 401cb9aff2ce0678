use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use railnav_core::load_network;
use railnav_server::{AppState, QueryLimits, ServerConfig, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "railnav-server", version, about = "Serve railway routing over HTTP")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Saved network produced by `railnav build`
    #[arg(short, long)]
    network: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    #[arg(long)]
    max_search_results: Option<usize>,

    #[arg(long)]
    max_alternatives: Option<usize>,

    #[arg(long)]
    request_timeout_secs: Option<u64>,

    #[arg(long)]
    concurrency_limit: Option<usize>,
}

impl Args {
    fn into_config(self) -> Result<ServerConfig, railnav_server::ConfigError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };

        if let Some(network) = self.network {
            config.network = network;
        }
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(max) = self.max_search_results {
            config.max_search_results = max;
        }
        if let Some(max) = self.max_alternatives {
            config.max_alternatives = max;
        }
        if let Some(secs) = self.request_timeout_secs {
            config.request_timeout_secs = secs;
        }
        if let Some(limit) = self.concurrency_limit {
            config.concurrency_limit = limit;
        }

        config.validate()?;
        Ok(config)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config()?;

    info!("Loading network from {}", config.network.display());
    let network = load_network(&config.network)?;
    info!("{network:?}");

    let state = AppState::new(network, QueryLimits::from(&config), config.concurrency_limit);
    let app = create_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Railway routing listening on http://{}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
