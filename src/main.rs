use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transcript_graph::{config::ServerConfig, server::Server};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "transcript_graph=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();
    info!(
        addr = %config.socket_addr(),
        standard_stopwords = config.standard_stopwords,
        min_edge_weight = config.min_edge_weight,
        "Starting transcript-graph"
    );

    Server::new(&config)
        .run()
        .await
        .with_context(|| format!("server on {} failed", config.socket_addr()))
}
