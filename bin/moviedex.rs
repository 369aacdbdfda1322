use anyhow::Result;
use clap::Parser;
use moviedex::{AppState, MovieCatalog, SearchEngine, ServiceConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "moviedex")]
#[command(about = "In-memory movie catalog & search service", long_about = None)]
struct Args {
    /// HTTP API port
    #[arg(long, env = "MOVIEDEX_HTTP_PORT", default_value = "8080")]
    http_port: u16,

    /// Catalog JSON file (defaults to the bundled dataset)
    #[arg(long, env = "MOVIEDEX_DATA_FILE")]
    data_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting moviedex v{}", moviedex::VERSION);

    let mut config = ServiceConfig::new(args.http_port);
    if let Some(path) = args.data_file {
        config = config.with_data_file(path);
    }

    // Build the catalog once; it is immutable for the rest of the process.
    let catalog = match &config.data_file {
        Some(path) => MovieCatalog::load_from_path(path),
        None => MovieCatalog::builtin(),
    };
    if catalog.is_empty() {
        warn!("Catalog is empty; all lookups and searches will return nothing");
    } else {
        info!("Catalog ready with {} movies", catalog.len());
    }

    let engine = SearchEngine::new(Arc::new(catalog));

    // Start HTTP API server
    let app = moviedex::create_router(AppState { engine });
    let http_addr = config.http_addr();
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    info!("HTTP API server listening on {}", http_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
            info!("Received shutdown signal, gracefully shutting down");
        })
        .await?;

    Ok(())
}
