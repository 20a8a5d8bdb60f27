//! Service entry point: load config, pick a store, serve the settings API.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use header_settings::cache::LoggingCacheFlush;
use header_settings::config::schema::AdminConfig;
use header_settings::config::{load_config, AppConfig};
use header_settings::observability;
use header_settings::store::{FileStore, MemoryStore, SettingsStore};
use header_settings::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "header-settings")]
#[command(about = "Admin service for configurable HTTP response headers", long_about = None)]
struct Args {
    /// Path to the TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init("header_settings=info,tower_http=info");

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        storage_path = %config.storage.path,
        request_timeout_secs = config.listener.request_timeout_secs,
        "Configuration loaded"
    );

    if config.admin.api_key == AdminConfig::PLACEHOLDER_API_KEY {
        tracing::warn!("Admin API key is the shipped placeholder; change it before exposing the service");
    }

    let store: Arc<dyn SettingsStore> = if config.storage.path.is_empty() {
        tracing::warn!("No storage path configured, settings will not survive a restart");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(FileStore::new(&config.storage.path))
    };

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store, Arc::new(LoggingCacheFlush));
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
