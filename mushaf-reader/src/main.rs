//! Mushaf Reader (mushaf-reader) - Main entry point
//!
//! Serves the reading page and its JSON/SSE API on a local port.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use mushaf_common::config::resolve_config_path;
use mushaf_common::events::EventBus;
use mushaf_reader::config::{CliOverrides, Config};
use mushaf_reader::loader::ChapterLoader;
use mushaf_reader::quran_api::QuranApiClient;
use mushaf_reader::{build_router, AppContext, SharedState};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Event bus capacity; slow SSE clients beyond this lag and skip ahead
const EVENT_BUS_CAPACITY: usize = 100;

/// Command-line arguments for mushaf-reader
#[derive(Parser, Debug)]
#[command(name = "mushaf-reader")]
#[command(about = "Chapter reader with sequential verse recitation")]
#[command(version)]
struct Args {
    /// Config file (TOML)
    #[arg(short, long, env = "MUSHAF_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Quran API base URL
    #[arg(long)]
    api_base_url: Option<String>,

    /// Translation edition identifier
    #[arg(long)]
    translation_edition: Option<String>,

    /// Recitation edition identifier
    #[arg(long)]
    audio_edition: Option<String>,

    /// Per-request timeout in seconds (0 disables)
    #[arg(long)]
    request_timeout_secs: Option<u64>,

    /// What to do when a verse fails to load: skip or retry
    #[arg(long)]
    track_error_policy: Option<String>,

    /// Attempts per verse under the retry policy
    #[arg(long)]
    max_track_attempts: Option<u32>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            port: self.port,
            api_base_url: self.api_base_url.clone(),
            translation_edition: self.translation_edition.clone(),
            audio_edition: self.audio_edition.clone(),
            request_timeout_secs: self.request_timeout_secs,
            track_error_policy: self.track_error_policy.clone(),
            max_track_attempts: self.max_track_attempts,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config is read before tracing starts so the file can set the level
    let config_path = resolve_config_path(args.config.as_deref());
    let config = Config::load(&args.overrides(), config_path.as_deref())
        .context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Mushaf Reader v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    // Warnings from loading the file predate the subscriber
    match config_path.as_deref() {
        Some(path) if path.exists() => info!("Config file: {}", path.display()),
        Some(path) => warn!("Config file not found at {}, using defaults", path.display()),
        None => warn!("No config directory available, using defaults"),
    }
    info!("Quran API: {}", config.api.base_url);
    info!(
        "Editions: translation={} audio={}",
        config.api.translation_edition, config.api.audio_edition
    );
    info!("Track error policy: {:?}", config.track_error_policy);

    let client = QuranApiClient::new(config.api.clone())
        .context("Failed to build Quran API client")?;
    let events = EventBus::new(EVENT_BUS_CAPACITY);
    let state = Arc::new(SharedState::new(
        ChapterLoader::new(client),
        config.track_error_policy,
        events,
    ));

    let app = build_router(AppContext { state });

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
