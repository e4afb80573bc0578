//! HTTP entry point for the near-Earth-object feed service.
//!
//! Serves raw, simplified, and top-hazardous views of the NASA NeoWs feed.

use anyhow::Result;
use clap::Parser;
use neo_feed::config::NeoWsConfig;
use neo_feed::http::{AppState, create_router};
use neo_feed::infra::neows::NeoWsClient;
use neo_feed::service::AsteroidService;
use std::ffi::OsStr;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "neo_feed")]
#[command(about = "Serves simplified views of the NASA near-Earth-object feed", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "NEO_FEED_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/neo_feed.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("neo_feed.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let config = NeoWsConfig::from_env()?;
    info!(?config, "NeoWs client configured");

    let client = NeoWsClient::from_config(&config)?;
    let service = AsteroidService::new(Arc::new(client));
    let app = create_router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!(addr = %cli.bind, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
