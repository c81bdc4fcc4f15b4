use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dailypaper_core::{Config, config_file};

mod handlers;
mod models;
mod routes;
mod state;
mod template;

use state::AppState;

const DEFAULT_BIND: &str = "127.0.0.1:5001";

/// Serve the daily paper feed over HTTP.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Address to listen on (default: 127.0.0.1:5001)
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Base URL the JSON files are published under
    #[arg(long)]
    remote_url: Option<String>,

    /// Local directory holding the same files, used when the remote fails
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Read only from the local directory
    #[arg(long)]
    no_remote: bool,

    /// Per-request timeout for the remote source, in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // CLI flags > env vars > config file > defaults
    let file_config = config_file::load_config();
    let mut config = Config::from_file(&file_config);
    config.apply_env(|key| std::env::var(key).ok());
    if let Some(url) = args.remote_url {
        config.remote_base_url = Some(url);
    }
    if let Some(dir) = args.data_dir {
        config.local_dir = Some(dir);
    }
    if args.no_remote {
        config.remote_base_url = None;
    }
    if let Some(secs) = args.timeout {
        config.timeout_secs = secs;
    }

    let addr = match args.bind {
        Some(addr) => addr,
        None => file_config
            .web
            .and_then(|w| w.bind)
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
            .parse()?,
    };

    let loader = config.build_loader()?;
    tracing::info!(sources = ?loader.source_names(), "data sources");

    let state = Arc::new(AppState {
        loader,
        templates: template::build_env()?,
    });
    let app = routes::router(state);

    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
