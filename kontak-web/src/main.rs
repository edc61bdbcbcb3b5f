//! kontak-web - contact directory web application
//!
//! Serves the contact, study program and address pages over HTTP, backed
//! by a local SQLite database.

use anyhow::{Context, Result};
use axum::{extract::Request, ServiceExt};
use clap::Parser;
use kontak_common::config::{load_toml_config, Overrides, Settings};
use kontak_common::db::init_database;
use kontak_web::{build_app, flash, AppState};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command-line arguments
///
/// Each option can also come from its `KONTAK_*` environment variable and
/// overrides the config file.
#[derive(Parser, Debug)]
#[command(name = "kontak-web")]
#[command(about = "Contact directory web application")]
#[command(version)]
struct Args {
    /// HTTP listen port
    #[arg(short, long, env = "KONTAK_PORT")]
    port: Option<u16>,

    /// HTTP bind address
    #[arg(short, long, env = "KONTAK_BIND")]
    bind: Option<String>,

    /// SQLite database file
    #[arg(short, long, env = "KONTAK_DATABASE")]
    database: Option<PathBuf>,

    /// TOML config file (default: <config dir>/kontak/config.toml)
    #[arg(short, long, env = "KONTAK_CONFIG")]
    config: Option<PathBuf>,

    /// Session cookie and flash message lifetime in seconds
    #[arg(long, env = "KONTAK_SESSION_TTL_SECS")]
    session_ttl_secs: Option<u64>,

    /// Directory served under /static
    #[arg(long, env = "KONTAK_STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let toml = load_toml_config(args.config.as_deref()).context("Failed to load config file")?;
    let settings = Settings::resolve(
        Overrides {
            port: args.port,
            bind_address: args.bind,
            database_path: args.database,
            session_ttl_secs: args.session_ttl_secs,
            static_assets: args.static_dir,
        },
        toml,
    );

    // RUST_LOG wins over the config file level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "kontak_web={level},kontak_common={level},tower_http={level}",
            level = settings.log_level
        ))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting kontak-web v{}", env!("CARGO_PKG_VERSION"));
    info!("Database path: {}", settings.database_path.display());

    let pool = match init_database(&settings.database_path).await {
        Ok(pool) => {
            info!("✓ Database ready");
            pool
        }
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e.into());
        }
    };

    let flash = flash::FlashStore::new(settings.session_ttl);
    flash::spawn_sweeper(flash.clone(), settings.session_ttl);

    if let Some(dir) = &settings.static_assets {
        info!("Serving static assets from {}", dir.display());
    }

    let state = AppState::new(pool, flash).with_static_assets(settings.static_assets.clone());
    let app = build_app(state);

    let addr = settings.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("kontak-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("kontak-web stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
