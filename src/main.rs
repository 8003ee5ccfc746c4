//! netplant server binary - startup, migration, and HTTP serving

use anyhow::Context;
use clap::Parser;
use netplant::api::rest::routes;
use netplant::config::Config;
use netplant::infra::storage::migrations::Migrator;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "netplant", about = "Network inventory and topology record keeper")]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }

    let db = Database::connect(config.database.url.as_str())
        .await
        .with_context(|| format!("connecting to {}", config.database.url))?;
    Migrator::up(&db, None).await.context("running migrations")?;
    tracing::info!(url = %config.database.url, "database ready");

    let service = Arc::new(netplant::build_service(Arc::new(db), config.page_limits()));

    let app = routes::router(service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown handler");
    }
    tracing::info!("shutting down");
}
