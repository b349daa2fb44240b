use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vikings_api::config::ServerConfig;
use vikings_api::router::build_app_router;
use vikings_api::state::AppState;
use vikings_core::config::AssetConfig;
use vikings_db::PgVikingStore;
use vikings_events::{EventBus, EventPersistence};
use vikings_pipeline::GenerationPipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "vikings_api=debug,vikings_pipeline=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env()?;
    let assets = AssetConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");
    tracing::info!(
        assets_dir = %assets.assets_dir.display(),
        output_dir = %assets.output_dir.display(),
        image_base_uri = %assets.image_base_uri,
        "Loaded asset configuration"
    );

    tokio::fs::create_dir_all(&assets.output_dir)
        .await
        .with_context(|| format!("Failed to create {}", assets.output_dir.display()))?;

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = vikings_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    vikings_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    vikings_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    // --- Event bus ---
    let event_bus = Arc::new(EventBus::default());
    let persistence_handle =
        tokio::spawn(EventPersistence::run(pool.clone(), event_bus.subscribe()));
    tracing::info!("Event persistence started");

    // --- Generation pipeline ---
    let store = Arc::new(PgVikingStore::new(pool.clone()));
    let pipeline =
        GenerationPipeline::new(Arc::new(assets), store).with_events(Arc::clone(&event_bus));

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        pipeline: Arc::new(pipeline),
        event_bus: Arc::clone(&event_bus),
    };

    let app = build_app_router(state, &config).map_err(anyhow::Error::msg)?;

    // --- Start server ---
    let host = config
        .host
        .parse()
        .with_context(|| format!("Invalid HOST address '{}'", config.host))?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // The router (and with it every AppState clone) is gone; dropping the
    // last bus handle closes the channel and ends persistence.
    drop(event_bus);
    let drain = Duration::from_secs(config.shutdown_timeout_secs);
    if tokio::time::timeout(drain, persistence_handle).await.is_err() {
        tracing::warn!("Event persistence did not stop within the shutdown timeout");
    }

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
