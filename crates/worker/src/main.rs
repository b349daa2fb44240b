use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vikings_core::config::AssetConfig;
use vikings_core::store::{MemoryVikingStore, VikingStore};
use vikings_db::PgVikingStore;
use vikings_events::{EventBus, EventPersistence};
use vikings_pipeline::GenerationPipeline;
use vikings_worker::{run_batch, BatchConfig};

/// How long to wait for queued events to reach the database on exit.
const PERSISTENCE_DRAIN: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vikings_worker=debug,vikings_pipeline=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let batch = BatchConfig::from_env()?;
    let assets = AssetConfig::from_env();
    let event_bus = Arc::new(EventBus::default());

    let (store, persistence) = if batch.dry_run {
        tracing::info!("Dry run: records are kept in memory");
        let store: Arc<dyn VikingStore> = Arc::new(MemoryVikingStore::new());
        (store, None)
    } else {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let pool = vikings_db::create_pool(&database_url)
            .await
            .context("Failed to connect to database")?;
        vikings_db::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
        tracing::info!("Database ready");

        let handle = tokio::spawn(EventPersistence::run(pool.clone(), event_bus.subscribe()));
        let store: Arc<dyn VikingStore> = Arc::new(PgVikingStore::new(pool));
        (store, Some(handle))
    };

    let pipeline = Arc::new(
        GenerationPipeline::new(Arc::new(assets), store).with_events(Arc::clone(&event_bus)),
    );

    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received SIGINT (Ctrl-C), stopping batch");
            ctrl_c_cancel.cancel();
        }
    });

    let summary = run_batch(&batch, pipeline, cancel).await;

    drop(event_bus);
    if let Some(handle) = persistence {
        if tokio::time::timeout(PERSISTENCE_DRAIN, handle).await.is_err() {
            tracing::warn!("Event persistence did not stop within the drain timeout");
        }
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);

    if summary.aborted {
        anyhow::bail!("batch aborted after {} failure(s)", summary.failed.len());
    }
    Ok(())
}
