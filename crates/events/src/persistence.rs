//! Durable event persistence service.
//!
//! [`EventPersistence`] subscribes to the [`EventBus`](crate::bus::EventBus)
//! and writes every received [`VikingEvent`] to the `events` table, keyed by
//! the Viking number. It runs as a long-lived background task and stops
//! when the bus is dropped.

use tokio::sync::broadcast;
use vikings_core::types::DbId;
use vikings_db::repositories::EventRepo;
use vikings_db::DbPool;

use crate::bus::VikingEvent;
use crate::ENTITY_VIKING;

/// Background service that persists Viking events to the database.
pub struct EventPersistence;

impl EventPersistence {
    /// Run the persistence loop until the channel is closed.
    pub async fn run(pool: DbPool, mut receiver: broadcast::Receiver<VikingEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if let Err(e) = Self::persist(&pool, &event).await {
                        tracing::error!(
                            error = %e,
                            event_type = event.event_type(),
                            number = event.number(),
                            "Failed to persist event"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(
                        skipped = n,
                        "Event persistence lagged, some events were not persisted"
                    );
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, persistence shutting down");
                    break;
                }
            }
        }
    }

    async fn persist(pool: &DbPool, event: &VikingEvent) -> Result<DbId, sqlx::Error> {
        let payload = serde_json::to_value(event).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        EventRepo::insert(
            pool,
            event.event_type(),
            Some(ENTITY_VIKING),
            Some(event.number()),
            &payload,
        )
        .await
    }
}
