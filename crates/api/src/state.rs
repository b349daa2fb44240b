use std::sync::Arc;

use vikings_core::config::AssetConfig;
use vikings_events::EventBus;
use vikings_pipeline::GenerationPipeline;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is a pool handle or behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vikings_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Derivation, compositing and storage for new Vikings.
    pub pipeline: Arc<GenerationPipeline>,
    /// Centralized event bus for publishing platform events.
    pub event_bus: Arc<EventBus>,
}

impl AppState {
    pub fn assets(&self) -> &AssetConfig {
        self.pipeline.config()
    }
}
