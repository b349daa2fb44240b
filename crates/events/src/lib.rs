//! Viking event bus.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`VikingEvent`]: what happened, with a typed payload per kind.
//! - [`EventPersistence`]: background service that writes every event to
//!   the `events` table.

pub mod bus;
pub mod persistence;

pub use bus::{DeletedViking, EventBus, GeneratedViking, VikingEvent};
pub use persistence::EventPersistence;

/// Event type of [`VikingEvent::Generated`].
pub const VIKING_GENERATED: &str = "viking.generated";

/// Event type of [`VikingEvent::Deleted`].
pub const VIKING_DELETED: &str = "viking.deleted";

/// `events.source_entity_type` for every Viking event.
pub const ENTITY_VIKING: &str = "viking";
