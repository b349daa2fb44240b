//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] fans [`VikingEvent`]s out to every subscriber. It is shared
//! via `Arc<EventBus>` between the API, the generation pipeline and the
//! persistence task.

use serde::Serialize;
use tokio::sync::broadcast;
use vikings_core::metadata::VikingRecord;
use vikings_core::types::VikingNumber;

use crate::{VIKING_DELETED, VIKING_GENERATED};

// ---------------------------------------------------------------------------
// VikingEvent
// ---------------------------------------------------------------------------

/// Payload of a [`VikingEvent::Generated`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedViking {
    pub number: VikingNumber,
    pub name: String,
    pub image: String,
}

impl From<&VikingRecord> for GeneratedViking {
    fn from(record: &VikingRecord) -> Self {
        Self {
            number: record.number,
            name: record.name.clone(),
            image: record.image.clone(),
        }
    }
}

/// Payload of a [`VikingEvent::Deleted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeletedViking {
    pub number: VikingNumber,
}

/// Something that happened to a Viking. Serializes as its payload alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VikingEvent {
    /// The image was composited and the record stored.
    Generated(GeneratedViking),
    /// The record was removed through the admin path.
    Deleted(DeletedViking),
}

impl VikingEvent {
    /// Dot-separated name stored in `events.event_type`.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Generated(_) => VIKING_GENERATED,
            Self::Deleted(_) => VIKING_DELETED,
        }
    }

    pub fn number(&self) -> VikingNumber {
        match self {
            Self::Generated(generated) => generated.number,
            Self::Deleted(deleted) => deleted.number,
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// ```rust
/// use vikings_events::bus::{DeletedViking, EventBus, VikingEvent};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(VikingEvent::Deleted(DeletedViking { number: 7 }));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<VikingEvent>,
}

impl EventBus {
    /// When the buffer is full the oldest messages are dropped and slow
    /// receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish to all current subscribers. Dropped if there are none.
    pub fn publish(&self, event: VikingEvent) {
        // SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<VikingEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
