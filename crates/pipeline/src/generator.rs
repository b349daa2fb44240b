//! One-Viking generation: derive, composite, store, announce.

use std::sync::Arc;

use vikings_core::config::AssetConfig;
use vikings_core::input::RawTraitInput;
use vikings_core::metadata::VikingRecord;
use vikings_core::specification::build_specification;
use vikings_core::store::{StoreError, VikingStore};
use vikings_core::types::VikingNumber;
use vikings_events::{EventBus, GeneratedViking, VikingEvent};

use crate::compositor::render_image;
use crate::error::GenerationError;

/// Runs the full generation for a single delivery.
///
/// Cheap to share behind an `Arc`; every collaborator is reference counted.
pub struct GenerationPipeline {
    config: Arc<AssetConfig>,
    store: Arc<dyn VikingStore>,
    events: Option<Arc<EventBus>>,
}

impl GenerationPipeline {
    pub fn new(config: Arc<AssetConfig>, store: Arc<dyn VikingStore>) -> Self {
        Self {
            config,
            store,
            events: None,
        }
    }

    /// Publish a `viking.generated` event for every stored record.
    pub fn with_events(mut self, bus: Arc<EventBus>) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn config(&self) -> &AssetConfig {
        &self.config
    }

    /// Generate Viking `number` from its raw trait data.
    ///
    /// Derives the specification and renders the image on the blocking
    /// pool into a temporary file, then stores the record. The image is
    /// moved to `viking_{number}.png` only once the insert succeeded; any
    /// earlier failure, including a dropped future, leaves the output
    /// directory untouched. A number that is already stored is reported as
    /// [`GenerationError::Duplicate`]. No step is retried.
    pub async fn generate(
        &self,
        number: VikingNumber,
        input: RawTraitInput,
    ) -> Result<VikingRecord, GenerationError> {
        let spec = build_specification(&self.config, number, &input)?;

        if self.store.exists(number).await.map_err(|e| store_error(number, e))? {
            return Err(GenerationError::Duplicate { number });
        }

        let output_dir = self.config.output_dir.clone();
        let render_spec = spec.clone();
        let rendered =
            tokio::task::spawn_blocking(move || render_image(&render_spec, &output_dir))
                .await
                .map_err(|e| GenerationError::Composite {
                    number,
                    message: format!("compositing task failed: {e}"),
                })??;

        let record = VikingRecord::from_specification(&spec, &input, &self.config.description);
        self.store
            .insert(&record)
            .await
            .map_err(|e| store_error(number, e))?;

        let path = match rendered.persist() {
            Ok(path) => path,
            Err(e) => {
                tracing::error!(number, error = %e, "Image persist failed, removing record");
                if let Err(remove_err) = self.store.remove(number).await {
                    tracing::error!(number, error = %remove_err, "Failed to roll back record");
                }
                return Err(e);
            }
        };

        tracing::info!(
            number,
            image = %path.display(),
            body = %record.body,
            weapon = %record.weapon_type,
            "Viking generated"
        );

        if let Some(bus) = &self.events {
            bus.publish(VikingEvent::Generated(GeneratedViking::from(&record)));
        }

        Ok(record)
    }
}

fn store_error(number: VikingNumber, err: StoreError) -> GenerationError {
    match err {
        StoreError::Duplicate(n) => GenerationError::Duplicate { number: n },
        StoreError::Backend(message) => GenerationError::Store { number, message },
    }
}
