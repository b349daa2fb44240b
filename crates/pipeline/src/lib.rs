//! Viking generation pipeline.
//!
//! Composites the layered artwork for a derived
//! [`AssetSpecification`](vikings_core::specification::AssetSpecification),
//! stores the resulting record and fans the outcome out on the event bus.
//! Deliveries arrive through a bounded queue fed by the chain listener,
//! the HTTP API or the [`synthetic`] generator.

pub mod compositor;
pub mod error;
pub mod generator;
pub mod queue;
pub mod synthetic;

pub use compositor::{compose_image, render_image, RenderedImage, OUTPUT_SIZE};
pub use error::GenerationError;
pub use generator::GenerationPipeline;
pub use queue::{delivery_channel, BatchPolicy, Delivery, GenerationQueue, QueueSummary};
pub use synthetic::SyntheticGenerator;
