//! Delivery queue between the trait supplier and the generation pipeline.
//!
//! Producers (the chain listener, the batch worker) push [`Delivery`]s into
//! a bounded `tokio::sync::mpsc` channel; a single [`GenerationQueue`]
//! consumes them in order and runs each through [`GenerationPipeline`].

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use vikings_core::input::RawTraitInput;
use vikings_core::types::VikingNumber;

use crate::error::GenerationError;
use crate::generator::GenerationPipeline;

/// Default channel capacity for [`delivery_channel`].
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Raw trait data for one freshly minted Viking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub number: VikingNumber,
    pub input: RawTraitInput,
}

/// Create the bounded delivery channel. Senders wait when it is full.
pub fn delivery_channel(capacity: usize) -> (mpsc::Sender<Delivery>, mpsc::Receiver<Delivery>) {
    mpsc::channel(capacity.max(1))
}

/// What the consumer does after a delivery fails.
///
/// Duplicates are never failures: they are logged and skipped under both
/// policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchPolicy {
    /// Log the failure and continue with the next delivery.
    #[default]
    Skip,
    /// Stop consuming after the first failure.
    Abort,
}

impl FromStr for BatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            other => Err(format!("unknown batch policy '{other}' (expected skip or abort)")),
        }
    }
}

/// Outcome counts for one [`GenerationQueue::run`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueueSummary {
    pub generated: usize,
    pub duplicates: usize,
    pub failed: Vec<VikingNumber>,
    /// `true` if the run stopped early under [`BatchPolicy::Abort`].
    pub aborted: bool,
    /// `true` if the run stopped because the token was cancelled.
    pub cancelled: bool,
}

impl QueueSummary {
    pub fn processed(&self) -> usize {
        self.generated + self.duplicates + self.failed.len()
    }
}

/// Single consumer of the delivery channel.
pub struct GenerationQueue {
    pipeline: Arc<GenerationPipeline>,
    policy: BatchPolicy,
}

impl GenerationQueue {
    pub fn new(pipeline: Arc<GenerationPipeline>, policy: BatchPolicy) -> Self {
        Self { pipeline, policy }
    }

    /// Consume deliveries until every sender is dropped, the token is
    /// cancelled, or a failure occurs under [`BatchPolicy::Abort`].
    ///
    /// A delivery already being generated when the token fires runs to
    /// completion.
    pub async fn run(
        &self,
        mut receiver: mpsc::Receiver<Delivery>,
        cancel: CancellationToken,
    ) -> QueueSummary {
        let mut summary = QueueSummary::default();
        tracing::info!(policy = ?self.policy, "Generation queue started");

        loop {
            let delivery = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::info!("Generation queue cancelled");
                    summary.cancelled = true;
                    break;
                }
                next = receiver.recv() => match next {
                    Some(delivery) => delivery,
                    None => break,
                },
            };

            if !self.handle(delivery, &mut summary).await {
                summary.aborted = true;
                break;
            }
        }

        tracing::info!(
            generated = summary.generated,
            duplicates = summary.duplicates,
            failed = summary.failed.len(),
            aborted = summary.aborted,
            "Generation queue stopped"
        );
        summary
    }

    /// Process one delivery. Returns `false` if the queue should stop.
    async fn handle(&self, delivery: Delivery, summary: &mut QueueSummary) -> bool {
        let number = delivery.number;
        match self.pipeline.generate(number, delivery.input).await {
            Ok(_) => {
                summary.generated += 1;
                true
            }
            Err(GenerationError::Duplicate { .. }) => {
                tracing::warn!(number, "Viking already exists, skipping delivery");
                summary.duplicates += 1;
                true
            }
            Err(e) => {
                tracing::error!(number, error = %e, "Viking generation failed");
                summary.failed.push(number);
                self.policy == BatchPolicy::Skip
            }
        }
    }
}
