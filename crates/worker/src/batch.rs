//! Synthetic batch run over the delivery queue.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use vikings_pipeline::{delivery_channel, GenerationPipeline, GenerationQueue, QueueSummary};
use vikings_pipeline::SyntheticGenerator;

use crate::config::BatchConfig;

/// Mint `config.count` Vikings starting at `config.start`.
///
/// A producer task draws synthetic deliveries one at a time and pushes them
/// into the bounded channel while the queue consumes them, so at most
/// `queue_capacity` inputs are pending. Cancelling `cancel` stops both
/// after the delivery in flight.
pub async fn run_batch(
    config: &BatchConfig,
    pipeline: Arc<GenerationPipeline>,
    cancel: CancellationToken,
) -> QueueSummary {
    let (sender, receiver) = delivery_channel(config.queue_capacity);
    let deliveries =
        SyntheticGenerator::from_seed(config.seed).deliveries(config.start, config.count);

    tracing::info!(
        start = config.start,
        count = config.count,
        seed = ?config.seed,
        policy = ?config.policy,
        "Batch started"
    );

    let producer_cancel = cancel.clone();
    let producer = tokio::spawn(async move {
        for delivery in deliveries {
            let number = delivery.number;
            tokio::select! {
                _ = producer_cancel.cancelled() => break,
                sent = sender.send(delivery) => {
                    if sent.is_err() {
                        // Consumer stopped (abort policy or cancellation).
                        tracing::debug!(number, "Delivery queue closed, producer stopping");
                        break;
                    }
                }
            }
        }
    });

    let queue = GenerationQueue::new(pipeline, config.policy);
    let summary = queue.run(receiver, cancel).await;

    if let Err(e) = producer.await {
        tracing::error!(error = %e, "Delivery producer task failed");
    }

    tracing::info!(
        generated = summary.generated,
        duplicates = summary.duplicates,
        failed = ?summary.failed,
        aborted = summary.aborted,
        cancelled = summary.cancelled,
        "Batch finished"
    );
    summary
}
