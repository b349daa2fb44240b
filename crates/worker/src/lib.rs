//! Batch minting worker.
//!
//! Feeds a range of synthetic deliveries through the generation queue, the
//! same path the chain listener uses, and reports what happened.

pub mod batch;
pub mod config;

pub use batch::run_batch;
pub use config::BatchConfig;
