use vikings_core::config::{env_opt, env_or, ConfigError};
use vikings_core::types::VikingNumber;
use vikings_pipeline::queue::DEFAULT_QUEUE_CAPACITY;
use vikings_pipeline::BatchPolicy;

/// Batch worker configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// First Viking number to mint.
    pub start: VikingNumber,
    /// How many consecutive numbers to mint.
    pub count: usize,
    /// Seed for the synthetic generator; random when unset.
    pub seed: Option<u64>,
    pub policy: BatchPolicy,
    /// Bound of the delivery channel.
    pub queue_capacity: usize,
    /// Keep records in memory instead of Postgres.
    pub dry_run: bool,
}

impl BatchConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default     |
    /// |------------------|-------------|
    /// | `BATCH_START`    | `1`         |
    /// | `BATCH_COUNT`    | `10`        |
    /// | `BATCH_SEED`     | *(random)*  |
    /// | `BATCH_POLICY`   | `skip`      |
    /// | `QUEUE_CAPACITY` | `64`        |
    /// | `BATCH_DRY_RUN`  | `false`     |
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            start: env_or("BATCH_START", 1)?,
            count: env_or("BATCH_COUNT", 10)?,
            seed: env_opt("BATCH_SEED")?,
            policy: env_or("BATCH_POLICY", BatchPolicy::Skip)?,
            queue_capacity: env_or("QUEUE_CAPACITY", DEFAULT_QUEUE_CAPACITY)?,
            dry_run: env_or("BATCH_DRY_RUN", false)?,
        };

        config.validate()
    }

    /// Reject ranges that start below zero or run past the largest number.
    fn validate(self) -> Result<Self, ConfigError> {
        if self.start < 0 {
            return Err(ConfigError {
                var: "BATCH_START",
                value: self.start.to_string(),
                reason: "must be non-negative".into(),
            });
        }

        let last_offset = VikingNumber::try_from(self.count.saturating_sub(1)).ok();
        if last_offset.and_then(|offset| self.start.checked_add(offset)).is_none() {
            return Err(ConfigError {
                var: "BATCH_COUNT",
                value: self.count.to_string(),
                reason: format!("runs past the largest Viking number from {}", self.start),
            });
        }
        Ok(self)
    }
}
