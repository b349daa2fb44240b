use std::path::PathBuf;

use vikings_core::error::CoreError;
use vikings_core::slot::Slot;
use vikings_core::types::VikingNumber;

/// Failure of a single Viking generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Raw trait data could not be turned into a specification.
    #[error(transparent)]
    Malformed(#[from] CoreError),

    /// One or more part images referenced by the specification do not exist.
    #[error("viking {number}: {} asset file(s) missing", .missing.len())]
    MissingAsset {
        number: VikingNumber,
        missing: Vec<(Slot, PathBuf)>,
    },

    /// Decoding, compositing or encoding failed.
    #[error("viking {number}: compositing failed: {message}")]
    Composite {
        number: VikingNumber,
        message: String,
    },

    /// A record for this number is already stored. Callers usually log and
    /// move on.
    #[error("viking {number} already exists")]
    Duplicate { number: VikingNumber },

    #[error("viking {number}: store error: {message}")]
    Store {
        number: VikingNumber,
        message: String,
    },
}

impl GenerationError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}
