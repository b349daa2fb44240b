use crate::types::VikingNumber;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with number {number}")]
    NotFound {
        entity: &'static str,
        number: VikingNumber,
    },

    /// Raw trait data from the upstream supplier could not be interpreted.
    #[error("Malformed input for viking {number}: {field} {detail}")]
    MalformedInput {
        number: VikingNumber,
        field: &'static str,
        detail: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    pub(crate) fn malformed(
        number: VikingNumber,
        field: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self::MalformedInput {
            number,
            field,
            detail: detail.into(),
        }
    }
}
