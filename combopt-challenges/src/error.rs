use combopt_utils::QuantizeError;

/// Rejections raised before any computation starts. Every entry point
/// validates eagerly, so an `Err` never comes with a partial result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Infeasible: requested {requested} items but only {available} are available")]
    Infeasible { requested: usize, available: usize },

    #[error("Unsupported: {0}")]
    Unsupported(String),

    #[error("Resource limit exceeded: {0}")]
    ResourceLimit(String),
}

impl From<QuantizeError> for Error {
    fn from(e: QuantizeError) -> Self {
        match e {
            QuantizeError::InvalidMagnitude(_) => Error::InvalidInput(e.to_string()),
            QuantizeError::TooPrecise { .. } | QuantizeError::Overflow { .. } => {
                Error::ResourceLimit(e.to_string())
            }
        }
    }
}
