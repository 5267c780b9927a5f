use thiserror::Error;

/// Failure of a clipping operation.
///
/// `InvalidInput` is raised for malformed rings before the sweep starts,
/// `InternalInvariant` when the sweep or the ring reconstruction reaches a
/// state that consistent input can never produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipperError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),
}

impl ClipperError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalInvariant(message.into())
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::InternalInvariant(_))
    }
}

pub type ClipperResult<T> = Result<T, ClipperError>;
