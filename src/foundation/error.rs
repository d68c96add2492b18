/// Convenience result type used across Chalkline.
pub type ChalklineResult<T> = Result<T, ChalklineError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ChalklineError {
    /// Invalid user-provided document or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or re-timing a schedule.
    #[error("schedule error: {0}")]
    Schedule(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChalklineError {
    /// Build a [`ChalklineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChalklineError::Schedule`] value.
    pub fn schedule(msg: impl Into<String>) -> Self {
        Self::Schedule(msg.into())
    }

    /// Build a [`ChalklineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
