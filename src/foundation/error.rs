/// Convenience result type used across parcoord.
pub type ParcoordResult<T> = Result<T, ParcoordError>;

/// Top-level error taxonomy used by chart and rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum ParcoordError {
    /// Invalid user-provided records, scores, colors or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// An operation was called before the chart reached the state it needs.
    #[error("state error: {0}")]
    State(String),

    /// Errors while rasterizing or writing a rendered figure.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing chart documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ParcoordError {
    /// Build a [`ParcoordError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ParcoordError::State`] value.
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Build a [`ParcoordError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ParcoordError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
