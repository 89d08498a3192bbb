/// Convenience result type used across bgmaker.
pub type BgResult<T> = Result<T, BgError>;

/// Top-level error taxonomy used by the rendering and export APIs.
#[derive(thiserror::Error, Debug)]
pub enum BgError {
    /// Invalid user-provided configuration or control input.
    #[error("validation error: {0}")]
    Validation(String),

    /// The raster backend could not produce a surface.
    #[error("render error: {0}")]
    Render(String),

    /// Encoding the surface into an image file format failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Filesystem failure while writing an export.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors when serializing or deserializing configurations.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BgError {
    /// Build a [`BgError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BgError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BgError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`BgError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BgError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
