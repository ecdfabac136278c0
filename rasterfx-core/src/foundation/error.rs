/// Convenience result type used across rasterfx.
pub type RasterFxResult<T> = Result<T, RasterFxError>;

/// Top-level error taxonomy used by filter APIs.
///
/// Every variant is raised before any output buffer is produced.
#[derive(thiserror::Error, Debug)]
pub enum RasterFxError {
    /// Pixel data whose length does not match `width * height * 4`.
    #[error("invalid buffer: {0}")]
    InvalidBuffer(String),

    /// Kernel weights that do not form a non-empty square of finite values.
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Filter identifier that does not name a known filter.
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    /// Filter parameter outside the domain of its filter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid engine settings.
    #[error("settings error: {0}")]
    Settings(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RasterFxError {
    /// Build a [`RasterFxError::InvalidBuffer`] value.
    pub fn invalid_buffer(msg: impl Into<String>) -> Self {
        Self::InvalidBuffer(msg.into())
    }

    /// Build a [`RasterFxError::InvalidKernel`] value.
    pub fn invalid_kernel(msg: impl Into<String>) -> Self {
        Self::InvalidKernel(msg.into())
    }

    /// Build a [`RasterFxError::UnknownFilter`] value.
    pub fn unknown_filter(msg: impl Into<String>) -> Self {
        Self::UnknownFilter(msg.into())
    }

    /// Build a [`RasterFxError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`RasterFxError::Settings`] value.
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
