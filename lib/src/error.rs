//! Error types for the conversion pipeline

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while converting an image to ASCII art
///
/// Every failure is terminal for the call that produced it: no partial
/// output is ever returned alongside an error.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// No drawable surface could be produced by the platform adapter
    #[error("surface unavailable: {reason}")]
    EnvironmentUnsupported {
        /// Why the platform refused to create a surface
        reason: String,
    },

    /// The locator could not be fetched or decoded
    #[error("failed to load image {locator}: {reason}")]
    LoadFailure {
        /// The locator that was being resolved
        locator: String,
        /// Underlying fetch or decode failure
        reason: String,
    },

    /// Pixel samples could not be read back from the surface
    #[error("pixel read-back denied: {reason}")]
    PixelAccessDenied {
        /// Why the samples were withheld
        reason: String,
    },

    /// Degenerate conversion options
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// The decoded image has no pixels to sample
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

impl ConvertError {
    /// Build a [`ConvertError::LoadFailure`] from any displayable cause
    pub fn load(locator: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        ConvertError::LoadFailure {
            locator: locator.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error came out of the loading stage
    pub fn is_load_failure(&self) -> bool {
        matches!(self, ConvertError::LoadFailure { .. })
    }

    /// Short, stable name of the failure category
    pub fn category(&self) -> &'static str {
        match self {
            ConvertError::EnvironmentUnsupported { .. } => "surface unavailable",
            ConvertError::LoadFailure { .. } => "load failed",
            ConvertError::PixelAccessDenied { .. } => "pixel read-back denied",
            ConvertError::InvalidOptions(_) => "invalid options",
            ConvertError::EmptyImage { .. } => "empty image",
        }
    }
}
