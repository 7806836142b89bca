use crate::error::{ConvertError, Result};
use serde::Deserialize;

/// Default number of character columns
pub const DEFAULT_WIDTH: u32 = 100;

/// Default ramp, densest character first
pub const DEFAULT_RAMP: &str = "@%#*+=-:. ";

/// Configuration for ASCII art conversion
///
/// Deserializing a partial table fills every missing key from [`Default`],
/// so defaults are applied exactly once at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Output columns, default 100
    pub width: u32,

    /// Output rows; derived from the image aspect ratio when absent
    pub height: Option<u32>,

    /// Characters ordered from darkest/densest to lightest/sparsest
    #[serde(alias = "asciiRamp")]
    pub ascii_ramp: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: None,
            ascii_ramp: DEFAULT_RAMP.to_string(),
        }
    }
}

impl ConversionOptions {
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_ramp(mut self, ramp: impl Into<String>) -> Self {
        self.ascii_ramp = ramp.into();
        self
    }

    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(ConvertError::InvalidOptions(
                "width must be at least 1".to_string(),
            ));
        }
        if self.height == Some(0) {
            return Err(ConvertError::InvalidOptions(
                "height must be at least 1 when given".to_string(),
            ));
        }
        if self.ascii_ramp.is_empty() {
            return Err(ConvertError::InvalidOptions(
                "ascii ramp must contain at least one character".to_string(),
            ));
        }
        Ok(())
    }

    /// Compute the character grid for a source image of the given size
    ///
    /// An explicit height wins. Otherwise the height is
    /// `round(width * image_height / image_width)`, never less than 1.
    pub fn output_dimensions(&self, image_width: u32, image_height: u32) -> Result<(u32, u32)> {
        if image_width == 0 || image_height == 0 {
            return Err(ConvertError::EmptyImage {
                width: image_width,
                height: image_height,
            });
        }

        let height = match self.height {
            Some(height) => height,
            None => {
                let aspect = f64::from(image_height) / f64::from(image_width);
                let derived = (f64::from(self.width) * aspect).round();
                // Saturating float-to-int cast, then clamp away from zero
                (derived as u32).max(1)
            }
        };

        Ok((self.width, height))
    }
}
