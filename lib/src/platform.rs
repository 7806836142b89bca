//! Platform collaborators
//!
//! The pipeline never decodes images or allocates drawing surfaces itself.
//! Those capabilities come from a [`PlatformAdapter`] chosen by the host
//! application at startup: [`crate::native::RasterPlatform`] for a headless
//! process, or any other implementation with the same contracts.

use crate::error::{ConvertError, Result};
use std::future::Future;

/// Row-major RGBA samples read back from a surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes, checking that the length matches the dimensions
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4));
        if expected != Some(data.len()) {
            return Err(ConvertError::PixelAccessDenied {
                reason: format!(
                    "surface returned {} bytes for a {width}x{height} region",
                    data.len()
                ),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over rows of RGBA samples, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let stride = (self.width as usize * 4).max(1);
        self.data.chunks_exact(stride)
    }
}

/// A decoded image with known intrinsic size
pub trait SourceImage {
    /// `(width, height)` in pixels
    fn dimensions(&self) -> (u32, u32);
}

/// A drawable surface of fixed pixel size
pub trait Surface<I: SourceImage> {
    /// Draw `image` scaled to cover exactly `width × height` pixels at the origin
    ///
    /// Fails with [`ConvertError::EnvironmentUnsupported`] when the image
    /// cannot be drawn.
    fn draw_image(&mut self, image: &I, width: u32, height: u32) -> Result<()>;

    /// Read back the RGBA samples of a rectangular region
    fn read_pixels(&self, x: u32, y: u32, width: u32, height: u32) -> Result<PixelBuffer>;
}

/// The three capabilities the pipeline needs from its environment
pub trait PlatformAdapter {
    type Image: SourceImage;
    type Surface: Surface<Self::Image>;

    /// Create a surface of the given pixel size
    ///
    /// Fails with [`ConvertError::EnvironmentUnsupported`] when no surface
    /// can be provided.
    fn create_surface(&self, width: u32, height: u32) -> Result<Self::Surface>;

    /// Fetch and decode the resource named by `locator`
    ///
    /// Resolves exactly once. Fails with [`ConvertError::LoadFailure`].
    fn decode(&self, locator: &str) -> impl Future<Output = Result<Self::Image>> + Send;
}
