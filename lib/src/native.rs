//! Headless raster platform
//!
//! Decodes with the `image` crate, draws into plain RGBA buffers and fetches
//! remote locators over HTTP. This is the adapter a command-line or server
//! process injects.

use crate::error::{ConvertError, Result};
use crate::platform::{PixelBuffer, PlatformAdapter, SourceImage, Surface};
use crate::resample::box_resample;
use image::{DynamicImage, RgbaImage};
use reqwest::Url;
use std::path::PathBuf;

/// Default cap on surface size: 64 megapixels
pub const DEFAULT_MAX_SURFACE_PIXELS: u64 = 64 * 1024 * 1024;

/// An in-memory decoded image
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pixels: RgbaImage,
}

impl DecodedImage {
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            pixels: image.to_rgba8(),
        }
    }

    /// Decode an encoded image held in memory
    ///
    /// `locator` is only used to label the error.
    pub fn from_bytes(locator: &str, bytes: &[u8]) -> Result<Self> {
        image::load_from_memory(bytes)
            .map(Self::from_dynamic)
            .map_err(|e| ConvertError::load(locator, e))
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl SourceImage for DecodedImage {
    fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

/// A plain RGBA drawing surface, transparent black until drawn on
#[derive(Debug, Clone)]
pub struct RasterSurface {
    canvas: RgbaImage,
}

impl Surface<DecodedImage> for RasterSurface {
    fn draw_image(&mut self, image: &DecodedImage, width: u32, height: u32) -> Result<()> {
        let (surface_width, surface_height) = self.canvas.dimensions();
        let width = width.min(surface_width);
        let height = height.min(surface_height);

        let scaled = box_resample(image.as_rgba(), width, height)?;
        image::imageops::replace(&mut self.canvas, &scaled, 0, 0);
        Ok(())
    }

    fn read_pixels(&self, x: u32, y: u32, width: u32, height: u32) -> Result<PixelBuffer> {
        let (surface_width, surface_height) = self.canvas.dimensions();
        let fits = x.checked_add(width).is_some_and(|r| r <= surface_width)
            && y.checked_add(height).is_some_and(|b| b <= surface_height);
        if !fits {
            return Err(ConvertError::PixelAccessDenied {
                reason: format!(
                    "region {width}x{height}+{x}+{y} outside {surface_width}x{surface_height} surface"
                ),
            });
        }

        let region = image::imageops::crop_imm(&self.canvas, x, y, width, height).to_image();
        PixelBuffer::from_raw(width, height, region.into_raw())
    }
}

/// Headless platform adapter
#[derive(Debug, Clone)]
pub struct RasterPlatform {
    max_surface_pixels: u64,
    client: reqwest::Client,
}

impl Default for RasterPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterPlatform {
    pub fn new() -> Self {
        Self {
            max_surface_pixels: DEFAULT_MAX_SURFACE_PIXELS,
            client: reqwest::Client::new(),
        }
    }

    /// Refuse surfaces larger than `pixels` in total
    pub fn with_max_surface_pixels(mut self, pixels: u64) -> Self {
        self.max_surface_pixels = pixels;
        self
    }

    async fn fetch(&self, locator: &str) -> Result<Vec<u8>> {
        if is_remote(locator) {
            return self.fetch_remote(locator).await;
        }

        let path = local_path(locator)?;
        tokio::fs::read(path)
            .await
            .map_err(|e| ConvertError::load(locator, e))
    }

    async fn fetch_remote(&self, locator: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(locator)
            .send()
            .await
            .map_err(|e| ConvertError::load(locator, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConvertError::load(locator, format!("HTTP {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ConvertError::load(locator, e))?;
        Ok(bytes.to_vec())
    }
}

fn is_remote(locator: &str) -> bool {
    let lower = locator.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Filesystem path for a plain path or a `file:` URL
///
/// `file:` URLs are percent-decoded and may name `localhost` as their host.
fn local_path(locator: &str) -> Result<PathBuf> {
    if !locator.get(..5).is_some_and(|scheme| scheme.eq_ignore_ascii_case("file:")) {
        return Ok(PathBuf::from(locator));
    }

    let url = Url::parse(locator).map_err(|e| ConvertError::load(locator, e))?;
    url.to_file_path()
        .map_err(|()| ConvertError::load(locator, "file URL does not name a local path"))
}

impl PlatformAdapter for RasterPlatform {
    type Image = DecodedImage;
    type Surface = RasterSurface;

    fn create_surface(&self, width: u32, height: u32) -> Result<RasterSurface> {
        let pixels = u64::from(width) * u64::from(height);
        if pixels == 0 {
            return Err(ConvertError::EnvironmentUnsupported {
                reason: format!("cannot allocate a {width}x{height} surface"),
            });
        }
        if pixels > self.max_surface_pixels {
            return Err(ConvertError::EnvironmentUnsupported {
                reason: format!(
                    "{width}x{height} surface exceeds the {} pixel limit",
                    self.max_surface_pixels
                ),
            });
        }

        Ok(RasterSurface {
            canvas: RgbaImage::new(width, height),
        })
    }

    async fn decode(&self, locator: &str) -> Result<DecodedImage> {
        let bytes = self.fetch(locator).await?;
        log::debug!("fetched {} bytes from {locator}", bytes.len());

        let owned = locator.to_string();
        tokio::task::spawn_blocking(move || DecodedImage::from_bytes(&owned, &bytes))
            .await
            .map_err(|e| ConvertError::load(locator, e))?
    }
}
