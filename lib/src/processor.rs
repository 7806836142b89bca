use crate::ascii::map_to_ascii;
use crate::config::ConversionOptions;
use crate::error::Result;
use crate::loader::{ImageSource, resolve};
use crate::native::{DecodedImage, RasterPlatform};
use crate::platform::{PlatformAdapter, SourceImage, Surface};
use crate::ramp::AsciiRamp;

/// Renders a decoded image to ASCII art
///
/// This implements the full pipeline:
/// 1. Validate options and derive the character grid
/// 2. Draw the whole image onto a surface of exactly grid size
/// 3. Read the samples back
/// 4. Map each sample's luminance onto the ramp, row by row
///
/// # Arguments
/// * `platform` - Surface provider
/// * `image` - The decoded source image
/// * `options` - Grid size and ramp
///
/// # Returns
/// `height` newline-terminated lines of `width` characters
///
/// # Errors
/// `InvalidOptions` and `EmptyImage` before any drawing happens,
/// `EnvironmentUnsupported` when no surface is available or drawing fails,
/// `PixelAccessDenied` when the samples cannot be read back.
pub fn render<P>(platform: &P, image: &P::Image, options: &ConversionOptions) -> Result<String>
where
    P: PlatformAdapter,
{
    options.validate()?;
    let ramp = AsciiRamp::new(&options.ascii_ramp)?;

    let (image_width, image_height) = image.dimensions();
    let (width, height) = options.output_dimensions(image_width, image_height)?;
    log::debug!("rendering {image_width}x{image_height} image as {width}x{height} characters");

    let mut surface = platform.create_surface(width, height)?;
    surface.draw_image(image, width, height)?;
    let pixels = surface.read_pixels(0, 0, width, height)?;

    Ok(map_to_ascii(&pixels, &ramp))
}

/// Load-then-render pipeline bound to one platform adapter
///
/// Holds no per-call state: concurrent calls each get their own surface and
/// pixel buffer.
#[derive(Debug, Clone, Default)]
pub struct Converter<P> {
    platform: P,
}

impl<P: PlatformAdapter> Converter<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    /// Resolve `source` and render it
    ///
    /// Options are validated before anything is fetched, so degenerate
    /// options never cost a network round-trip.
    pub async fn convert(
        &self,
        source: impl Into<ImageSource<P::Image>>,
        options: &ConversionOptions,
    ) -> Result<String> {
        options.validate()?;
        let image = resolve(&self.platform, source.into()).await?;
        render(&self.platform, &image, options)
    }
}

/// Convert with the headless [`RasterPlatform`]
///
/// # Example
/// ```no_run
/// # async fn run() -> img2ascii::Result<()> {
/// let options = img2ascii::ConversionOptions::default().with_width(60);
/// let art = img2ascii::convert("photo.jpg", &options).await?;
/// print!("{art}");
/// # Ok(())
/// # }
/// ```
pub async fn convert(
    source: impl Into<ImageSource<DecodedImage>>,
    options: &ConversionOptions,
) -> Result<String> {
    Converter::new(RasterPlatform::default())
        .convert(source, options)
        .await
}
