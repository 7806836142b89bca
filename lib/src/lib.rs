//! img2ascii - raster image to ASCII art converter
//!
//! An image is resampled onto a character grid, each cell's luminance is
//! computed with BT.601 weights and mapped onto a ramp of characters ordered
//! from darkest to lightest.
//!
//! Decoding and drawing are delegated to a [`PlatformAdapter`]. The crate
//! ships [`RasterPlatform`], a headless adapter built on the `image` crate.
//!
//! # Example
//! ```no_run
//! use img2ascii::{ConversionOptions, convert};
//!
//! # async fn run() -> img2ascii::Result<()> {
//! let options = ConversionOptions::default().with_width(80);
//! let art = convert("photo.jpg", &options).await?;
//! print!("{art}");
//! # Ok(())
//! # }
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod loader;
pub mod native;
pub mod platform;
pub mod processor;
pub mod ramp;
mod resample;

// Re-export main types for convenience
pub use config::{ConversionOptions, DEFAULT_RAMP, DEFAULT_WIDTH};
pub use error::{ConvertError, Result};
pub use loader::ImageSource;
pub use native::{DecodedImage, RasterPlatform};
pub use platform::{PixelBuffer, PlatformAdapter, SourceImage, Surface};
pub use processor::{Converter, convert, render};
pub use ramp::AsciiRamp;
