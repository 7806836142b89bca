//! Area (box) resampling onto the character grid

use crate::error::{ConvertError, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::RgbaImage;

/// Resample `src` onto a `width × height` grid with a box filter
///
/// The full source extent is mapped onto the full grid, for both down- and
/// up-scaling. Channels are filtered independently; alpha is not
/// premultiplied, so transparent pixels keep their stored colour.
///
/// # Arguments
/// * `src` - Source RGBA image
/// * `width` - Destination width
/// * `height` - Destination height
///
/// # Errors
/// `EnvironmentUnsupported` if either image is empty or the resize fails.
pub(crate) fn box_resample(src: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage> {
    let unsupported = |reason: String| ConvertError::EnvironmentUnsupported { reason };

    let (src_width, src_height) = src.dimensions();
    if src_width == 0 || src_height == 0 || width == 0 || height == 0 {
        return Err(unsupported(format!(
            "cannot resample {src_width}x{src_height} onto {width}x{height}"
        )));
    }
    if (src_width, src_height) == (width, height) {
        return Ok(src.clone());
    }

    // fast_image_resize takes the source by value; copy out of the borrowed image
    let src_image = Image::from_vec_u8(src_width, src_height, src.as_raw().clone(), PixelType::U8x4)
        .map_err(|e| unsupported(format!("invalid {src_width}x{src_height} source: {e}")))?;
    let mut dst_image = Image::new(width, height, PixelType::U8x4);

    let options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Box))
        .use_alpha(false);
    Resizer::new()
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| unsupported(format!("resize to {width}x{height} failed: {e}")))?;

    RgbaImage::from_raw(width, height, dst_image.into_vec())
        .ok_or_else(|| unsupported(format!("resized buffer does not fit {width}x{height}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_output_dimensions() {
        let img = RgbaImage::new(37, 23);
        assert_eq!(box_resample(&img, 10, 4).unwrap().dimensions(), (10, 4));
        assert_eq!(box_resample(&img, 80, 60).unwrap().dimensions(), (80, 60));
    }

    #[test]
    fn test_uniform_image_stays_uniform() {
        let img = RgbaImage::from_pixel(97, 41, Rgba([128, 128, 128, 255]));
        let out = box_resample(&img, 13, 7).unwrap();
        for pixel in out.pixels() {
            assert_eq!(*pixel, Rgba([128, 128, 128, 255]));
        }
    }

    #[test]
    fn test_extremes_survive_resampling() {
        for level in [0, 255] {
            let img = RgbaImage::from_pixel(400, 300, Rgba([level, level, level, 255]));
            let out = box_resample(&img, 33, 9).unwrap();
            assert!(out.pixels().all(|px| px.0[..3] == [level; 3]), "level {level}");
        }
    }

    #[test]
    fn test_halves_are_averaged_separately() {
        // Left half black, right half white, halved in both axes
        let img = RgbaImage::from_fn(40, 20, |x, _| {
            if x < 20 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        let out = box_resample(&img, 2, 1).unwrap();
        assert!(out.get_pixel(0, 0)[0] < 64);
        assert!(out.get_pixel(1, 0)[0] > 191);
    }

    #[test]
    fn test_transparent_pixels_keep_colour() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([200, 200, 200, 0]));
        let out = box_resample(&img, 4, 4).unwrap();
        assert_eq!(out.get_pixel(0, 0).0[..3], [200, 200, 200]);
    }

    #[test]
    fn test_empty_source_is_an_error() {
        let img = RgbaImage::new(0, 0);
        assert!(matches!(
            box_resample(&img, 4, 4),
            Err(ConvertError::EnvironmentUnsupported { .. })
        ));
    }
}
