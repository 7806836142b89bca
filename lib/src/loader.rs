//! Image loading
//!
//! Turns an [`ImageSource`] into a decoded image. Locators are handed to the
//! platform decoder in a single attempt; already-decoded images pass straight
//! through without suspending.

use crate::error::Result;
use crate::platform::PlatformAdapter;
use std::path::Path;

/// What the caller wants converted
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource<I> {
    /// URL, path or other identifier understood by the platform decoder
    Locator(String),
    /// An image the caller has already decoded
    Decoded(I),
}

impl<I> From<&str> for ImageSource<I> {
    fn from(locator: &str) -> Self {
        ImageSource::Locator(locator.to_string())
    }
}

impl<I> From<String> for ImageSource<I> {
    fn from(locator: String) -> Self {
        ImageSource::Locator(locator)
    }
}

impl<I> From<&Path> for ImageSource<I> {
    fn from(path: &Path) -> Self {
        ImageSource::Locator(path.to_string_lossy().into_owned())
    }
}

impl From<crate::native::DecodedImage> for ImageSource<crate::native::DecodedImage> {
    fn from(image: crate::native::DecodedImage) -> Self {
        ImageSource::Decoded(image)
    }
}

/// Resolve a source into a decoded image
///
/// # Errors
/// Propagates the platform's [`crate::ConvertError::LoadFailure`] unchanged.
pub async fn resolve<P>(platform: &P, source: ImageSource<P::Image>) -> Result<P::Image>
where
    P: PlatformAdapter,
{
    match source {
        ImageSource::Decoded(image) => Ok(image),
        ImageSource::Locator(locator) => {
            log::debug!("decoding {locator}");
            platform.decode(&locator).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::{DecodedImage, RasterPlatform};
    use image::RgbaImage;
    use std::future::Future;
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    #[tokio::test]
    async fn test_decoded_passes_through() {
        let image = DecodedImage::from_rgba(RgbaImage::new(3, 2));
        let resolved = resolve(&RasterPlatform::new(), ImageSource::Decoded(image.clone()))
            .await
            .unwrap();
        assert_eq!(resolved, image);
    }

    #[tokio::test]
    async fn test_missing_locator_fails() {
        let source: ImageSource<DecodedImage> = "no-such-image.png".into();
        let err = resolve(&RasterPlatform::new(), source).await.unwrap_err();
        assert!(err.is_load_failure());
    }

    #[test]
    fn test_decoded_ready_on_first_poll() {
        let image = DecodedImage::from_rgba(RgbaImage::new(3, 2));
        let platform = RasterPlatform::new();
        let mut resolving = pin!(resolve(&platform, ImageSource::Decoded(image.clone())));

        let mut cx = Context::from_waker(Waker::noop());
        match resolving.as_mut().poll(&mut cx) {
            Poll::Ready(Ok(resolved)) => assert_eq!(resolved, image),
            Poll::Ready(Err(e)) => panic!("unexpected error: {e}"),
            Poll::Pending => panic!("decoded image suspended"),
        }
    }

    #[test]
    fn test_path_becomes_locator() {
        let source: ImageSource<DecodedImage> = Path::new("cat.png").into();
        assert_eq!(source, ImageSource::Locator("cat.png".to_string()));
    }
}
