//! Freezing a live preview into a still image.

use crate::camera::{CameraError, CameraSession};
use crate::config::CAPTURE_JPEG_QUALITY;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType};

/// A single webcam frame, frozen and encoded.
///
/// Keeps both the JPEG payload sent to the solver and the raw pixels used to
/// display the frame, so nothing has to be decoded again later.
#[derive(Debug, Clone)]
pub struct CapturedStill {
    pub jpeg: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Snapshots the latest frame of `session` and encodes it to JPEG.
///
/// Encoding runs on a blocking worker so the UI keeps responding; the caller
/// matches the result against [`CameraSession::id`] before applying it, since
/// the camera state may have been left while the frame was encoding.
pub async fn capture_still(session: CameraSession) -> Result<CapturedStill, CameraError> {
    let task = tokio::task::spawn_blocking(move || {
        let frame = session.latest_frame().ok_or_else(|| {
            CameraError::Capture("the camera has not delivered a frame yet".to_string())
        })?;

        let (width, height) = frame.dimensions();
        let pixels = frame.as_raw().clone();

        // JPEG carries no alpha channel
        let rgb = DynamicImage::ImageRgba8(frame).into_rgb8();

        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, CAPTURE_JPEG_QUALITY)
            .encode(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
            .map_err(|e| CameraError::Capture(e.to_string()))?;

        log::debug!("captured {width}x{height} frame, {} bytes of JPEG", jpeg.len());

        Ok(CapturedStill {
            jpeg,
            width,
            height,
            pixels,
        })
    });

    match task.await {
        Ok(result) => result,
        Err(e) => Err(CameraError::Capture(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[tokio::test]
    async fn capture_fails_before_the_first_frame() {
        let session = CameraSession::stub();
        let result = capture_still(session).await;
        assert!(matches!(result, Err(CameraError::Capture(_))));
    }

    #[tokio::test]
    async fn capture_encodes_the_latest_frame() {
        let mut frame = RgbaImage::new(32, 24);
        for pixel in frame.pixels_mut() {
            *pixel = image::Rgba([180, 40, 40, 255]);
        }

        let session = CameraSession::stub_with_frame(frame);
        let still = capture_still(session).await.expect("capture should succeed");

        assert_eq!((still.width, still.height), (32, 24));
        assert_eq!(still.pixels.len(), 32 * 24 * 4);
        // JPEG magic bytes
        assert_eq!(&still.jpeg[..2], &[0xFF, 0xD8]);
    }
}
