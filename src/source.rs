//! The currently selected image source.
//!
//! Exactly one source is active at a time: nothing, a static picture, or the
//! live webcam preview. The tagged enum makes invalid combinations (a picture
//! and a running camera at once) unrepresentable, and every transition away
//! from the camera state goes through [`ImageSource::replace`], which releases
//! the device before the new source takes over.

use crate::camera::{CameraSession, CapturedStill};
use iced::widget::image::Handle;

/// A fixed picture together with the encoded bytes it came from.
///
/// The payload that gets submitted to the solver is kept next to the display
/// handle, so submission never has to re-read or re-encode anything.
#[derive(Debug, Clone)]
pub struct StaticImage {
    pub bytes: Vec<u8>,
    pub handle: Handle,
}

impl StaticImage {
    /// From an already-encoded file (picked or dropped).
    pub fn from_encoded(bytes: Vec<u8>) -> StaticImage {
        let handle = Handle::from_bytes(bytes.clone());
        StaticImage { bytes, handle }
    }

    /// From a frozen webcam frame.
    pub fn from_still(still: CapturedStill) -> StaticImage {
        let handle = Handle::from_rgba(still.width, still.height, still.pixels);
        StaticImage {
            bytes: still.jpeg,
            handle,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum ImageSource {
    #[default]
    Empty,
    Static(StaticImage),
    AwaitingCapture {
        session: CameraSession,
        /// A photo is being frozen; the state holds the camera until the
        /// encoded still is ready.
        encoding: bool,
    },
}

impl ImageSource {
    /// Swaps in a new source, releasing the camera if the old one held it.
    pub fn replace(&mut self, next: ImageSource) {
        if let ImageSource::AwaitingCapture { session, .. } = &*self {
            session.release();
        }
        log::debug!(
            "image source: {} -> {}",
            self.description(),
            next.description()
        );
        *self = next;
    }

    pub fn reset(&mut self) {
        self.replace(ImageSource::Empty);
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ImageSource::Empty)
    }

    pub fn is_live(&self) -> bool {
        matches!(self, ImageSource::AwaitingCapture { .. })
    }

    pub fn static_image(&self) -> Option<&StaticImage> {
        match self {
            ImageSource::Static(image) => Some(image),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&CameraSession> {
        match self {
            ImageSource::AwaitingCapture { session, .. } => Some(session),
            _ => None,
        }
    }

    /// Marks the camera state as busy freezing a frame.
    ///
    /// Returns the session to capture from, or `None` when no camera is
    /// active or a capture is already running.
    pub fn begin_encoding(&mut self) -> Option<CameraSession> {
        match self {
            ImageSource::AwaitingCapture { session, encoding } if !*encoding => {
                *encoding = true;
                Some(session.clone())
            }
            _ => None,
        }
    }

    /// Clears the busy flag after a failed capture so the user can retry.
    pub fn abort_encoding(&mut self) {
        if let ImageSource::AwaitingCapture { encoding, .. } = self {
            *encoding = false;
        }
    }

    pub fn is_encoding(&self) -> bool {
        matches!(
            self,
            ImageSource::AwaitingCapture { encoding: true, .. }
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            ImageSource::Empty => "empty",
            ImageSource::Static(_) => "static image",
            ImageSource::AwaitingCapture { .. } => "live camera",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraSession;

    fn live() -> ImageSource {
        ImageSource::AwaitingCapture {
            session: CameraSession::stub(),
            encoding: false,
        }
    }

    fn static_source() -> ImageSource {
        ImageSource::Static(StaticImage::from_encoded(vec![0xFF, 0xD8, 0xFF]))
    }

    #[test]
    fn replacing_the_camera_state_releases_the_device() {
        for next in [ImageSource::Empty, static_source(), live()] {
            let mut source = live();
            let session = source.session().expect("camera state").clone();

            source.replace(next);
            assert!(session.is_released());
        }
    }

    #[test]
    fn replacing_a_static_source_does_not_touch_the_camera() {
        let mut source = static_source();
        source.replace(static_source());
        assert!(source.static_image().is_some());

        source.reset();
        assert!(source.is_empty());
    }

    #[test]
    fn only_one_source_is_active_at_a_time() {
        let mut source = ImageSource::default();
        assert!(source.is_empty());

        source.replace(static_source());
        assert!(source.static_image().is_some());
        assert!(source.session().is_none());

        source.replace(live());
        assert!(source.static_image().is_none());
        assert!(source.session().is_some());
    }

    #[test]
    fn encoding_can_start_once_per_capture() {
        let mut source = live();
        assert!(source.begin_encoding().is_some());
        assert!(source.is_encoding());

        // a second trigger is ignored until the first resolves
        assert!(source.begin_encoding().is_none());

        source.abort_encoding();
        assert!(source.begin_encoding().is_some());
    }

    #[test]
    fn encoding_never_starts_without_a_camera() {
        let mut source = ImageSource::Empty;
        assert!(source.begin_encoding().is_none());

        let mut source = static_source();
        assert!(source.begin_encoding().is_none());
    }
}
