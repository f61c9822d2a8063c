//! Webcam acquisition and release.
//!
//! A [`CameraSession`] owns one capture device for its whole lifetime. Frames
//! are grabbed on a dedicated thread and published into a shared slot; the GUI
//! polls the slot for the live preview. Release is idempotent and also happens
//! when the last handle to the session is dropped, so a device can never stay
//! acquired past the state that holds it.

use image::RgbaImage;
use nokhwa::Camera;
use nokhwa::pixel_format::RgbAFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

/// Consecutive frame failures after which the capture thread gives up.
const MAX_FRAME_FAILURES: u8 = 5;

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(0);

pub type SharedFrame = Arc<Mutex<Option<RgbaImage>>>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CameraError {
    #[error("webcam unavailable: {0}")]
    DeviceUnavailable(String),
    #[error("could not capture a photo: {0}")]
    Capture(String),
}

/// Stops the capture thread when the last session handle goes away.
#[derive(Debug)]
struct ReleaseGuard {
    stop: Arc<AtomicBool>,
}

impl Drop for ReleaseGuard {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

#[derive(Debug, Clone)]
pub struct CameraSession {
    id: u64,
    frame: SharedFrame,
    stop: Arc<AtomicBool>,
    _guard: Arc<ReleaseGuard>,
}

impl CameraSession {
    /// Acquires the capture device at `index` and starts streaming frames.
    ///
    /// Blocks until the device reports ready or fails to open, so call it from
    /// a blocking task, not from the UI thread.
    pub fn open(index: u32) -> Result<CameraSession, CameraError> {
        let stop = Arc::new(AtomicBool::new(false));
        let frame: SharedFrame = Arc::new(Mutex::new(None));
        let (ready_tx, ready_rx) = mpsc::channel();

        let thread_stop = Arc::clone(&stop);
        let slot = Arc::clone(&frame);

        thread::Builder::new()
            .name("camera-capture".to_string())
            .spawn(move || capture_loop(index, thread_stop, slot, ready_tx))
            .map_err(|e| CameraError::DeviceUnavailable(e.to_string()))?;

        match ready_rx.recv() {
            Ok(Ok(())) => {
                log::info!("camera {index} acquired");
                Ok(CameraSession {
                    id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
                    frame,
                    stop: Arc::clone(&stop),
                    _guard: Arc::new(ReleaseGuard { stop }),
                })
            }
            Ok(Err(e)) => Err(e),
            Err(_) => Err(CameraError::DeviceUnavailable(
                "capture thread exited before the device was ready".to_string(),
            )),
        }
    }

    /// Identity of this acquisition. Clones share it; every open gets a fresh
    /// one, so a frame frozen from one session can never be mistaken for a
    /// frame of a later one.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Stops the capture thread and lets it close the device.
    ///
    /// Releasing an already-released session is a no-op.
    pub fn release(&self) {
        if !self.stop.swap(true, Ordering::Relaxed) {
            log::info!("camera session released");
        }
    }

    pub fn is_released(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Most recent decoded frame, if the device has produced one yet.
    pub fn latest_frame(&self) -> Option<RgbaImage> {
        self.frame.lock().unwrap().clone()
    }

    #[cfg(test)]
    pub(crate) fn stub() -> CameraSession {
        let stop = Arc::new(AtomicBool::new(false));
        CameraSession {
            id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            frame: Arc::new(Mutex::new(None)),
            stop: Arc::clone(&stop),
            _guard: Arc::new(ReleaseGuard { stop }),
        }
    }

    #[cfg(test)]
    pub(crate) fn stub_with_frame(frame: RgbaImage) -> CameraSession {
        let session = Self::stub();
        *session.frame.lock().unwrap() = Some(frame);
        session
    }
}

fn capture_loop(
    index: u32,
    stop: Arc<AtomicBool>,
    slot: SharedFrame,
    ready_tx: mpsc::Sender<Result<(), CameraError>>,
) {
    let requested =
        RequestedFormat::new::<RgbAFormat>(RequestedFormatType::AbsoluteHighestFrameRate);

    let mut camera = match Camera::new(CameraIndex::Index(index), requested) {
        Ok(camera) => camera,
        Err(e) => {
            let _ = ready_tx.send(Err(CameraError::DeviceUnavailable(e.to_string())));
            return;
        }
    };

    if let Err(e) = camera.open_stream() {
        let _ = ready_tx.send(Err(CameraError::DeviceUnavailable(e.to_string())));
        return;
    }

    let _ = ready_tx.send(Ok(()));

    let mut failures: u8 = 0;
    while !stop.load(Ordering::Relaxed) {
        match camera.frame() {
            Ok(buffer) => match buffer.decode_image::<RgbAFormat>() {
                Ok(decoded) => {
                    failures = 0;
                    *slot.lock().unwrap() = Some(decoded);
                }
                Err(e) => {
                    log::warn!("failed to decode camera frame: {e}");
                    failures += 1;
                }
            },
            Err(e) => {
                log::warn!("failed to read camera frame: {e}");
                failures += 1;
                thread::sleep(Duration::from_millis(50));
            }
        }

        if failures >= MAX_FRAME_FAILURES {
            log::error!("camera {index} stopped delivering frames, giving up");
            break;
        }
    }

    if let Err(e) = camera.stop_stream() {
        log::debug!("failed to stop camera stream: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_is_idempotent() {
        let session = CameraSession::stub();
        assert!(!session.is_released());

        session.release();
        assert!(session.is_released());

        // a second release must stay a no-op
        session.release();
        assert!(session.is_released());
    }

    #[test]
    fn dropping_last_handle_releases_the_device() {
        let session = CameraSession::stub();
        let stop = Arc::clone(&session.stop);

        // a clone keeps the acquisition alive
        let observer = session.clone();
        drop(session);
        assert!(!stop.load(Ordering::Relaxed));

        drop(observer);
        assert!(stop.load(Ordering::Relaxed));
    }

    #[test]
    fn every_acquisition_gets_its_own_identity() {
        let first = CameraSession::stub();
        let second = CameraSession::stub();
        assert_ne!(first.id(), second.id());

        // clones refer to the same acquisition
        assert_eq!(first.id(), first.clone().id());
    }

    #[test]
    fn latest_frame_is_empty_until_the_device_produces_one() {
        let session = CameraSession::stub();
        assert!(session.latest_frame().is_none());

        let session = CameraSession::stub_with_frame(RgbaImage::new(4, 4));
        assert_eq!(session.latest_frame().map(|f| f.dimensions()), Some((4, 4)));
    }
}
