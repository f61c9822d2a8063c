use crate::camera::{CameraError, CameraSession, CapturedStill};
use crate::solver::SolveOutcome;
use crate::source::StaticImage;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Open the native file picker
    PickImage,
    /// The picker closed, possibly without a choice
    ImagePicked(Option<PathBuf>),
    /// A file was dropped onto the window
    FileDropped(PathBuf),
    /// The picked or dropped file has been read and decoded
    ImageLoaded(Result<StaticImage, String>),
    /// Start the live webcam preview
    UseWebcam,
    /// Camera acquisition finished
    CameraOpened(Result<CameraSession, CameraError>),
    /// Refresh the live preview from the capture thread
    PreviewTick,
    /// Freeze the current preview frame
    TakePhoto,
    /// The frozen frame has been encoded; tagged with the id of the session
    /// it was captured from
    PhotoReady(u64, Result<CapturedStill, CameraError>),
    /// Leave the live preview without taking a photo
    CancelWebcam,
    /// Back to the empty state
    Reset,
    /// Submit the current image to the solving service
    Solve,
    /// The solving service answered (or failed)
    SolveFinished(SolveOutcome),
    /// Toggle day/night theme
    ToggleTheme,
}
