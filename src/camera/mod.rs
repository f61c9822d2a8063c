pub mod session;
pub mod still;

pub use session::{CameraError, CameraSession};
pub use still::{CapturedStill, capture_still};
