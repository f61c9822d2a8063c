use crate::utils::flags::Flags;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CAMERA_INDEX: u32 = 0;

/// Milliseconds between two live-preview refreshes (~30 fps).
pub const PREVIEW_INTERVAL_MS: u64 = 33;

/// JPEG quality used when freezing a webcam frame into a still image.
pub const CAPTURE_JPEG_QUALITY: u8 = 90;

/// Runtime configuration, resolved once from the command line.
pub struct Config {
    pub endpoint: String,
    pub camera_index: u32,
}

impl Config {
    pub fn new(flags: Flags) -> Self {
        Config {
            endpoint: flags.endpoint,
            camera_index: flags.camera_index,
        }
    }
}

/// Returns a version as specified in Cargo.toml
pub fn app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn app_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}

pub fn app_id() -> String {
    app_name().to_lowercase()
}
