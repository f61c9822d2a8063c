pub mod filled;

pub use filled::FilledButton;
