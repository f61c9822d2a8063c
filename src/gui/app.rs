use crate::camera::{CameraError, CameraSession, capture_still};
use crate::config::{Config, PREVIEW_INTERVAL_MS};
use crate::gui::common::messages::AppEvent;
use crate::gui::components::footer::{Notice, footer};
use crate::gui::components::grid::solution_panel;
use crate::gui::components::source_panel::source_panel;
use crate::gui::style::text::TextType;
use crate::gui::style::theme::csx::StyleType;
use crate::gui::widget::{Column, Container, Element, Row, Text};
use crate::solver::{self, SolveError, SolveStatus, SolveTracker};
use crate::source::{ImageSource, StaticImage};
use crate::utils::flags::Flags;
use iced::widget::image::Handle;
use iced::{
    Alignment, Event::Window, Length, Subscription, Task, theme::Style, window,
};
use std::path::PathBuf;
use std::time::Duration;

pub struct App {
    pub config: Config,
    theme: StyleType,
    source: ImageSource,
    solve: SolveTracker,
    /// Latest live-preview frame, refreshed while the camera is active.
    preview: Option<Handle>,
    /// A camera acquisition is in flight; cleared by any competing action so
    /// a late grant gets released instead of hijacking the current source.
    pending_camera: bool,
    notice: Option<Notice>,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<AppEvent>) {
        (
            Self {
                config: Config::new(flags),
                theme: StyleType::default(),
                source: ImageSource::default(),
                solve: SolveTracker::new(),
                preview: None,
                pending_camera: false,
                notice: None,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: AppEvent) -> Task<AppEvent> {
        match message {
            AppEvent::PickImage => Task::perform(pick_image(), AppEvent::ImagePicked),
            AppEvent::ImagePicked(None) => Task::none(),
            AppEvent::ImagePicked(Some(path)) | AppEvent::FileDropped(path) => {
                Task::perform(load_image(path), AppEvent::ImageLoaded)
            }
            AppEvent::ImageLoaded(Ok(image)) => {
                self.pending_camera = false;
                self.preview = None;
                self.notice = None;
                self.solve.invalidate();
                self.source.replace(ImageSource::Static(image));
                Task::none()
            }
            AppEvent::ImageLoaded(Err(message)) => {
                self.notice = Some(Notice::danger(message));
                Task::none()
            }
            AppEvent::UseWebcam => {
                if self.source.is_live() || self.pending_camera {
                    return Task::none();
                }

                self.pending_camera = true;
                self.preview = None;
                self.notice = Some(Notice::info("Starting camera..."));
                self.solve.invalidate();
                self.source.reset();

                let index = self.config.camera_index;
                Task::perform(
                    async move {
                        match tokio::task::spawn_blocking(move || CameraSession::open(index)).await
                        {
                            Ok(result) => result,
                            Err(e) => Err(CameraError::DeviceUnavailable(e.to_string())),
                        }
                    },
                    AppEvent::CameraOpened,
                )
            }
            AppEvent::CameraOpened(Ok(session)) => {
                if !self.pending_camera {
                    // the user moved on while the device was opening
                    session.release();
                    return Task::none();
                }

                self.pending_camera = false;
                self.notice = None;
                self.source.replace(ImageSource::AwaitingCapture {
                    session,
                    encoding: false,
                });
                Task::none()
            }
            AppEvent::CameraOpened(Err(e)) => {
                if !self.pending_camera {
                    // the user moved on; a stale failure has nothing to report
                    return Task::none();
                }

                log::warn!("camera acquisition failed: {e}");
                self.pending_camera = false;
                self.notice = Some(Notice::danger(e.to_string()));
                self.source.reset();
                Task::none()
            }
            AppEvent::PreviewTick => {
                if let Some(session) = self.source.session()
                    && let Some(frame) = session.latest_frame()
                {
                    let (width, height) = frame.dimensions();
                    self.preview = Some(Handle::from_rgba(width, height, frame.into_raw()));
                }
                Task::none()
            }
            AppEvent::TakePhoto => match self.source.begin_encoding() {
                Some(session) => {
                    let id = session.id();
                    Task::perform(capture_still(session), move |result| {
                        AppEvent::PhotoReady(id, result)
                    })
                }
                None => Task::none(),
            },
            AppEvent::PhotoReady(id, Ok(still)) => {
                if !self.is_current_capture(id) {
                    // cancelled, reset or superseded while the frame was encoding
                    return Task::none();
                }

                self.preview = None;
                self.notice = None;
                self.solve.invalidate();
                self.source
                    .replace(ImageSource::Static(StaticImage::from_still(still)));
                Task::none()
            }
            AppEvent::PhotoReady(id, Err(e)) => {
                if self.is_current_capture(id) {
                    self.source.abort_encoding();
                    self.notice = Some(Notice::danger(e.to_string()));
                }
                Task::none()
            }
            AppEvent::CancelWebcam => {
                self.pending_camera = false;
                self.preview = None;
                self.notice = None;
                self.source.reset();
                Task::none()
            }
            AppEvent::Reset => {
                self.pending_camera = false;
                self.preview = None;
                self.notice = None;
                self.solve.invalidate();
                if !self.source.is_empty() {
                    self.source.reset();
                }
                Task::none()
            }
            AppEvent::Solve => {
                if self.solve.is_pending() {
                    return Task::none();
                }

                let Some(image) = self.source.static_image() else {
                    self.notice = Some(Notice::danger(SolveError::NoImageSelected.to_string()));
                    return Task::none();
                };

                let Some(generation) = self.solve.begin() else {
                    return Task::none();
                };

                self.notice = None;
                let endpoint = self.config.endpoint.clone();
                let bytes = image.bytes.clone();
                Task::perform(
                    solver::submit(endpoint, bytes, generation),
                    AppEvent::SolveFinished,
                )
            }
            AppEvent::SolveFinished(outcome) => {
                if self.solve.finish(outcome)
                    && let SolveStatus::Failed(message) = self.solve.status()
                {
                    self.notice = Some(Notice::danger(message));
                }
                Task::none()
            }
            AppEvent::ToggleTheme => {
                self.theme = self.theme.toggle();
                Task::none()
            }
        }
    }

    /// A still applies only when it comes from the capture the current camera
    /// state is waiting for.
    fn is_current_capture(&self, id: u64) -> bool {
        self.source.is_encoding() && self.source.session().is_some_and(|s| s.id() == id)
    }

    pub fn view(&self) -> Element<'_, AppEvent> {
        let header = Column::new()
            .spacing(2)
            .align_x(Alignment::Center)
            .push(Text::new("Sudoku Solver").size(26))
            .push(
                Text::new("Solve a Sudoku instantly from an image or live camera")
                    .size(14)
                    .class(TextType::Subtitle),
            );

        let panels = Row::new()
            .spacing(16)
            .push(source_panel(
                &self.source,
                self.preview.as_ref(),
                self.solve.is_pending(),
            ))
            .push(solution_panel(self.solve.solved()));

        Container::new(
            Column::new()
                .spacing(12)
                .align_x(Alignment::Center)
                .push(header)
                .push(panels)
                .push(footer(self.notice.as_ref())),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(12)
        .into()
    }

    pub fn title(&self) -> String {
        String::from("Sudoku Solver")
    }

    pub fn theme(&self) -> StyleType {
        self.theme
    }

    pub fn style(&self, theme: &StyleType) -> Style {
        Style {
            background_color: theme.get_palette().background,
            text_color: theme.get_palette().text,
        }
    }

    pub fn subscription(&self) -> Subscription<AppEvent> {
        let mut batch = vec![self.window_subscription()];

        if self.source.is_live() {
            batch.push(
                iced::time::every(Duration::from_millis(PREVIEW_INTERVAL_MS))
                    .map(|_| AppEvent::PreviewTick),
            );
        }

        Subscription::batch(batch)
    }

    fn window_subscription(&self) -> Subscription<AppEvent> {
        iced::event::listen_with(|event, _status, _id| match event {
            Window(window::Event::FileDropped(path)) => Some(AppEvent::FileDropped(path)),
            _ => None,
        })
    }
}

async fn pick_image() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .add_filter("image", &["png", "jpg", "jpeg", "bmp", "webp"])
        .set_title("Choose a Sudoku image")
        .pick_file()
        .await
        .map(|file| file.path().to_path_buf())
}

async fn load_image(path: PathBuf) -> Result<StaticImage, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("Could not read {}: {e}", path.display()))?;

    // refuse files the preview could not display anyway
    image::load_from_memory(&bytes)
        .map_err(|_| format!("{} is not a readable image.", path.display()))?;

    Ok(StaticImage::from_encoded(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CapturedStill;

    fn app() -> App {
        App::new(Flags {
            endpoint: "http://127.0.0.1:5000".to_string(),
            camera_index: 0,
        })
        .0
    }

    fn picture() -> StaticImage {
        StaticImage::from_encoded(vec![0xFF, 0xD8, 0xFF])
    }

    #[test]
    fn late_camera_failure_leaves_the_current_image_alone() {
        let mut app = app();
        let _ = app.update(AppEvent::UseWebcam);

        // the user picks a file while the device is still opening
        let _ = app.update(AppEvent::ImageLoaded(Ok(picture())));

        let _ = app.update(AppEvent::CameraOpened(Err(CameraError::DeviceUnavailable(
            "no device".to_string(),
        ))));

        assert!(app.source.static_image().is_some());
        assert!(app.notice.is_none());
    }

    #[test]
    fn camera_failure_while_waiting_is_reported() {
        let mut app = app();
        let _ = app.update(AppEvent::UseWebcam);
        let _ = app.update(AppEvent::CameraOpened(Err(CameraError::DeviceUnavailable(
            "no device".to_string(),
        ))));

        assert!(app.source.is_empty());
        assert!(!app.pending_camera);
        assert!(app.notice.as_ref().is_some_and(|notice| notice.danger));
    }

    #[test]
    fn a_still_from_a_previous_session_is_never_applied() {
        let mut app = app();

        let first = CameraSession::stub();
        let first_id = first.id();
        let _ = app.update(AppEvent::UseWebcam);
        let _ = app.update(AppEvent::CameraOpened(Ok(first)));
        let _ = app.update(AppEvent::TakePhoto);

        // leave and reopen the webcam, then arm a new capture
        let _ = app.update(AppEvent::CancelWebcam);
        let _ = app.update(AppEvent::UseWebcam);
        let _ = app.update(AppEvent::CameraOpened(Ok(CameraSession::stub())));
        let _ = app.update(AppEvent::TakePhoto);

        let still = CapturedStill {
            jpeg: vec![0xFF, 0xD8],
            width: 2,
            height: 2,
            pixels: vec![0; 16],
        };
        let _ = app.update(AppEvent::PhotoReady(first_id, Ok(still)));

        // the current session is still waiting for its own capture
        assert!(app.source.is_live());
        assert!(app.source.is_encoding());
        assert!(app.source.static_image().is_none());
    }
}
