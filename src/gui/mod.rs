use crate::config::app_id;
use crate::utils::flags::Flags;
use native_dialog::{DialogBuilder, MessageLevel};

mod app;
pub mod common;
mod components;
mod style;
mod widget;

use self::app::App;

pub fn run(flags: Flags) {
    let app = iced::application(move || App::new(flags.clone()), App::update, App::view)
        .settings(iced::Settings {
            id: Some(app_id()),
            ..Default::default()
        })
        .window_size(iced::Size {
            width: 1020.0,
            height: 640.0,
        })
        .title(App::title)
        .style(App::style)
        .theme(App::theme)
        .antialiasing(true)
        .subscription(App::subscription);

    if let Err(e) = app.run() {
        eprintln!("Failed to initialize GUI: {e:?}");

        if let Err(e) = DialogBuilder::message()
            .set_title("Gui error")
            .set_text(e.to_string().as_str())
            .set_level(MessageLevel::Warning)
            .alert()
            .show()
        {
            eprintln!("Failed to display error dialog: {e:?}");
        }
    }
}
