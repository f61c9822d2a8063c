use crate::config::{DEFAULT_CAMERA_INDEX, DEFAULT_ENDPOINT, app_name, app_version};
use crate::utils::flags::Flags;
use clap::{Arg, Command};
use std::{panic, process};

pub mod camera;
pub mod config;
pub mod gui;
pub mod solver;
pub mod source;
pub mod utils;
pub mod xmacro;

fn main() {
    tracing_subscriber::fmt::init();

    let matches = Command::new(app_name())
        .version(app_version())
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("endpoint")
                .short('e')
                .long("endpoint")
                .value_name("URL")
                .help("Base URL of the Sudoku solving service.")
                .required(false)
                .default_value(DEFAULT_ENDPOINT),
        )
        .arg(
            Arg::new("camera")
                .short('c')
                .long("camera")
                .value_name("INDEX")
                .help("Index of the capture device used for the webcam preview.")
                .required(false)
                .default_value("0"),
        )
        .get_matches();

    let endpoint = matches
        .get_one::<String>("endpoint")
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let camera_index = matches
        .get_one::<String>("camera")
        .and_then(|val| val.parse::<u32>().ok())
        .unwrap_or(DEFAULT_CAMERA_INDEX);

    // kill the main thread as soon as a secondary thread panics
    let orig_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        orig_hook(panic_info);
        process::exit(105);
    }));

    gui::run(Flags {
        endpoint,
        camera_index,
    });
}
