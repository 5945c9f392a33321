use iced::{Application, Settings};
use match_viewer::{app::App, config::ViewerConfig, setup_logger};

fn main() -> iced::Result {
    let config = ViewerConfig::load();
    setup_logger(&config.log_filter);

    App::run(Settings::with_flags(config))
}
