//! Ball bouncing inside a rotating tesseract (4D demo)

use hyperbounce::{app, config::AppConfig, demos::TesseractDemo};

fn main() {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!("Starting tesseract demo");
    app::run(TesseractDemo::new(&config), &config);
}
