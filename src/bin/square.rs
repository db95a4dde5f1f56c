//! Ball bouncing inside a rotating square (2D demo)

use hyperbounce::{app, config::AppConfig, demos::SquareDemo};

fn main() {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!("Starting square demo");
    app::run(SquareDemo::new(&config), &config);
}
