//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HB_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use hyperbounce_math::Vec2;
use hyperbounce_sim::{SquareParams, TesseractParams};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Square demo configuration
    #[serde(default)]
    pub square: SquareConfig,
    /// Tesseract demo configuration
    #[serde(default)]
    pub tesseract: TesseractConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            square: SquareConfig::default(),
            tesseract: TesseractConfig::default(),
            rendering: RenderingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HB_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HB_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("HB_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Base window title; the active demo appends its status
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Fixed simulation rate in frames per second
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hyperbounce".to_string(),
            width: 600,
            height: 600,
            fps: 60,
        }
    }
}

/// Square demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquareConfig {
    /// Side length of the square in pixels
    pub size: f32,
    /// Ball radius in pixels
    pub ball_radius: f32,
    /// Ball speed per axis, pixels per frame
    pub ball_speed: f32,
    /// Square rotation, degrees per frame
    pub rotation_speed: f32,
}

impl Default for SquareConfig {
    fn default() -> Self {
        Self {
            size: 300.0,
            ball_radius: 20.0,
            ball_speed: 4.0,
            rotation_speed: 1.0,
        }
    }
}

impl SquareConfig {
    /// Build simulation parameters; the square is centered at `center`.
    pub fn to_params(&self, center: Vec2) -> SquareParams {
        SquareParams {
            side: self.size,
            ball_radius: self.ball_radius,
            ball_speed: self.ball_speed,
            rotation_speed: self.rotation_speed,
            center,
        }
    }
}

/// Tesseract demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TesseractConfig {
    /// Ball radius in container units (the hypercube spans [-1, 1])
    pub ball_radius: f32,
    /// Ball speed per axis, container units per frame
    pub ball_speed: f32,
    /// XY-plane rotation, degrees per frame
    pub rotation_xy: f32,
    /// ZW-plane rotation, degrees per frame
    pub rotation_zw: f32,
    /// Projection scale, pixels per container unit
    pub pixels_per_unit: f32,
    /// On-screen ball radius in pixels (display only; the 4D radius drives
    /// the physics)
    pub ball_display_radius: f32,
}

impl Default for TesseractConfig {
    fn default() -> Self {
        Self {
            ball_radius: 0.2,
            ball_speed: 0.01,
            rotation_xy: 0.5,
            rotation_zw: 0.8,
            pixels_per_unit: 100.0,
            ball_display_radius: 10.0,
        }
    }
}

impl TesseractConfig {
    /// Build simulation parameters.
    pub fn to_params(&self) -> TesseractParams {
        TesseractParams {
            ball_radius: self.ball_radius,
            ball_speed: self.ball_speed,
            rotation_xy: self.rotation_xy,
            rotation_zw: self.rotation_zw,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Container outline color [r, g, b, a]
    pub wall_color: [f32; 4],
    /// Ball color [r, g, b, a]
    pub ball_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            wall_color: [0.7, 0.7, 0.7, 1.0],
            ball_color: [1.0, 1.0, 0.0, 1.0],
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
