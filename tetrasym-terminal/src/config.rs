/// Terminal host configuration
///
/// Configuration is loaded from multiple sources with the following priority (lowest to highest):
/// 1. `<dir>/default.toml` (version controlled)
/// 2. `<dir>/user.toml` (gitignored, user overrides)
/// 3. Environment variables (`TETRASYM_SECTION__KEY`)
/// 4. Command-line flags, applied by [`crate::cli::Cli::apply`]

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tetrasym_core::{Config, CyclerConfig, TimerConfig, ViewConfig};

use crate::error::AppError;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "TETRASYM_";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Symmetry cycler behaviour
    pub cycler: CyclerConfig,
    /// Automatic trigger source
    pub timer: TimerConfig,
    /// Camera and scene presentation
    pub view: ViewConfig,
    /// Terminal rendering
    pub render: RenderConfig,
}

impl AppConfig {
    /// Load configuration from the default `config` directory
    pub fn load() -> Result<Self, AppError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, AppError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        } else {
            tracing::warn!(path = %default_path.display(), "default config not found, using built-in defaults");
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // TETRASYM_TIMER__INTERVAL_SECS=1.5 -> timer.interval_secs = 1.5
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Self = figment.extract()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// The host-independent part of the configuration
    pub fn core(&self) -> Config {
        Config {
            cycler: self.cycler.clone(),
            timer: self.timer.clone(),
            view: self.view.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.core().validate()?;
        if self.render.target_fps == 0 {
            return Err(AppError::FrameRate);
        }
        Ok(())
    }
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Frame rate the main loop aims for
    pub target_fps: u32,
    /// Draw edges only, like the browser view
    pub wireframe: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            wireframe: false,
        }
    }
}
