/// Errors surfaced by the terminal host
use std::io;

use tetrasym_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigError),

    #[error("target frame rate must be at least 1")]
    FrameRate,
}
