/// Command-line interface

use clap::Parser;
use std::path::PathBuf;
use tetrasym_core::Pacing;

use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "tetrasym-terminal")]
#[command(about = "Cycle a tetrahedron through its rotational symmetries in the terminal", long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and user.toml
    #[arg(long, default_value = "config")]
    pub config_dir: PathBuf,

    /// Seconds between automatic triggers
    #[arg(long)]
    pub interval: Option<f32>,

    /// Only advance on Space/Enter
    #[arg(long)]
    pub manual: bool,

    /// Run every transition for a fixed number of seconds
    #[arg(long)]
    pub duration: Option<f32>,

    /// Draw edges only
    #[arg(long)]
    pub wireframe: bool,

    /// Write logs to this file (the terminal itself is taken by the renderer)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply flags on top of the loaded configuration
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(interval) = self.interval {
            config.timer.interval_secs = interval;
        }
        if self.manual {
            config.timer.auto_cycle = false;
        }
        if let Some(duration_secs) = self.duration {
            config.cycler.pacing = Pacing::Timed { duration_secs };
        }
        if self.wireframe {
            config.render.wireframe = true;
        }
    }
}
