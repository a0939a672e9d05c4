/// TetraSym Terminal Demo - Cycling tetrahedron
///
/// Renders a tetrahedron and steps it through its 12 rotational symmetries.
/// Controls:
///   - Space / Enter: Show the next symmetry
///   - P: Toggle automatic cycling
///   - M: Toggle wireframe
///   - WASD / Arrow Keys: Orbit the camera
///   - +/-: Zoom
///   - Q/ESC: Quit

use clap::Parser;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tetrasym_terminal::{cli::Cli, AppConfig, AppError, TerminalApp};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let mut config = AppConfig::load_from(&cli.config_dir)?;
    cli.apply(&mut config);

    println!("TetraSym Terminal Renderer - Loading...");
    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(config)?;
    app.run()?;

    println!("Thank you for using TetraSym!");
    Ok(())
}

/// Logs go to a file when one is given; the alternate screen owns the terminal
fn init_logging(log_file: Option<&Path>) -> Result<(), AppError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}
