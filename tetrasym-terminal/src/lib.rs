/// Terminal host for the tetrahedron symmetry showcase
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tetrasym_core::{Camera, CycleEvent, Mesh, Pacing, Showcase, Transform};

pub mod cli;
pub mod config;
pub mod error;
pub mod renderer;

pub use config::AppConfig;
pub use error::AppError;
pub use renderer::AsciiRenderer;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 0.5;

const ORBIT_STEP: f32 = 0.1;
const ZOOM_STEP: f32 = 1.1;

/// Something a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Trigger,
    ToggleAutoCycle,
    ToggleWireframe,
    Orbit { yaw: f32, pitch: f32 },
    Zoom(f32),
    Quit,
}

impl Command {
    pub fn from_key(code: KeyCode) -> Option<Self> {
        let command = match code {
            KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
            KeyCode::Char(' ') | KeyCode::Enter => Command::Trigger,
            KeyCode::Char('p') => Command::ToggleAutoCycle,
            KeyCode::Char('m') => Command::ToggleWireframe,
            KeyCode::Char('w') | KeyCode::Up => Command::Orbit {
                yaw: 0.0,
                pitch: ORBIT_STEP,
            },
            KeyCode::Char('s') | KeyCode::Down => Command::Orbit {
                yaw: 0.0,
                pitch: -ORBIT_STEP,
            },
            KeyCode::Char('a') | KeyCode::Left => Command::Orbit {
                yaw: -ORBIT_STEP,
                pitch: 0.0,
            },
            KeyCode::Char('d') | KeyCode::Right => Command::Orbit {
                yaw: ORBIT_STEP,
                pitch: 0.0,
            },
            KeyCode::Char('+') | KeyCode::Char('=') => Command::Zoom(1.0 / ZOOM_STEP),
            KeyCode::Char('-') => Command::Zoom(ZOOM_STEP),
            _ => return None,
        };
        Some(command)
    }
}

/// Main application struct for terminal rendering
pub struct TerminalApp {
    config: AppConfig,
    mesh: Mesh,
    showcase: Showcase,
    camera: Camera,
    renderer: AsciiRenderer,
    wireframe: bool,
    running: bool,
    last_frame: Instant,
    last_fps_sample: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        config.validate()?;
        let (width, height) = terminal::size()?;
        let showcase = Showcase::new(&config.core())?;

        let mut camera = Camera::from_view(&config.view, width as u32, height as u32);
        camera.aspect *= CELL_ASPECT;

        let now = Instant::now();
        Ok(Self {
            mesh: Mesh::tetrahedron(1.0),
            showcase,
            camera,
            renderer: AsciiRenderer::new(width as usize, height as usize),
            wireframe: config.render.wireframe,
            running: true,
            last_frame: now,
            last_fps_sample: now,
            frame_count: 0,
            fps: 0.0,
            config,
        })
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        tracing::info!("terminal session started");

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;
        tracing::info!(cycles = self.showcase.cycler().cycles(), "terminal session ended");

        result
    }

    fn main_loop(&mut self) -> Result<(), AppError> {
        let target_frame_time = Duration::from_secs(1) / self.config.render.target_fps;

        while self.running {
            let frame_start = Instant::now();
            let dt = (frame_start - self.last_frame).as_secs_f32();
            self.last_frame = frame_start;

            // Handle input
            while event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            for event in self.showcase.update(dt) {
                log_event(&event);
            }

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_fps_sample).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_fps_sample).as_secs_f32();
                self.frame_count = 0;
                self.last_fps_sample = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> Result<(), AppError> {
        match event::read()? {
            Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                if let Some(command) = Command::from_key(code) {
                    self.execute(command);
                }
            }
            Event::Resize(width, height) => self.resize(width, height),
            _ => {}
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Quit => self.running = false,
            Command::Trigger => {
                if let Some(event) = self.showcase.trigger() {
                    log_event(&event);
                }
            }
            Command::ToggleAutoCycle => {
                self.showcase.toggle_auto_cycle();
            }
            Command::ToggleWireframe => self.wireframe = !self.wireframe,
            Command::Orbit { yaw, pitch } => self.camera.orbit(yaw, pitch),
            Command::Zoom(factor) => self.camera.zoom(factor),
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.renderer.resize(width as usize, height as usize);
        self.camera.set_viewport(width as u32, height as u32);
        self.camera.aspect *= CELL_ASPECT;
    }

    fn render(&mut self) -> Result<(), AppError> {
        let model = Transform::model_matrix(&self.showcase.orientation(), self.config.view.scale);

        // Clear renderer
        self.renderer.clear();

        // Render mesh
        if self.wireframe {
            self.renderer.render_wireframe(&self.mesh, &model, &self.camera);
        } else {
            self.renderer.render_mesh(&self.mesh, &model, &self.camera);
        }

        // The axis stays fixed in the world while the mesh turns about it
        if let Some((from, to)) = self.showcase.axis_segment() {
            let world = nalgebra::Matrix4::identity();
            self.renderer
                .draw_line(&from, &to, &world, &self.camera, 'o', Color::Magenta);
        }

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;
        self.draw_overlay(&mut stdout)?;

        stdout.flush()?;
        Ok(())
    }

    fn draw_overlay<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(
            out,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "TetraSym | FPS: {:.1} | Space=Next P=Auto M=Wireframe WASD/Arrows=Orbit +/-=Zoom Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        let auto = if self.showcase.auto_cycle() {
            format!("on, next in {:.1}s", self.showcase.timer().remaining())
        } else {
            "off".to_string()
        };
        queue!(
            out,
            cursor::MoveTo(0, 1),
            SetForegroundColor(Color::Grey),
            Print(format!(
                "Auto: {} | Pacing: {} | Cycles: {}",
                auto,
                pacing_label(self.showcase.cycler().pacing()),
                self.showcase.cycler().cycles()
            )),
            ResetColor
        )?;

        let top = (self.renderer.height() as u16).saturating_sub(5);
        queue!(
            out,
            cursor::MoveTo(0, top),
            SetForegroundColor(Color::Green),
            Print(counter_line(&self.showcase)),
            ResetColor
        )?;

        let Some(current) = self.showcase.current() else {
            return Ok(());
        };
        queue!(
            out,
            cursor::MoveTo(0, top + 1),
            SetForegroundColor(Color::Magenta),
            Print(format!("Symmetry #{}: {}", current.index, current.symmetry)),
            ResetColor
        )?;

        for (row, cells) in current.readout.rows().iter().enumerate() {
            queue!(out, cursor::MoveTo(0, top + 2 + row as u16), Print("["))?;
            for cell in cells {
                let color = if cell.negligible {
                    Color::DarkGrey
                } else {
                    Color::White
                };
                queue!(
                    out,
                    SetForegroundColor(color),
                    Print(format!("{:>6}", cell.text)),
                    ResetColor
                )?;
            }
            queue!(out, Print(" ]"))?;
        }
        Ok(())
    }
}

/// Counter plus the symmetry the next trigger will show
fn counter_line(showcase: &Showcase) -> String {
    let cycler = showcase.cycler();
    format!(
        "Rotation {} | next #{}: {}",
        showcase.counter_text(),
        cycler.cursor().index(),
        cycler.upcoming()
    )
}

fn pacing_label(pacing: Pacing) -> String {
    match pacing {
        Pacing::PerFrame { blend } => format!("per-frame {blend}"),
        Pacing::Decay {
            blend,
            reference_hz,
        } => format!("decay {blend} @ {reference_hz}Hz"),
        Pacing::Timed { duration_secs } => format!("timed {duration_secs}s"),
    }
}

fn log_event(event: &CycleEvent) {
    match event {
        CycleEvent::Started { index, symmetry } => {
            tracing::info!(index, %symmetry, "showing symmetry");
        }
        CycleEvent::Completed { index, count, .. } => {
            tracing::debug!(index, count, "symmetry shown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(Command::from_key(KeyCode::Char(' ')), Some(Command::Trigger));
        assert_eq!(Command::from_key(KeyCode::Enter), Some(Command::Trigger));
        assert_eq!(Command::from_key(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(
            Command::from_key(KeyCode::Char('p')),
            Some(Command::ToggleAutoCycle)
        );
        assert_eq!(
            Command::from_key(KeyCode::Left),
            Some(Command::Orbit {
                yaw: -ORBIT_STEP,
                pitch: 0.0
            })
        );
        assert_eq!(Command::from_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_zoom_keys_are_inverse() {
        let (Some(Command::Zoom(zoom_in)), Some(Command::Zoom(zoom_out))) = (
            Command::from_key(KeyCode::Char('+')),
            Command::from_key(KeyCode::Char('-')),
        ) else {
            panic!("zoom keys not bound");
        };
        assert!(zoom_in < 1.0);
        assert!((zoom_in * zoom_out - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_counter_line_names_next_symmetry() {
        let mut config = AppConfig::default().core();
        config.timer.auto_cycle = false;
        let mut showcase = Showcase::new(&config).unwrap();
        assert_eq!(
            counter_line(&showcase),
            "Rotation 0 / 12 | next #0: +120° about (0.58, 0.58, 0.58)"
        );

        showcase.trigger();
        for _ in 0..10_000 {
            if !showcase.update(1.0 / 60.0).is_empty() {
                break;
            }
        }
        assert!(counter_line(&showcase).starts_with("Rotation 1 / 12 | next #1: +120° about (-0.58,"));
    }

    #[test]
    fn test_pacing_label() {
        assert_eq!(pacing_label(Pacing::Timed { duration_secs: 1.5 }), "timed 1.5s");
        assert_eq!(
            pacing_label(Pacing::PerFrame { blend: 0.1 }),
            "per-frame 0.1"
        );
    }
}
