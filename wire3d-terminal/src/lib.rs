/// Terminal frontend for the Wire3D fixed-point renderer
use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute, terminal,
};
use std::io::{self, stdout};
use std::time::Instant;
use wire3d_core::palette::ACCENT;
use wire3d_core::{FrameDriver, Palette, Selection};

pub mod clock;
pub mod display;
pub mod input;
pub mod renderer;

pub use clock::RasterClock;
pub use display::TerminalDisplay;
pub use input::{KeyAction, KeyboardInput};
pub use renderer::HalfBlockRenderer;

/// Status line shown above the picture
pub fn hud_text(selection: Selection, fps: f32) -> String {
    format!(
        "Wire3D | Mesh: {} | Camera: {} | FPS: {:.1} | A/Space=Mesh B=Camera Q=Quit",
        selection.mesh.name(),
        selection.camera.name(),
        fps
    )
}

/// Main application struct for terminal wireframe rendering
pub struct TerminalApp {
    driver: FrameDriver,
    display: TerminalDisplay,
    last_sample: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(driver: FrameDriver) -> io::Result<Self> {
        let config = driver.config();
        let display = TerminalDisplay::new(
            config.width as usize,
            config.height as usize,
            Palette::default(),
        )?;

        Ok(Self {
            driver,
            display,
            last_sample: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide
        )?;
        // Real key releases where the terminal can report them
        let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            execute!(
                stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        tracing::debug!(enhanced, "keyboard setup");

        let result = self.main_loop();

        if enhanced {
            execute!(stdout(), PopKeyboardEnhancementFlags)?;
        }
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while !self.display.quit_requested() {
            self.driver.step(&mut self.display)?;

            self.frame_count += 1;
            let elapsed = self.last_sample.elapsed();
            if elapsed.as_secs() >= 1 {
                self.fps = self.frame_count as f32 / elapsed.as_secs_f32();
                self.frame_count = 0;
                self.last_sample = Instant::now();
                tracing::debug!(fps = self.fps, "frame rate");
            }

            let hud = hud_text(self.driver.selection(), self.fps);
            self.display.draw_hud(&hud, ACCENT)?;
        }

        tracing::info!("quit requested");
        Ok(())
    }
}
